//! # thoughtui - a terminal journal
//!
//! A terminal user interface for writing short daily thoughts and browsing the
//! most recent ones, built with Rust and Ratatui. Thoughts are stored in a
//! PostgREST-compatible journal service; without connection parameters the
//! journal runs in memory only.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (HTTP, timers, theme file)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use thoughtui::{
//!     core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update},
//!     domain::theme::Theme,
//!     infrastructure::config::Config,
//! };
//!
//! let mut state = AppState::new_with_config(Config::default(), Theme::Light);
//! state.ui.draft.content = "  Hello world  ".to_string();
//!
//! let (state, commands) = update(Msg::Ui(UiMsg::Submit), state);
//!
//! assert!(state.ui.saving);
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Thoughts, theme and text helpers
//! - [`infrastructure`] - Terminal, configuration, journal service and webhook clients
//! - [`integration`] - Runtime and terminal loop
//! - [`presentation`] - Components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState};
pub use crate::core::{translator::translate_raw_to_domain, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
