//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Persistence service and webhook clients
//! - Theme preference file

pub mod cli;
pub mod config;
pub mod store;
pub mod theme_store;
pub mod tui;
pub mod webhook;
