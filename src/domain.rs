//! Domain logic
//!
//! This module contains the journal's domain types:
//! - Thoughts and their wire representation
//! - Display theme
//! - Text processing utilities

pub mod text;
pub mod theme;
pub mod thought;
pub mod ui;
