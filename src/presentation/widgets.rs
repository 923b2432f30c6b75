//! Reusable UI widgets
//!
//! This module contains widgets shared by the views.

pub mod shrink_text;
pub mod tab_bar;
pub mod thought_card;
