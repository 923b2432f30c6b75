//! Integration layer
//!
//! Glue between the Elm core and the outside world:
//! - Runtime owning state, queues and the command executor
//! - Renderer drawing AppState through the components
//! - AppRunner driving the terminal loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;
