pub mod event_source;
pub mod real;
pub mod test;
pub mod textarea_engine;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

use crate::core::raw_msg::RawMsg;

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal events produced by a [`TuiLike`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

impl Event {
    /// Raw message fed to the runtime for this event, if any
    pub fn to_raw_msg(&self) -> Option<RawMsg> {
        match self {
            Event::Quit => Some(RawMsg::Quit),
            Event::Error => Some(RawMsg::Error("Terminal event stream failed".to_string())),
            Event::Tick => Some(RawMsg::Tick),
            Event::Render => Some(RawMsg::Render),
            Event::Paste(text) => Some(RawMsg::Paste(text.clone())),
            Event::Key(key) => Some(RawMsg::Key(*key)),
            Event::Resize(width, height) => Some(RawMsg::Resize(*width, *height)),
            Event::Init | Event::Closed | Event::FocusGained | Event::FocusLost => None,
        }
    }

    /// Whether the screen should be redrawn after this event
    pub fn needs_render(&self) -> bool {
        matches!(
            self,
            Event::Init | Event::Render | Event::Resize(_, _) | Event::Key(_) | Event::Paste(_)
        )
    }
}

/// Terminal abstraction so that the runner can be driven by a real terminal or a test backend
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
