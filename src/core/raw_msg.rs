use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::thought::{Thought, ThoughtId};

/// Raw messages from external sources (input, persistence service, timers)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Persistence service results
    ThoughtsLoaded(Vec<Thought>),
    ThoughtsLoadFailed(String),
    ThoughtCreated(Thought),
    ThoughtCreateFailed(String),
    ThoughtDeleted(ThoughtId),
    ThoughtDeleteFailed { id: ThoughtId, error: String },

    // Timers
    ConfirmationElapsed(u64),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
