use serde::{Deserialize, Serialize};

pub mod journal;
pub mod system;
pub mod ui;

use journal::JournalMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Thought list operations (delegated to JournalState)
    Journal(JournalMsg),

    // Compose/view/theme operations (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Ui(ui_msg) => ui_msg.is_frequent(),
            Msg::System(_) | Msg::Journal(_) => false,
        }
    }
}
