use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::ui::View;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    SwitchView(View),
    ToggleView,
    ToggleTheme,

    Submit,
    ProcessTextAreaInput(KeyEvent),
    InsertText(String),

    /// The save confirmation timer scheduled for `generation` fired
    ConfirmationElapsed(u64),
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ProcessTextAreaInput(_))
    }
}
