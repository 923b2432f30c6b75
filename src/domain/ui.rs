use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within the draft buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// The two mutually exclusive screens of the journal
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum View {
    #[default]
    #[serde(alias = "compose")]
    Compose,
    #[serde(alias = "history")]
    History,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Compose => View::History,
            View::History => View::Compose,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Compose => "Write",
            View::History => "History",
        }
    }
}
