use serde::{Deserialize, Serialize};

use crate::domain::{
    theme::Theme,
    thought::{NewThought, Thought, ThoughtId},
};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (persistence calls, webhook, timers, file I/O)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Persistence service
    LoadThoughts {
        limit: usize,
    },
    CreateThought {
        thought: NewThought,
    },
    DeleteThought {
        id: ThoughtId,
    },

    /// Best-effort notification; its outcome is only ever logged
    NotifyWebhook {
        thought: Thought,
    },

    /// Report `RawMsg::ConfirmationElapsed(generation)` after `delay_ms`
    HideConfirmationAfter {
        generation: u64,
        delay_ms: u64,
    },

    // File related
    PersistTheme {
        theme: Theme,
    },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::HideConfirmationAfter { .. } => 0,

            // User actions have high priority
            Cmd::CreateThought { .. } | Cmd::DeleteThought { .. } => 1,

            // Background network work
            Cmd::LoadThoughts { .. } | Cmd::NotifyWebhook { .. } => 2,

            // File operations have low priority
            Cmd::PersistTheme { .. } => 3,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::LoadThoughts { .. } => "LoadThoughts".to_string(),
            Cmd::CreateThought { .. } => "CreateThought".to_string(),
            Cmd::DeleteThought { .. } => "DeleteThought".to_string(),
            Cmd::NotifyWebhook { .. } => "NotifyWebhook".to_string(),
            Cmd::HideConfirmationAfter { .. } => "HideConfirmationAfter".to_string(),
            Cmd::PersistTheme { .. } => "PersistTheme".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}
