use crate::{domain::theme::Theme, infrastructure::config::Config};

pub mod journal;
pub mod selection;
pub mod system;
pub mod ui;

use journal::JournalState;
use system::{ServiceMode, SystemState};
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub journal: JournalState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file and environment
    pub config: Config,
}

impl AppState {
    /// Initial state for a session started with `config` and the persisted `theme`
    pub fn new_with_config(config: Config, theme: Theme) -> Self {
        let service_mode = if config.service.is_configured() {
            ServiceMode::Connected
        } else {
            ServiceMode::Offline
        };

        Self {
            journal: JournalState::default(),
            ui: UiState::new(theme),
            system: SystemState::new(service_mode),
            config: ConfigState { config },
        }
    }

    pub fn is_offline(&self) -> bool {
        self.system.is_offline()
    }
}
