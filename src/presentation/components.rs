//! Component collection
//!
//! Components are stateless renderers that receive AppState during render.
//! Only the compose view keeps a cached TextArea between frames.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        config::styles::{slot, Palette},
        widgets::tab_bar::TabBarWidget,
    },
};

pub mod compose;
pub mod header;
pub mod history;
pub mod status_bar;

pub use compose::ComposeComponent;
pub use header::HeaderComponent;
pub use history::HistoryComponent;
pub use status_bar::StatusBarComponent;

pub const OFFLINE_BANNER: &str =
    "Journal service not configured. Set SERVICE_URL and SERVICE_ANON_KEY to keep your thoughts.";

/// Styles of the active theme
pub fn palette(state: &AppState) -> Palette<'_> {
    state.config.config.styles.palette(state.ui.theme)
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub compose: ComposeComponent,
    pub history: HistoryComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let palette = palette(state);
        frame.render_widget(Block::default().style(palette.style(slot::TEXT)), area);

        let banner_height = if state.is_offline() { 1 } else { 0 };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Header
                Constraint::Length(banner_height), // Configuration banner
                Constraint::Length(1),             // Tab bar
                Constraint::Min(0),                // Active view
                Constraint::Length(2),             // Status bar
            ])
            .split(area);

        self.header.view(state, frame, layout[0]);

        if state.is_offline() {
            let banner = Paragraph::new(OFFLINE_BANNER).style(palette.style(slot::WARNING));
            frame.render_widget(banner, layout[1]);
        }

        let tab_bar = TabBarWidget::new(state.ui.view)
            .styles(palette.style(slot::MUTED), palette.style(slot::TAB_ACTIVE));
        frame.render_widget(tab_bar, layout[2]);

        if state.ui.is_composing() {
            self.compose.view(state, frame, layout[3]);
        } else {
            self.history.view(state, frame, layout[3]);
        }

        self.status_bar.view(state, frame, layout[4]);
    }
}
