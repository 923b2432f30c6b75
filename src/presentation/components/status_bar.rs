//! Status bar component
//!
//! Displays the last status message and the key hints of the active view.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::ui::View,
    presentation::config::{keybindings::Action, styles::slot},
};

/// Hints shown per view, in display order
const COMPOSE_HINTS: &[(Action, &str)] = &[
    (Action::Submit, "save"),
    (Action::ToggleView, "history"),
    (Action::ToggleTheme, "theme"),
];
const HISTORY_HINTS: &[(Action, &str)] = &[
    (Action::ScrollDown, "down"),
    (Action::ScrollUp, "up"),
    (Action::DeleteSelected, "delete"),
    (Action::ShowCompose, "write"),
    (Action::ToggleTheme, "theme"),
    (Action::Quit, "quit"),
];

/// Status bar component
///
/// Stateless; renders two lines from AppState.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = super::palette(state);
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        frame.render_widget(Clear, area);

        let message = state.system.status_message().cloned().unwrap_or_default();
        let message_style = if message.starts_with("[ERR") {
            palette.style(slot::ERROR)
        } else {
            palette.style(slot::TEXT)
        };
        frame.render_widget(Paragraph::new(message).style(message_style), layout[0]);

        let hints = Paragraph::new(Self::hints(state)).style(palette.style(slot::MUTED));
        frame.render_widget(hints, layout[1]);
    }

    /// Key hints for the active view, e.g. `ctrl-s save · tab history`
    pub fn hints(state: &AppState) -> String {
        let view = state.ui.view;
        let table = match view {
            View::Compose => COMPOSE_HINTS,
            View::History => HISTORY_HINTS,
        };
        let keybindings = &state.config.config.keybindings;
        let mut hints: Vec<String> = table
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .keys_for(view, *action)
                    .first()
                    .map(|key| format!("{key} {label}"))
            })
            .collect();
        hints.push("ctrl-c quit".to_string());
        hints.dedup();
        hints.join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::{system::SystemMsg, ui::UiMsg},
        domain::theme::Theme,
        infrastructure::{
            config::Config,
            tui::{test::TestTui, TuiLike},
        },
    };

    fn state() -> AppState {
        let config = Config::embedded().expect("embedded config");
        AppState::new_with_config(config, Theme::Light)
    }

    #[test]
    fn test_compose_hints() {
        let state = state();
        let hints = StatusBarComponent::hints(&state);
        assert!(hints.contains("save"));
        assert!(hints.contains("history"));
        assert!(hints.ends_with("ctrl-c quit"));
    }

    #[test]
    fn test_history_hints() {
        let mut state = state();
        let _ = state.ui.update(UiMsg::SwitchView(View::History));
        let hints = StatusBarComponent::hints(&state);
        assert!(hints.contains("delete"));
        assert!(hints.contains("write"));
    }

    #[test]
    fn test_renders_status_message() {
        let mut state = state();
        let _ = state.system.update(SystemMsg::UpdateStatusMessage(
            "[Deleted] thought 7".to_string(),
        ));

        let mut tui = TestTui::new(60, 2).expect("test tui");
        tui.draw(&mut |f: &mut Frame<'_>| {
            let area = f.area();
            StatusBarComponent::new().view(&state, f, area);
        })
        .expect("draw");
        assert!(tui.screen_text().contains("[Deleted] thought 7"));
    }
}
