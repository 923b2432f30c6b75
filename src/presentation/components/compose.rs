//! Compose view
//!
//! Confirmation banner, prompt, the draft editor and its character counter.

use ratatui::{prelude::*, widgets::*};
use tui_textarea::TextArea;

use crate::{
    core::state::{ui::TextAreaState, AppState},
    domain::ui::View,
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
    presentation::config::{keybindings::Action, styles::slot},
};

pub const CONFIRMATION_TEXT: &str = "✓ Thought saved!";
pub const PROMPT_TEXT: &str = "What's on your mind today?";
pub const PLACEHOLDER_TEXT: &str = "Write your thought here...";
pub const SAVING_TEXT: &str = "Saving...";

/// Compose component
///
/// Keeps a TextArea for rendering and rebuilds it whenever the draft in AppState changes.
#[derive(Debug)]
pub struct ComposeComponent {
    textarea: TextArea<'static>,
    last_synced: Option<TextAreaState>,
}

impl ComposeComponent {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            last_synced: None,
        }
    }

    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = super::palette(state);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Confirmation banner
                Constraint::Length(1), // Prompt
                Constraint::Min(3),    // Editor
                Constraint::Length(1), // Counter and submit hint
            ])
            .split(area);

        if state.ui.confirmation.is_visible() {
            let banner = Paragraph::new(CONFIRMATION_TEXT).style(palette.style(slot::SUCCESS));
            frame.render_widget(banner, layout[0]);
        }

        let prompt = Paragraph::new(PROMPT_TEXT).style(palette.style(slot::ACCENT));
        frame.render_widget(prompt, layout[1]);

        self.sync(&state.ui.draft);
        let title = if state.ui.saving { SAVING_TEXT } else { "New thought" };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.style(slot::BORDER))
                .title(title),
        );
        self.textarea.set_style(palette.style(slot::TEXT));
        self.textarea.set_placeholder_style(palette.style(slot::MUTED));
        frame.render_widget(&self.textarea, layout[2]);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[3]);
        let counter = Paragraph::new(Self::counter_text(state)).style(palette.style(slot::MUTED));
        frame.render_widget(counter, footer[0]);
        let hint = Paragraph::new(Self::submit_hint(state))
            .style(palette.style(slot::MUTED))
            .alignment(Alignment::Right);
        frame.render_widget(hint, footer[1]);
    }

    fn sync(&mut self, draft: &TextAreaState) {
        if self.last_synced.as_ref() == Some(draft) {
            return;
        }
        let mut textarea = TuiTextAreaEngine::hydrate(draft);
        textarea.set_placeholder_text(PLACEHOLDER_TEXT);
        self.textarea = textarea;
        self.last_synced = Some(draft.clone());
    }

    /// Live counter of the untrimmed draft
    pub fn counter_text(state: &AppState) -> String {
        match state.ui.draft.char_count() {
            1 => "1 character".to_string(),
            n => format!("{n} characters"),
        }
    }

    pub fn submit_hint(state: &AppState) -> String {
        if state.ui.saving {
            return SAVING_TEXT.to_string();
        }
        let keys = state
            .config
            .config
            .keybindings
            .keys_for(View::Compose, Action::Submit);
        match keys.first() {
            Some(key) => format!("{key} to save"),
            None => String::new(),
        }
    }

    /// Content currently shown by the editor
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

impl Default for ComposeComponent {
    fn default() -> Self {
        Self::new()
    }
}
