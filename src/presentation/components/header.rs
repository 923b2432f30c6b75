//! Header component
//!
//! Title, today's date and the active theme.

use chrono::{Local, NaiveDate};
use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::theme::Theme, presentation::config::styles::slot};

pub const APP_TITLE: &str = "thoughtui";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = super::palette(state);
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(area);

        let title = Line::from(vec![
            Span::styled(APP_TITLE, palette.style(slot::ACCENT)),
            Span::raw("  "),
            Span::styled(
                long_date(Local::now().date_naive()),
                palette.style(slot::MUTED),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), layout[0]);

        let indicator = Paragraph::new(theme_indicator(state.ui.theme))
            .style(palette.style(slot::MUTED))
            .alignment(Alignment::Right);
        frame.render_widget(indicator, layout[1]);
    }
}

/// e.g. `Friday, 17 October 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

pub fn theme_indicator(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀ light",
        Theme::Dark => "☾ dark",
    }
}
