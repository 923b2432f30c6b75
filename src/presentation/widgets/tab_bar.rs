use ratatui::prelude::*;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::domain::ui::View;

/// "Write" / "History" switcher
#[derive(Clone, Debug)]
pub struct TabBarWidget {
    active: View,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(active: View) -> Self {
        Self {
            active,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn styles(mut self, style: Style, highlight_style: Style) -> Self {
        self.style = style;
        self.highlight_style = highlight_style;
        self
    }

    pub fn titles(&self) -> Vec<&'static str> {
        View::iter().map(View::title).collect()
    }

    pub fn active_index(&self) -> usize {
        View::iter()
            .position(|view| view == self.active)
            .unwrap_or_default()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = ratatui::widgets::Tabs::new(self.titles())
            .select(self.active_index())
            .style(self.style)
            .highlight_style(self.highlight_style);

        tabs.render(area, buf);
    }
}
