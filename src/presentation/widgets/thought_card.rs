use chrono::{DateTime, Local, Utc};
use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{domain::thought::Thought, presentation::widgets::shrink_text::ShrinkText};

/// Fixed rows of a card besides its text: date line and separator
const FIXED_LINES: u16 = 2;

/// One journal entry in the history list
#[derive(Clone, Debug)]
pub struct ThoughtCard {
    pub thought: Thought,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
    pub text_style: Style,
    pub muted_style: Style,
    pub selected_style: Style,
}

impl ThoughtCard {
    pub fn new(thought: Thought, padding: Padding) -> Self {
        Self {
            thought,
            padding,
            highlight: false,
            text_style: Style::default(),
            muted_style: Style::default().fg(Color::Gray),
            selected_style: Style::default().reversed(),
        }
    }

    pub fn styles(mut self, text: Style, muted: Style, selected: Style) -> Self {
        self.text_style = text;
        self.muted_style = muted;
        self.selected_style = selected;
        self
    }

    /// Long-form local date and time, e.g. `Saturday, 17 October 2026 at 14:03`
    pub fn created_at(&self) -> String {
        format_long_datetime(self.thought.created_at)
    }

    pub fn character_count(&self) -> Option<String> {
        self.thought
            .character_count
            .map(|count| format!("Characters: {}", count.separate_with_commas()))
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let width = area
            .width
            .saturating_sub(self.padding.left + self.padding.right);
        let fixed_lines = FIXED_LINES + u16::from(self.thought.character_count.is_some());
        let available_height = area
            .height
            .saturating_sub(self.padding.top + self.padding.bottom + fixed_lines);

        let content = ShrinkText::new(
            self.thought.text.as_str(),
            width as usize,
            available_height as usize,
        );
        let content_height = u16::try_from(content.height()).unwrap_or(u16::MAX);

        fixed_lines.saturating_add(content_height)
    }
}

pub fn format_long_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%A, %-d %B %Y at %H:%M")
        .to_string()
}

impl Widget for ThoughtCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let marker = if self.highlight { "▌ " } else { "  " };
        let date_style = if self.highlight {
            self.selected_style
        } else {
            self.muted_style
        };

        let mut text = Text::default();
        text.extend(Text::from(Line::from(vec![
            Span::styled(marker, self.selected_style),
            Span::styled(self.created_at(), date_style),
        ])));

        let content: Text = ShrinkText::new(
            self.thought.text.as_str(),
            area.width as usize,
            area.height as usize,
        )
        .into();
        text.extend(
            content
                .lines
                .into_iter()
                .map(|line| line.style(self.text_style)),
        );

        if let Some(count) = self.character_count() {
            text.extend(Text::from(Line::styled(count, self.muted_style)));
        }

        text.extend(Text::styled(
            "─".repeat(area.width as usize),
            self.muted_style,
        ));

        Paragraph::new(text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::thought::ThoughtId;

    #[fixture]
    fn thought() -> Thought {
        Thought {
            id: ThoughtId::new(1),
            text: "hello journal".to_string(),
            character_count: Some(13),
            created_at: Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap(),
            status: Some("ativo".to_string()),
        }
    }

    fn rendered(card: ThoughtCard, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[rstest]
    fn test_character_count(thought: Thought) {
        let mut thought = thought;
        thought.character_count = Some(1234);
        let card = ThoughtCard::new(thought, Padding::default());
        assert_eq!(card.character_count(), Some("Characters: 1,234".to_string()));
    }

    #[rstest]
    fn test_character_count_absent(thought: Thought) {
        let mut thought = thought;
        thought.character_count = None;
        let card = ThoughtCard::new(thought, Padding::default());
        assert_eq!(card.character_count(), None);
    }

    #[rstest]
    fn test_calculate_height(thought: Thought) {
        let card = ThoughtCard::new(thought, Padding::default());
        // date + one line of text + count + separator
        assert_eq!(card.calculate_height(&Rect::new(0, 0, 40, 20)), 4);
    }

    #[rstest]
    fn test_calculate_height_wraps(thought: Thought) {
        let card = ThoughtCard::new(thought, Padding::default());
        // "hello journal" wraps into three rows at width 5
        assert_eq!(card.calculate_height(&Rect::new(0, 0, 5, 20)), 6);
    }

    #[rstest]
    fn test_created_at_is_long_form(thought: Thought) {
        let card = ThoughtCard::new(thought, Padding::default());
        let created_at = card.created_at();
        assert!(created_at.contains("2026"));
        assert!(created_at.contains("October"));
    }

    #[rstest]
    fn test_render(thought: Thought) {
        let card = ThoughtCard::new(thought, Padding::default());
        let content = rendered(card, Rect::new(0, 0, 60, 4));
        assert!(content.contains("hello journal"));
        assert!(content.contains("Characters: 13"));
    }

    #[rstest]
    fn test_render_highlight(thought: Thought) {
        let mut card = ThoughtCard::new(thought, Padding::default());
        card.highlight = true;
        let content = rendered(card, Rect::new(0, 0, 60, 4));
        assert!(content.contains('▌'));
    }
}
