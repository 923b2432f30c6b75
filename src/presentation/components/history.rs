//! History view
//!
//! Loading indicator, empty state, or the list of thought cards.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::{selection::ScrollableList, AppState},
    domain::ui::View,
    presentation::{
        config::{keybindings::Action, styles::slot},
        widgets::thought_card::ThoughtCard,
    },
};

pub const LOADING_TEXT: &str = "Loading thoughts...";

/// History component
///
/// Stateless: the selection lives in the journal state.
#[derive(Debug, Clone, Default)]
pub struct HistoryComponent;

impl HistoryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = super::palette(state);
        let padding = Padding::new(1, 1, 1, 1);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.style(slot::BORDER))
            .title(Self::title(state))
            .padding(padding);

        if state.journal.loading || state.journal.is_empty() {
            let message = if state.journal.loading {
                LOADING_TEXT.to_string()
            } else {
                Self::empty_text(state)
            };
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(message)
                    .style(palette.style(slot::MUTED))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let inner = block.inner(area);
        let text_style = palette.style(slot::TEXT);
        let muted_style = palette.style(slot::MUTED);
        let selected_style = palette.style(slot::SELECTED);
        let cards: Vec<_> = state
            .journal
            .thoughts()
            .iter()
            .map(|thought| {
                let card = ThoughtCard::new(thought.clone(), Padding::default()).styles(
                    text_style,
                    muted_style,
                    selected_style,
                );
                let height = card.calculate_height(&inner);
                (card, height)
            })
            .collect();
        let item_count = cards.len();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.journal.selected());

        let list = ListView::new(builder, item_count)
            .block(block)
            .style(text_style);

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    pub fn title(state: &AppState) -> String {
        match state.journal.len() {
            0 => "Your thoughts".to_string(),
            n => format!("Your thoughts ({n})"),
        }
    }

    pub fn empty_text(state: &AppState) -> String {
        let keys = state
            .config
            .config
            .keybindings
            .keys_for(View::History, Action::ShowCompose);
        match keys.first() {
            Some(key) => format!("No thoughts yet. Press {key} to write one."),
            None => "No thoughts yet.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::journal::JournalMsg,
        domain::{
            theme::Theme,
            thought::{Thought, ThoughtId},
        },
        infrastructure::{
            config::Config,
            tui::{test::TestTui, TuiLike},
        },
    };

    fn state() -> AppState {
        let config = Config::embedded().expect("embedded config");
        AppState::new_with_config(config, Theme::Dark)
    }

    fn thought(id: i64, text: &str) -> Thought {
        Thought {
            id: ThoughtId::new(id),
            text: text.to_string(),
            character_count: Some(text.chars().count()),
            created_at: Utc
                .timestamp_millis_opt(1_760_000_000_000 + id)
                .single()
                .expect("valid timestamp"),
            status: None,
        }
    }

    fn render(state: &AppState) -> String {
        let mut tui = TestTui::new(60, 20).expect("test tui");
        tui.draw(&mut |f: &mut Frame<'_>| {
            let area = f.area();
            HistoryComponent::new().view(state, f, area);
        })
        .expect("draw");
        tui.screen_text()
    }

    #[test]
    fn test_loading_indicator() {
        let state = state();
        assert!(state.journal.loading);
        assert!(render(&state).contains(LOADING_TEXT));
    }

    #[test]
    fn test_empty_state() {
        let mut state = state();
        let _ = state.journal.update(JournalMsg::Loaded(vec![]));

        let screen = render(&state);
        assert!(!screen.contains(LOADING_TEXT));
        assert!(screen.contains("No thoughts yet."));
    }

    #[test]
    fn test_cards() {
        let mut state = state();
        let _ = state.journal.update(JournalMsg::Loaded(vec![
            thought(1, "older thought"),
            thought(2, "newer thought"),
        ]));

        let screen = render(&state);
        assert!(screen.contains("older thought"));
        assert!(screen.contains("newer thought"));
        assert!(screen.contains("Characters: 13"));
        assert!(screen.contains("Your thoughts (2)"));
        let newer = screen.find("newer thought").expect("newer rendered");
        let older = screen.find("older thought").expect("older rendered");
        assert!(newer < older);
    }

    #[test]
    fn test_title() {
        let mut state = state();
        assert_eq!(HistoryComponent::title(&state), "Your thoughts");
        let _ = state
            .journal
            .update(JournalMsg::Loaded(vec![thought(1, "x")]));
        assert_eq!(HistoryComponent::title(&state), "Your thoughts (1)");
    }
}
