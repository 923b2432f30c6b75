use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::{state::ui::TextAreaState, textarea_engine::TextAreaEngine},
    domain::ui::{CursorPosition, TextSelection},
};

/// Editing engine backed by tui-textarea.
/// Every call builds a scratch TextArea from the snapshot, edits it and reads the result back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// TextArea holding the content, cursor and selection of `snapshot`
    pub fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        Self::jump(&mut textarea, snapshot.cursor_position);
        if let Some(selection) = &snapshot.selection {
            Self::jump(&mut textarea, selection.start);
            textarea.start_selection();
            Self::jump(&mut textarea, selection.end);
        }
        textarea
    }

    fn jump(textarea: &mut TextArea<'_>, position: CursorPosition) {
        let line = u16::try_from(position.line).unwrap_or(u16::MAX);
        let column = u16::try_from(position.column).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(line, column));
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sl, sc), (el, ec))| TextSelection {
                start: CursorPosition {
                    line: sl,
                    column: sc,
                },
                end: CursorPosition {
                    line: el,
                    column: ec,
                },
            });
        TextAreaState::new(
            textarea.lines().join("\n"),
            CursorPosition { line, column },
            selection,
        )
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }

    fn insert_text(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        if textarea.selection_range().is_some() {
            textarea.cut();
        }
        textarea.insert_str(text.replace("\r\n", "\n"));
        Self::snapshot(&textarea)
    }
}
