use crossterm::event::KeyEvent;

use crate::core::state::ui::TextAreaState;

/// Engine interface that applies editing input to a textarea snapshot
/// and returns the resulting snapshot. Implementations must be deterministic
/// and free of external side effects so that they can be used from the pure update path.
pub trait TextAreaEngine {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;

    /// Insert pasted text at the cursor.
    fn insert_text(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }

    fn insert_text(&self, snapshot: &TextAreaState, _text: &str) -> TextAreaState {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::ui::CursorPosition;

    #[test]
    fn noop_engine_returns_same_snapshot() {
        let engine = NoopTextAreaEngine;
        let snap = TextAreaState::new("abc".into(), CursorPosition { line: 0, column: 3 }, None);
        assert_eq!(engine.apply_keys(&snap, &[]), snap);
        assert_eq!(engine.insert_text(&snap, "def"), snap);
    }
}
