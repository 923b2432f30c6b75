use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::Utc;

use crate::domain::thought::{NewThought, Thought, ThoughtId};

/// Stand-in used when the persistence service is not configured.
/// Nothing is stored: listing yields a single explanatory placeholder and
/// inserts only mint an id.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    last_id: Arc<AtomicI64>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, limit: usize) -> Vec<Thought> {
        let mut thoughts = vec![Thought::placeholder(Utc::now())];
        thoughts.truncate(limit);
        thoughts
    }

    pub fn insert(&self, thought: &NewThought) -> Thought {
        let now = Utc::now();
        let id = self.next_id(now.timestamp_millis());
        log::info!("Saved thought {id} locally");
        Thought::from_new(thought, id, now)
    }

    pub fn delete(&self, id: ThoughtId) {
        log::info!("Deleted thought {id} locally");
    }

    /// Current time in milliseconds, bumped past the previous id when called twice in one ms
    fn next_id(&self, now_ms: i64) -> ThoughtId {
        let mut previous = self.last_id.load(Ordering::Relaxed);
        loop {
            let next = now_ms.max(previous + 1);
            match self.last_id.compare_exchange_weak(
                previous,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return ThoughtId::new(next),
                Err(actual) => previous = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::thought::PLACEHOLDER_TEXT;

    #[test]
    fn test_list_returns_single_placeholder() {
        let thoughts = LocalStore::new().list(50);
        assert_eq!(thoughts.len(), 1);
        assert_eq!(thoughts[0].text, PLACEHOLDER_TEXT);
        assert_eq!(thoughts[0].character_count, None);
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let store = LocalStore::new();
        let first = store.next_id(1_000);
        let second = store.next_id(1_000);
        let third = store.next_id(999);
        let later = store.next_id(5_000);

        assert_eq!(first.value(), 1_000);
        assert_eq!(second.value(), 1_001);
        assert_eq!(third.value(), 1_002);
        assert_eq!(later.value(), 5_000);
    }

    #[test]
    fn test_insert_keeps_trimmed_text_and_count() {
        let store = LocalStore::new();
        let new = NewThought::from_draft("  Hello world  ").expect("non-blank draft");

        let thought = store.insert(&new);

        assert_eq!(thought.text, "Hello world");
        assert_eq!(thought.character_count, Some(11));
        assert!(thought.id.value() > 0);
    }

    #[test]
    fn test_clones_share_id_sequence() {
        let store = LocalStore::new();
        let clone = store.clone();
        let a = store.next_id(10);
        let b = clone.next_id(10);
        assert!(b > a);
    }
}
