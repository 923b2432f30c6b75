use std::collections::HashSet;

use crate::{
    core::{cmd::Cmd, msg::journal::JournalMsg, state::selection::ScrollableList},
    domain::thought::{Thought, ThoughtId},
};

/// Number of most recent thoughts fetched on start-up
pub const FETCH_LIMIT: usize = 50;

/// Loaded thoughts, newest first, plus the history selection
#[derive(Debug, Clone)]
pub struct JournalState {
    thoughts: Vec<Thought>,
    /// A fetch is in flight
    pub loading: bool,
    selected_index: Option<usize>,
    /// Saves that landed while a fetch was in flight
    created_during_load: Vec<Thought>,
}

impl Default for JournalState {
    fn default() -> Self {
        Self {
            thoughts: vec![],
            loading: true,
            selected_index: None,
            created_during_load: vec![],
        }
    }
}

impl JournalState {
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn get(&self, index: usize) -> Option<&Thought> {
        self.thoughts.get(index)
    }

    pub fn contains(&self, id: ThoughtId) -> bool {
        self.thoughts.iter().any(|thought| thought.id == id)
    }

    pub fn selected_thought(&self) -> Option<&Thought> {
        self.selected_index.and_then(|i| self.thoughts.get(i))
    }

    /// Replaces the whole list with a fetch result
    pub fn replace_all(&mut self, mut thoughts: Vec<Thought>) {
        let mut seen = HashSet::new();
        thoughts.retain(|thought| seen.insert(thought.id));
        thoughts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.thoughts = thoughts;
        self.loading = false;
        self.clamp_selection();
    }

    /// Puts a freshly created thought at the top.
    /// An entry with the same id is replaced.
    pub fn prepend(&mut self, thought: Thought) {
        let replaced = self.remove_entry(thought.id);
        self.thoughts.insert(0, thought);

        // Keep pointing at the same card when one was selected
        if let Some(i) = self.selected_index {
            let shifted = match replaced {
                Some(removed) if removed == i => 0,
                Some(removed) if removed > i => i + 1,
                Some(_) => i,
                None => i + 1,
            };
            self.selected_index = Some(shifted);
        }
        self.clamp_selection();
    }

    /// Removes the thought with `id`. Unknown ids leave the list untouched.
    pub fn remove(&mut self, id: ThoughtId) -> Option<Thought> {
        let index = self.thoughts.iter().position(|thought| thought.id == id)?;
        let removed = self.thoughts.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    fn remove_entry(&mut self, id: ThoughtId) -> Option<usize> {
        let index = self.thoughts.iter().position(|thought| thought.id == id)?;
        self.thoughts.remove(index);
        Some(index)
    }

    /// Journal-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: JournalMsg) -> Vec<Cmd> {
        match msg {
            JournalMsg::Load => {
                self.loading = true;
                vec![Cmd::LoadThoughts { limit: FETCH_LIMIT }]
            }

            JournalMsg::Loaded(mut thoughts) => {
                let count = thoughts.len();
                thoughts.append(&mut self.created_during_load);
                self.replace_all(thoughts);
                vec![Cmd::LogInfo {
                    message: format!("Loaded {count} thoughts"),
                }]
            }

            JournalMsg::LoadFailed(error) => {
                self.loading = false;
                self.created_during_load.clear();
                vec![Cmd::LogError {
                    message: format!("Failed to load thoughts: {error}"),
                }]
            }

            JournalMsg::Created(thought) => {
                if self.loading {
                    self.created_during_load.push(thought.clone());
                }
                self.prepend(thought);
                vec![]
            }

            JournalMsg::Delete(id) => vec![Cmd::DeleteThought { id }],

            JournalMsg::DeleteSelected => match self.selected_thought() {
                Some(thought) => vec![Cmd::DeleteThought { id: thought.id }],
                None => vec![],
            },

            JournalMsg::Deleted(id) => {
                self.remove(id);
                vec![]
            }

            JournalMsg::DeleteFailed { id, error } => vec![Cmd::LogError {
                message: format!("Failed to delete thought {id}: {error}"),
            }],

            JournalMsg::SelectNext => {
                self.scroll_down();
                vec![]
            }
            JournalMsg::SelectPrevious => {
                self.scroll_up();
                vec![]
            }
            JournalMsg::SelectFirst => {
                self.scroll_to_top();
                vec![]
            }
            JournalMsg::SelectLast => {
                self.scroll_to_bottom();
                vec![]
            }

            // The draft lives in UiState; see update_with_context
            JournalMsg::CreateFailed(error) => vec![Cmd::LogError {
                message: format!("Failed to save thought: {error}"),
            }],
        }
    }
}

impl ScrollableList for JournalState {
    fn select(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    fn selected(&self) -> Option<usize> {
        self.selected_index
    }

    fn len(&self) -> usize {
        self.thoughts.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::thought::is_newest_first;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0)
            .single()
            .expect("valid timestamp")
    }

    fn thought(id: i64, secs: i64) -> Thought {
        Thought {
            id: ThoughtId::new(id),
            text: format!("thought {id}"),
            character_count: Some(9),
            created_at: at(secs),
            status: Some("ativo".to_string()),
        }
    }

    #[fixture]
    fn journal() -> JournalState {
        let mut journal = JournalState::default();
        journal.replace_all(vec![thought(1, 10), thought(3, 30), thought(2, 20)]);
        journal
    }

    fn ids(journal: &JournalState) -> Vec<i64> {
        journal.thoughts().iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn test_starts_loading() {
        let journal = JournalState::default();
        assert!(journal.loading);
        assert!(journal.is_empty());
    }

    #[rstest]
    fn test_replace_all_sorts_newest_first(journal: JournalState) {
        assert!(!journal.loading);
        assert_eq!(ids(&journal), vec![3, 2, 1]);
        assert!(is_newest_first(journal.thoughts()));
    }

    #[test]
    fn test_created_during_load_survives_stale_fetch() {
        let mut journal = JournalState::default();
        journal.update(JournalMsg::Created(thought(9, 90)));

        journal.update(JournalMsg::Loaded(vec![thought(2, 20), thought(1, 10)]));

        assert_eq!(ids(&journal), vec![9, 2, 1]);
        assert!(!journal.loading);

        journal.update(JournalMsg::Loaded(vec![thought(2, 20)]));
        assert_eq!(ids(&journal), vec![2]);
    }

    #[test]
    fn test_replace_all_drops_repeated_ids() {
        let mut journal = JournalState::default();
        journal.replace_all(vec![thought(1, 30), thought(2, 20), thought(1, 10)]);
        assert_eq!(ids(&journal), vec![1, 2]);
    }

    #[rstest]
    fn test_prepend_puts_new_thought_first(mut journal: JournalState) {
        journal.prepend(thought(4, 40));
        assert_eq!(ids(&journal), vec![4, 3, 2, 1]);
        assert!(is_newest_first(journal.thoughts()));
    }

    #[rstest]
    fn test_prepend_replaces_duplicate_id(mut journal: JournalState) {
        journal.prepend(thought(2, 50));
        assert_eq!(ids(&journal), vec![2, 3, 1]);
        assert_eq!(journal.len(), 3);
    }

    #[rstest]
    fn test_prepend_keeps_selected_card(mut journal: JournalState) {
        journal.select(Some(1));
        journal.prepend(thought(4, 40));
        assert_eq!(journal.selected_thought().map(|t| t.id.value()), Some(2));
    }

    #[rstest]
    fn test_remove_exactly_one(mut journal: JournalState) {
        let removed = journal.remove(ThoughtId::new(2));
        assert_eq!(removed.map(|t| t.id.value()), Some(2));
        assert_eq!(ids(&journal), vec![3, 1]);
    }

    #[rstest]
    fn test_remove_unknown_id_is_noop(mut journal: JournalState) {
        let cmds = journal.update(JournalMsg::Deleted(ThoughtId::new(99)));
        assert!(cmds.is_empty());
        assert_eq!(ids(&journal), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_remove_clamps_selection(mut journal: JournalState) {
        journal.scroll_to_bottom();
        journal.remove(ThoughtId::new(1));
        assert_eq!(journal.selected(), Some(1));

        journal.remove(ThoughtId::new(3));
        journal.remove(ThoughtId::new(2));
        assert_eq!(journal.selected(), None);
    }

    #[rstest]
    fn test_delete_selected(mut journal: JournalState) {
        assert!(journal.update(JournalMsg::DeleteSelected).is_empty());

        journal.update(JournalMsg::SelectNext);
        journal.update(JournalMsg::SelectNext);

        assert_eq!(
            journal.update(JournalMsg::DeleteSelected),
            vec![Cmd::DeleteThought {
                id: ThoughtId::new(2)
            }]
        );
    }

    #[rstest]
    fn test_delete_failure_leaves_list(mut journal: JournalState) {
        let cmds = journal.update(JournalMsg::DeleteFailed {
            id: ThoughtId::new(3),
            error: "503".to_string(),
        });
        assert_eq!(cmds.len(), 1);
        assert_eq!(ids(&journal), vec![3, 2, 1]);
    }

    #[test]
    fn test_load_requests_fetch_limit() {
        let mut journal = JournalState::default();
        assert_eq!(
            journal.update(JournalMsg::Load),
            vec![Cmd::LoadThoughts { limit: 50 }]
        );
    }

    #[test]
    fn test_load_failure_clears_loading_and_keeps_list_empty() {
        let mut journal = JournalState::default();
        journal.update(JournalMsg::LoadFailed("timeout".to_string()));
        assert!(!journal.loading);
        assert!(journal.is_empty());
    }
}
