use serde::{Deserialize, Serialize};

use crate::domain::thought::{Thought, ThoughtId};

/// Messages for the list of thoughts and its persistence round-trips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalMsg {
    // Loading
    Load,
    Loaded(Vec<Thought>),
    LoadFailed(String),

    // Creation results (the request itself is UiMsg::Submit)
    Created(Thought),
    CreateFailed(String),

    // Deletion
    Delete(ThoughtId),
    DeleteSelected,
    Deleted(ThoughtId),
    DeleteFailed { id: ThoughtId, error: String },

    // Selection in the history view
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
}
