use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Value written to the `estado` column for every thought this client creates
pub const ACTIVE_STATUS: &str = "ativo";

/// Text of the entry shown when the persistence service is not configured
pub const PLACEHOLDER_TEXT: &str = "This is an example thought. Set SERVICE_URL and SERVICE_ANON_KEY to keep your thoughts in the journal service.";

/// Identifier assigned to a thought by the persistence service
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ThoughtId(i64);

impl ThoughtId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ThoughtId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A single journaled entry, as stored in the `frases` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,
    #[serde(rename = "frase", deserialize_with = "nullable_string")]
    pub text: String,
    #[serde(
        rename = "total_caracteres",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub character_count: Option<usize>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Thought {
    /// Builds the record a store returns for a freshly inserted draft.
    pub fn from_new(new: &NewThought, id: ThoughtId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: new.text.clone(),
            character_count: Some(new.character_count),
            created_at,
            status: Some(new.status.clone()),
        }
    }

    /// The single entry listed when running without a persistence service.
    pub fn placeholder(created_at: DateTime<Utc>) -> Self {
        Self {
            id: ThoughtId::new(1),
            text: PLACEHOLDER_TEXT.to_string(),
            character_count: None,
            created_at,
            status: None,
        }
    }
}

/// Insert payload for a new thought
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewThought {
    #[serde(rename = "frase")]
    pub text: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "total_caracteres")]
    pub character_count: usize,
}

impl NewThought {
    /// Prepares a draft for saving. Returns `None` when nothing but whitespace was typed.
    pub fn from_draft(draft: &str) -> Option<Self> {
        let text = draft.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            status: ACTIVE_STATUS.to_string(),
            character_count: text.chars().count(),
        })
    }
}

/// Whether thoughts are ordered newest first.
pub fn is_newest_first(thoughts: &[Thought]) -> bool {
    thoughts
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at)
}
