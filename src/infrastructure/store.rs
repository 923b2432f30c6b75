//! Persistence of thoughts
//!
//! The app talks to a PostgREST endpoint when it is configured and to an
//! in-memory stand-in otherwise. The choice is made once at start-up.

pub mod local;
pub mod rest;

use thiserror::Error;

use crate::{
    domain::thought::{NewThought, Thought, ThoughtId},
    infrastructure::config::ServiceConfig,
};

pub use local::LocalStore;
pub use rest::RestStore;

/// Failures of the persistence service. They abort the operation and are never fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service responded {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("service did not return the created row")]
    MissingRow,
    #[error("invalid service configuration: {0}")]
    Config(String),
}

/// The store selected for this session
#[derive(Debug, Clone)]
pub enum ThoughtStore {
    Remote(RestStore),
    Local(LocalStore),
}

impl ThoughtStore {
    /// Remote when both the URL and the key are configured, local otherwise
    pub fn from_config(service: &ServiceConfig) -> Result<Self, StoreError> {
        match (&service.url, &service.anon_key) {
            (Some(url), Some(key)) if service.is_configured() => {
                Ok(ThoughtStore::Remote(RestStore::new(url, key.clone())?))
            }
            _ => Ok(ThoughtStore::Local(LocalStore::new())),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ThoughtStore::Remote(_))
    }

    /// Most recent thoughts, newest first
    pub async fn list(&self, limit: usize) -> Result<Vec<Thought>, StoreError> {
        match self {
            ThoughtStore::Remote(store) => store.list(limit).await,
            ThoughtStore::Local(store) => Ok(store.list(limit)),
        }
    }

    pub async fn insert(&self, thought: &NewThought) -> Result<Thought, StoreError> {
        match self {
            ThoughtStore::Remote(store) => store.insert(thought).await,
            ThoughtStore::Local(store) => Ok(store.insert(thought)),
        }
    }

    pub async fn delete(&self, id: ThoughtId) -> Result<(), StoreError> {
        match self {
            ThoughtStore::Remote(store) => store.delete(id).await,
            ThoughtStore::Local(store) => {
                store.delete(id);
                Ok(())
            }
        }
    }
}
