//! Best-effort notification of an external automation webhook
//!
//! Failures here are logged and dropped; [`WebhookError`] never reaches the runtime.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{header, Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::{
    domain::thought::{Thought, ThoughtId},
    infrastructure::config::WebhookConfig,
};

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid webhook url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// JSON body sent for each saved thought
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub frase: String,
    pub total_caracteres: Option<usize>,
    pub timestamp: String,
    pub id: ThoughtId,
}

impl WebhookPayload {
    pub fn new(thought: &Thought, sent_at: DateTime<Utc>) -> Self {
        Self {
            frase: thought.text.clone(),
            total_caracteres: thought.character_count,
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            id: thought.id,
        }
    }
}

/// What the receiver answered, kept for logging
#[derive(Debug, Clone)]
pub struct WebhookReceipt {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: Url,
    origin: Option<String>,
}

impl WebhookClient {
    /// `None` when no webhook URL is configured
    pub fn from_config(config: &WebhookConfig) -> Result<Option<Self>, WebhookError> {
        let Some(raw_url) = config.url.as_deref() else {
            return Ok(None);
        };
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Self::with_client(client, raw_url, config.origin()).map(Some)
    }

    pub fn with_client(
        client: Client,
        url: &str,
        origin: Option<String>,
    ) -> Result<Self, WebhookError> {
        let url = Url::parse(url).map_err(|e| WebhookError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            url,
            origin,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Posts the payload for `thought`. Non-2xx answers are errors too.
    #[tracing::instrument(skip(self, thought), fields(id = %thought.id))]
    pub async fn notify(&self, thought: &Thought) -> Result<WebhookReceipt, WebhookError> {
        let payload = WebhookPayload::new(thought, Utc::now());
        let mut request = self
            .client
            .post(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .json(&payload);
        if let Some(origin) = &self.origin {
            request = request.header(header::ORIGIN, origin);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(WebhookError::Status { status, body });
        }
        Ok(WebhookReceipt {
            status,
            headers,
            body,
        })
    }

    /// Fires the notification on its own task; the outcome is only logged
    pub fn spawn_notify(self: Arc<Self>, thought: Thought) -> JoinHandle<()> {
        tokio::spawn(async move {
            match self.notify(&thought).await {
                Ok(receipt) => log::info!(
                    "Webhook accepted thought {}: status {}, headers {:?}, body {}",
                    thought.id,
                    receipt.status,
                    receipt.headers,
                    receipt.body
                ),
                Err(e) => log::error!("Webhook failed for thought {}: {e}", thought.id),
            }
        })
    }
}
