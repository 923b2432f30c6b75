use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};

use super::StoreError;
use crate::domain::thought::{NewThought, Thought, ThoughtId};

const TABLE_PATH: &str = "rest/v1/frases";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// PostgREST client for the `frases` table
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    endpoint: Url,
    anon_key: SecretString,
}

impl RestStore {
    pub fn new(base_url: &str, anon_key: SecretString) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Self::with_client(client, base_url, anon_key)
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        anon_key: SecretString,
    ) -> Result<Self, StoreError> {
        let base = format!("{}/", base_url.trim().trim_end_matches('/'));
        let endpoint = Url::parse(&base)
            .and_then(|base| base.join(TABLE_PATH))
            .map_err(|e| StoreError::Config(format!("{base_url}: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            anon_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url_with(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params);
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.anon_key.expose_secret();
        request
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {key}"))
    }

    /// Most recent `limit` rows ordered by `created_at` descending
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: usize) -> Result<Vec<Thought>, StoreError> {
        let limit = limit.to_string();
        let url = self.url_with(&[
            ("select", "*"),
            ("order", "created_at.desc"),
            ("limit", &limit),
        ]);
        let response = self.authorized(self.client.get(url)).send().await?;
        let body = success_body(response).await?;
        let mut thoughts: Vec<Thought> = serde_json::from_str(&body)?;
        let fetched = thoughts.len();
        thoughts.retain(|thought| !thought.text.trim().is_empty());
        if thoughts.len() < fetched {
            log::warn!("Skipped {} rows without text", fetched - thoughts.len());
        }
        log::debug!("Fetched {} thoughts", thoughts.len());
        Ok(thoughts)
    }

    /// Inserts a row and returns it as stored by the service
    #[tracing::instrument(skip(self, thought), fields(chars = thought.character_count))]
    pub async fn insert(&self, thought: &NewThought) -> Result<Thought, StoreError> {
        let request = self
            .client
            .post(self.endpoint.clone())
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(thought);
        let response = self.authorized(request).send().await?;
        let body = success_body(response).await?;
        decode_created(&body)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: ThoughtId) -> Result<(), StoreError> {
        let filter = format!("eq.{id}");
        let url = self.url_with(&[("id", &filter)]);
        let response = self.authorized(self.client.delete(url)).send().await?;
        success_body(response).await?;
        Ok(())
    }
}

async fn success_body(response: Response) -> Result<String, StoreError> {
    let status = response.status();
    let mut body = response.text().await?;
    if status.is_success() {
        return Ok(body);
    }
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    Err(StoreError::Status { status, body })
}

/// The single-object media type yields an object; plain PostgREST yields an array
fn decode_created(body: &str) -> Result<Thought, StoreError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(rows) => match rows.into_iter().next() {
            Some(row) => Ok(serde_json::from_value(row)?),
            None => Err(StoreError::MissingRow),
        },
        serde_json::Value::Null => Err(StoreError::MissingRow),
        row => Ok(serde_json::from_value(row)?),
    }
}
