use crate::card::{CardRecord, ScryfallCard};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_API_BASE: &str = "https://api.scryfall.com";
/// Courtesy pause before each uncached request, per the API's rate
/// guidance.
const COURTESY_DELAY_MS: u64 = 50;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Definite miss: the database answered 404 for this exact name.
    #[error("no card named {0:?}")]
    NotFound(String),
    /// Any other non-success status (rate limiting, server errors).
    /// Treated as transient, never memoized.
    #[error("unexpected status {status} looking up {name:?}")]
    Status {
        name: String,
        status: reqwest::StatusCode,
    },
}

/// Explicit memoized card cache, keyed by exact name. Definite misses are
/// cached too, so a name that does not exist is asked for once per batch.
/// Scoped to whoever constructs it — never an ambient singleton.
#[derive(Default)]
pub struct CardCache {
    entries: DashMap<String, Option<CardRecord>>,
}

impl CardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Option<CardRecord>> {
        self.entries.get(name).map(|e| e.value().clone())
    }

    pub fn insert(&self, name: &str, record: Option<CardRecord>) {
        self.entries.insert(name.to_string(), record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Card lookup collaborator backed by the Scryfall `cards/named` endpoint.
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<CardCache>,
}

impl ScryfallClient {
    /// Base URL comes from `SCRYFALL_API_BASE` when set (test servers,
    /// mirrors), otherwise the public API.
    pub fn new(cache: Arc<CardCache>) -> Self {
        let base_url =
            std::env::var("SCRYFALL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_base_url(cache, &base_url)
    }

    pub fn with_base_url(cache: Arc<CardCache>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// Look up a card by exact name. Idempotent within one session: hits
    /// and definite misses are memoized. Not-found, transport errors, and
    /// malformed payloads all degrade to `None`; the caller simply gets
    /// fewer cards.
    pub async fn lookup(&self, name: &str) -> Option<CardRecord> {
        let name = name.trim();
        if let Some(cached) = self.cache.get(name) {
            debug!(card = name, "cache hit");
            return cached;
        }

        match self.fetch(name).await {
            Ok(record) => {
                self.cache.insert(name, Some(record.clone()));
                Some(record)
            }
            Err(FetchError::NotFound(_)) => {
                warn!(card = name, "card not found, dropping from analysis");
                self.cache.insert(name, None);
                None
            }
            Err(err) => {
                // Transient failures are not memoized; a later batch may
                // still succeed.
                warn!(card = name, error = %err, "lookup failed, dropping from analysis");
                None
            }
        }
    }

    async fn fetch(&self, name: &str) -> Result<CardRecord, FetchError> {
        tokio::time::sleep(Duration::from_millis(COURTESY_DELAY_MS)).await;

        let url = format!("{}/cards/named", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("exact", name)])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                name: name.to_string(),
                status,
            });
        }

        let payload: ScryfallCard = response.json().await?;
        Ok(payload.normalize())
    }
}
