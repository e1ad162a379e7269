//! REST client for the events API

use std::sync::OnceLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::state::Site;
use crate::types::{Event, EventDraft, EventUpdate};

use super::EventQuery;

/// Fallback API location when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API URL
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or(DEFAULT_API_URL)
}

/// Create a client against the configured API URL.
pub fn client() -> EventsClient {
    EventsClient::new(get_api_url())
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
}

/// Refresh request payload: the sites to re-synchronize.
#[derive(Debug, Serialize)]
struct RefreshRequest {
    websites: Vec<Site>,
}

/// Error body returned by the API on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// REST client for the events API
#[derive(Clone)]
pub struct EventsClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the filtered, sorted event list.
    pub async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<Event>, ApiError> {
        let response = self
            .client
            .get(format!("{}/events", self.base_url))
            .query(&query.params(Utc::now()))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Trigger a re-scrape of a single site.
    pub async fn refresh_site(&self, site: Site) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/events", self.base_url))
            .json(&RefreshRequest {
                websites: vec![site],
            })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/events/create", self.base_url))
            .json(draft)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn update_event(&self, id: i64, update: &EventUpdate) -> Result<(), ApiError> {
        let response = self
            .client
            .put(format!("{}/events/{id}", self.base_url))
            .json(update)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/events/{id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map a non-success response to [`ApiError::Server`], carrying the
    /// machine-readable `detail` from the error body when present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| "Unexpected server error".to_string());

        Err(ApiError::Server {
            status: status.as_u16(),
            detail,
        })
    }
}
