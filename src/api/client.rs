use std::fmt;

use log::{debug, warn};

use super::types::SearchResponse;
use crate::core::config::DEFAULT_OMDB_BASE_URL;

/// Errors that can occur while talking to the movie database.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the movie database search endpoint.
///
/// Holds the API key for the whole session; the key travels as a query
/// parameter on every request.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - OMDb API key, sent verbatim (even when empty)
    /// * `base_url` - Optional custom base URL (defaults to OMDb's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Runs a title substring search.
    ///
    /// The term is sent untrimmed, empty strings included. A body with
    /// `Response: "False"` is still an `Ok` here; the caller decides what
    /// an API-level failure means for the view state.
    pub async fn search(&self, term: &str) -> Result<SearchResponse, ApiError> {
        debug!("GET {} s={:?}", self.base_url, term);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", term)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("search response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("search API error: {} - {}", status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
