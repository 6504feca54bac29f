//! Query Execution Client
//!
//! Sends the composed query specification to the remote query service
//! and parses the response. Non-2xx responses carry a structured
//! `detail` message when the service can name the problem; the raw
//! body is the fallback.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use opd_core::config::QueryServiceConfig;
use opd_queries::spec::{QueryResult, QuerySpecification};

use crate::error::{ClientError, ClientResult};

/// Structured error body returned by the query service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// HTTP client for the remote query endpoint
#[derive(Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    /// Create a client for the configured query service
    pub fn new(config: &QueryServiceConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if config.request_timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_seconds));
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/run-query", config.base_url.trim_end_matches('/')),
        })
    }

    /// Execute a query specification against the remote service
    pub async fn run(&self, spec: &QuerySpecification) -> ClientResult<QueryResult> {
        debug!(
            fields = spec.fields.len(),
            filters = spec.filters.len(),
            limit = spec.limit,
            "Running query"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(spec)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: error_message(&body, status.as_u16()),
            });
        }

        let result: QueryResult = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("Invalid response: {e}")))?;

        debug!(rows = result.results.len(), "Query completed");
        Ok(result)
    }
}

/// Pick the most specific message out of an error response body
fn error_message(body: &str, status: u16) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            return detail;
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        format!("Query service returned status {status}")
    } else {
        raw.to_string()
    }
}
