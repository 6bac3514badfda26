//! HTTP client for an `/info` endpoint

use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Error from a single info call. Neither kind is recovered locally; both
/// propagate to the harness and end the run.
#[derive(Debug, Error)]
pub enum InfoError {
    #[error("info request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("info response from {endpoint} is not valid JSON")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for one backend's `/info` endpoint.
///
/// Both backends speak the same protocol: POST a JSON body carrying a `type`
/// discriminator, receive an arbitrary JSON value back. The two instances
/// share no state.
#[derive(Clone)]
pub struct InfoClient {
    client: reqwest::Client,
    base_url: String,
    name: String,
}

impl InfoClient {
    pub fn new(name: &str, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            name: name.to_string(),
        }
    }

    /// Get the client name (for logging)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// POST a payload to `/info` and decode the response body as JSON.
    pub async fn fetch_info(&self, payload: &Value) -> Result<Value, InfoError> {
        let url = format!("{}/info", self.base_url);
        let payload_type = payload
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown");

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|source| InfoError::Transport {
                endpoint: self.name.clone(),
                source,
            })?;
        let raw_body = response
            .text()
            .await
            .map_err(|source| InfoError::Transport {
                endpoint: self.name.clone(),
                source,
            })?;

        info!(
            endpoint = %self.name,
            payload_type,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "info call completed"
        );

        serde_json::from_str(&raw_body).map_err(|source| InfoError::Decode {
            endpoint: self.name.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = InfoClient::new("ambient", "https://example.test/api/v1/");
        assert_eq!(client.base_url, "https://example.test/api/v1");
        assert_eq!(client.name(), "ambient");
    }
}
