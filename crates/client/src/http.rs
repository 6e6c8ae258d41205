//! HTTP implementation of the ask backend.

use crate::backend::AskBackend;
use crate::types::{AnswerResult, AskRequest, HealthStatus};
use ragask_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// reqwest-backed client for the ask service.
#[derive(Debug, Clone)]
pub struct HttpAskClient {
    /// Base URL without trailing slash
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAskClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` bounds each whole request; `None` waits as long as the
    /// backend takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL {:?}: {}", base_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Base URL must use http or https: {}",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the status and decode the body of a response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Transport(format!(
                "Backend returned {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("Failed to parse response body: {}", e)))
    }
}

#[async_trait::async_trait]
impl AskBackend for HttpAskClient {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<AnswerResult> {
        let url = self.url("/api/ask");
        tracing::debug!(%url, "Posting question");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to send request: {}", e)))?;

        let result: AnswerResult = Self::decode(response).await?;

        tracing::debug!(
            steps = result.reasoning_steps.len(),
            "Received answer from backend"
        );

        Ok(result)
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.url("/");
        tracing::debug!(%url, "Checking backend health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach backend: {}", e)))?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpAskClient::new("http://localhost:8000", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000");
        assert_eq!(client.url("/api/ask"), "http://localhost:8000/api/ask");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            HttpAskClient::new("http://localhost:8000/", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(client.url("/api/ask"), "http://localhost:8000/api/ask");
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let result = HttpAskClient::new("localhost 8000", None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = HttpAskClient::new("ftp://localhost:8000", None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
