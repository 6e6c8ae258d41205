//! Backend factory.
//!
//! Builds the ask backend from application configuration.

use crate::backend::AskBackend;
use crate::http::HttpAskClient;
use ragask_core::{AppConfig, AppResult};
use std::sync::Arc;

/// Create the HTTP backend described by `config`.
///
/// # Errors
/// Returns `AppError::Config` if the base URL is invalid or the HTTP client
/// cannot be built.
pub fn create_backend(config: &AppConfig) -> AppResult<Arc<dyn AskBackend>> {
    let client = HttpAskClient::new(&config.base_url, config.timeout())?;
    tracing::debug!(
        endpoint = client.endpoint(),
        timeout_secs = ?config.timeout_secs,
        "Created ask backend"
    );
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_backend() {
        let backend = create_backend(&AppConfig::default()).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8000");
    }

    #[test]
    fn test_create_backend_with_custom_url() {
        let mut config = AppConfig::default();
        config.base_url = "https://rag.example.com/".to_string();
        config.timeout_secs = Some(10);

        let backend = create_backend(&config).unwrap();
        assert_eq!(backend.endpoint(), "https://rag.example.com");
    }

    #[test]
    fn test_invalid_url() {
        let mut config = AppConfig::default();
        config.base_url = "not a url".to_string();
        assert!(create_backend(&config).is_err());
    }
}
