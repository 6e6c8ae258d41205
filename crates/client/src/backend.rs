//! Backend abstraction for the ask service.

use crate::types::{AnswerResult, AskRequest, HealthStatus};
use ragask_core::AppResult;

/// Trait for ask service backends.
///
/// The HTTP client is the production implementation; tests plug in their own
/// to count calls or script outcomes.
#[async_trait::async_trait]
pub trait AskBackend: Send + Sync {
    /// Base address of the backend, for logging.
    fn endpoint(&self) -> &str;

    /// Submit a question and decode the answer.
    ///
    /// # Errors
    /// `AppError::Transport` when the call fails or returns non-2xx,
    /// `AppError::Decode` when a 2xx body is not an `AnswerResult`.
    async fn ask(&self, request: &AskRequest) -> AppResult<AnswerResult>;

    /// Check that the backend is up.
    async fn health(&self) -> AppResult<HealthStatus>;
}
