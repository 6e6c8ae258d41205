//! Request lifecycle state.

use crate::types::AnswerResult;

/// Shown when a query is empty or whitespace-only.
pub const VALIDATION_MESSAGE: &str = "Please enter a question.";

/// Shown for every backend failure, whatever the cause.
pub const FAILURE_MESSAGE: &str =
    "Request failed. Check that the backend service is running or see the logs for details.";

/// Where the current query is in its lifecycle.
///
/// Every transition replaces the whole value, so a stale answer can never
/// sit next to a loading flag or an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The last settled request succeeded
    Success(AnswerResult),

    /// The last settled request failed; holds the user-facing message
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The answer, if the state holds one.
    pub fn answer(&self) -> Option<&AnswerResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing error message, if the state holds one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failure(_) => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
        assert!(state.answer().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_accessors() {
        let answer = AnswerResult {
            final_answer: "42".to_string(),
            ..Default::default()
        };

        let success = RequestState::Success(answer.clone());
        assert_eq!(success.answer(), Some(&answer));
        assert_eq!(success.name(), "success");

        let failure = RequestState::Failure(FAILURE_MESSAGE.to_string());
        assert_eq!(failure.error_message(), Some(FAILURE_MESSAGE));
        assert!(failure.answer().is_none());

        assert!(RequestState::Loading.is_loading());
    }
}
