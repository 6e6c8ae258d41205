//! The ask session: one shared request state driven by query submissions.
//!
//! A session owns a single `RequestState` published through a watch channel.
//! Each valid submission moves it to `Loading`, makes exactly one backend
//! call and then publishes `Success` or `Failure`. Submissions are not
//! sequenced or cancelled: when two overlap, whichever settles last decides
//! the final state.

use crate::backend::AskBackend;
use crate::state::{RequestState, FAILURE_MESSAGE, VALIDATION_MESSAGE};
use crate::types::{AskOptions, AskRequest, HealthStatus};
use ragask_core::{AppError, AppResult};
use std::sync::Arc;
use tokio::sync::watch;

pub struct AskSession {
    backend: Arc<dyn AskBackend>,
    options: AskOptions,
    state: watch::Sender<RequestState>,
}

impl AskSession {
    /// Create an idle session over `backend`.
    pub fn new(backend: Arc<dyn AskBackend>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            backend,
            options: AskOptions::default(),
            state,
        }
    }

    /// Set the retrieval options sent with every request.
    pub fn with_options(mut self, options: AskOptions) -> Self {
        self.options = options;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Submit a question.
    ///
    /// An empty or whitespace-only `text` returns `AppError::Validation`
    /// without touching the state or the network. Otherwise the query is
    /// sent as entered and the state this submission settled into is
    /// returned. Backend failures are not errors here: they are logged and
    /// become `RequestState::Failure` with the fixed failure message.
    pub async fn submit_query(&self, text: &str) -> AppResult<RequestState> {
        if text.trim().is_empty() {
            tracing::debug!("Rejected empty query");
            return Err(AppError::Validation(VALIDATION_MESSAGE.to_string()));
        }

        self.publish(RequestState::Loading);

        let request = AskRequest::new(text).with_options(&self.options);
        tracing::info!(endpoint = self.backend.endpoint(), "Submitting query");

        let settled = match self.backend.ask(&request).await {
            Ok(result) => {
                tracing::info!("Query answered");
                RequestState::Success(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "Ask request failed");
                RequestState::Failure(FAILURE_MESSAGE.to_string())
            }
        };

        self.publish(settled.clone());
        Ok(settled)
    }

    /// Ask the backend whether it is up.
    pub async fn health(&self) -> AppResult<HealthStatus> {
        self.backend.health().await
    }

    fn publish(&self, next: RequestState) {
        tracing::debug!(state = next.name(), "State transition");
        self.state.send_replace(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerResult;
    use std::sync::Mutex;

    /// Backend that records requests and replays a fixed outcome.
    struct ScriptedBackend {
        requests: Mutex<Vec<AskRequest>>,
        fail: bool,
    }

    impl ScriptedBackend {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn calls(&self) -> Vec<AskRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl AskBackend for ScriptedBackend {
        fn endpoint(&self) -> &str {
            "scripted"
        }

        async fn ask(&self, request: &AskRequest) -> AppResult<AnswerResult> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                Err(AppError::Transport("connection refused".to_string()))
            } else {
                Ok(AnswerResult {
                    final_answer: format!("answer to {}", request.query),
                    ..Default::default()
                })
            }
        }

        async fn health(&self) -> AppResult<HealthStatus> {
            Ok(HealthStatus {
                message: "ok".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_call() {
        let backend = ScriptedBackend::new(false);
        let session = AskSession::new(backend.clone());

        for text in ["", "   ", "\n\t "] {
            let err = session.submit_query(text).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == VALIDATION_MESSAGE));
        }

        assert!(backend.calls().is_empty());
        assert_eq!(session.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_empty_query_keeps_previous_state() {
        let backend = ScriptedBackend::new(false);
        let session = AskSession::new(backend.clone());

        session.submit_query("first").await.unwrap();
        let before = session.state();
        assert!(session.submit_query(" ").await.is_err());

        assert_eq!(session.state(), before);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_query_sent_as_entered() {
        let backend = ScriptedBackend::new(false);
        let session = AskSession::new(backend.clone());

        let settled = session.submit_query("  revenue 2024 ").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], AskRequest::new("  revenue 2024 "));
        assert_eq!(
            settled.answer().map(|a| a.final_answer.as_str()),
            Some("answer to   revenue 2024 ")
        );
        assert_eq!(session.state(), settled);
    }

    #[tokio::test]
    async fn test_options_forwarded() {
        let backend = ScriptedBackend::new(false);
        let options = AskOptions {
            top_k: Some(8),
            rerank_top_n: None,
        };
        let session = AskSession::new(backend.clone()).with_options(options);

        session.submit_query("q").await.unwrap();

        assert_eq!(backend.calls()[0].top_k, Some(8));
        assert_eq!(backend.calls()[0].rerank_top_n, None);
    }

    #[tokio::test]
    async fn test_failure_hides_detail() {
        let backend = ScriptedBackend::new(true);
        let session = AskSession::new(backend);

        let settled = session.submit_query("q").await.unwrap();

        assert_eq!(settled, RequestState::Failure(FAILURE_MESSAGE.to_string()));
        assert!(!FAILURE_MESSAGE.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_subscriber_sees_final_state() {
        let backend = ScriptedBackend::new(false);
        let session = AskSession::new(backend);
        let mut rx = session.subscribe();

        session.submit_query("q").await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().answer().is_some());
    }

    #[tokio::test]
    async fn test_health_delegates() {
        let session = AskSession::new(ScriptedBackend::new(false));
        assert_eq!(session.health().await.unwrap().message, "ok");
    }
}
