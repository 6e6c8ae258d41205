//! Client for a retrieval-augmented question answering service.
//!
//! The backend does the retrieval and generation; this crate only submits a
//! question to `POST {base}/api/ask`, tracks the request lifecycle and renders
//! the structured answer.
//!
//! # Example
//! ```no_run
//! use ragask_client::{create_backend, render_state, AskSession};
//! use ragask_core::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = create_backend(&AppConfig::default())?;
//! let session = AskSession::new(backend);
//! let settled = session.submit_query("What was 2024 revenue?").await?;
//! println!("{}", render_state(&settled));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod factory;
pub mod http;
pub mod render;
pub mod session;
pub mod state;
pub mod types;

// Re-export main types
pub use backend::AskBackend;
pub use factory::create_backend;
pub use http::HttpAskClient;
pub use render::{render_answer, render_state};
pub use session::AskSession;
pub use state::{RequestState, FAILURE_MESSAGE, VALIDATION_MESSAGE};
pub use types::{AnswerResult, AskOptions, AskRequest, HealthStatus};
