//! Ask command handler.
//!
//! Submits one question and prints the rendered answer to stdout.

use super::RetrievalArgs;
use clap::Args;
use ragask_client::{create_backend, render_answer, AnswerResult, AskSession, RequestState};
use ragask_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub retrieval: RetrievalArgs,

    /// Output the answer as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the user gets to see once the submission settles.
#[derive(Debug, PartialEq, Eq)]
enum Report {
    /// Rendered answer, for stdout
    Answer(String),

    /// Fixed user-facing message, for stderr
    Problem(String),
}

impl AskCommand {
    /// Execute the ask command.
    ///
    /// Validation and request failures print their fixed message to stderr
    /// and exit non-zero; only unexpected errors are returned.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<ExitCode> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        match self.run(config).await? {
            Report::Answer(text) => {
                println!("{}", text);
                Ok(ExitCode::SUCCESS)
            }
            Report::Problem(message) => {
                eprintln!("{}", message);
                Ok(ExitCode::FAILURE)
            }
        }
    }

    async fn run(&self, config: &AppConfig) -> AppResult<Report> {
        let question = self.get_question()?;

        let backend = create_backend(config)?;
        let session = AskSession::new(backend).with_options(self.retrieval.options(config));

        let mut rx = session.subscribe();
        let indicator = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                if rx.borrow_and_update().is_loading() {
                    eprintln!("Loading...");
                }
            }
        });

        let settled = session.submit_query(&question).await;
        indicator.abort();

        self.report(settled)
    }

    fn report(&self, settled: AppResult<RequestState>) -> AppResult<Report> {
        let state = match settled {
            Ok(state) => state,
            Err(AppError::Validation(message)) => return Ok(Report::Problem(message)),
            Err(e) => return Err(e),
        };

        if let Some(message) = state.error_message() {
            return Ok(Report::Problem(message.to_string()));
        }

        match state.answer() {
            Some(result) => self.format_answer(result).map(Report::Answer),
            None => Err(AppError::Other(format!(
                "Request ended in unexpected state: {}",
                state.name()
            ))),
        }
    }

    fn format_answer(&self, result: &AnswerResult) -> AppResult<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(render_answer(result))
        }
    }

    /// Get the question text from the argument or the file.
    ///
    /// A missing question is passed on as empty so it fails validation like
    /// any other blank input.
    fn get_question(&self) -> AppResult<String> {
        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        Ok(self.question.clone().unwrap_or_default())
    }
}
