//! Interactive command handler.
//!
//! Every stdin line is submitted as its own task, so a new question can be
//! sent while an earlier one is still in flight. A watcher prints each state
//! transition; when requests overlap, the one that settles last is what stays
//! on screen.

use super::RetrievalArgs;
use clap::Args;
use ragask_client::{create_backend, render_state, AskSession, RequestState};
use ragask_core::{config::AppConfig, AppError, AppResult};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

/// Read questions from stdin, one per line
#[derive(Args, Debug)]
pub struct InteractiveCommand {
    #[command(flatten)]
    pub retrieval: RetrievalArgs,
}

/// Where a rendered state goes.
#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

impl InteractiveCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing interactive command");

        let backend = create_backend(config)?;
        let session =
            Arc::new(AskSession::new(backend).with_options(self.retrieval.options(config)));

        let mut rx = session.subscribe();
        let renderer = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let output = display(&rx.borrow_and_update());
                match output {
                    Some(Output::Stdout(text)) => println!("{}\n", text),
                    Some(Output::Stderr(text)) => eprintln!("{}", text),
                    None => {}
                }
            }
        });

        eprintln!("Enter a question per line; end input with Ctrl-D.");

        let mut reader = BufReader::new(tokio::io::stdin());
        let mut buf = Vec::new();
        let mut in_flight = JoinSet::new();
        let mut read_error = None;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            }

            let Some(line) = decode_line(&buf) else {
                tracing::warn!(bytes = buf.len(), "Skipping input line that is not valid UTF-8");
                continue;
            };

            let session = Arc::clone(&session);
            in_flight.spawn(async move {
                match session.submit_query(&line).await {
                    Ok(_) => {}
                    Err(AppError::Validation(message)) => eprintln!("{}", message),
                    Err(e) => tracing::error!(error = %e, "Submission failed"),
                }
            });
        }

        tracing::debug!(pending = in_flight.len(), "Input closed, waiting for in-flight requests");
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Submission task panicked");
            }
        }

        // Dropping the last sender lets the renderer drain and stop.
        drop(session);
        renderer
            .await
            .map_err(|e| AppError::Other(format!("Renderer task failed: {}", e)))?;

        match read_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// Decode one raw stdin line, without its line terminator.
fn decode_line(raw: &[u8]) -> Option<String> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).ok().map(str::to_string)
}

fn display(state: &RequestState) -> Option<Output> {
    match state {
        RequestState::Idle => None,
        RequestState::Success(_) => Some(Output::Stdout(render_state(state))),
        RequestState::Loading | RequestState::Failure(_) => {
            Some(Output::Stderr(render_state(state)))
        }
    }
}
