//! Command handlers for the ragask CLI.

pub mod ask;
pub mod health;
pub mod interactive;

pub use ask::AskCommand;
pub use health::HealthCommand;
pub use interactive::InteractiveCommand;

use clap::Args;
use ragask_client::AskOptions;
use ragask_core::AppConfig;

/// Retrieval tuning flags shared by the asking commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RetrievalArgs {
    /// Number of candidates the backend retrieves
    #[arg(long)]
    pub top_k: Option<u32>,

    /// Number of candidates kept after reranking
    #[arg(long)]
    pub rerank_top_n: Option<u32>,
}

impl RetrievalArgs {
    /// Merge flags over the configured defaults.
    pub fn options(&self, config: &AppConfig) -> AskOptions {
        AskOptions {
            top_k: self.top_k.or(config.top_k),
            rerank_top_n: self.rerank_top_n.or(config.rerank_top_n),
        }
    }
}
