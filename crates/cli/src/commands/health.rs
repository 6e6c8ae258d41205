//! Health command handler.

use clap::Args;
use ragask_client::{create_backend, AskSession};
use ragask_core::{config::AppConfig, AppResult};

/// Check that the backend is reachable
#[derive(Args, Debug)]
pub struct HealthCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl HealthCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Checking backend at {}", config.base_url);

        let session = AskSession::new(create_backend(config)?);
        let status = session.health().await?;

        if self.json {
            let output = serde_json::json!({
                "endpoint": config.base_url,
                "message": status.message,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", status.message);
        }

        Ok(())
    }
}
