use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::{error, info};

use content_reminder::core::{Config, RunError};
use content_reminder::features::{NotionClient, ReminderRunner, RunSummary, SlackClient};

async fn remind(config: &Config) -> Result<RunSummary> {
    let notion = NotionClient::from_config(config);
    let slack = SlackClient::from_config(config);

    ReminderRunner::new(&notion, &slack)
        .run(&config.notion_database_id)
        .await
        .with_context(|| {
            format!(
                "Reminder run for database {} stopped",
                config.notion_database_id
            )
        })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env();

    // Logger comes up before the config check so a missing variable is still reported
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&log_level))
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{e}.");
            std::process::exit(1);
        }
    };

    info!("Starting Notion content reminder script.");

    // Run-level failures are logged, not surfaced through the exit status
    if let Err(e) = remind(&config).await {
        match e.downcast_ref::<RunError>() {
            Some(RunError::Source(_)) => error!("{e:#}"),
            _ => error!("An unexpected error occurred: {e:#}"),
        }
    }

    Ok(())
}
