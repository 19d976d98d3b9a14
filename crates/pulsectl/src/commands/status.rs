//! Status command implementation.

use anyhow::{Context, Result};
use pulsecheck_client::{ConnectConfig, PulseClient};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct StatusOutput {
    endpoint: String,
    greeting: String,
    environment: String,
    version: String,
    database: String,
}

pub async fn run(config: ConnectConfig, format: OutputFormat) -> Result<()> {
    let endpoint = config.endpoint.clone();
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let greeting = client.home().await.context("home request failed")?;
    let info = client.info().await.context("info request failed")?;

    let output = StatusOutput {
        endpoint,
        greeting,
        environment: info.environment,
        version: info.version,
        database: info.database,
    };

    match format {
        OutputFormat::Text => {
            println!("Server at {} is up", output.endpoint);
            println!("  Greeting:    {}", output.greeting);
            println!("  Environment: {}", output.environment);
            println!("  Version:     {}", output.version);
            println!("  Database:    {}", output.database);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
