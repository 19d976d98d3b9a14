//! Quote listing command implementation.

use anyhow::{Context, Result};
use pulsecheck_client::{ConnectConfig, PulseClient};

use crate::OutputFormat;

pub async fn run(config: ConnectConfig, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let quotes = client.quotes().await.context("quotes request failed")?;

    match format {
        OutputFormat::Text => {
            for q in &quotes {
                println!("{}: {}", q.name, q.quote);
            }
            println!("({} quotes)", quotes.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        }
    }

    Ok(())
}
