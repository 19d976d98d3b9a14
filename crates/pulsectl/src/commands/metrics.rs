//! Metrics summary command implementation.

use anyhow::{Context, Result};
use pulsecheck_client::{ConnectConfig, PulseClient};

use crate::OutputFormat;

pub async fn run(config: ConnectConfig, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let summary = client.metrics().await.context("metrics request failed")?;

    match format {
        OutputFormat::Text => {
            match summary.error_rate {
                Some(rate) => println!("error rate:   {rate:.2}%"),
                None => println!("error rate:   no data (no successes yet)"),
            }
            println!("total delay:  {:.3}s", summary.total_delay);
            println!("errors:       {}", summary.error_count);
            println!("successes:    {}", summary.success_count);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
