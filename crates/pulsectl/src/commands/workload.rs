//! Workload-generation command implementations.

use anyhow::{Context, Result};
use pulsecheck_client::{ConnectConfig, PulseClient};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct SlowRunOutput {
    calls: u64,
    delays: Vec<f64>,
    total_delay: f64,
}

pub async fn slow(config: ConnectConfig, count: u64, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let mut delays = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let report = client.slow().await.context("slow request failed")?;
        delays.push(report.delay);
    }

    let output = SlowRunOutput {
        calls: count,
        total_delay: delays.iter().sum(),
        delays,
    };

    match format {
        OutputFormat::Text => {
            for (i, d) in output.delays.iter().enumerate() {
                println!("call {:>3}: {:.3}s", i + 1, d);
            }
            println!("total: {:.3}s over {} calls", output.total_delay, output.calls);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct FaultRunOutput {
    draws: u64,
    faults: u64,
    successes: u64,
    observed_proportion: f64,
}

pub async fn fault(config: ConnectConfig, count: u64, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let mut faults = 0_u64;
    for _ in 0..count {
        let outcome = client.fault().await.context("fault request failed")?;
        if outcome.is_fault() {
            faults += 1;
        }
    }

    let output = FaultRunOutput {
        draws: count,
        faults,
        successes: count - faults,
        observed_proportion: if count == 0 {
            0.0
        } else {
            faults as f64 / count as f64
        },
    };

    match format {
        OutputFormat::Text => {
            println!(
                "{} draws: {} faults, {} successes ({:.1}% faulted)",
                output.draws,
                output.faults,
                output.successes,
                output.observed_proportion * 100.0
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub async fn memory(config: ConnectConfig, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let report = client.memory().await.context("memory request failed")?;

    match format {
        OutputFormat::Text => {
            println!("processed {} items", report.processed);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

pub async fn cpu(config: ConnectConfig, duration: u64, format: OutputFormat) -> Result<()> {
    let client = PulseClient::connect(config)
        .await
        .context("failed to connect to server")?;

    let report = client.cpu(duration).await.context("cpu request failed")?;

    match format {
        OutputFormat::Text => {
            println!(
                "burned {}s of CPU ({} iterations)",
                report.burned_secs, report.iterations
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
