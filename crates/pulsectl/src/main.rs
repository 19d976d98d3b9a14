//! pulsectl: Command-line interface for the Pulsecheck workload service.
//!
//! Provides commands for probing the server, generating synthetic load, and
//! reading the workload summary from the terminal.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Command-line interface for the Pulsecheck workload service.
#[derive(Parser)]
#[command(name = "pulsectl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Pulsecheck server endpoint (e.g., http://localhost:8080)
    #[arg(short, long, env = "PULSECHECK_ENDPOINT", default_value = "http://localhost:8080")]
    endpoint: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the server and show deployment information
    Status,
    /// Trigger slow calls and report the served delays
    Slow {
        /// Number of calls to make
        #[arg(short, long, default_value = "1")]
        count: u64,
    },
    /// Trigger fault draws and report the observed failure proportion
    Fault {
        /// Number of draws to make
        #[arg(short, long, default_value = "1")]
        count: u64,
    },
    /// Trigger one memory spike
    Memory,
    /// Burn server CPU for a number of seconds
    Cpu {
        /// Seconds to burn
        #[arg(short, long, default_value = "30")]
        duration: u64,
    },
    /// Show the workload summary
    Metrics,
    /// List the seeded quotes
    Quotes,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = pulsecheck_client::ConnectConfig {
        endpoint: cli.endpoint,
    };

    match cli.command {
        Commands::Status => commands::status::run(config, cli.output).await?,
        Commands::Slow { count } => commands::workload::slow(config, count, cli.output).await?,
        Commands::Fault { count } => commands::workload::fault(config, count, cli.output).await?,
        Commands::Memory => commands::workload::memory(config, cli.output).await?,
        Commands::Cpu { duration } => {
            commands::workload::cpu(config, duration, cli.output).await?;
        }
        Commands::Metrics => commands::metrics::run(config, cli.output).await?,
        Commands::Quotes => commands::quotes::run(config, cli.output).await?,
    }

    Ok(())
}
