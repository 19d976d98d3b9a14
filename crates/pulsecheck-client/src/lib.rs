//! Shared HTTP client library for Pulsecheck.
//!
//! This crate provides a reusable client for driving a Pulsecheck server,
//! used by the `pulsectl` CLI and by anything else that wants to generate
//! workload traffic programmatically.

mod types;

pub use types::{
    CpuReport, FaultOutcome, MemoryReport, MetricsSummary, Quote, ServiceInfo, SlowReport,
};

use thiserror::Error;

/// Error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}: {body}")]
    UnexpectedStatus {
        path: String,
        status: u16,
        body: String,
    },
}

/// Connection configuration for a Pulsecheck server.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Server endpoint, e.g. `http://localhost:8080`
    pub endpoint: String,
}

/// HTTP client for a Pulsecheck server.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PulseClient {
    /// Connect to a Pulsecheck server.
    ///
    /// Verifies reachability with a liveness probe before returning.
    pub async fn connect(config: ConnectConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        let client = Self {
            http: reqwest::Client::new(),
            endpoint,
        };

        let response = client.http.get(client.url("/health")).send().await?;
        if !response.status().is_success() {
            return Err(client.unexpected("/health", response).await);
        }

        tracing::debug!(endpoint = %client.endpoint, "Connected to Pulsecheck server");
        Ok(client)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn unexpected(&self, path: &str, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ClientError::UnexpectedStatus {
            path: path.to_string(),
            status,
            body,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(self.unexpected(path, response).await);
        }
        Ok(response.json().await?)
    }

    /// Fetch the static greeting.
    pub async fn home(&self) -> Result<String, ClientError> {
        let response = self.http.get(self.url("/")).send().await?;
        if !response.status().is_success() {
            return Err(self.unexpected("/", response).await);
        }
        Ok(response.text().await?)
    }

    /// Fetch deployment information.
    pub async fn info(&self) -> Result<ServiceInfo, ClientError> {
        self.get_json("/info").await
    }

    /// Trigger one slow call and return the served delay.
    pub async fn slow(&self) -> Result<SlowReport, ClientError> {
        self.get_json("/slow").await
    }

    /// Trigger one fault draw.
    ///
    /// Both outcomes are values: a 200 maps to [`FaultOutcome::Success`],
    /// a 500 to [`FaultOutcome::Fault`]. Anything else is an error.
    pub async fn fault(&self) -> Result<FaultOutcome, ClientError> {
        let response = self.http.get(self.url("/error")).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(FaultOutcome::Success);
        }

        if status.as_u16() == 500 {
            let body: serde_json::Value = response.json().await?;
            let message = body["error"].as_str().unwrap_or("unknown fault").to_string();
            return Ok(FaultOutcome::Fault(message));
        }

        Err(self.unexpected("/error", response).await)
    }

    /// Trigger one memory spike.
    pub async fn memory(&self) -> Result<MemoryReport, ClientError> {
        self.get_json("/memory").await
    }

    /// Burn CPU for the given number of seconds.
    pub async fn cpu(&self, duration_secs: u64) -> Result<CpuReport, ClientError> {
        self.get_json(&format!("/cpu?duration={duration_secs}")).await
    }

    /// Fetch the workload summary.
    pub async fn metrics(&self) -> Result<MetricsSummary, ClientError> {
        self.get_json("/metrics").await
    }

    /// Fetch the seeded quotes.
    pub async fn quotes(&self) -> Result<Vec<Quote>, ClientError> {
        self.get_json("/quotes").await
    }
}
