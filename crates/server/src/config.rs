//! Server configuration from the environment.

use std::env;
use std::net::SocketAddr;

use analysis::AnalysisConfig;
use anyhow::{Context, Result};

/// Listener address plus engine policy.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub analysis: AnalysisConfig,
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `ANALYSIS_MAX_LAG` and `ANALYSIS_SIGNIFICANCE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => 8080,
        };

        let mut builder = AnalysisConfig::builder();
        if let Some(raw) = lookup("ANALYSIS_MAX_LAG") {
            let max_lag = raw
                .parse::<usize>()
                .with_context(|| format!("ANALYSIS_MAX_LAG must be a positive integer, got {raw:?}"))?;
            builder = builder.max_lag(max_lag);
        }
        if let Some(raw) = lookup("ANALYSIS_SIGNIFICANCE") {
            let level = raw
                .parse::<f64>()
                .with_context(|| format!("ANALYSIS_SIGNIFICANCE must be a number, got {raw:?}"))?;
            builder = builder.significance_level(level);
        }
        let analysis = builder.build().context("invalid analysis configuration")?;

        Ok(Self {
            host,
            port,
            analysis,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid HOST:PORT configuration {}:{}", self.host, self.port))
    }
}
