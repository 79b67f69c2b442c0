use std::env;

use anyhow::{Context, Result};

use crate::session::DisplayConfig;

/// Default HTTP port when PORT is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// App identifier registered with the glasses host
    pub package_name: String,
    /// Shared key the host must present on every /api request
    pub api_key: String,
    pub port: u16,
    pub bind: String,
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the package name and API key, which
    /// only `serve` requires.
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let mut display = DisplayConfig::default();
        if let Ok(raw) = env::var("HUDSUM_SUMMARY_DURATION_MS") {
            display.summary_ms = raw.trim().parse().with_context(|| {
                format!("HUDSUM_SUMMARY_DURATION_MS must be milliseconds, got {raw:?}")
            })?;
        }
        if let Ok(greeting) = env::var("HUDSUM_GREETING") {
            display.greeting = greeting;
        }
        display.echo_transcript = env::var("HUDSUM_ECHO_TRANSCRIPT")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            package_name: env::var("HUDSUM_PACKAGE_NAME").unwrap_or_default(),
            api_key: env::var("HUDSUM_API_KEY").unwrap_or_default(),
            port,
            bind: env::var("HUDSUM_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            display,
        })
    }

    /// Check that the host API key is configured.
    /// Call this before starting the server.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "HUDSUM_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the package name is configured.
    pub fn require_package_name(&self) -> Result<()> {
        if self.package_name.is_empty() {
            anyhow::bail!(
                "HUDSUM_PACKAGE_NAME not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
