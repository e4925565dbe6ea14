// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_log_filter() -> String {
    "info,calculator_api=debug,tower_http=info".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// local development defaults.
    ///
    /// Reads `LISTEN_ADDR`, `ALLOWED_ORIGINS` and `RUST_LOG`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `LISTEN_ADDR` is not a socket
    /// address.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("LISTEN_ADDR").ok().as_deref(),
            env::var("ALLOWED_ORIGINS").ok().as_deref(),
            env::var("RUST_LOG").ok().as_deref(),
        )
    }

    fn from_values(
        listen_addr: Option<&str>,
        allowed_origins: Option<&str>,
        log_filter: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw_addr = listen_addr.map_or_else(default_listen_addr, ToString::to_string);
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}`: {err}")))?;

        let allowed_origins = allowed_origins
            .map(parse_origins)
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let log_filter = log_filter
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .map_or_else(default_log_filter, ToString::to_string);

        Ok(Self {
            listen_addr,
            allowed_origins,
            log_filter,
        })
    }

    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `tracing_subscriber::EnvFilter` directives for the process.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
