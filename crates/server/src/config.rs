// Server configuration
// Decision: Configuration comes from environment variables only (an optional .env is loaded first by main)
// Decision: Missing DATABASE_URL selects the in-memory store (dev mode) instead of failing

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Allowed cross-origin callers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// No CORS layer; same-origin requests only
    #[default]
    Disabled,
    /// `*`: any origin (credentials are not allowed in this mode)
    Any,
    /// Explicit allow-list
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse `CORS_ALLOWED_ORIGINS`: comma-separated origins or `*`.
    /// Entries that are not valid header values are dropped with a warning.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::Disabled;
        }
        if value == "*" {
            return Self::Any;
        }
        let origins: Vec<HeaderValue> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %s, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        if origins.is_empty() {
            Self::Disabled
        } else {
            Self::List(origins)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL; `None` runs on the in-memory store
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Prefix for all API routes, e.g. "/api" gives "/api/v1/students"
    pub api_prefix: String,
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: String::new(),
            cors_origins: CorsOrigins::Disabled,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: var("DATABASE_URL"),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_prefix: var("API_PREFIX")
                .map(|p| p.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            cors_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|v| CorsOrigins::parse(&v))
                .unwrap_or_default(),
        })
    }

    /// Address to bind the HTTP listener to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
