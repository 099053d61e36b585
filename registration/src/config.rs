//! Environment-driven configuration for the registration client.

use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the events backend.
    pub api_url: String,
    /// Stored bearer token, if the viewer has signed in.
    pub auth_token: Option<String>,
    /// Stored viewer id, used for membership checks.
    pub viewer_id: Option<String>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from `SAMYAK_*` environment variables,
    /// falling back to local-development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("SAMYAK_API_URL", "http://localhost:4000"),
            auth_token: env::var("SAMYAK_AUTH_TOKEN").ok(),
            viewer_id: env::var("SAMYAK_VIEWER_ID").ok(),
            log_filter: env_or("SAMYAK_LOG", "samyak_registration=info"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
