//! Process configuration from the environment.

use anyhow::Context;

/// Environment variable holding the dashboard session secret. The name is
/// inherited from the deployment and does contain dashes.
pub const SESSION_SECRET_VAR: &str = "SECRET-SNAP-KEY";

/// Configuration required before serving any interaction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session_secret: String,
}

impl AppConfig {
    /// Read required configuration. A missing secret is fatal at startup,
    /// before any data is fetched.
    pub fn from_env() -> anyhow::Result<AppConfig> {
        let session_secret = std::env::var(SESSION_SECRET_VAR).with_context(|| {
            format!(
                "required environment variable {} is not set",
                SESSION_SECRET_VAR
            )
        })?;
        Ok(AppConfig { session_secret })
    }
}
