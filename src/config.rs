use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Runtime configuration, loaded once in `main` and passed down explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// sqlx connection string; the SQLite file is created when missing.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Fallback log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_port() -> u16 {
    5001
}

fn default_database_url() -> String {
    "sqlite:scribe.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// Creates the default [`Figment`] used to load configuration.
    /// Split out so tests can extract from a jailed environment.
    pub(crate) fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed("SCRIBE_"))
            // Environment variable aliases: the bare names deployments
            // already export (and `.env` files usually carry).
            .merge(Env::raw().only(&["PORT", "DATABASE_URL"]))
    }
}
