//! Service configuration loaded from environment variables.

use std::net::SocketAddr;

use serde::Deserialize;

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Reported Metadata ===
    /// Deployment environment name reported by `/info`.
    #[serde(default = "default_env")]
    pub env: String,

    // === Server Configuration ===
    /// HTTP server port, bound on all interfaces.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional port for the Prometheus scrape listener.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_env() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit key/value pairs instead of the
    /// process environment. Keys use the same upper-case names.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Address the API server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Address of the Prometheus listener, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port
            .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    }
}
