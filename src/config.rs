//! Server configuration from environment variables.
//!
//! | Var | Default |
//! |-----|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8084` |
//! | `METRICS_PORT` | `9084` |
//! | `SITE_DIR` | `<crate>/site` |
//! | `LOG_FORMAT` | `pretty` (`pretty` or `json`) |

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8084;
const DEFAULT_METRICS_PORT: u16 = 9084;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("invalid LOG_FORMAT {0:?} (expected \"pretty\" or \"json\")")]
    InvalidLogFormat(String),
}

/// Log line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Port of the Prometheus listener, bound on the same host.
    pub metrics_port: u16,
    /// Root holding `templates/`, `static/`, and `pkg/`.
    pub site_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a port or `LOG_FORMAT` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a port or `LOG_FORMAT` is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port_var = |var: &'static str, default: u16| match get(var) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { var, value }),
            None => Ok(default),
        };
        let port = port_var("PORT", DEFAULT_PORT)?;
        let metrics_port = port_var("METRICS_PORT", DEFAULT_METRICS_PORT)?;
        let site_dir = get("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);
        let log_format = match get("LOG_FORMAT") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidLogFormat(raw)),
            },
            None => LogFormat::default(),
        };

        Ok(Self { host, port, metrics_port, site_dir, log_format })
    }

    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `host:metrics_port` for the metrics listener.
    #[must_use]
    pub fn metrics_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site")
}
