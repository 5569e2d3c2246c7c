//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `restwire.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Served resource collections.
    pub resources: ResourcesConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Resource collections served by the daemon.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Collection names; each becomes a memory-backed route set.
    pub names: Vec<String>,
}

impl Config {
    /// Load configuration from `restwire.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("restwire.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RESTWIRE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("RESTWIRE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("RESTWIRE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("RESTWIRE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RESTWIRE_RESOURCES") {
            self.resources.names = parse_resource_names(&val);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for name in &self.resources.names {
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(ConfigError::Validation(format!(
                    "resource name {name:?} must be lowercase alphanumeric, `_` or `-`"
                )));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Validation(format!(
                    "duplicate resource name {name:?}"
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Split a comma-separated resource list, dropping blanks.
fn parse_resource_names(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "restwired=info,restwire=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            names: vec!["note".to_string()],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
