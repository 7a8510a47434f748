//! Gateway configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `PARLEY_*` environment variables, then whatever the caller sets last
//! (command-line flags in the binary).

use derive_getters::Getters;
use derive_setters::Setters;
use parley_core::DEFAULT_MODEL;
use parley_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Interface the HTTP server binds when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the HTTP server binds when none is configured.
pub const DEFAULT_PORT: u16 = 8000;
/// Inference backend used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:11434";

/// Environment variable overriding [`GatewayConfig::host`].
pub const ENV_HOST: &str = "PARLEY_HOST";
/// Environment variable overriding [`GatewayConfig::port`].
pub const ENV_PORT: &str = "PARLEY_PORT";
/// Environment variable overriding [`GatewayConfig::backend_url`].
pub const ENV_BACKEND_URL: &str = "PARLEY_BACKEND_URL";
/// Environment variable overriding [`GatewayConfig::model`].
pub const ENV_MODEL: &str = "PARLEY_MODEL";

/// Where to listen and which backend model to forward prompts to.
///
/// # Examples
///
/// ```
/// use parley_server::GatewayConfig;
///
/// let config = GatewayConfig::default().with_port(9000u16);
/// assert_eq!(config.bind_addr(), "127.0.0.1:9000");
/// assert_eq!(config.model(), "llama3.2:3b-instruct-q4_K_M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_", into)]
pub struct GatewayConfig {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
    /// Base URL of the inference backend
    backend_url: String,
    /// Backend model name
    model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file. Keys left out keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML.
    #[instrument(skip_all)]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Overrides values from `PARLEY_*` environment variables.
    ///
    /// Reads:
    /// - `PARLEY_HOST`
    /// - `PARLEY_PORT`
    /// - `PARLEY_BACKEND_URL`
    /// - `PARLEY_MODEL`
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Overrides values from any variable source.
    pub fn merge_vars(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                ConfigError::new(format!("{} is not a valid port: {:?}", ENV_PORT, port))
            })?;
        }
        if let Some(backend_url) = lookup(ENV_BACKEND_URL) {
            self.backend_url = backend_url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        Ok(self)
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(*config.port(), 8000);
        assert_eq!(config.backend_url(), "http://localhost:11434");
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = GatewayConfig::default()
            .merge_vars(vars(&[(ENV_PORT, "9100"), (ENV_MODEL, "mistral")]))
            .unwrap();
        assert_eq!(*config.port(), 9100);
        assert_eq!(config.model(), "mistral");
        assert_eq!(config.host(), DEFAULT_HOST);
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let err = GatewayConfig::default()
            .merge_vars(vars(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(err.message.contains(ENV_PORT));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"phi3\"\nport = 8081").unwrap();

        let config = GatewayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model(), "phi3");
        assert_eq!(*config.port(), 8081);
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "modle = \"phi3\"").unwrap();

        assert!(GatewayConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = GatewayConfig::from_file("/nonexistent/parley.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
