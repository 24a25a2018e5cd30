// Configuration module entry point
// Loads layered configuration and holds shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use thiserror::Error;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, LoggingConfig, PerformanceConfig, ServerConfig, SitemapConfig,
};

/// Default config file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable prefix, e.g. `SITEMAP_SITEMAP__BASE_URL`
const ENV_PREFIX: &str = "SITEMAP";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn builder_with_defaults() -> Result<Builder, config::ConfigError> {
    config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("logging.access_log_format", "combined")?
        .set_default("performance.keep_alive_timeout", 75)?
        .set_default("performance.read_timeout", 30)?
        .set_default("performance.write_timeout", 30)?
        .set_default("performance.shutdown_timeout", 10)?
        .set_default("sitemap.base_url", "https://www.frontend-devops.com")?
        .set_default("sitemap.content_dir", "./content")?
        .set_default("sitemap.route", "/sitemap.xml")
}

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Missing files are fine; environment variables override file values
    pub fn load_from(config_path: &str) -> Result<Self, ConfigLoadError> {
        let settings = builder_with_defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Self::finish(settings.try_deserialize()?)
    }

    /// Load configuration from an in-memory TOML document layered on the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigLoadError> {
        let settings = builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Self::finish(settings.try_deserialize()?)
    }

    fn finish(mut cfg: Self) -> Result<Self, ConfigLoadError> {
        cfg.normalize();
        cfg.validate()?;
        Ok(cfg)
    }

    fn normalize(&mut self) {
        let trimmed = self.sitemap.base_url.trim().trim_end_matches('/');
        self.sitemap.base_url = trimmed.to_string();
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let base_url = &self.sitemap.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigLoadError::Invalid {
                key: "sitemap.base_url",
                reason: format!("'{base_url}' must start with http:// or https://"),
            });
        }

        if !self.sitemap.route.starts_with('/') {
            return Err(ConfigLoadError::Invalid {
                key: "sitemap.route",
                reason: format!("'{}' must start with '/'", self.sitemap.route),
            });
        }

        if self.sitemap.content_dir.is_empty() {
            return Err(ConfigLoadError::Invalid {
                key: "sitemap.content_dir",
                reason: "must not be empty".to_string(),
            });
        }

        if crate::logger::Level::parse(&self.logging.level).is_none() {
            return Err(ConfigLoadError::Invalid {
                key: "logging.level",
                reason: format!(
                    "'{}' is not one of error, warn, info, debug",
                    self.logging.level
                ),
            });
        }

        self.get_socket_addr()
            .map_err(|reason| ConfigLoadError::Invalid {
                key: "server.host",
                reason,
            })?;

        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
