use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dishcover_recipe::MatchMode;
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Debug,
    PartialEq,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Base URL of the remote backend; search, recommendation, and image
    /// analysis endpoints all live under it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_source_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: default_base_url(),
            request_timeout_secs: default_source_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MatcherConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscoveryConfig {
    /// Bound on a whole discovery fetch, on top of the HTTP client's own
    /// request timeout.
    #[serde(default = "default_discovery_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_discovery_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/".to_string()
}

fn default_source_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_discovery_timeout_secs() -> u64 {
    dishcover_discovery::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DISHCOVER__SOURCE__KIND, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional; defaults cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DISHCOVER")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the backend URL without a prefix, for parity with how
        // deployments hand it to sibling services.
        if let Ok(base_url) = env::var("RECIPE_BACKEND_URL") {
            builder = builder.set_override("source.base_url", base_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.source.request_timeout_secs == 0 || self.discovery.request_timeout_secs == 0 {
            return Err("Request timeouts must be at least 1 second".to_string());
        }
        if self.source.kind == SourceKind::Remote {
            url::Url::parse(&self.source.base_url)
                .map_err(|err| format!("Remote source base_url is invalid: {err}"))?;
        }
        Ok(())
    }
}
