use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::DEFAULT_TOLERANCE;

/// Upstream Flyby endpoint
pub const DEFAULT_BASE_URL: &str = "https://nene.strava.com/flyby/matches/";
pub const DEFAULT_REFERER: &str = "https://labs.strava.com/flyby/viewer/";
pub const DEFAULT_ORIGIN: &str = "https://labs.strava.com";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub flyby: FlybySettings,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Where and how to reach the Flyby service
#[derive(Debug, Clone, Deserialize)]
pub struct FlybySettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Request timeout; the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for FlybySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            referer: default_referer(),
            origin: default_origin(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_referer() -> String { DEFAULT_REFERER.to_string() }
fn default_origin() -> String { DEFAULT_ORIGIN.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_tol")]
    pub default_tol: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            default_tol: default_tol(),
        }
    }
}

fn default_tol() -> f64 { DEFAULT_TOLERANCE }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FLYBY__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FLYBY__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FLYBY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
