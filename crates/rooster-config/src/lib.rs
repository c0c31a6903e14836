//! On-disk configuration for Rooster.
//!
//! A TOML file at the platform config directory, overlaid by `ROOSTER_*`
//! environment variables (`__` separates nested keys, e.g.
//! `ROOSTER_API__BASE_URL`), and translated into the runtime
//! [`rooster_core::AppConfig`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rooster_core::{ApiConfig, AppConfig, Backend, Room};

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "ROOSTER_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// CLI presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Data backend.
    #[serde(default)]
    pub api: Api,

    /// Schedule screen setup.
    #[serde(default)]
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Api {
    /// `"mock"` (fixture data) or `"http"`.
    #[serde(default = "default_backend")]
    pub backend: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Override for the mock backend's simulated latency. Zero disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_delay_ms: Option<u64>,

    /// Start the mock backend offline.
    #[serde(default)]
    pub offline: bool,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            mock_delay_ms: None,
            offline: false,
        }
    }
}

fn default_backend() -> String {
    "mock".into()
}
fn default_base_url() -> String {
    rooster_core::ApiConfig::default().base_url.to_string()
}
fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schedule {
    /// Initial selected day (`YYYY-MM-DD`). Today when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,

    /// Rooms offered by the room selector, in order.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            initial_date: None,
            rooms: default_rooms(),
        }
    }
}

fn default_rooms() -> Vec<Room> {
    AppConfig::default().rooms
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("app", "rooster", "rooster").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rooster");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Defaults, then the file at `path` (if present), then environment.
fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the full Config from `path` + environment. A missing file is
/// not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML at `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Runtime translation ─────────────────────────────────────────────

impl Config {
    /// Validate and translate into the runtime [`AppConfig`].
    pub fn to_app_config(&self) -> Result<AppConfig, ConfigError> {
        let base_url: url::Url = self
            .api
            .base_url
            .parse()
            .map_err(|e| invalid("api.base_url", format!("{e}: {}", self.api.base_url)))?;

        if self.api.timeout_ms == 0 {
            return Err(invalid("api.timeout_ms", "must be greater than zero"));
        }

        let backend = match self.api.backend.as_str() {
            "mock" => Backend::Mock {
                delay: self.api.mock_delay_ms.map(Duration::from_millis),
                offline: self.api.offline,
            },
            "http" => Backend::Http,
            other => {
                return Err(invalid(
                    "api.backend",
                    format!("expected 'mock' or 'http', got '{other}'"),
                ));
            }
        };

        if self.schedule.rooms.is_empty() {
            return Err(invalid("schedule.rooms", "at least one room is required"));
        }

        let initial_date = self
            .schedule
            .initial_date
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                    invalid(
                        "schedule.initial_date",
                        format!("{e}: '{raw}' (expected YYYY-MM-DD)"),
                    )
                })
            })
            .transpose()?;

        Ok(AppConfig {
            backend,
            api: ApiConfig {
                base_url,
                timeout: Duration::from_millis(self.api.timeout_ms),
            },
            rooms: self.schedule.rooms.clone(),
            initial_date,
        })
    }
}
