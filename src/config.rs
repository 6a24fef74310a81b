use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use crate::error::{MessagePostError, Result};

/// Set by the Lambda execution environment; its presence selects handler mode.
pub const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// Path to an optional TOML settings file.
pub const SETTINGS_ENV: &str = "MESSAGE_POST_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One-shot run driven by command-line arguments.
    Local,
    /// Long-lived API Gateway handler.
    Lambda,
}

impl Mode {
    pub fn detect(indicator: Option<&OsStr>) -> Mode {
        match indicator {
            Some(value) if !value.is_empty() => Mode::Lambda,
            _ => Mode::Local,
        }
    }

    pub fn from_env() -> Mode {
        Mode::detect(std::env::var_os(LAMBDA_RUNTIME_ENV).as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content).map_err(|source| MessagePostError::Settings {
        path: path.display().to_string(),
        source,
    })?;

    // EnvFilter would read an unknown word as a target name and hide every event.
    if settings.log_level.parse::<LevelFilter>().is_err() {
        return Err(MessagePostError::InvalidLogLevel {
            path: path.display().to_string(),
            level: settings.log_level,
        });
    }
    Ok(settings)
}

/// Load settings from the file named by `MESSAGE_POST_CONFIG`, or defaults when unset.
pub fn load_settings() -> Result<Settings> {
    match std::env::var_os(SETTINGS_ENV) {
        Some(path) if !path.is_empty() => read_settings(Path::new(&path)),
        _ => Ok(Settings::default()),
    }
}
