use std::io;

#[derive(Debug, thiserror::Error)]
pub enum MessagePostError {
    #[error("invalid json format: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Request body is missing")]
    MissingBody,

    #[error("Log sink failure: {0}")]
    Sink(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings error in {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid log_level in {path}: '{level}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel { path: String, level: String },

    #[error("Lambda runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, MessagePostError>;
