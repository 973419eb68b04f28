use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartHelpError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid inbox filter '{0}' (expected focus, review, escalated or snoozed)")]
    InvalidFilter(String),

    #[error("invalid tone '{0}' (expected formal, empathetic or direct)")]
    InvalidTone(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("ticket '{id}' cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: String,
        to: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SmartHelpError>;
