//! Tracing subscriber setup.
//!
//! Filtering follows `SMARTHELP_LOG` (an `EnvFilter` directive string) and
//! defaults to warnings. Line-oriented commands log to stderr. The inbox owns
//! the terminal, so there logs go to the configured file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SmartHelpError};

pub const LOG_ENV_VAR: &str = "SMARTHELP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr, for CLI commands
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| SmartHelpError::Other(format!("failed to initialize logging: {e}")))
}

/// Log to a file while the fullscreen inbox is running.
///
/// Without a file nothing is installed and events are discarded.
pub fn init_for_tui(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| SmartHelpError::Other(format!("failed to initialize logging: {e}")))
}
