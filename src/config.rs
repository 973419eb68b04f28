//! Top-level application configuration.
//!
//! Configuration is stored in `.smarthelp/config.yaml` and includes:
//! - AI service credentials, model and timeouts
//! - Inbox automation settings
//! - The support team roster shown on the Team screen
//! - An optional log file used while the fullscreen inbox is running

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmartHelpError};
use crate::types::Percent;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the AI credential, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: [&str; 8] = [
    "ai.api_key",
    "ai.model",
    "ai.base_url",
    "ai.timeout",
    "ai.connect_timeout",
    "automation.auto_draft",
    "automation.escalation_threshold",
    "log_file",
];

/// Returns the root SmartHelp directory path.
///
/// Resolution order:
/// 1. `SMARTHELP_ROOT` environment variable (if set)
/// 2. Current working directory + `.smarthelp`
pub fn smarthelp_root() -> PathBuf {
    if let Ok(root) = env::var("SMARTHELP_ROOT")
        && !root.is_empty()
    {
        PathBuf::from(root)
    } else {
        PathBuf::from(".smarthelp")
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// AI service settings
    #[serde(default)]
    pub ai: AiConfig,

    /// Inbox automation
    #[serde(default, skip_serializing_if = "AutomationConfig::is_default")]
    pub automation: AutomationConfig,

    /// Support agents listed on the Team screen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<TeamMember>,

    /// Where to write logs while the fullscreen inbox owns the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// AI service configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds (default: 60)
    #[serde(default = "default_timeout", deserialize_with = "positive_seconds")]
    pub timeout: u64,

    /// Connection timeout in seconds (default: 30)
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "positive_seconds"
    )]
    pub connect_timeout: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    30
}

/// A zero timeout would fail every request before it is sent
fn positive_seconds<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    if secs == 0 {
        return Err(serde::de::Error::custom(
            "timeout must be a positive number of seconds",
        ));
    }
    Ok(secs)
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Inbox automation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Request a draft when a ticket without one is opened (default: true)
    #[serde(default = "default_auto_draft")]
    pub auto_draft: bool,

    /// Tickets whose AI confidence is below this get an escalation hint
    #[serde(default = "default_escalation_threshold")]
    pub escalation_threshold: Percent,
}

fn default_auto_draft() -> bool {
    true
}

fn default_escalation_threshold() -> Percent {
    Percent::clamped(80)
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            auto_draft: default_auto_draft(),
            escalation_threshold: default_escalation_threshold(),
        }
    }
}

impl AutomationConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A support agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        smarthelp_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            SmartHelpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SmartHelpError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            SmartHelpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only: the file may hold the API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, permissions).map_err(|e| {
                SmartHelpError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the AI API key from the environment or the config file
    pub fn api_key(&self) -> Option<String> {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = env::var(var)
                && !key.is_empty()
            {
                return Some(key);
            }
        }

        self.ai.api_key.clone().filter(|k| !k.is_empty())
    }

    /// Where the active API key comes from, for display
    pub fn api_key_source(&self) -> Option<String> {
        for var in API_KEY_ENV_VARS {
            if env::var(var).is_ok_and(|k| !k.is_empty()) {
                return Some(format!("env:{var}"));
            }
        }
        self.ai
            .api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .map(|_| "config".to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.ai.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.ai.connect_timeout)
    }

    /// Read a value by dotted key. Sensitive values are masked.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "ai.api_key" => self.ai.api_key.as_deref().map(mask_sensitive_value),
            "ai.model" => Some(self.ai.model.clone()),
            "ai.base_url" => Some(self.ai.base_url.clone()),
            "ai.timeout" => Some(self.ai.timeout.to_string()),
            "ai.connect_timeout" => Some(self.ai.connect_timeout.to_string()),
            "automation.auto_draft" => Some(self.automation.auto_draft.to_string()),
            "automation.escalation_threshold" => {
                Some(self.automation.escalation_threshold.value().to_string())
            }
            "log_file" => self.log_file.as_ref().map(|p| p.display().to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a value by dotted key, validating it for the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ai.api_key" => self.ai.api_key = Some(value.to_string()),
            "ai.model" => self.ai.model = non_empty(key, value)?,
            "ai.base_url" => {
                let url = non_empty(key, value)?;
                self.ai.base_url = url.trim_end_matches('/').to_string();
            }
            "ai.timeout" => self.ai.timeout = parse_seconds(key, value)?,
            "ai.connect_timeout" => self.ai.connect_timeout = parse_seconds(key, value)?,
            "automation.auto_draft" => {
                self.automation.auto_draft = value.parse::<bool>().map_err(|_| {
                    SmartHelpError::Config(format!(
                        "invalid value '{value}' for {key}. Expected: true or false"
                    ))
                })?;
            }
            "automation.escalation_threshold" => {
                let raw = value.parse::<u8>().map_err(|_| {
                    SmartHelpError::Config(format!(
                        "invalid value '{value}' for {key}. Expected a number from 0 to 100"
                    ))
                })?;
                self.automation.escalation_threshold = Percent::new(raw)?;
            }
            "log_file" => self.log_file = Some(PathBuf::from(non_empty(key, value)?)),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Every known key with its display value, for `config show` and the
    /// settings screen. The API key shows where the effective key comes from.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .map(|&key| {
                let value = if key == "ai.api_key" {
                    let masked = self.api_key().as_deref().map(mask_sensitive_value);
                    match (masked, self.api_key_source()) {
                        (Some(masked), Some(source)) => format!("{masked} ({source})"),
                        _ => "(not set)".to_string(),
                    }
                } else {
                    self.get(key)
                        .ok()
                        .flatten()
                        .unwrap_or_else(|| "(not set)".to_string())
                };
                (key, value)
            })
            .collect()
    }
}

fn unknown_key(key: &str) -> SmartHelpError {
    SmartHelpError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SmartHelpError::Config(format!("{key} cannot be empty")));
    }
    Ok(value.to_string())
}

fn parse_seconds(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(SmartHelpError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive number of seconds"
        ))),
    }
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}
