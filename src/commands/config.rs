//! Configuration commands for managing SmartHelp settings.
//!
//! - `config show`: Display the effective configuration
//! - `config get`: Print one value
//! - `config set`: Set and save one value

use owo_colors::OwoColorize;
use serde_json::{Map, Value, json};

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let entries = config.entries();

    let mut values = Map::new();
    for (key, value) in &entries {
        values.insert((*key).to_string(), Value::String(value.clone()));
    }
    let json_output = json!({
        "values": values,
        "ai_key_source": config.api_key_source(),
        "team_size": config.team.len(),
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    for (key, value) in &entries {
        let shown = if value == "(not set)" {
            value.dimmed().to_string()
        } else {
            value.clone()
        };
        text.push_str(&format!("  {}: {}\n", key.cyan(), shown));
    }
    text.push_str(&format!("  {}: {} member(s)\n\n", "team".cyan(), config.team.len()));
    text.push_str(
        &format!("Config file: {}", Config::config_path().display())
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json_output).with_text(text).print(output_json)
}

/// Get a configuration value (the API key is masked)
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let json_output = json!({
        "key": key,
        "value": value,
    });
    let text = value.clone().unwrap_or_else(|| "(not set)".to_string());

    CommandOutput::new(json_output).with_text(text).print(output_json)
}

/// Set a configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::info!(key, "config value updated");

    let shown = config.get(key)?.unwrap_or_default();
    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    });
    let text = format!("Set {} to {}", key.cyan(), shown);

    CommandOutput::new(json_output).with_text(text).print(output_json)
}
