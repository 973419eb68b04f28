use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, load_ai_client, load_store};
use crate::ai::AiAssistant;
use crate::error::Result;
use crate::types::Tone;

/// Generate a reply draft for a ticket and print it
pub async fn cmd_draft(
    id: &str,
    tone: Tone,
    instruction: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let store = load_store();
    let ticket = store.find(id)?;
    let (_config, ai) = load_ai_client()?;

    tracing::info!(ticket = %ticket.id, %tone, mode = ai.label(), "generating draft");
    let draft = ai.generate_draft(ticket, tone, instruction).await;

    let json_output = json!({
        "id": ticket.id,
        "tone": tone.to_string(),
        "instruction": instruction,
        "mode": ai.label(),
        "draft": draft,
    });

    let text = format!(
        "{} {}\n\n{}",
        format!("Draft for {}", ticket.id).cyan().bold(),
        format!("({tone}, {} AI)", ai.label()).dimmed(),
        draft
    );

    CommandOutput::new(json_output).with_text(text).print(output_json)
}
