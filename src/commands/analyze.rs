use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, load_ai_client, load_store};
use crate::ai::AiAssistant;
use crate::error::Result;

/// Run the escalation analysis for a ticket and print the recommendation
pub async fn cmd_analyze(id: &str, output_json: bool) -> Result<()> {
    let store = load_store();
    let ticket = store.find(id)?;
    let (_config, ai) = load_ai_client()?;

    tracing::info!(ticket = %ticket.id, mode = ai.label(), "analyzing escalation");
    let analysis = ai.analyze_escalation(ticket).await;

    let json_output = json!({
        "id": ticket.id,
        "mode": ai.label(),
        "reason": analysis.reason,
        "recommendedTeam": analysis.recommended_team,
    });

    let text = format!(
        "{} {}\n\n{} {}\n{}",
        format!("Escalation analysis for {}", ticket.id).cyan().bold(),
        format!("({} AI)", ai.label()).dimmed(),
        "Recommended team:".dimmed(),
        analysis.recommended_team.red().bold(),
        analysis.reason
    );

    CommandOutput::new(json_output).with_text(text).print(output_json)
}
