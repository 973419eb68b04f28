use jiff::Timestamp;
use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, colored_priority, colored_status, load_store};
use crate::error::Result;
use crate::formatting::{format_age, format_ltv, format_sla};

/// Display a ticket with its customer and AI analysis
pub async fn cmd_show(id: &str, output_json: bool) -> Result<()> {
    let store = load_store();
    let ticket = store.find(id)?;
    let now = Timestamp::now();

    let mut json_output = serde_json::to_value(ticket)?;
    if let Some(obj) = json_output.as_object_mut() {
        obj.insert("slaBreached".to_string(), json!(ticket.is_sla_breached(now)));
        obj.insert(
            "minutesUntilSla".to_string(),
            json!(ticket.minutes_until_sla(now)),
        );
    }

    let customer = &ticket.customer;
    let mut text = String::new();
    text.push_str(&format!(
        "{} {}\n",
        ticket.id.cyan().bold(),
        ticket.subject.bold()
    ));
    text.push_str(&format!(
        "{}  {}  SLA {}  received {}\n\n",
        colored_status(ticket.status),
        colored_priority(ticket.priority),
        format_sla(ticket, now),
        format_age(ticket.received_at, now),
    ));

    text.push_str(&format!("{}\n", "Customer".cyan()));
    text.push_str(&format!("  {} <{}>\n", customer.name, customer.email));
    text.push_str(&format!(
        "  {}  LTV {}  churn risk {}\n\n",
        customer.tier,
        format_ltv(customer.ltv),
        customer.churn_risk
    ));

    text.push_str(&format!("{}\n", "Message".cyan()));
    text.push_str(&format!("  {}\n\n", ticket.description));

    text.push_str(&format!(
        "{} {}\n",
        "AI Insight".cyan(),
        format!("({} confident, sentiment {})", ticket.ai_confidence, ticket.sentiment).dimmed()
    ));
    text.push_str(&format!("  {}\n", ticket.ai_detected_issue.bold()));
    text.push_str(&format!("  {}\n", ticket.ai_summary));
    for step in &ticket.ai_reasoning {
        text.push_str(&format!("  - {step}\n"));
    }

    if !ticket.suggested_response.trim().is_empty() {
        text.push_str(&format!("\n{}\n", "Suggested Response".cyan()));
        text.push_str(&ticket.suggested_response);
    }

    CommandOutput::new(json_output)
        .with_text(text.trim_end().to_string())
        .print(output_json)
}
