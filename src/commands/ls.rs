use jiff::Timestamp;
use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, load_store, ticket_minimal_json};
use crate::error::Result;
use crate::formatting::{format_sla, truncate_string};
use crate::triage::{MatchedTicket, bucket_counts, search_tickets, triage};
use crate::types::InboxFilter;

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "AI")]
    confidence: String,
    #[tabled(rename = "SLA")]
    sla: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// List the tickets in one triage bucket (or all tickets), optionally
/// narrowed by a fuzzy search
pub async fn cmd_ls(
    filter: InboxFilter,
    all: bool,
    search: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let store = load_store();
    let query = search.unwrap_or("");

    let matched: Vec<MatchedTicket> = if all {
        let tickets: Vec<_> = store.tickets().iter().collect();
        search_tickets(&tickets, query)
    } else {
        triage(store.tickets(), filter, query)
    };
    tracing::debug!(%filter, all, query, count = matched.len(), "listing tickets");

    let counts = bucket_counts(store.tickets());
    let json_output = json!({
        "filter": if all { "ALL".to_string() } else { filter.to_string() },
        "search": search,
        "counts": {
            "focus": counts.focus,
            "review": counts.review,
            "escalated": counts.escalated,
            "snoozed": counts.snoozed,
        },
        "tickets": matched.iter().map(|m| ticket_minimal_json(&m.ticket)).collect::<Vec<_>>(),
    });

    let tabs = InboxFilter::ALL
        .iter()
        .map(|f| {
            let label = format!("{} ({})", f.label(), counts.get(*f));
            if !all && *f == filter {
                label.cyan().bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let text = if matched.is_empty() {
        format!("{tabs}\n\n{}", "No tickets.".dimmed())
    } else {
        let now = Timestamp::now();
        let rows: Vec<TicketRow> = matched
            .iter()
            .map(|m| {
                let t = &m.ticket;
                TicketRow {
                    id: t.id.clone(),
                    priority: t.priority.to_string(),
                    subject: truncate_string(&t.subject, 48),
                    customer: format!("{} ({})", t.customer.name, t.customer.tier),
                    confidence: t.ai_confidence.to_string(),
                    sla: format_sla(t, now),
                    status: t.status.to_string(),
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::modern());
        format!("{tabs}\n\n{table}")
    };

    CommandOutput::new(json_output).with_text(text).print(output_json)
}
