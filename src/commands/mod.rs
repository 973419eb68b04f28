mod analyze;
mod config;
mod draft;
mod inbox;
mod ls;
mod show;

pub use analyze::cmd_analyze;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use draft::cmd_draft;
pub use inbox::cmd_inbox;
pub use ls::cmd_ls;
pub use show::cmd_show;

use owo_colors::OwoColorize;
use serde_json::{Value, json};

use crate::ai::AiClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::TicketStore;
use crate::types::{Priority, Ticket, TicketStatus};

/// Output of a command: JSON always, human text optionally
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, otherwise the text (or JSON when no text
    /// was provided)
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Minimal ticket representation for JSON lists
pub fn ticket_minimal_json(ticket: &Ticket) -> Value {
    json!({
        "id": ticket.id,
        "subject": ticket.subject,
        "status": ticket.status.to_string(),
        "priority": ticket.priority.to_string(),
        "aiConfidence": ticket.ai_confidence.value(),
        "customer": ticket.customer.name,
    })
}

/// Load config and build the assistant the way every AI command does
pub(crate) fn load_ai_client() -> Result<(Config, AiClient)> {
    let config = Config::load()?;
    let ai = AiClient::from_config(&config)?;
    Ok((config, ai))
}

/// The ticket dataset commands operate on
pub(crate) fn load_store() -> TicketStore {
    TicketStore::seeded()
}

pub(crate) fn colored_status(status: TicketStatus) -> String {
    let text = status.to_string();
    match status {
        TicketStatus::Open => text.yellow().to_string(),
        TicketStatus::Pending => text.dimmed().to_string(),
        TicketStatus::Resolved => text.green().to_string(),
        TicketStatus::Escalated => text.red().to_string(),
    }
}

pub(crate) fn colored_priority(priority: Priority) -> String {
    let text = priority.to_string();
    match priority {
        Priority::Critical => text.red().bold().to_string(),
        Priority::High => text.yellow().to_string(),
        _ => text,
    }
}
