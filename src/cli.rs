use clap::{Parser, Subcommand};

use crate::types::{InboxFilter, Tone};

#[derive(Parser)]
#[command(name = "smarthelp")]
#[command(about = "Support inbox with AI triage, drafting and escalation")]
#[command(version)]
pub struct Cli {
    /// Defaults to `inbox`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive support inbox
    #[command(visible_alias = "i")]
    Inbox {
        /// Bucket to start in: focus, review, escalated, snoozed
        #[arg(short, long, value_parser = parse_filter)]
        filter: Option<InboxFilter>,
    },

    /// List tickets in a triage bucket
    Ls {
        /// Bucket: focus, review, escalated, snoozed (default: focus)
        #[arg(short, long, default_value = "focus", value_parser = parse_filter)]
        filter: InboxFilter,

        /// List every ticket regardless of bucket
        #[arg(short, long, conflicts_with = "filter")]
        all: bool,

        /// Fuzzy search over id, subject, customer and detected issue
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket with customer details and AI analysis
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID (can be partial, e.g. 1024)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a reply draft for a ticket
    Draft {
        /// Ticket ID (can be partial)
        id: String,

        /// Tone: formal, empathetic, direct (default: empathetic)
        #[arg(short, long, default_value = "empathetic", value_parser = parse_tone)]
        tone: Tone,

        /// Extra instruction for the assistant
        #[arg(short, long)]
        instruction: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the assistant which team a ticket should be escalated to
    Analyze {
        /// Ticket ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (e.g. ai.model, automation.auto_draft)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (e.g. ai.model, automation.auto_draft)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, Commands::Inbox { .. })
    }

    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_analyze, cmd_config_get, cmd_config_set, cmd_config_show, cmd_draft, cmd_inbox,
            cmd_ls, cmd_show,
        };

        match self {
            Commands::Inbox { filter } => cmd_inbox(filter).await,
            Commands::Ls {
                filter,
                all,
                search,
                json,
            } => cmd_ls(filter, all, search.as_deref(), json).await,
            Commands::Show { id, json } => cmd_show(&id, json).await,
            Commands::Draft {
                id,
                tone,
                instruction,
                json,
            } => cmd_draft(&id, tone, instruction.as_deref(), json).await,
            Commands::Analyze { id, json } => cmd_analyze(&id, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Inbox { filter: None }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_filter(s: &str) -> Result<InboxFilter, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "filter",
        &["focus", "review", "escalated", "snoozed"],
    )
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "tone",
        &["formal", "empathetic", "direct"],
    )
}
