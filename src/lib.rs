pub mod ai;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod store;
pub mod triage;
pub mod tui;
pub mod types;

pub use ai::{AiAssistant, AiClient, LiveAiClient, MockAiClient};
pub use app::{AiRequest, AppAction, AppState, InboxController, reduce};
pub use config::Config;
pub use error::{Result, SmartHelpError};
pub use store::TicketStore;
pub use triage::{MatchedTicket, bucket_counts, filter_tickets, matches_filter, triage};
pub use types::{
    Customer, EscalationAnalysis, FOCUS_CONFIDENCE_THRESHOLD, InboxFilter, Percent, Priority,
    Screen, Sentiment, Ticket, TicketStatus, Tier, Tone,
};
