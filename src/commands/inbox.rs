//! Support inbox command (`smarthelp inbox`)
//!
//! Launches the fullscreen triage inbox with AI drafting and escalation.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::ai::AiClient;
use crate::app::AppState;
use crate::config::Config;
use crate::error::{Result, SmartHelpError};
use crate::logging;
use crate::store::TicketStore;
use crate::tui::SupportInbox;
use crate::types::InboxFilter;

/// Launch the support inbox TUI
pub async fn cmd_inbox(filter: Option<InboxFilter>) -> Result<()> {
    let config = Config::load()?;
    logging::init_for_tui(config.log_file.as_deref())?;

    let ai = Arc::new(AiClient::from_config(&config)?);
    let mut initial = AppState::with_config(TicketStore::seeded(), &config);
    if let Some(filter) = filter {
        initial.filter = filter;
    }
    let team = config.team.clone();
    let settings = config.entries();

    tracing::info!(tickets = initial.store.len(), mode = ai.label(), "starting inbox");

    element!(SupportInbox(
        initial: Some(initial),
        ai: Some(ai),
        team: team,
        settings: settings,
    ))
    .fullscreen()
    .await
    .map_err(|e| SmartHelpError::Other(format!("TUI error: {}", e)))
}
