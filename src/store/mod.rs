//! In-memory ticket store.
//!
//! Holds the ordered ticket list for the lifetime of the process. Tickets are
//! never removed; the only mutations are status transitions and draft edits.

pub mod seed;

use jiff::Timestamp;

use crate::error::{Result, SmartHelpError};
use crate::types::{Ticket, TicketStatus};

pub use seed::seed_tickets;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Store populated with the built-in dataset, timestamped relative to now
    pub fn seeded() -> Self {
        Self::new(seed_tickets(Timestamp::now()))
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Resolve a possibly partial ID to a ticket.
    ///
    /// Exact matches win, then case-insensitive matches, then a unique
    /// suffix match (so `1024` finds `T-1024`).
    pub fn find(&self, partial_id: &str) -> Result<&Ticket> {
        let needle = partial_id.trim();
        if let Some(ticket) = self.get(needle) {
            return Ok(ticket);
        }
        if let Some(ticket) = self
            .tickets
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(needle))
        {
            return Ok(ticket);
        }

        let lowered = needle.to_lowercase();
        let mut matches = self
            .tickets
            .iter()
            .filter(|t| !lowered.is_empty() && t.id.to_lowercase().ends_with(&lowered));
        match (matches.next(), matches.next()) {
            (Some(ticket), None) => Ok(ticket),
            (Some(_), Some(_)) => Err(SmartHelpError::Other(format!(
                "ambiguous ID '{needle}' matches multiple tickets"
            ))),
            _ => Err(SmartHelpError::TicketNotFound(needle.to_string())),
        }
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SmartHelpError::TicketNotFound(id.to_string()))
    }

    /// Move a ticket to a new status, returning the status it had before.
    pub fn set_status(&mut self, id: &str, status: TicketStatus) -> Result<TicketStatus> {
        let ticket = self.get_mut(id)?;
        let previous = ticket.status;
        if !previous.can_transition_to(status) {
            return Err(SmartHelpError::InvalidTransition {
                id: id.to_string(),
                from: previous.to_string(),
                to: status.to_string(),
            });
        }
        ticket.status = status;
        tracing::debug!(ticket = id, from = %previous, to = %status, "ticket status changed");
        Ok(previous)
    }

    pub fn set_suggested_response(&mut self, id: &str, draft: impl Into<String>) -> Result<()> {
        let ticket = self.get_mut(id)?;
        ticket.suggested_response = draft.into();
        Ok(())
    }
}
