//! Mock data builders for creating test tickets.
//!
//! Timestamps are relative to a fixed reference instant so tests do not
//! depend on the wall clock.

use jiff::{SignedDuration, Timestamp};
use smarthelp::store::{TicketStore, seed_tickets};
use smarthelp::types::{
    Customer, Percent, Priority, Sentiment, Ticket, TicketStatus, Tier,
};

/// Reference "now" used by builders and the seeded store
pub fn reference_now() -> Timestamp {
    Timestamp::UNIX_EPOCH + SignedDuration::from_hours(24 * 365)
}

/// The demo dataset stamped relative to [`reference_now`]
pub fn seeded_store() -> TicketStore {
    TicketStore::new(seed_tickets(reference_now()))
}

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create an open, medium priority ticket with 95% confidence
    pub fn new(id: &str) -> Self {
        let now = reference_now();
        Self {
            ticket: Ticket {
                id: id.to_string(),
                customer_id: "C-100".to_string(),
                customer: Customer {
                    id: "C-100".to_string(),
                    name: "Test Customer".to_string(),
                    email: "test@example.com".to_string(),
                    tier: Tier::Pro,
                    ltv: 1_000,
                    avatar_url: String::new(),
                    churn_risk: Percent::clamped(10),
                },
                subject: format!("Subject of {id}"),
                description: "Something is not working.".to_string(),
                received_at: now - SignedDuration::from_mins(10),
                status: TicketStatus::Open,
                priority: Priority::Medium,
                ai_confidence: Percent::clamped(95),
                ai_summary: "Summary".to_string(),
                ai_detected_issue: "General".to_string(),
                ai_reasoning: vec!["Reason".to_string()],
                suggested_response: String::new(),
                sla_breach_at: now + SignedDuration::from_hours(4),
                sentiment: Sentiment::Neutral,
                tags: vec![],
            },
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.ticket.subject = subject.to_string();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn confidence(mut self, confidence: u8) -> Self {
        self.ticket.ai_confidence = Percent::clamped(confidence);
        self
    }

    pub fn customer_name(mut self, name: &str) -> Self {
        self.ticket.customer.name = name.to_string();
        self
    }

    pub fn suggested_response(mut self, response: &str) -> Self {
        self.ticket.suggested_response = response.to_string();
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Shorthand for a default open ticket
pub fn mock_ticket(id: &str) -> Ticket {
    TicketBuilder::new(id).build()
}
