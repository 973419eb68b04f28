//! AI assistance for drafting replies and recommending escalations.
//!
//! [`AiClient`] picks one strategy at startup: [`LiveAiClient`] when an API key
//! is configured, [`MockAiClient`] otherwise. Neither operation can fail at
//! this boundary; live failures come back as fixed fallback values.

pub mod gemini;
pub mod mock;
pub mod prompt;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::types::{EscalationAnalysis, Ticket, Tone};

pub use gemini::LiveAiClient;
pub use mock::MockAiClient;
pub use prompt::{
    DEFAULT_INSTRUCTION, DRAFT_EMPTY_FALLBACK, DRAFT_ERROR_FALLBACK, REGENERATE_INSTRUCTION,
};

#[async_trait]
pub trait AiAssistant: Send + Sync {
    /// Draft a reply to the ticket's customer in the given tone
    async fn generate_draft(&self, ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String;

    /// Recommend why and where the ticket should be escalated
    async fn analyze_escalation(&self, ticket: &Ticket) -> EscalationAnalysis;
}

#[derive(Debug)]
pub enum AiClient {
    Live(LiveAiClient),
    Mock(MockAiClient),
}

impl AiClient {
    /// Select the strategy from configuration.
    ///
    /// A missing key is not an error: it selects the mock and logs once here.
    pub fn from_config(config: &Config) -> Result<Self> {
        match LiveAiClient::from_config(config)? {
            Some(client) => {
                tracing::info!(model = client.model(), "using live AI assistant");
                Ok(AiClient::Live(client))
            }
            None => {
                tracing::warn!("no API key configured, using mock AI responses");
                Ok(AiClient::Mock(MockAiClient))
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, AiClient::Live(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiClient::Live(_) => "live",
            AiClient::Mock(_) => "mock",
        }
    }
}

#[async_trait]
impl AiAssistant for AiClient {
    async fn generate_draft(&self, ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String {
        match self {
            AiClient::Live(client) => client.generate_draft(ticket, tone, instruction).await,
            AiClient::Mock(client) => client.generate_draft(ticket, tone, instruction).await,
        }
    }

    async fn analyze_escalation(&self, ticket: &Ticket) -> EscalationAnalysis {
        match self {
            AiClient::Live(client) => client.analyze_escalation(ticket).await,
            AiClient::Mock(client) => client.analyze_escalation(ticket).await,
        }
    }
}
