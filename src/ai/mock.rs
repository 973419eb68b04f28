use async_trait::async_trait;

use super::AiAssistant;
use super::prompt::{mock_draft, mock_escalation};
use crate::types::{EscalationAnalysis, Ticket, Tone};

/// Offline assistant used when no API key is configured.
///
/// Returns fixed, deterministic values and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAiClient;

#[async_trait]
impl AiAssistant for MockAiClient {
    async fn generate_draft(&self, ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String {
        mock_draft(ticket, tone, instruction)
    }

    async fn analyze_escalation(&self, _ticket: &Ticket) -> EscalationAnalysis {
        mock_escalation()
    }
}
