//! Prompt text and fixed fallback values for the AI assistant.

use crate::types::{EscalationAnalysis, Ticket, Tone};

pub const DEFAULT_INSTRUCTION: &str = "Be concise and helpful.";
pub const REGENERATE_INSTRUCTION: &str = "Rewrite this to be more concise.";

pub const DRAFT_EMPTY_FALLBACK: &str = "I'm having trouble generating a draft right now.";
pub const DRAFT_ERROR_FALLBACK: &str = "Error connecting to AI service.";

pub fn mock_escalation() -> EscalationAnalysis {
    EscalationAnalysis::new(
        "Complex technical issue involving production infrastructure.",
        "Level 3 - Engineering Support",
    )
}

pub fn failed_escalation() -> EscalationAnalysis {
    EscalationAnalysis::new("AI Analysis failed", "General Support")
}

/// Blank instructions count as no instruction
fn given(instruction: Option<&str>) -> Option<&str> {
    instruction.filter(|s| !s.trim().is_empty())
}

/// Deterministic draft returned when no AI credential is configured
pub fn mock_draft(ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String {
    format!(
        "[Mock AI ({tone})]: Based on your request to \"{}\", here is a draft...\n\nHi {},\n\nThank you for reaching out regarding {}. We are looking into it.",
        given(instruction).unwrap_or("reply"),
        ticket.customer.name,
        ticket.subject,
    )
}

pub fn draft_prompt(ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String {
    format!(
        "You are an expert customer support agent.\n\
         \n\
         Context:\n\
         Customer Name: {name}\n\
         Issue: {description}\n\
         Detected Issue Category: {issue}\n\
         Current Tier: {tier}\n\
         \n\
         Task: Write a response to the customer.\n\
         Tone: {tone}\n\
         Additional Instructions: {instruction}\n\
         \n\
         Return ONLY the email body text.\n",
        name = ticket.customer.name,
        description = ticket.description,
        issue = ticket.ai_detected_issue,
        tier = ticket.customer.tier,
        instruction = given(instruction).unwrap_or(DEFAULT_INSTRUCTION),
    )
}

pub fn escalation_prompt(ticket: &Ticket) -> String {
    format!(
        "Analyze this support ticket for escalation.\n\
         Ticket: {description}\n\
         Subject: {subject}\n\
         \n\
         Output JSON with format: {{ \"reason\": string, \"recommendedTeam\": string }}\n",
        description = ticket.description,
        subject = ticket.subject,
    )
}
