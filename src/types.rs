use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SmartHelpError;

/// Minimum AI confidence for an open ticket to land in the Focus bucket.
pub const FOCUS_CONFIDENCE_THRESHOLD: u8 = 90;

/// Churn risk at or above which a customer is flagged as at-risk.
pub const HIGH_CHURN_RISK: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    /// Snoozed
    Pending,
    Resolved,
    Escalated,
}

impl TicketStatus {
    /// Whether a ticket in this status may be moved to `next`.
    ///
    /// Nothing returns to OPEN and RESOLVED is final.
    pub fn can_transition_to(self, next: TicketStatus) -> bool {
        if self == next {
            return true;
        }
        match (self, next) {
            (TicketStatus::Resolved, _) => false,
            (_, TicketStatus::Open) => false,
            _ => true,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "OPEN"),
            TicketStatus::Pending => write!(f, "PENDING"),
            TicketStatus::Resolved => write!(f, "RESOLVED"),
            TicketStatus::Escalated => write!(f, "ESCALATED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "LOW"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
            Priority::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
    Angry,
}

impl Sentiment {
    pub fn is_negative(self) -> bool {
        matches!(self, Sentiment::Negative | Sentiment::Angry)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "POSITIVE"),
            Sentiment::Neutral => write!(f, "NEUTRAL"),
            Sentiment::Negative => write!(f, "NEGATIVE"),
            Sentiment::Angry => write!(f, "ANGRY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "FREE"),
            Tier::Pro => write!(f, "PRO"),
            Tier::Enterprise => write!(f, "ENTERPRISE"),
        }
    }
}

/// An integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> Result<Self, SmartHelpError> {
        if value > 100 {
            return Err(SmartHelpError::InvalidValue(format!(
                "percentage must be between 0 and 100, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Build a percentage, capping anything above 100
    pub fn clamped(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = SmartHelpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Triage bucket shown as a tab in the inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboxFilter {
    /// Open tickets the AI is confident about
    #[default]
    Focus,
    /// Open tickets that need a human look
    Review,
    Escalated,
    Snoozed,
}

impl InboxFilter {
    pub const ALL: [InboxFilter; 4] = [
        InboxFilter::Focus,
        InboxFilter::Review,
        InboxFilter::Escalated,
        InboxFilter::Snoozed,
    ];

    /// Human-readable tab label
    pub fn label(self) -> &'static str {
        match self {
            InboxFilter::Focus => "Focus",
            InboxFilter::Review => "Review",
            InboxFilter::Escalated => "Escalated",
            InboxFilter::Snoozed => "Snoozed",
        }
    }

    pub fn next(self) -> Self {
        match self {
            InboxFilter::Focus => InboxFilter::Review,
            InboxFilter::Review => InboxFilter::Escalated,
            InboxFilter::Escalated => InboxFilter::Snoozed,
            InboxFilter::Snoozed => InboxFilter::Focus,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            InboxFilter::Focus => InboxFilter::Snoozed,
            InboxFilter::Review => InboxFilter::Focus,
            InboxFilter::Escalated => InboxFilter::Review,
            InboxFilter::Snoozed => InboxFilter::Escalated,
        }
    }
}

impl fmt::Display for InboxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InboxFilter::Focus => write!(f, "FOCUS"),
            InboxFilter::Review => write!(f, "REVIEW"),
            InboxFilter::Escalated => write!(f, "ESCALATED"),
            InboxFilter::Snoozed => write!(f, "SNOOZED"),
        }
    }
}

impl FromStr for InboxFilter {
    type Err = SmartHelpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "focus" => Ok(InboxFilter::Focus),
            "review" => Ok(InboxFilter::Review),
            "escalated" => Ok(InboxFilter::Escalated),
            "snoozed" => Ok(InboxFilter::Snoozed),
            _ => Err(SmartHelpError::InvalidFilter(s.to_string())),
        }
    }
}

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Inbox,
    TicketDetail,
    Dashboard,
    Team,
    Settings,
}

impl Screen {
    /// Screens reachable from the navigation bar
    pub const NAVIGABLE: [Screen; 4] = [
        Screen::Inbox,
        Screen::Dashboard,
        Screen::Team,
        Screen::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Inbox => "Unified Inbox",
            Screen::TicketDetail => "Ticket",
            Screen::Dashboard => "Performance",
            Screen::Team => "Team",
            Screen::Settings => "Settings",
        }
    }
}

/// Writing tone requested for a draft reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tone {
    Formal,
    #[default]
    Empathetic,
    Direct,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Empathetic, Tone::Direct];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Formal => write!(f, "Formal"),
            Tone::Empathetic => write!(f, "Empathetic"),
            Tone::Direct => write!(f, "Direct"),
        }
    }
}

impl FromStr for Tone {
    type Err = SmartHelpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "empathetic" => Ok(Tone::Empathetic),
            "direct" => Ok(Tone::Direct),
            _ => Err(SmartHelpError::InvalidTone(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tier: Tier,
    /// Lifetime value in dollars
    pub ltv: u64,
    pub avatar_url: String,
    pub churn_risk: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub customer_id: String,
    pub customer: Customer,
    pub subject: String,
    pub description: String,
    pub received_at: Timestamp,
    pub status: TicketStatus,
    pub priority: Priority,

    pub ai_confidence: Percent,
    pub ai_summary: String,
    /// e.g. "Billing Dispute"
    pub ai_detected_issue: String,
    pub ai_reasoning: Vec<String>,
    pub suggested_response: String,
    pub sla_breach_at: Timestamp,
    pub sentiment: Sentiment,
    pub tags: Vec<String>,
}

impl Ticket {
    pub fn is_sla_breached(&self, now: Timestamp) -> bool {
        self.sla_breach_at <= now
    }

    /// Whole minutes left before the SLA is breached (negative once overdue)
    pub fn minutes_until_sla(&self, now: Timestamp) -> i64 {
        self.sla_breach_at.as_second().saturating_sub(now.as_second()) / 60
    }

    pub fn is_high_churn_risk(&self) -> bool {
        self.customer.churn_risk.value() >= HIGH_CHURN_RISK
    }

    pub fn is_focus_candidate(&self) -> bool {
        self.ai_confidence.value() >= FOCUS_CONFIDENCE_THRESHOLD
    }
}

/// Result of an AI escalation analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationAnalysis {
    pub reason: String,
    pub recommended_team: String,
}

impl EscalationAnalysis {
    pub fn new(reason: impl Into<String>, recommended_team: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            recommended_team: recommended_team.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_never_returns_to_open() {
        for status in [
            TicketStatus::Pending,
            TicketStatus::Resolved,
            TicketStatus::Escalated,
        ] {
            assert!(!status.can_transition_to(TicketStatus::Open));
        }
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::Resolved));
        assert!(TicketStatus::Pending.can_transition_to(TicketStatus::Escalated));
        assert!(!TicketStatus::Resolved.can_transition_to(TicketStatus::Escalated));
    }

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).unwrap().value(), 0);
        assert_eq!(Percent::new(100).unwrap().value(), 100);
        assert!(Percent::new(101).is_err());
    }

    #[test]
    fn test_percent_rejects_out_of_range_json() {
        let ok: Percent = serde_json::from_str("94").unwrap();
        assert_eq!(ok.value(), 94);
        assert!(serde_json::from_str::<Percent>("150").is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TicketStatus::Escalated).unwrap();
        assert_eq!(json, "\"ESCALATED\"");
        let parsed: TicketStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, TicketStatus::Pending);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("focus".parse::<InboxFilter>().unwrap(), InboxFilter::Focus);
        assert_eq!("SNOOZED".parse::<InboxFilter>().unwrap(), InboxFilter::Snoozed);
        assert!("all".parse::<InboxFilter>().is_err());
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = InboxFilter::Focus;
        for _ in 0..InboxFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, InboxFilter::Focus);
        assert_eq!(InboxFilter::Focus.prev(), InboxFilter::Snoozed);
    }

    #[test]
    fn test_tone_parse_and_display() {
        assert_eq!("direct".parse::<Tone>().unwrap(), Tone::Direct);
        assert_eq!(Tone::Empathetic.to_string(), "Empathetic");
        assert!("rude".parse::<Tone>().is_err());
    }
}
