//! Formatting utilities for ticket display
//!
//! Provides a central location for the time, money and text formatting shared
//! by the CLI tables and the TUI.

use jiff::Timestamp;

use crate::types::Ticket;

/// Format how long ago a ticket arrived, relative to `now`
///
/// # Examples
///
/// ```
/// use jiff::{SignedDuration, Timestamp};
/// use smarthelp::formatting::format_age;
///
/// let now = Timestamp::UNIX_EPOCH + SignedDuration::from_hours(30);
/// let received = now - SignedDuration::from_mins(45);
/// assert_eq!(format_age(received, now), "45m ago");
/// ```
pub fn format_age(received_at: Timestamp, now: Timestamp) -> String {
    let minutes = now
        .as_second()
        .saturating_sub(received_at.as_second())
        .max(0)
        / 60;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Short SLA status: "BREACHED" or the time left, e.g. "45m" or "3h 10m"
pub fn format_sla(ticket: &Ticket, now: Timestamp) -> String {
    if ticket.is_sla_breached(now) {
        return "BREACHED".to_string();
    }

    let minutes = ticket.minutes_until_sla(now);
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Format a whole-dollar amount with thousands separators
pub fn format_ltv(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Split text into runs of (segment, is_match) from fuzzy match char indices
///
/// Indices past the end of the text are ignored.
pub fn split_highlights(text: &str, indices: &[usize]) -> Vec<(String, bool)> {
    let mut segments: Vec<(String, bool)> = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let is_match = indices.contains(&i);
        match segments.last_mut() {
            Some((segment, matched)) if *matched == is_match => segment.push(c),
            _ => segments.push((c.to_string(), is_match)),
        }
    }

    segments
}
