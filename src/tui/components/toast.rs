//! Transient notices shown above the footer after an inbox action

use iocraft::prelude::*;
use std::time::{Duration, Instant};

use crate::types::TicketStatus;

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl ToastLevel {
    fn glyph(self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "x",
            ToastLevel::Success => "✓",
        }
    }

    fn color(self) -> Color {
        match self {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

impl Toast {
    fn at_level(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::at_level(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::at_level(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at_level(ToastLevel::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::at_level(ToastLevel::Success, message)
    }

    /// Confirmation after a ticket was moved to `status`
    pub fn status_changed(ticket_id: &str, status: TicketStatus) -> Self {
        let verb = match status {
            TicketStatus::Resolved => "resolved",
            TicketStatus::Escalated => "escalated",
            TicketStatus::Pending => "snoozed",
            TicketStatus::Open => "reopened",
        };
        Self::success(format!("{ticket_id} {verb}"))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_LIFETIME
    }

    pub fn color(&self) -> Color {
        self.level.color()
    }

    /// Message prefixed with the level glyph
    pub fn display_text(&self) -> String {
        format!("{} {}", self.level.glyph(), self.message)
    }
}

/// Toast bar, or nothing when there is no toast
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    let toast = toast.as_ref()?;
    Some(
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: toast.color(),
            ) {
                Text(content: toast.display_text(), color: toast.color(), weight: Weight::Bold)
            }
        }
        .into_any(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_changed_wording() {
        let toast = Toast::status_changed("T-1025", TicketStatus::Pending);
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.message, "T-1025 snoozed");
        assert_eq!(toast.display_text(), "✓ T-1025 snoozed");
    }

    #[test]
    fn test_colors_follow_level() {
        assert_eq!(Toast::error("bad").color(), Color::Red);
        assert_eq!(Toast::warning("hm").color(), Color::Yellow);
        assert_eq!(Toast::info("fyi").display_text(), "i fyi");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::warning("careful");
        assert!(!toast.is_expired(toast.shown_at));
        assert!(!toast.is_expired(toast.shown_at + TOAST_LIFETIME / 2));
        assert!(toast.is_expired(toast.shown_at + TOAST_LIFETIME));
    }
}
