//! Theme system for TUI colors and styles
//!
//! Colors match the CLI output in `commands/mod.rs`.

use iocraft::prelude::Color;

use crate::types::{Percent, Priority, Sentiment, TicketStatus, FOCUS_CONFIDENCE_THRESHOLD};

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_open: Color,
    pub status_pending: Color,
    pub status_resolved: Color,
    pub status_escalated: Color,

    // Priority colors
    pub priority_critical: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // Sentiment colors
    pub sentiment_negative: Color,
    pub sentiment_positive: Color,
    pub sentiment_neutral: Color,

    // AI colors
    pub confidence_high: Color,
    pub confidence_low: Color,
    pub ai_accent: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_pending: GREY,
            status_resolved: Color::Green,
            status_escalated: Color::Magenta,

            priority_critical: Color::Red,
            priority_high: Color::Yellow,
            priority_default: GREY,

            sentiment_negative: Color::Red,
            sentiment_positive: Color::Green,
            sentiment_neutral: GREY,

            confidence_high: Color::Cyan,
            confidence_low: Color::Yellow,
            ai_accent: Color::Magenta,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::Pending => self.status_pending,
            TicketStatus::Resolved => self.status_resolved,
            TicketStatus::Escalated => self.status_escalated,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Critical => self.priority_critical,
            Priority::High => self.priority_high,
            _ => self.priority_default,
        }
    }

    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Angry | Sentiment::Negative => self.sentiment_negative,
            Sentiment::Positive => self.sentiment_positive,
            Sentiment::Neutral => self.sentiment_neutral,
        }
    }

    pub fn confidence_color(&self, confidence: Percent) -> Color {
        if confidence.value() >= FOCUS_CONFIDENCE_THRESHOLD {
            self.confidence_high
        } else {
            self.confidence_low
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
