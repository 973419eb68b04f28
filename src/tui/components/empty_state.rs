//! Empty state component
//!
//! Displays a message when the current inbox bucket has no tickets.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::InboxFilter;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Focus bucket is empty
    #[default]
    AllCaughtUp,
    /// Review bucket is empty
    AiConfident,
    /// Escalated bucket is empty
    NoEscalations,
    /// Snoozed bucket is empty
    NothingSnoozed,
    /// No tickets match the search
    NoSearchResults,
}

impl EmptyStateKind {
    pub fn for_filter(filter: InboxFilter) -> Self {
        match filter {
            InboxFilter::Focus => EmptyStateKind::AllCaughtUp,
            InboxFilter::Review => EmptyStateKind::AiConfident,
            InboxFilter::Escalated => EmptyStateKind::NoEscalations,
            InboxFilter::Snoozed => EmptyStateKind::NothingSnoozed,
        }
    }

    /// Icon, title and message
    pub fn text(self) -> (&'static str, &'static str, &'static str) {
        match self {
            EmptyStateKind::AllCaughtUp => (
                "✓",
                "You're all caught up!",
                "No high-priority tickets need your attention right now. Great job keeping the queue clear.",
            ),
            EmptyStateKind::AiConfident => (
                "i",
                "AI is confident",
                "There are no low-confidence predictions requiring human review at the moment.",
            ),
            EmptyStateKind::NoEscalations => (
                "!",
                "No Active Escalations",
                "There are no tickets currently routed to L2/L3 support tiers.",
            ),
            EmptyStateKind::NothingSnoozed => (
                "z",
                "Empty Snooze List",
                "No tickets are waiting for follow-up.",
            ),
            EmptyStateKind::NoSearchResults => (
                "?",
                "No Results",
                "No tickets in this bucket match your search.",
            ),
        }
    }
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Search query (for NoSearchResults)
    pub search_query: Option<String>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, message) = props.kind.text();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(props.search_query.as_ref().filter(|_| props.kind == EmptyStateKind::NoSearchResults).map(|query| {
                element! {
                    View(margin_top: 1) {
                        Text(
                            content: format!("Search: \"{}\"  (Esc to clear)", query),
                            color: theme.search_match,
                        )
                    }
                }
            }))
        }
    }
}
