//! Scrollable ticket list component
//!
//! Displays the triaged tickets with selection highlighting, fuzzy match
//! highlighting, and scrolling support. Each ticket takes two lines.

use iocraft::prelude::*;
use jiff::Timestamp;

use crate::app::model::FilterTab;
use crate::formatting::{format_age, format_sla, split_highlights};
use crate::triage::MatchedTicket;
use crate::tui::theme::theme;

/// Terminal lines used by one ticket row
pub const ROW_HEIGHT: usize = 2;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    /// Triaged tickets to display
    pub tickets: Vec<MatchedTicket>,
    /// Index of the highlighted ticket
    pub cursor: usize,
    /// First visible ticket index
    pub scroll_offset: usize,
    /// Number of ticket rows that fit (not terminal lines)
    pub visible_rows: usize,
    pub has_focus: bool,
}

/// Scrollable ticket list with selection
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let now = Timestamp::now();

    let total = props.tickets.len();
    let start = props.scroll_offset.min(total);
    let end = (start + props.visible_rows).min(total);
    let has_more_above = start > 0;
    let has_more_below = end < total;
    let visible: Vec<MatchedTicket> = props.tickets[start..end].to_vec();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            overflow: Overflow::Hidden,
        ) {
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(content: format!("  {} more above", start), color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })

            #(visible.into_iter().enumerate().map(|(i, matched)| {
                let is_selected = start + i == props.cursor;
                element! {
                    TicketRow(
                        ticket: Some(matched),
                        is_selected: is_selected,
                        now: Some(now),
                    )
                }
            }))

            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(content: format!("  {} more below", total - end), color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    pub ticket: Option<MatchedTicket>,
    pub is_selected: bool,
    /// Reference time for age and SLA
    pub now: Option<Timestamp>,
}

/// Two-line ticket row: id, priority, subject and confidence, then customer
/// details and SLA
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(matched) = props.ticket.clone() else {
        return element! { View(height: 2) };
    };
    let ticket = matched.ticket;
    let now = props.now.unwrap_or_else(Timestamp::now);

    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let indicator = if props.is_selected { ">" } else { " " };

    let segments = split_highlights(&ticket.subject, &matched.subject_indices);
    let sla = format_sla(&ticket, now);
    let sla_color = if ticket.is_sla_breached(now) {
        theme.priority_critical
    } else {
        theme.text_dimmed
    };
    let churn = if ticket.is_high_churn_risk() {
        format!("  churn {}", ticket.customer.churn_risk)
    } else {
        String::new()
    };
    let details = format!(
        "{} · {} · {} · {}{}",
        ticket.customer.name,
        ticket.customer.tier,
        ticket.sentiment,
        format_age(ticket.received_at, now),
        churn,
    );

    element! {
        View(
            height: 2,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(height: 1, flex_direction: FlexDirection::Row) {
                View(width: 2, flex_shrink: 0.0) {
                    Text(content: indicator, color: text_color)
                }
                View(width: 8, flex_shrink: 0.0) {
                    Text(
                        content: ticket.id.clone(),
                        color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                    )
                }
                View(width: 10, flex_shrink: 0.0) {
                    Text(
                        content: format!("[{}]", ticket.priority),
                        color: if props.is_selected { theme.highlight_text } else { theme.priority_color(ticket.priority) },
                    )
                }
                View(flex_grow: 1.0, flex_direction: FlexDirection::Row, overflow: Overflow::Hidden) {
                    #(segments.into_iter().map(|(segment, is_match)| element! {
                        Text(
                            content: segment,
                            color: if is_match { theme.search_match } else { text_color },
                            weight: if is_match { Weight::Bold } else { Weight::Normal },
                        )
                    }))
                }
                View(width: 6, flex_shrink: 0.0, justify_content: JustifyContent::End) {
                    Text(
                        content: format!("{}", ticket.ai_confidence),
                        color: theme.confidence_color(ticket.ai_confidence),
                    )
                }
            }
            View(height: 1, flex_direction: FlexDirection::Row, padding_left: 2) {
                View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(content: details, color: if props.is_selected { theme.highlight_text } else { theme.text_dimmed })
                }
                View(flex_shrink: 0.0, padding_left: 1) {
                    Text(content: format!("SLA {}", sla), color: sla_color)
                }
            }
        }
    }
}

#[derive(Default, Props)]
pub struct FilterTabsProps {
    pub tabs: Vec<FilterTab>,
}

/// Bucket tabs with ticket counts, e.g. "Focus (2)"
#[component]
pub fn FilterTabs(props: &FilterTabsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            gap: 2,
        ) {
            #(props.tabs.iter().map(|tab| element! {
                Text(
                    content: format!("{} ({})", tab.label, tab.count),
                    color: if tab.is_active { theme.border_focused } else { theme.text_dimmed },
                    weight: if tab.is_active { Weight::Bold } else { Weight::Normal },
                )
            }))
        }
    }
}

/// How many ticket rows fit in a list of `lines` terminal lines, keeping two
/// lines for the border and two for the scroll indicators
pub fn rows_for_height(lines: usize) -> usize {
    lines.saturating_sub(4) / ROW_HEIGHT
}
