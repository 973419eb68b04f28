//! Ticket detail screen component
//!
//! Shows the customer card, the original message and the AI analysis, with
//! either the draft reply panel or the escalation panel underneath.

use iocraft::prelude::*;
use jiff::Timestamp;

use super::text_editor::DraftEditor;
use crate::app::model::{DetailMode, DetailViewModel};
use crate::formatting::{format_age, format_ltv, format_sla};
use crate::tui::theme::theme;
use crate::types::Tone;

/// Props for the TicketDetail component
#[derive(Default, Props)]
pub struct TicketDetailProps {
    pub detail: Option<DetailViewModel>,
    /// Text bound to the draft editor
    pub draft_text: Option<State<String>>,
}

/// Ticket detail view showing customer, message, AI insight and reply
#[component]
pub fn TicketDetail(props: &TicketDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(detail) = props.detail.clone() else {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No ticket selected", color: theme.text_dimmed)
            }
        };
    };

    let now = Timestamp::now();
    let ticket = detail.ticket;
    let session = detail.session;
    let customer = ticket.customer.clone();

    let sla_color = if ticket.is_sla_breached(now) {
        theme.priority_critical
    } else {
        theme.text_dimmed
    };
    let churn_color = if ticket.is_high_churn_risk() {
        theme.priority_critical
    } else {
        theme.text
    };

    let bottom_panel = match session.mode {
        DetailMode::Escalating => element! {
            EscalationPanel(
                analyzing: session.is_analyzing(),
                reason: session.escalation.as_ref().map(|a| a.reason.clone()),
                recommended_team: session.escalation.as_ref().map(|a| a.recommended_team.clone()),
            )
        }
        .into_any(),
        DetailMode::Drafting => element! {
            DraftPanel(
                tone: session.tone,
                generating: session.is_generating(),
                editing: session.editing,
                draft_text: props.draft_text,
            )
        }
        .into_any(),
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
            overflow: Overflow::Hidden,
        ) {
            // Title bar
            View(
                width: 100pct,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
                flex_shrink: 0.0,
            ) {
                View(flex_direction: FlexDirection::Row, gap: 1, overflow: Overflow::Hidden) {
                    Text(content: ticket.id.clone(), color: theme.id_color, weight: Weight::Bold)
                    Text(content: ticket.subject.clone(), color: theme.text, weight: Weight::Bold)
                }
                View(flex_direction: FlexDirection::Row, gap: 2, flex_shrink: 0.0) {
                    Text(content: ticket.status.to_string(), color: theme.status_color(ticket.status))
                    Text(content: ticket.priority.to_string(), color: theme.priority_color(ticket.priority))
                    Text(content: format!("SLA {}", format_sla(&ticket, now)), color: sla_color)
                }
            }

            View(width: 100pct, flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                // Customer and message
                View(width: 50pct, flex_direction: FlexDirection::Column, padding: 1) {
                    Text(content: customer.name.clone(), color: theme.text, weight: Weight::Bold)
                    Text(content: customer.email.clone(), color: theme.text_dimmed)
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        Text(content: customer.tier.to_string(), color: theme.ai_accent)
                        Text(content: format!("LTV {}", format_ltv(customer.ltv)), color: theme.text)
                        Text(content: format!("Churn {}", customer.churn_risk), color: churn_color)
                    }
                    View(margin_top: 1, flex_direction: FlexDirection::Row, gap: 2) {
                        Text(content: format!("Received {}", format_age(ticket.received_at, now)), color: theme.text_dimmed)
                        Text(content: ticket.sentiment.to_string(), color: theme.sentiment_color(ticket.sentiment))
                    }
                    View(margin_top: 1) {
                        Text(content: ticket.description.clone(), color: theme.text)
                    }
                }

                // AI insight
                View(width: 50pct, flex_direction: FlexDirection::Column, padding: 1) {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: "AI Insight", color: theme.ai_accent, weight: Weight::Bold)
                        Text(
                            content: format!("{} confident", ticket.ai_confidence),
                            color: theme.confidence_color(ticket.ai_confidence),
                        )
                    }
                    Text(content: ticket.ai_detected_issue.clone(), color: theme.text, weight: Weight::Bold)
                    Text(content: ticket.ai_summary.clone(), color: theme.text)
                    View(margin_top: 1, flex_direction: FlexDirection::Column) {
                        #(ticket.ai_reasoning.iter().map(|step| element! {
                            Text(content: format!("• {}", step), color: theme.text_dimmed)
                        }))
                    }
                    #(if detail.suggest_escalation {
                        Some(element! {
                            View(margin_top: 1) {
                                Text(
                                    content: "Low confidence: consider escalating (e)",
                                    color: theme.confidence_low,
                                )
                            }
                        })
                    } else {
                        None
                    })
                }
            }

            View(
                width: 100pct,
                flex_grow: 1.0,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                #(bottom_panel)
            }
        }
    }
}

#[derive(Default, Props)]
pub struct DraftPanelProps {
    pub tone: Tone,
    pub generating: bool,
    pub editing: bool,
    pub draft_text: Option<State<String>>,
}

/// Tone selector plus the draft reply
#[component]
pub fn DraftPanel(props: &DraftPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            View(flex_direction: FlexDirection::Row, gap: 2, flex_shrink: 0.0) {
                Text(content: "Draft Reply", color: theme.ai_accent, weight: Weight::Bold)
                #(Tone::ALL.iter().map(|tone| {
                    let is_active = *tone == props.tone;
                    element! {
                        Text(
                            content: tone.to_string(),
                            color: if is_active { theme.border_focused } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
                #(if props.generating {
                    Some(element! { Text(content: "Generating...", color: theme.ai_accent) })
                } else {
                    None
                })
            }
            DraftEditor(value: props.draft_text, has_focus: props.editing && !props.generating)
        }
    }
}

#[derive(Default, Props)]
pub struct EscalationPanelProps {
    pub analyzing: bool,
    pub reason: Option<String>,
    pub recommended_team: Option<String>,
}

/// Escalation analysis and confirmation prompt
#[component]
pub fn EscalationPanel(props: &EscalationPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body = if props.analyzing {
        element! {
            View() {
                Text(content: "Analyzing ticket for escalation...", color: theme.ai_accent)
            }
        }
    } else {
        let reason = props.reason.clone().unwrap_or_default();
        let team = props.recommended_team.clone().unwrap_or_default();
        element! {
            View(flex_direction: FlexDirection::Column) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Recommended team:", color: theme.text_dimmed)
                    Text(content: team, color: theme.status_escalated, weight: Weight::Bold)
                }
                Text(content: reason, color: theme.text)
                View(margin_top: 1) {
                    Text(content: "Press Enter to escalate, Esc to cancel", color: theme.text_dimmed)
                }
            }
        }
    };

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            Text(content: "Escalate Ticket", color: theme.status_escalated, weight: Weight::Bold)
            #(body)
        }
    }
}
