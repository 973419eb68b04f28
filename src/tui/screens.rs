//! Secondary screens: performance dashboard, team roster and settings

use iocraft::prelude::*;

use crate::app::DashboardStats;
use crate::config::TeamMember;
use crate::tui::theme::theme;
use crate::types::InboxFilter;

#[derive(Default, Props)]
pub struct DashboardScreenProps {
    pub stats: Option<DashboardStats>,
}

/// Live figures computed from the ticket store
#[component]
pub fn DashboardScreen(props: &DashboardScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(stats) = props.stats.clone() else {
        return element! { View() };
    };

    let confidence = stats
        .average_confidence
        .map(|c| format!("{:.1}%", c))
        .unwrap_or_else(|| "-".to_string());
    let churn = if stats.churn_risk_customers.is_empty() {
        "none".to_string()
    } else {
        stats.churn_risk_customers.join(", ")
    };

    let cards: Vec<(String, String, Color)> = vec![
        ("Open tickets".to_string(), (stats.total - stats.resolved).to_string(), theme.text),
        ("Resolved".to_string(), stats.resolved.to_string(), theme.status_resolved),
        ("Avg AI confidence".to_string(), confidence, theme.ai_accent),
        ("SLA breached".to_string(), stats.sla_breached.to_string(), theme.priority_critical),
        ("SLA due within 1h".to_string(), stats.sla_at_risk.to_string(), theme.priority_high),
        ("Critical open".to_string(), stats.critical_open.to_string(), theme.priority_critical),
    ];

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding: 1,
            gap: 1,
        ) {
            Text(content: "Performance", color: theme.text, weight: Weight::Bold)

            View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, gap: 1) {
                #(cards.into_iter().map(|(label, value, color)| element! {
                    View(
                        width: 24,
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: theme.border,
                        padding_left: 1,
                    ) {
                        Text(content: label, color: theme.text_dimmed)
                        Text(content: value, color: color, weight: Weight::Bold)
                    }
                }))
            }

            View(flex_direction: FlexDirection::Column) {
                Text(content: "Triage buckets", color: theme.text, weight: Weight::Bold)
                #(InboxFilter::ALL.iter().map(|filter| element! {
                    View(flex_direction: FlexDirection::Row) {
                        View(width: 12) {
                            Text(content: filter.label(), color: theme.text_dimmed)
                        }
                        Text(content: stats.buckets.get(*filter).to_string(), color: theme.text)
                    }
                }))
            }

            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "Churn risk:", color: theme.text_dimmed)
                Text(content: churn, color: theme.priority_high)
            }
        }
    }
}

#[derive(Default, Props)]
pub struct TeamScreenProps {
    pub team: Vec<TeamMember>,
}

/// Support agents from configuration
#[component]
pub fn TeamScreen(props: &TeamScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.team.is_empty() {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No team members configured", color: theme.text, weight: Weight::Bold)
                Text(content: "Add a `team:` list to .smarthelp/config.yaml", color: theme.text_dimmed)
            }
        };
    }

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding: 1,
        ) {
            Text(content: format!("Team ({})", props.team.len()), color: theme.text, weight: Weight::Bold)
            #(props.team.iter().map(|member| element! {
                View(flex_direction: FlexDirection::Row, height: 1) {
                    View(width: 24) {
                        Text(content: member.name.clone(), color: theme.text)
                    }
                    View(width: 24) {
                        Text(content: member.role.clone(), color: theme.text_dimmed)
                    }
                    Text(content: member.skills.join(", "), color: theme.ai_accent)
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct SettingsScreenProps {
    /// Config key and display value pairs
    pub entries: Vec<(&'static str, String)>,
    pub ai_mode: &'static str,
}

/// Effective configuration, read-only
#[component]
pub fn SettingsScreen(props: &SettingsScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding: 1,
        ) {
            Text(content: "Settings", color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, height: 1, margin_bottom: 1) {
                Text(content: "AI assistant: ", color: theme.text_dimmed)
                Text(content: props.ai_mode, color: theme.ai_accent)
            }
            #(props.entries.iter().map(|(key, value)| element! {
                View(flex_direction: FlexDirection::Row, height: 1) {
                    View(width: 34) {
                        Text(content: *key, color: theme.id_color)
                    }
                    Text(content: value.clone(), color: theme.text)
                }
            }))
            View(margin_top: 1) {
                Text(content: "Change values with `smarthelp config set <key> <value>`", color: theme.text_dimmed)
            }
        }
    }
}
