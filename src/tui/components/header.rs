//! App header bar component
//!
//! Displays the application title, the screen tabs and the AI mode.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Screen;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// Screen currently shown
    pub active: Screen,
    /// Extra context after the title (e.g. the open ticket id)
    pub subtitle: Option<String>,
    /// "live" or "mock"
    pub ai_mode: Option<&'static str>,
}

/// App header bar with navigation tabs
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = match &props.subtitle {
        Some(sub) => format!("SmartHelp - {}", sub),
        None => "SmartHelp".to_string(),
    };

    // The detail screen belongs to the inbox tab
    let active_tab = if props.active == Screen::TicketDetail {
        Screen::Inbox
    } else {
        props.active
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: title, color: theme.text, weight: Weight::Bold)

                #(Screen::NAVIGABLE.iter().enumerate().map(|(i, screen)| {
                    let is_active = *screen == active_tab;
                    element! {
                        Text(
                            content: format!("{} {}", i + 1, screen.label()),
                            color: if is_active { theme.highlight_text } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }

            #(props.ai_mode.map(|mode| element! {
                Text(
                    content: format!("AI: {}", mode),
                    color: if mode == "live" { theme.confidence_high } else { theme.text_dimmed },
                )
            }))
        }
    }
}
