//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "r", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Resolve", "Save")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the inbox list
pub fn inbox_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .add("Enter", "Open")
        .add("Tab", "Next Bucket")
        .add("f/v/x/z", "Focus/Review/Escalated/Snoozed")
        .add("/", "Search")
        .with_screens()
        .with_quit()
        .build()
}

/// Shortcuts for the ticket detail screen
pub fn detail_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("r", "Resolve")
        .add("e", "Escalate")
        .add("s", "Snooze")
        .add("F/E/D", "Tone")
        .add("g", "Regenerate")
        .add("i", "Edit Draft")
        .add("a", "Accept Draft")
        .add("Esc", "Back")
        .with_quit()
        .build()
}

/// Shortcuts while the escalation panel is open
pub fn escalation_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Confirm Escalation")
        .add("r", "Resolve")
        .add("s", "Snooze")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts while editing a draft
pub fn edit_draft_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("C-s", "Save Draft")
        .add("Esc", "Stop Editing")
        .build()
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts for the dashboard, team and settings screens
pub fn screen_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_screens()
        .add("Esc", "Inbox")
        .with_quit()
        .build()
}
