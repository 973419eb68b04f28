//! Search input component

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the search query value (written by the input on every change)
    pub value: Option<State<String>>,
    pub has_focus: bool,
    /// Number of tickets matching the query
    pub result_count: usize,
}

/// Single-line search input with a result counter
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(height: 3, border_style: BorderStyle::Round, border_color: border_color) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let show_count = props.has_focus || !value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
            flex_shrink: 0.0,
        ) {
            View(margin_right: 1, justify_content: JustifyContent::Center) {
                Text(content: "/", color: theme.text_dimmed)
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
            #(if show_count {
                Some(element! {
                    Text(
                        content: format!("{} match(es)", props.result_count),
                        color: theme.text_dimmed,
                    )
                })
            } else {
                None
            })
        }
    }
}
