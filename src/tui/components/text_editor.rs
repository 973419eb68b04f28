//! Draft reply editor
//!
//! Multiline `TextInput` bound to an external `State<String>`. The inbox
//! copies the state into the reducer as `EditDraft` whenever it changes.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct DraftEditorProps {
    /// Draft text (mutated by TextInput)
    pub value: Option<State<String>>,
    pub has_focus: bool,
}

/// Editable draft body; read-only rendering when it does not have focus
#[component]
pub fn DraftEditor(props: &DraftEditorProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let mut handle = hooks.use_ref_default::<TextInputHandle>();

    // Start at the top of the draft on first render
    hooks.use_effect(move || handle.write().set_cursor_offset(0), ());

    let Some(mut draft) = props.value else {
        return element! {
            View(width: 100pct, flex_grow: 1.0) {
                Text(content: "No draft state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            overflow: Overflow::Hidden,
            border_style: if props.has_focus { BorderStyle::Round } else { BorderStyle::None },
            border_color: theme.border_focused,
        ) {
            TextInput(
                has_focus: props.has_focus,
                value: draft.to_string(),
                on_change: move |new_value: String| draft.set(new_value),
                multiline: true,
                cursor_color: Some(theme.highlight),
                color: Some(theme.text),
                handle,
            )
        }
    }
}
