//! Key bindings for the inbox
//!
//! Maps terminal key events to [`AppAction`]s without touching any iocraft
//! state, so the bindings can be unit tested.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{AppAction, InputMode};
use crate::types::{InboxFilter, Screen, Tone};

/// Convert a key event to an AppAction (pure function)
///
/// Returns `None` if the key doesn't map to any action, or if it should be
/// left to a focused text input.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    screen: Screen,
    mode: InputMode,
) -> Option<AppAction> {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    match mode {
        InputMode::Search => return search_key_to_action(code),
        InputMode::EditingDraft => return edit_key_to_action(code, modifiers),
        InputMode::Escalating => return escalation_key_to_action(code),
        InputMode::Browse => {}
    }

    if let Some(action) = navigation_key_to_action(code) {
        return Some(action);
    }

    match screen {
        Screen::Inbox => inbox_key_to_action(code),
        Screen::TicketDetail => detail_key_to_action(code),
        Screen::Dashboard | Screen::Team | Screen::Settings => match code {
            KeyCode::Esc | KeyCode::Char('h') => Some(AppAction::Back),
            _ => None,
        },
    }
}

/// Number keys jump between top-level screens
fn navigation_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Char('1') => Some(AppAction::ChangeView(Screen::Inbox)),
        KeyCode::Char('2') => Some(AppAction::ChangeView(Screen::Dashboard)),
        KeyCode::Char('3') => Some(AppAction::ChangeView(Screen::Team)),
        KeyCode::Char('4') => Some(AppAction::ChangeView(Screen::Settings)),
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}

fn inbox_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MoveUp),
        KeyCode::Enter | KeyCode::Char('l') => Some(AppAction::OpenSelected),
        KeyCode::Tab => Some(AppAction::NextFilter),
        KeyCode::BackTab => Some(AppAction::PrevFilter),
        KeyCode::Char('f') => Some(AppAction::ChangeFilter(InboxFilter::Focus)),
        KeyCode::Char('v') => Some(AppAction::ChangeFilter(InboxFilter::Review)),
        KeyCode::Char('x') => Some(AppAction::ChangeFilter(InboxFilter::Escalated)),
        KeyCode::Char('z') => Some(AppAction::ChangeFilter(InboxFilter::Snoozed)),
        KeyCode::Char('/') => Some(AppAction::FocusSearch),
        KeyCode::Esc => Some(AppAction::ClearSearch),
        _ => None,
    }
}

fn detail_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Some(AppAction::Back),
        KeyCode::Char('r') => Some(AppAction::Resolve),
        KeyCode::Char('s') => Some(AppAction::Snooze),
        KeyCode::Char('e') => Some(AppAction::OpenEscalation),
        KeyCode::Char('F') => Some(AppAction::SetTone(Tone::Formal)),
        KeyCode::Char('E') => Some(AppAction::SetTone(Tone::Empathetic)),
        KeyCode::Char('D') => Some(AppAction::SetTone(Tone::Direct)),
        KeyCode::Char('g') => Some(AppAction::Regenerate),
        KeyCode::Char('i') | KeyCode::Enter => Some(AppAction::StartEditing),
        KeyCode::Char('a') => Some(AppAction::AcceptDraft),
        _ => None,
    }
}

fn escalation_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Enter | KeyCode::Char('e') => Some(AppAction::Escalate),
        KeyCode::Esc => Some(AppAction::CancelEscalation),
        KeyCode::Char('r') => Some(AppAction::Resolve),
        KeyCode::Char('s') => Some(AppAction::Snooze),
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}

/// Keys while the search box has focus; characters go to the box itself
fn search_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Esc => Some(AppAction::ClearSearch),
        KeyCode::Enter | KeyCode::Tab => Some(AppAction::ExitSearch),
        KeyCode::Down => Some(AppAction::MoveDown),
        KeyCode::Up => Some(AppAction::MoveUp),
        _ => None,
    }
}

/// Keys while the draft editor has focus; characters go to the editor
fn edit_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<AppAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(AppAction::StopEditing),
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(AppAction::AcceptDraft)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, screen: Screen, mode: InputMode) -> Option<AppAction> {
        key_to_action(code, KeyModifiers::NONE, screen, mode)
    }

    #[test]
    fn test_inbox_navigation() {
        assert_eq!(
            key(KeyCode::Char('j'), Screen::Inbox, InputMode::Browse),
            Some(AppAction::MoveDown)
        );
        assert_eq!(
            key(KeyCode::Up, Screen::Inbox, InputMode::Browse),
            Some(AppAction::MoveUp)
        );
        assert_eq!(
            key(KeyCode::Enter, Screen::Inbox, InputMode::Browse),
            Some(AppAction::OpenSelected)
        );
        assert_eq!(
            key(KeyCode::Tab, Screen::Inbox, InputMode::Browse),
            Some(AppAction::NextFilter)
        );
        assert_eq!(
            key(KeyCode::Char('z'), Screen::Inbox, InputMode::Browse),
            Some(AppAction::ChangeFilter(InboxFilter::Snoozed))
        );
    }

    #[test]
    fn test_screen_switching() {
        assert_eq!(
            key(KeyCode::Char('2'), Screen::Inbox, InputMode::Browse),
            Some(AppAction::ChangeView(Screen::Dashboard))
        );
        assert_eq!(
            key(KeyCode::Char('4'), Screen::TicketDetail, InputMode::Browse),
            Some(AppAction::ChangeView(Screen::Settings))
        );
        assert_eq!(
            key(KeyCode::Esc, Screen::Team, InputMode::Browse),
            Some(AppAction::Back)
        );
    }

    #[test]
    fn test_detail_actions() {
        assert_eq!(
            key(KeyCode::Char('r'), Screen::TicketDetail, InputMode::Browse),
            Some(AppAction::Resolve)
        );
        assert_eq!(
            key(KeyCode::Char('D'), Screen::TicketDetail, InputMode::Browse),
            Some(AppAction::SetTone(Tone::Direct))
        );
        assert_eq!(
            key(KeyCode::Char('g'), Screen::TicketDetail, InputMode::Browse),
            Some(AppAction::Regenerate)
        );
        assert_eq!(
            key(KeyCode::Esc, Screen::TicketDetail, InputMode::Browse),
            Some(AppAction::Back)
        );
    }

    #[test]
    fn test_escalation_mode() {
        assert_eq!(
            key(KeyCode::Enter, Screen::TicketDetail, InputMode::Escalating),
            Some(AppAction::Escalate)
        );
        assert_eq!(
            key(KeyCode::Esc, Screen::TicketDetail, InputMode::Escalating),
            Some(AppAction::CancelEscalation)
        );
        assert_eq!(
            key(KeyCode::Char('2'), Screen::TicketDetail, InputMode::Escalating),
            None
        );
    }

    #[test]
    fn test_search_mode_leaves_characters_alone() {
        assert_eq!(key(KeyCode::Char('j'), Screen::Inbox, InputMode::Search), None);
        assert_eq!(key(KeyCode::Char('q'), Screen::Inbox, InputMode::Search), None);
        assert_eq!(
            key(KeyCode::Esc, Screen::Inbox, InputMode::Search),
            Some(AppAction::ClearSearch)
        );
        assert_eq!(
            key(KeyCode::Enter, Screen::Inbox, InputMode::Search),
            Some(AppAction::ExitSearch)
        );
    }

    #[test]
    fn test_edit_mode() {
        assert_eq!(
            key(KeyCode::Char('r'), Screen::TicketDetail, InputMode::EditingDraft),
            None
        );
        assert_eq!(
            key_to_action(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                Screen::TicketDetail,
                InputMode::EditingDraft
            ),
            Some(AppAction::AcceptDraft)
        );
        assert_eq!(
            key(KeyCode::Esc, Screen::TicketDetail, InputMode::EditingDraft),
            Some(AppAction::StopEditing)
        );
    }

    #[test]
    fn test_ctrl_q_always_quits() {
        for mode in [
            InputMode::Browse,
            InputMode::Search,
            InputMode::Escalating,
            InputMode::EditingDraft,
        ] {
            assert_eq!(
                key_to_action(
                    KeyCode::Char('q'),
                    KeyModifiers::CONTROL,
                    Screen::Inbox,
                    mode
                ),
                Some(AppAction::Quit)
            );
        }
    }
}
