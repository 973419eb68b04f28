//! Support inbox (`smarthelp inbox`)
//!
//! The root component owns an [`AppState`] and feeds every key press through
//! [`key_to_action`] and [`reduce`]. AI requests handed back by the reducer
//! run on an async handler and come back as completion actions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use iocraft::prelude::*;
use jiff::Timestamp;

use crate::ai::AiClient;
use crate::app::{
    AiRequest, AppAction, AppState, DashboardStats, InputMode, compute_view_model, execute_request,
    key_to_action, reduce,
};
use crate::config::TeamMember;
use crate::tui::components::{
    EmptyState, FilterTabs, Footer, Header, SearchBox, TicketDetail, TicketList, render_toast,
    rows_for_height,
};
use crate::tui::screens::{DashboardScreen, SettingsScreen, TeamScreen};
use crate::tui::theme::theme;
use crate::types::Screen;

/// How often expired toasts are checked for
const TOAST_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Props for the SupportInbox component
#[derive(Default, Props)]
pub struct SupportInboxProps {
    /// Starting state (store and automation settings)
    pub initial: Option<AppState>,
    pub ai: Option<Arc<AiClient>>,
    /// Roster for the Team screen
    pub team: Vec<TeamMember>,
    /// Effective configuration for the Settings screen
    pub settings: Vec<(&'static str, String)>,
}

/// The state handles an action touches. `State` is a cheap copyable handle,
/// so this is passed by value into event closures and async handlers.
#[derive(Clone, Copy)]
struct InboxStates {
    app: State<AppState>,
    search_text: State<String>,
    draft_text: State<String>,
}

impl InboxStates {
    /// Reduce an action and mirror the new query and draft into the text
    /// inputs so they never feed a stale value back.
    fn dispatch(mut self, action: AppAction) -> Option<AiRequest> {
        let current = self.app.read().clone();
        let (next, request) = reduce(current, action);

        if *self.search_text.read() != next.search_query {
            self.search_text.set(next.search_query.clone());
        }
        let draft = next
            .detail
            .as_ref()
            .map(|session| session.draft.clone())
            .unwrap_or_default();
        if *self.draft_text.read() != draft {
            self.draft_text.set(draft);
        }

        self.app.set(next);
        request
    }
}

/// Main support inbox component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header (screen tabs, AI mode)             |
/// +------------------------------------------+
/// | Bucket tabs                               |
/// | SearchBox                                 |
/// | TicketList / TicketDetail / other screen  |
/// +------------------------------------------+
/// | Footer                                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn SupportInbox<'a>(props: &SupportInboxProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial = props.initial.clone().unwrap_or_default();
    let initial_query = initial.search_query.clone();
    let app: State<AppState> = hooks.use_state(move || initial);
    let search_text = hooks.use_state(move || initial_query);
    let draft_text = hooks.use_state(String::new);
    let states = InboxStates {
        app,
        search_text,
        draft_text,
    };

    let ai = props.ai.clone();
    let ai_mode = ai.as_ref().map(|client| client.label());

    // Runs reducer requests; the completion goes back through the reducer,
    // which drops it if the agent has moved on
    let ai_handler: Handler<AiRequest> = hooks.use_async_handler(move |request: AiRequest| {
        let ai = ai.clone();
        async move {
            let Some(ai) = ai else {
                tracing::warn!(ticket = %request.ticket_id(), "no AI client, request dropped");
                return;
            };
            tracing::debug!(
                ticket = %request.ticket_id(),
                generation = request.generation(),
                "running AI request"
            );
            let action = execute_request(ai.as_ref(), request).await;
            states.dispatch(action);
        }
    });

    // Dismiss toasts once they have been shown long enough
    let toast_ticker: Handler<()> = hooks.use_async_handler(move |()| async move {
        while !states.app.read().should_exit {
            tokio::time::sleep(TOAST_POLL_INTERVAL).await;
            let expired = states
                .app
                .read()
                .toast
                .as_ref()
                .is_some_and(|toast| toast.is_expired(Instant::now()));
            if expired {
                states.dispatch(AppAction::DismissToast);
            }
        }
    });

    let mut ticker_started = hooks.use_state(|| false);
    if !ticker_started.get() {
        ticker_started.set(true);
        toast_ticker.clone()(());
    }

    // Text typed into the inputs reaches the reducer here
    let input_mode = app.read().input_mode();
    match input_mode {
        InputMode::Search => {
            let typed = search_text.to_string();
            if typed != app.read().search_query {
                states.dispatch(AppAction::UpdateSearch(typed));
            }
        }
        InputMode::EditingDraft => {
            let typed = draft_text.to_string();
            let stored = app.read().detail.as_ref().map(|s| s.draft.clone());
            if stored.is_some_and(|draft| draft != typed) {
                states.dispatch(AppAction::EditDraft(typed));
            }
        }
        InputMode::Browse | InputMode::Escalating => {}
    }

    // Header (1) + bucket tabs (1) + search box (3) + footer (1)
    let list_lines = height.saturating_sub(6) as usize;
    let list_rows = rows_for_height(list_lines);
    if app.read().list_height != list_rows {
        states.dispatch(AppAction::Resize(list_rows));
    }

    hooks.use_terminal_events({
        let ai_handler = ai_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let (screen, mode) = {
                    let app = states.app.read();
                    (app.screen, app.input_mode())
                };
                if let Some(action) = key_to_action(code, modifiers, screen, mode)
                    && let Some(request) = states.dispatch(action)
                {
                    ai_handler.clone()(request);
                }
            }
            _ => {}
        }
    });

    if app.read().should_exit {
        system.exit();
    }

    let theme = theme();
    let vm = compute_view_model(&app.read(), list_rows);
    let subtitle = vm.detail.as_ref().map(|d| d.ticket.id.clone());

    let body = match vm.screen {
        Screen::Inbox => {
            let list = match vm.empty_state {
                Some(kind) => element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind: kind, search_query: Some(vm.search.query.clone()))
                    }
                }
                .into_any(),
                None => element! {
                    TicketList(
                        tickets: vm.list.tickets.clone(),
                        cursor: vm.list.cursor,
                        scroll_offset: vm.list.scroll_offset,
                        visible_rows: list_rows,
                        has_focus: vm.input_mode == InputMode::Browse,
                    )
                }
                .into_any(),
            };
            element! {
                View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column) {
                    FilterTabs(tabs: vm.tabs.clone())
                    View(width: 100pct, padding_left: 1, padding_right: 1) {
                        SearchBox(
                            value: Some(search_text),
                            has_focus: vm.search.is_focused,
                            result_count: vm.search.result_count,
                        )
                    }
                    #(list)
                }
            }
            .into_any()
        }
        Screen::TicketDetail => element! {
            TicketDetail(detail: vm.detail.clone(), draft_text: Some(draft_text))
        }
        .into_any(),
        Screen::Dashboard => {
            let stats = DashboardStats::compute(app.read().store.tickets(), Timestamp::now());
            element! { DashboardScreen(stats: Some(stats)) }.into_any()
        }
        Screen::Team => element! { TeamScreen(team: props.team.clone()) }.into_any(),
        Screen::Settings => element! {
            SettingsScreen(entries: props.settings.clone(), ai_mode: ai_mode.unwrap_or("mock"))
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(active: vm.screen, subtitle: subtitle, ai_mode: ai_mode)

            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column) {
                #(body)
            }

            Footer(shortcuts: vm.shortcuts.clone())

            #(render_toast(&vm.toast))
        }
    }
}
