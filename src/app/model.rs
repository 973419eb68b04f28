//! Inbox state machine for testable state management
//!
//! [`AppState`] holds everything the inbox needs between key presses and
//! [`reduce`] is the only place it changes. AI work is not started by the
//! reducer: it hands back an [`AiRequest`] for the caller to run, and the
//! result comes back later as [`AppAction::DraftReady`] or
//! [`AppAction::EscalationReady`]. Completions carry the generation number
//! of the request that produced them, so answers for a ticket the agent has
//! already left, or superseded by a newer request, are dropped.

use crate::ai::REGENERATE_INSTRUCTION;
use crate::config::Config;
use crate::store::TicketStore;
use crate::triage::{BucketCounts, MatchedTicket, bucket_counts, triage};
use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::{
    Shortcut, detail_shortcuts, edit_draft_shortcuts, escalation_shortcuts, inbox_shortcuts,
    screen_shortcuts, search_shortcuts,
};
use crate::tui::components::toast::Toast;
use crate::types::{
    EscalationAnalysis, InboxFilter, Percent, Screen, Ticket, TicketStatus, Tone,
};

/// Which panel of the ticket detail screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    Drafting,
    Escalating,
}

/// What keyboard input currently means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are shortcuts
    #[default]
    Browse,
    /// Keys go to the search box
    Search,
    /// Escalation panel is open
    Escalating,
    /// Keys go to the draft editor
    EditingDraft,
}

/// Per-visit state of the ticket detail screen.
///
/// A fresh session is created each time a ticket is opened, so tone,
/// escalation data and in-flight requests never leak between visits.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSession {
    pub ticket_id: String,
    pub mode: DetailMode,
    pub tone: Tone,
    pub draft: String,
    pub editing: bool,
    pub escalation: Option<EscalationAnalysis>,
    /// Generation of the draft request in flight, if any
    pub pending_draft: Option<u64>,
    /// Generation of the escalation request in flight, if any
    pub pending_escalation: Option<u64>,
}

impl DetailSession {
    pub fn new(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id.clone(),
            mode: DetailMode::Drafting,
            tone: Tone::default(),
            draft: ticket.suggested_response.clone(),
            editing: false,
            escalation: None,
            pending_draft: None,
            pending_escalation: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending_draft.is_some()
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending_escalation.is_some()
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TicketStore,
    pub screen: Screen,
    pub filter: InboxFilter,
    pub selected_id: Option<String>,
    /// Cursor position in the visible (filtered and searched) list
    pub cursor: usize,
    /// First visible row of the inbox list
    pub scroll_offset: usize,
    /// Rows the inbox list can show, as last reported by the UI
    pub list_height: usize,
    pub search_query: String,
    pub search_focused: bool,
    pub detail: Option<DetailSession>,
    pub toast: Option<Toast>,
    /// Request a draft when a ticket without one is opened
    pub auto_draft: bool,
    /// Confidence below which the detail screen suggests escalating
    pub escalation_threshold: Percent,
    /// Last generation handed out; only ever increases
    pub generation: u64,
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TicketStore::default())
    }
}

impl AppState {
    pub fn new(store: TicketStore) -> Self {
        Self {
            store,
            screen: Screen::Inbox,
            filter: InboxFilter::default(),
            selected_id: None,
            cursor: 0,
            scroll_offset: 0,
            list_height: 0,
            search_query: String::new(),
            search_focused: false,
            detail: None,
            toast: None,
            auto_draft: false,
            escalation_threshold: Percent::clamped(80),
            generation: 0,
            should_exit: false,
        }
    }

    /// State with automation settings taken from configuration
    pub fn with_config(store: TicketStore, config: &Config) -> Self {
        Self {
            auto_draft: config.automation.auto_draft,
            escalation_threshold: config.automation.escalation_threshold,
            ..Self::new(store)
        }
    }

    /// Tickets the inbox list currently shows
    pub fn visible_tickets(&self) -> Vec<MatchedTicket> {
        triage(self.store.tickets(), self.filter, &self.search_query)
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.selected_id.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn input_mode(&self) -> InputMode {
        match (&self.detail, self.screen) {
            (Some(session), Screen::TicketDetail) if session.editing => InputMode::EditingDraft,
            (Some(session), Screen::TicketDetail) if session.mode == DetailMode::Escalating => {
                InputMode::Escalating
            }
            (_, Screen::Inbox) if self.search_focused => InputMode::Search,
            _ => InputMode::Browse,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn close_detail(&mut self) {
        self.selected_id = None;
        self.detail = None;
    }

    fn clamp_cursor(&mut self) {
        let count = self.visible_tickets().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }
}

/// All possible actions on the inbox
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Inbox list
    /// Open the ticket with this id
    SelectTicket(String),
    /// Open the ticket under the cursor
    OpenSelected,
    MoveUp,
    MoveDown,
    ChangeFilter(InboxFilter),
    NextFilter,
    PrevFilter,

    // Search
    FocusSearch,
    UpdateSearch(String),
    /// Leave the search box, keeping the query
    ExitSearch,
    /// Clear the query and leave the search box
    ClearSearch,

    // Ticket actions
    Resolve,
    Escalate,
    Snooze,

    // Navigation
    ChangeView(Screen),
    Back,

    // Detail screen
    OpenEscalation,
    CancelEscalation,
    SetTone(Tone),
    Regenerate,
    StartEditing,
    StopEditing,
    EditDraft(String),
    AcceptDraft,

    // AI completions
    DraftReady {
        ticket_id: String,
        generation: u64,
        text: String,
    },
    EscalationReady {
        ticket_id: String,
        generation: u64,
        analysis: EscalationAnalysis,
    },

    // App
    /// The list area changed size
    Resize(usize),
    DismissToast,
    Quit,
}

/// AI work requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum AiRequest {
    Draft {
        generation: u64,
        ticket: Ticket,
        tone: Tone,
        instruction: Option<String>,
    },
    Escalation {
        generation: u64,
        ticket: Ticket,
    },
}

impl AiRequest {
    pub fn generation(&self) -> u64 {
        match self {
            AiRequest::Draft { generation, .. } | AiRequest::Escalation { generation, .. } => {
                *generation
            }
        }
    }

    pub fn ticket_id(&self) -> &str {
        match self {
            AiRequest::Draft { ticket, .. } | AiRequest::Escalation { ticket, .. } => &ticket.id,
        }
    }
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state and, when the action needs the AI assistant, the
/// request to run. Nothing here performs I/O.
pub fn reduce(mut state: AppState, action: AppAction) -> (AppState, Option<AiRequest>) {
    let mut request = None;

    match action {
        AppAction::SelectTicket(id) => {
            request = open_ticket(&mut state, &id);
        }
        AppAction::OpenSelected => {
            if state.screen == Screen::Inbox
                && let Some(id) = state
                    .visible_tickets()
                    .get(state.cursor)
                    .map(|m| m.ticket.id.clone())
            {
                state.search_focused = false;
                request = open_ticket(&mut state, &id);
            }
        }
        AppAction::MoveDown => {
            let count = state.visible_tickets().len();
            if count > 0 {
                state.cursor = (state.cursor + 1).min(count - 1);
            }
        }
        AppAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        AppAction::ChangeFilter(filter) => set_filter(&mut state, filter),
        AppAction::NextFilter => {
            let filter = state.filter.next();
            set_filter(&mut state, filter);
        }
        AppAction::PrevFilter => {
            let filter = state.filter.prev();
            set_filter(&mut state, filter);
        }

        AppAction::FocusSearch => {
            if state.screen == Screen::Inbox {
                state.search_focused = true;
            }
        }
        AppAction::UpdateSearch(query) => {
            state.search_query = query;
            state.cursor = 0;
        }
        AppAction::ExitSearch => {
            state.search_focused = false;
        }
        AppAction::ClearSearch => {
            state.search_query.clear();
            state.search_focused = false;
            state.cursor = 0;
        }

        AppAction::Resolve => apply_status(&mut state, TicketStatus::Resolved),
        AppAction::Escalate => apply_status(&mut state, TicketStatus::Escalated),
        AppAction::Snooze => apply_status(&mut state, TicketStatus::Pending),

        AppAction::ChangeView(screen) => {
            if screen == Screen::TicketDetail {
                if state.detail.is_some() {
                    state.screen = Screen::TicketDetail;
                }
            } else {
                state.close_detail();
                state.search_focused = false;
                state.screen = screen;
            }
        }
        AppAction::Back => {
            if state.screen != Screen::Inbox {
                state.close_detail();
                state.screen = Screen::Inbox;
                state.clamp_cursor();
            }
        }

        AppAction::OpenEscalation => {
            let generation = state.generation + 1;
            let ticket = state.selected_ticket().cloned();
            if let (Some(session), Some(ticket)) = (state.detail.as_mut(), ticket) {
                session.mode = DetailMode::Escalating;
                session.editing = false;
                if session.escalation.is_none() && session.pending_escalation.is_none() {
                    session.pending_escalation = Some(generation);
                    state.generation = generation;
                    request = Some(AiRequest::Escalation { generation, ticket });
                }
            }
        }
        AppAction::CancelEscalation => {
            if let Some(session) = state.detail.as_mut() {
                session.mode = DetailMode::Drafting;
            }
        }
        AppAction::SetTone(tone) => {
            if let Some(session) = state.detail.as_mut() {
                session.tone = tone;
            }
            request = request_draft(&mut state, None);
        }
        AppAction::Regenerate => {
            request = request_draft(&mut state, Some(REGENERATE_INSTRUCTION.to_string()));
        }
        AppAction::StartEditing => {
            if let Some(session) = state.detail.as_mut()
                && session.mode == DetailMode::Drafting
            {
                session.editing = true;
            }
        }
        AppAction::StopEditing => {
            if let Some(session) = state.detail.as_mut() {
                session.editing = false;
            }
        }
        AppAction::EditDraft(text) => {
            if let Some(session) = state.detail.as_mut() {
                session.draft = text;
            }
        }
        AppAction::AcceptDraft => {
            if let Some(session) = state.detail.as_mut() {
                session.editing = false;
                let id = session.ticket_id.clone();
                let draft = session.draft.clone();
                state.toast = Some(match state.store.set_suggested_response(&id, draft) {
                    Ok(()) => Toast::success(format!("Saved draft for {id}")),
                    Err(e) => Toast::error(e.to_string()),
                });
            }
        }

        AppAction::DraftReady {
            ticket_id,
            generation,
            text,
        } => match state.detail.as_mut() {
            Some(session)
                if session.ticket_id == ticket_id && session.pending_draft == Some(generation) =>
            {
                session.draft = text;
                session.pending_draft = None;
            }
            _ => {
                tracing::debug!(ticket = %ticket_id, generation, "dropping stale draft");
            }
        },
        AppAction::EscalationReady {
            ticket_id,
            generation,
            analysis,
        } => match state.detail.as_mut() {
            Some(session)
                if session.ticket_id == ticket_id
                    && session.pending_escalation == Some(generation) =>
            {
                session.escalation = Some(analysis);
                session.pending_escalation = None;
            }
            _ => {
                tracing::debug!(ticket = %ticket_id, generation, "dropping stale escalation analysis");
            }
        },

        AppAction::Resize(height) => {
            state.list_height = height;
        }
        AppAction::DismissToast => {
            state.toast = None;
        }
        AppAction::Quit => {
            state.should_exit = true;
        }
    }

    state.scroll_offset = adjust_scroll(state.scroll_offset, state.cursor, state.list_height);
    (state, request)
}

fn set_filter(state: &mut AppState, filter: InboxFilter) {
    state.filter = filter;
    state.cursor = 0;
}

fn open_ticket(state: &mut AppState, id: &str) -> Option<AiRequest> {
    let Some(ticket) = state.store.get(id).cloned() else {
        state.toast = Some(Toast::error(format!("Ticket {id} not found")));
        return None;
    };
    if ticket.status == TicketStatus::Resolved {
        state.toast = Some(Toast::warning(format!("{id} is already resolved")));
        return None;
    }

    if let Some(index) = state
        .visible_tickets()
        .iter()
        .position(|m| m.ticket.id == ticket.id)
    {
        state.cursor = index;
    }

    state.selected_id = Some(ticket.id.clone());
    state.detail = Some(DetailSession::new(&ticket));
    state.screen = Screen::TicketDetail;

    if state.auto_draft && ticket.suggested_response.trim().is_empty() {
        return request_draft(state, None);
    }
    None
}

fn request_draft(state: &mut AppState, instruction: Option<String>) -> Option<AiRequest> {
    let ticket = state.selected_ticket()?.clone();
    let generation = state.next_generation();
    let session = state.detail.as_mut()?;
    session.pending_draft = Some(generation);
    Some(AiRequest::Draft {
        generation,
        ticket,
        tone: session.tone,
        instruction,
    })
}

fn apply_status(state: &mut AppState, status: TicketStatus) {
    let Some(id) = state.selected_id.clone() else {
        return;
    };

    match state.store.set_status(&id, status) {
        Ok(_) => {
            state.toast = Some(Toast::status_changed(&id, status));
            state.close_detail();
            state.screen = Screen::Inbox;
            state.clamp_cursor();
        }
        Err(e) => {
            state.toast = Some(Toast::error(e.to_string()));
        }
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Computed view model for rendering the inbox
#[derive(Debug, Clone)]
pub struct InboxViewModel {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub tabs: Vec<FilterTab>,
    pub list: ListViewModel,
    pub search: SearchViewModel,
    pub detail: Option<DetailViewModel>,
    pub toast: Option<Toast>,
    pub empty_state: Option<EmptyStateKind>,
    pub shortcuts: Vec<Shortcut>,
}

/// One inbox bucket tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: InboxFilter,
    pub label: &'static str,
    pub count: usize,
    pub is_active: bool,
}

/// View model for the ticket list
#[derive(Debug, Clone)]
pub struct ListViewModel {
    pub tickets: Vec<MatchedTicket>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub visible_count: usize,
}

/// View model for the search box
#[derive(Debug, Clone)]
pub struct SearchViewModel {
    pub query: String,
    pub is_focused: bool,
    pub result_count: usize,
}

/// View model for the ticket detail screen
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub ticket: Ticket,
    pub session: DetailSession,
    /// AI confidence is below the escalation threshold
    pub suggest_escalation: bool,
}

/// Pure function: compute view model from state
pub fn compute_view_model(state: &AppState, list_height: usize) -> InboxViewModel {
    let tickets = state.visible_tickets();
    let counts: BucketCounts = bucket_counts(state.store.tickets());
    let input_mode = state.input_mode();

    let tabs = InboxFilter::ALL
        .iter()
        .map(|&filter| FilterTab {
            filter,
            label: filter.label(),
            count: counts.get(filter),
            is_active: filter == state.filter,
        })
        .collect();

    let empty_state = if tickets.is_empty() {
        if state.search_query.trim().is_empty() {
            Some(EmptyStateKind::for_filter(state.filter))
        } else {
            Some(EmptyStateKind::NoSearchResults)
        }
    } else {
        None
    };

    let detail = match (&state.detail, state.selected_ticket()) {
        (Some(session), Some(ticket)) if state.screen == Screen::TicketDetail => {
            Some(DetailViewModel {
                suggest_escalation: ticket.ai_confidence < state.escalation_threshold
                    && ticket.status != TicketStatus::Escalated,
                ticket: ticket.clone(),
                session: session.clone(),
            })
        }
        _ => None,
    };

    let shortcuts = match (state.screen, input_mode) {
        (_, InputMode::EditingDraft) => edit_draft_shortcuts(),
        (_, InputMode::Escalating) => escalation_shortcuts(),
        (_, InputMode::Search) => search_shortcuts(),
        (Screen::Inbox, _) => inbox_shortcuts(),
        (Screen::TicketDetail, _) => detail_shortcuts(),
        _ => screen_shortcuts(),
    };

    let cursor = state.cursor.min(tickets.len().saturating_sub(1));
    let list = ListViewModel {
        scroll_offset: adjust_scroll(state.scroll_offset, cursor, list_height),
        visible_count: list_height.min(tickets.len()),
        cursor,
        tickets,
    };

    let search = SearchViewModel {
        query: state.search_query.clone(),
        is_focused: input_mode == InputMode::Search,
        result_count: list.tickets.len(),
    };

    InboxViewModel {
        screen: state.screen,
        input_mode,
        tabs,
        list,
        search,
        detail,
        toast: state.toast.clone(),
        empty_state,
        shortcuts,
    }
}

/// Adjust scroll offset to keep selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

// ============================================================================
// Tests
// ============================================================================
