//! Shared TUI components
//!
//! Reusable pieces for the inbox, ticket detail and secondary screens.

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod search_box;
pub mod shortcuts;
pub mod text_editor;
pub mod ticket_detail;
pub mod ticket_list;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, detail_shortcuts, edit_draft_shortcuts, escalation_shortcuts,
    inbox_shortcuts, screen_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shortcuts::ShortcutsBuilder;
pub use text_editor::{DraftEditor, DraftEditorProps};
pub use ticket_detail::{TicketDetail, TicketDetailProps};
pub use ticket_list::{
    FilterTabs, FilterTabsProps, TicketList, TicketListProps, TicketRow, TicketRowProps,
    rows_for_height,
};
pub use toast::{Toast, ToastLevel, render_toast};
