//! Inbox application logic, independent of rendering.

pub mod controller;
pub mod keymap;
pub mod model;
pub mod stats;

pub use controller::{InboxController, execute_request};
pub use keymap::key_to_action;
pub use model::{
    AiRequest, AppAction, AppState, DetailMode, DetailSession, InboxViewModel, InputMode,
    compute_view_model, reduce,
};
pub use stats::DashboardStats;
