//! TUI module for the interactive support inbox
//!
//! - `inbox` - root component: triage list, ticket detail and AI assist
//! - `screens` - dashboard, team and settings

pub mod components;
pub mod inbox;
pub mod screens;
pub mod theme;

pub use inbox::{SupportInbox, SupportInboxProps};
pub use theme::Theme;
