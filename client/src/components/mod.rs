//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome (header, sidebar, dialogs, toasts)
//! and small presentational widgets shared by pages. Shell-wide state is read
//! from Leptos context; frame-local state is passed in as props.

pub mod charts;
pub mod dashboard_header;
pub mod dashboard_layout;
pub mod dashboard_sidebar;
pub mod logout_modal;
pub mod progress_bar;
pub mod switch;
pub mod toaster;
