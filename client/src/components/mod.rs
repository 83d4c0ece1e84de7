//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs, cards, and route chrome while reading/writing
//! shared state from Leptos context providers.

pub mod create_request_modal;
pub mod dashboard_header;
pub mod fulfill_request_modal;
pub mod google_sign_in;
pub mod modal;
pub mod request_card;
pub mod route_guard;
pub mod toaster;
