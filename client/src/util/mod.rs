//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! geolocation, navigation guards) from page and component logic.

pub mod auth;
pub mod datetime;
pub mod geolocation;
pub mod session;
pub mod token_storage;
