//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resources, dialogs, navigation)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod auth;
pub mod donor;
pub mod landing;
pub(crate) mod listing;
pub mod ngo;
pub mod volunteer;
