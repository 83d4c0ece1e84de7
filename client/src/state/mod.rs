//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, form drafts) so components
//! depend on small focused models. Everything here is plain data with pure
//! transitions; browser effects live in `util` and the components.

pub mod auth;
pub mod draft;
pub mod fulfillment_draft;
pub mod onboarding;
pub mod request_draft;
pub mod toast;
