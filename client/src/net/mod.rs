//! Networking modules for the SmartPlate REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures into user
//! messages, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
