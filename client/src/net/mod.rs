//! Networking modules for the newsletter backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and `types` defines the JSON schema they carry.

pub mod api;
pub mod types;
