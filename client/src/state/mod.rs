//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`newsletter` issue data, display
//! `preferences`) so components depend on small focused models provided
//! through Leptos context.

pub mod newsletter;
pub mod preferences;
