//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and issue content while reading/writing
//! shared state from Leptos context providers.

pub mod accessibility_menu;
pub mod date_nav;
pub mod language_toggle;
pub mod section_list;
pub mod site_header;
pub mod subscribe_hero;
