//! Browser-backed and in-memory preference adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorage` and `DocumentRoot` are the hydrate-time backends for
//! `PreferenceStore`. During SSR they no-op so server rendering stays
//! deterministic. `MemoryStorage` / `MemoryDocument` back the store in tests.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::collections::HashMap;

use crate::state::preferences::{AttributeSink, PreferenceStorage, PreferenceStore};

/// Preference store wired to `window.localStorage` and the `<html>` element.
pub type BrowserPreferenceStore = PreferenceStore<LocalStorage, DocumentRoot>;

/// Load the browser preference store for this page.
pub fn load_preferences() -> BrowserPreferenceStore {
    PreferenceStore::initialize(LocalStorage, DocumentRoot)
}

/// `window.localStorage`, looked up on each access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::debug!("localStorage unavailable; {key} not persisted");
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// The document's root `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl AttributeSink for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute(name, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }
}

/// In-memory key-value storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
    }
}

/// In-memory attribute map standing in for a document root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    attributes: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl AttributeSink for MemoryDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }
}
