//! Accessibility display preferences (font size, color mode).
//!
//! DESIGN
//! ======
//! `PreferenceStore` owns both preferences, writes each accepted change to
//! durable storage, and mirrors it onto a document-level attribute so CSS
//! attribute selectors can react. Reflection runs inside the setter before it
//! returns; there is no watcher layer.
//!
//! Requested or persisted values outside a preference's domain are ignored.
//! Callers get no error back and the previous value stays in place.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::fmt;
use std::str::FromStr;

/// Storage key holding the persisted font size.
pub const FONT_SIZE_STORAGE_KEY: &str = "accessibility-font-size";
/// Storage key holding the persisted color mode.
pub const COLOR_MODE_STORAGE_KEY: &str = "accessibility-color-mode";

/// Returned when a string does not name a member of a preference domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {preference} value: {value:?}")]
pub struct ParsePreferenceError {
    pub preference: Preference,
    pub value: String,
}

/// The two user-selectable display preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    FontSize,
    ColorMode,
}

impl Preference {
    /// Key used in durable storage.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::FontSize => FONT_SIZE_STORAGE_KEY,
            Self::ColorMode => COLOR_MODE_STORAGE_KEY,
        }
    }

    /// Attribute written on the document root.
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::FontSize => "data-font-size",
            Self::ColorMode => "data-color-mode",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FontSize => "font-size",
            Self::ColorMode => "color-mode",
        })
    }
}

/// Base text size applied through `data-font-size`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for FontSize {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParsePreferenceError { preference: Preference::FontSize, value: s.to_owned() })
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette variant applied through `data-color-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Normal,
    HighContrast,
    ColorBlindFriendly,
}

impl ColorMode {
    pub const ALL: [Self; 3] = [Self::Normal, Self::HighContrast, Self::ColorBlindFriendly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::HighContrast => "high-contrast",
            Self::ColorBlindFriendly => "color-blind-friendly",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParsePreferenceError { preference: Preference::ColorMode, value: s.to_owned() })
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage surviving page reloads.
///
/// Reads that fail for any reason report `None`; writes are best-effort.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// Document-level attribute target consumed by stylesheets.
pub trait AttributeSink {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Current display preferences plus their durable copy and document mirror.
#[derive(Clone, Debug)]
pub struct PreferenceStore<S, D> {
    font_size: FontSize,
    color_mode: ColorMode,
    storage: S,
    document: D,
}

impl<S: PreferenceStorage, D: AttributeSink> PreferenceStore<S, D> {
    /// Load persisted preferences and reflect them onto the document.
    ///
    /// Stored values outside the domain (or missing keys) keep the defaults
    /// `medium` / `normal`.
    pub fn initialize(storage: S, document: D) -> Self {
        let font_size = storage
            .get_item(FONT_SIZE_STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        let color_mode = storage
            .get_item(COLOR_MODE_STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        let mut store = Self { font_size, color_mode, storage, document };
        store.reflect(Preference::FontSize, font_size.as_str());
        store.reflect(Preference::ColorMode, color_mode.as_str());
        store
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Adopt `value` as the font size if it names a member; otherwise no-op.
    pub fn set_font_size(&mut self, value: &str) {
        if let Ok(size) = value.parse::<FontSize>() {
            self.apply_font_size(size);
        }
    }

    /// Adopt `value` as the color mode if it names a member; otherwise no-op.
    pub fn set_color_mode(&mut self, value: &str) {
        if let Ok(mode) = value.parse::<ColorMode>() {
            self.apply_color_mode(mode);
        }
    }

    /// Set, persist, and reflect an already-validated font size.
    pub fn apply_font_size(&mut self, size: FontSize) {
        self.font_size = size;
        self.storage.set_item(FONT_SIZE_STORAGE_KEY, size.as_str());
        self.reflect(Preference::FontSize, size.as_str());
    }

    /// Set, persist, and reflect an already-validated color mode.
    pub fn apply_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
        self.storage.set_item(COLOR_MODE_STORAGE_KEY, mode.as_str());
        self.reflect(Preference::ColorMode, mode.as_str());
    }

    /// Mirror `value` onto the document attribute for `preference`.
    pub fn reflect(&mut self, preference: Preference, value: &str) {
        self.document.set_attribute(preference.attribute_name(), value);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Give back the storage and document, e.g. to simulate a reload.
    pub fn into_parts(self) -> (S, D) {
        (self.storage, self.document)
    }
}
