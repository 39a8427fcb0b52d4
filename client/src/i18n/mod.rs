//! Locale selection and display-text lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates never embed literal copy; they ask `translate` for a
//! `MessageKey` in the active `Locale`, which is provided through context as
//! `RwSignal<Locale>`. Missing translations fall back to English.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod messages;

use std::fmt;
use std::str::FromStr;

pub use messages::MessageKey;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    #[default]
    Zh,
}

/// Returned when a locale code is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// BCP 47 language code, also used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// The other supported locale.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        // Accept region-qualified tags such as `zh-CN` or `en_US`.
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == primary)
            .ok_or_else(|| UnsupportedLocale(s.to_owned()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display text for `key` in `locale`, falling back to English.
pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    messages::lookup(locale, key).unwrap_or_else(|| messages::english(key))
}

/// Localized label for a newsletter section heading.
///
/// Headings may carry a leading emoji added by the backend; it is kept in
/// front of the translated label. Unknown headings are returned unchanged.
pub fn section_label(locale: Locale, heading: &str) -> String {
    let trimmed = heading.trim();
    let (decoration, name) = split_leading_decoration(trimmed);
    match messages::section_translation(locale, name) {
        Some(label) if decoration.is_empty() => label.to_owned(),
        Some(label) => format!("{decoration} {label}"),
        None => trimmed.to_owned(),
    }
}

/// Pick the localized variant of a bilingual field.
///
/// `zh` prefers `native`, `en` prefers `english`; either falls back to the
/// other when empty.
pub fn pick_localized<'a>(locale: Locale, native: &'a str, english: &'a str) -> &'a str {
    let (preferred, fallback) = match locale {
        Locale::Zh => (native, english),
        Locale::En => (english, native),
    };
    if preferred.trim().is_empty() { fallback } else { preferred }
}

fn split_leading_decoration(heading: &str) -> (&str, &str) {
    let split_at = heading
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric() || (!c.is_ascii() && !is_symbol_char(*c)))
        .map_or(heading.len(), |(idx, _)| idx);
    let (decoration, rest) = heading.split_at(split_at);
    (decoration.trim(), rest.trim())
}

/// Emoji and pictographs used as heading decorations.
fn is_symbol_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x2000..=0x2BFF | 0x3000..=0x303F | 0xFE00..=0xFE0F | 0x1F000..=0x1FAFF
    )
}
