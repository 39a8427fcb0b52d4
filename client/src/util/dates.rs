//! Issue-date parsing and formatting for `/newsletter/:date` routes.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use std::fmt;
use std::str::FromStr;

use crate::i18n::Locale;

/// Issue opened when visiting `/`.
pub const DEFAULT_DATE: &str = "2024-10-31";

const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// A calendar date in `YYYY-MM-DD` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Returned for strings that are not a real `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid issue date: {0:?}")]
pub struct InvalidIssueDate(pub String);

impl FromStr for IssueDate {
    type Err = InvalidIssueDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidIssueDate(s.to_owned());
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits = |range: std::ops::Range<usize>| -> Option<u16> {
            let part = &s[range];
            if part.bytes().all(|b| b.is_ascii_digit()) { part.parse().ok() } else { None }
        };
        let year = digits(0..4).ok_or_else(invalid)?;
        let month = digits(5..7).and_then(|m| u8::try_from(m).ok()).ok_or_else(invalid)?;
        let day = digits(8..10).and_then(|d| u8::try_from(d).ok()).ok_or_else(invalid)?;

        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl IssueDate {
    /// Short label for date navigation, e.g. `Oct 31` or `10月31日`.
    pub fn short_label(self, locale: Locale) -> String {
        match locale {
            Locale::En => {
                let month = MONTH_ABBREVIATIONS.get(usize::from(self.month.saturating_sub(1))).copied().unwrap_or("");
                format!("{month} {}", self.day)
            }
            Locale::Zh => format!("{}月{}日", self.month, self.day),
        }
    }
}

/// Route path for the issue published on `date`.
pub fn newsletter_path(date: &str) -> String {
    format!("/newsletter/{date}")
}

/// Navigation label for a raw date string; unparseable input is shown as-is.
pub fn date_label(raw: &str, locale: Locale) -> String {
    raw.parse::<IssueDate>()
        .map_or_else(|_| raw.to_owned(), |date| date.short_label(locale))
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
