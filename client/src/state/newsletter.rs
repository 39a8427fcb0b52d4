//! Loaded newsletter issue for the active `/newsletter/:date` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NewsletterPage` drives these transitions around `net::api` calls. Each
//! request gets a sequence number so a slow response for a date the reader
//! already navigated away from is discarded.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::net::api::ApiError;
use crate::net::types::{NewsletterResponse, Section};

/// Issue data plus load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    /// Date taken from the route.
    pub requested_date: Option<String>,
    /// Date the backend actually served.
    pub current_date: Option<String>,
    /// Recent issue dates, newest first.
    pub dates: Vec<String>,
    pub sections: Vec<Section>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence of the in-flight request.
    pub request_seq: u64,
}

impl NewsletterState {
    /// Mark a load for `date` as started and return its sequence number.
    ///
    /// Previously loaded sections stay visible until the response lands.
    pub fn begin_request(&mut self, date: &str) -> u64 {
        self.request_seq += 1;
        self.requested_date = Some(date.to_owned());
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a successful response. Returns `false` if `seq` is stale.
    pub fn apply_response(&mut self, seq: u64, response: NewsletterResponse) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.current_date = Some(response.current_date);
        self.sections = response.articles;
        if !response.dates.is_empty() {
            self.dates = response.dates;
        }
        self.loading = false;
        true
    }

    /// Apply a failed response. Returns `false` if `seq` is stale.
    pub fn apply_error(&mut self, seq: u64, error: &ApiError) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.error = Some(error.to_string());
        self.sections.clear();
        self.current_date = None;
        self.loading = false;
        true
    }

    /// The served date, when the backend substituted a different issue.
    pub fn served_other_date(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        match (&self.requested_date, &self.current_date) {
            (Some(requested), Some(current)) if requested != current => Some(current.as_str()),
            _ => None,
        }
    }
}
