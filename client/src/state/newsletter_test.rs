use super::*;
use crate::net::types::Article;

fn response(date: &str, sections: usize) -> NewsletterResponse {
    NewsletterResponse {
        articles: (0..sections)
            .map(|i| Section {
                section: format!("Section {i}"),
                articles: vec![Article { title: format!("t{i}"), ..Article::default() }],
            })
            .collect(),
        current_date: date.to_owned(),
        dates: vec![date.to_owned(), "2024-10-30".to_owned()],
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn newsletter_state_default_is_idle_and_empty() {
    let state = NewsletterState::default();
    assert!(!state.loading);
    assert!(state.sections.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.request_seq, 0);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_request_sets_loading_and_clears_error() {
    let mut state = NewsletterState { error: Some("boom".to_owned()), ..NewsletterState::default() };
    let seq = state.begin_request("2024-10-31");
    assert_eq!(seq, 1);
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.requested_date.as_deref(), Some("2024-10-31"));
}

#[test]
fn apply_response_fills_issue() {
    let mut state = NewsletterState::default();
    let seq = state.begin_request("2024-10-31");
    assert!(state.apply_response(seq, response("2024-10-31", 2)));
    assert!(!state.loading);
    assert_eq!(state.sections.len(), 2);
    assert_eq!(state.dates.len(), 2);
    assert_eq!(state.served_other_date(), None);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = NewsletterState::default();
    let first = state.begin_request("2024-10-30");
    let second = state.begin_request("2024-10-31");
    assert!(!state.apply_response(first, response("2024-10-30", 3)));
    assert!(state.loading);
    assert!(state.sections.is_empty());
    assert!(state.apply_response(second, response("2024-10-31", 1)));
    assert_eq!(state.current_date.as_deref(), Some("2024-10-31"));
}

#[test]
fn empty_dates_keep_previous_navigation() {
    let mut state = NewsletterState::default();
    let seq = state.begin_request("2024-10-31");
    state.apply_response(seq, response("2024-10-31", 1));
    let seq = state.begin_request("2024-10-30");
    let mut next = response("2024-10-30", 1);
    next.dates.clear();
    state.apply_response(seq, next);
    assert_eq!(state.dates, vec!["2024-10-31".to_owned(), "2024-10-30".to_owned()]);
}

#[test]
fn apply_error_records_message_and_clears_issue() {
    let mut state = NewsletterState::default();
    let seq = state.begin_request("2024-10-31");
    state.apply_response(seq, response("2024-10-31", 1));
    let seq = state.begin_request("2024-10-29");
    assert!(state.apply_error(seq, &ApiError::Status(500)));
    assert_eq!(state.error.as_deref(), Some("unexpected status 500"));
    assert!(state.sections.is_empty());
    assert!(!state.loading);
}

#[test]
fn stale_error_is_discarded() {
    let mut state = NewsletterState::default();
    let first = state.begin_request("2024-10-30");
    let _second = state.begin_request("2024-10-31");
    assert!(!state.apply_error(first, &ApiError::Status(404)));
    assert!(state.error.is_none());
}

#[test]
fn served_other_date_reports_fallback_issue() {
    let mut state = NewsletterState::default();
    let seq = state.begin_request("2025-01-01");
    state.apply_response(seq, response("2024-12-31", 1));
    assert_eq!(state.served_other_date(), Some("2024-12-31"));
}

#[test]
fn served_other_date_hidden_while_loading() {
    let mut state = NewsletterState::default();
    let seq = state.begin_request("2025-01-01");
    state.apply_response(seq, response("2024-12-31", 1));
    state.begin_request("2024-12-30");
    assert_eq!(state.served_other_date(), None);
}
