use super::*;

#[test]
fn parses_well_formed_dates() {
    assert_eq!("2024-10-31".parse::<IssueDate>(), Ok(IssueDate { year: 2024, month: 10, day: 31 }));
    assert_eq!("2024-02-29".parse::<IssueDate>().map(|d| d.day), Ok(29));
}

#[test]
fn rejects_malformed_shapes() {
    for raw in ["2024-1-31", "2024/10/31", "20241031", "2024-10-31 ", "", "abcd-ef-gh", "+024-10-31"] {
        assert!(raw.parse::<IssueDate>().is_err(), "accepted {raw:?}");
    }
}

#[test]
fn rejects_impossible_calendar_days() {
    for raw in ["2023-02-29", "2024-04-31", "2024-13-01", "2024-00-10", "2024-10-00", "1900-02-29"] {
        assert!(raw.parse::<IssueDate>().is_err(), "accepted {raw:?}");
    }
    assert!("2000-02-29".parse::<IssueDate>().is_ok());
}

#[test]
fn display_round_trips_zero_padding() {
    let date: IssueDate = "2024-01-05".parse().unwrap();
    assert_eq!(date.to_string(), "2024-01-05");
}

#[test]
fn dates_order_chronologically() {
    let a: IssueDate = "2024-10-30".parse().unwrap();
    let b: IssueDate = "2024-10-31".parse().unwrap();
    let c: IssueDate = "2025-01-01".parse().unwrap();
    assert!(a < b && b < c);
}

#[test]
fn short_label_is_localized() {
    let date: IssueDate = "2024-10-31".parse().unwrap();
    assert_eq!(date.short_label(Locale::En), "Oct 31");
    assert_eq!(date.short_label(Locale::Zh), "10月31日");
}

#[test]
fn date_label_passes_through_unparseable() {
    assert_eq!(date_label("latest", Locale::En), "latest");
    assert_eq!(date_label("2024-01-02", Locale::En), "Jan 2");
}

#[test]
fn default_date_is_a_valid_issue_date() {
    assert!(DEFAULT_DATE.parse::<IssueDate>().is_ok());
    assert_eq!(newsletter_path(DEFAULT_DATE), "/newsletter/2024-10-31");
}
