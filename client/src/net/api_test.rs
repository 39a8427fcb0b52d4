use super::*;

#[test]
fn newsletter_url_embeds_date() {
    assert_eq!(newsletter_url("2024-10-31"), "/api/newsletter/2024-10-31");
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response body: eof");
}

