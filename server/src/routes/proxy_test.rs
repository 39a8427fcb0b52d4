use std::time::Duration;

use axum::http::HeaderValue;

use super::*;

#[test]
fn upstream_url_joins_origin_and_path() {
    assert_eq!(
        upstream_url("https://backend.test", "newsletter/2024-10-31", None),
        "https://backend.test/api/newsletter/2024-10-31"
    );
}

#[test]
fn upstream_url_keeps_query_string() {
    assert_eq!(
        upstream_url("http://127.0.0.1:5000", "subscribe", Some("lang=zh")),
        "http://127.0.0.1:5000/api/subscribe?lang=zh"
    );
    assert_eq!(upstream_url("http://a", "x", Some("")), "http://a/api/x");
}

#[test]
fn upstream_url_strips_leading_slashes() {
    assert_eq!(upstream_url("http://a", "/x/y", None), "http://a/api/x/y");
}

#[test]
fn hop_by_hop_headers_are_detected() {
    for name in ["connection", "transfer-encoding", "host", "upgrade", "content-length"] {
        assert!(is_hop_by_hop(&HeaderName::from_static(name)), "{name}");
    }
    for name in ["content-type", "accept-language", "cookie"] {
        assert!(!is_hop_by_hop(&HeaderName::from_static(name)), "{name}");
    }
}

#[test]
fn forwardable_headers_drops_connection_scoped_entries() {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("host", HeaderValue::from_static("localhost:3000"));

    let forwarded = forwardable_headers(&headers);
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded.get("content-type").unwrap(), "application/json");
}

async fn forward_get(state: ProxyState) -> StatusCode {
    forward(
        State(state),
        Method::GET,
        Path("newsletter/2024-10-31".to_owned()),
        RawQuery(None),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .status()
}

fn test_client() -> reqwest::Client {
    reqwest::Client::builder().timeout(Duration::from_secs(5)).build().unwrap()
}

#[tokio::test]
async fn forward_without_origin_is_not_found() {
    let state = ProxyState::new(test_client(), None);
    assert_eq!(forward_get(state).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forward_to_unreachable_origin_is_bad_gateway() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = ProxyState::new(test_client(), Some(format!("http://{addr}")));
    assert_eq!(forward_get(state).await, StatusCode::BAD_GATEWAY);
}
