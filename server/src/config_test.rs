use super::*;

// =============================================================================
// Pure parsers
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn parse_port_rejects_garbage() {
    for raw in ["http", "-1", "70000"] {
        let err = parse_port(Some(raw)).unwrap_err().to_string();
        assert!(err.contains("invalid PORT"), "{raw}: {err}");
    }
}

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_HOST);
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap().to_string(), "127.0.0.1");
    assert!(parse_host(Some("localhost")).is_err());
}

#[test]
fn parse_api_origin_is_optional() {
    assert_eq!(parse_api_origin(None).unwrap(), None);
    assert_eq!(parse_api_origin(Some("")).unwrap(), None);
}

#[test]
fn parse_api_origin_trims_trailing_slash() {
    assert_eq!(
        parse_api_origin(Some("https://backend.example.com/")).unwrap().as_deref(),
        Some("https://backend.example.com")
    );
    assert_eq!(parse_api_origin(Some("http://127.0.0.1:5000")).unwrap().as_deref(), Some("http://127.0.0.1:5000"));
}

#[test]
fn parse_api_origin_requires_http_scheme_and_host() {
    for raw in ["backend.example.com", "ftp://backend", "https://", "https:///"] {
        assert!(parse_api_origin(Some(raw)).is_err(), "accepted {raw:?}");
    }
}

// =============================================================================
// from_env — uses only the real variable names, so keep these in one test.
// =============================================================================

#[test]
fn from_env_reads_overrides_and_defaults() {
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("API_ORIGIN", "https://api.example.test/");
        std::env::remove_var("HOST");
        std::env::remove_var("API_PROXY_TIMEOUT_SECS");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.api_origin.as_deref(), Some("https://api.example.test"));
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:4100");

    unsafe {
        std::env::set_var("PORT", "not-a-port");
    }
    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidPort(_))));

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("API_ORIGIN");
    }
}
