use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_garbage() {
    for raw in ["abc", "70000", "-1"] {
        let err = parse_port(Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "expected InvalidPort for {raw:?}");
    }
}

// =============================================================================
// parse_bind_addr
// =============================================================================

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_bind_addr(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_bind_addr_rejects_hostname() {
    let err = parse_bind_addr(Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}

// =============================================================================
// HostConfig
// =============================================================================

#[test]
fn default_socket_addr_listens_everywhere_on_3000() {
    let cfg = HostConfig::default();
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn socket_addr_combines_fields() {
    let cfg = HostConfig { bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 8081 };
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
}
