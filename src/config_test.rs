use super::*;

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 443 ")), Ok(443));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_bind_defaults_to_all_interfaces() {
    assert_eq!(parse_bind(None), Ok(IpAddr::V4(Ipv4Addr::UNSPECIFIED)));
}

#[test]
fn parse_bind_accepts_v4_and_v6() {
    assert_eq!(parse_bind(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(matches!(parse_bind(Some("::1")), Ok(IpAddr::V6(_))));
}

#[test]
fn parse_bind_rejects_hostnames() {
    assert_eq!(parse_bind(Some("localhost")), Err(ConfigError::InvalidBind("localhost".into())));
}

#[test]
fn addr_combines_bind_and_port() {
    let cfg = HostConfig { bind: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 3000 };
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:3000");
}

#[test]
fn from_env_reads_overrides() {
    // SAFETY: only this test touches these variables.
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("HOST_BIND", "127.0.0.1");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.bind, IpAddr::V4(Ipv4Addr::LOCALHOST));
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("HOST_BIND");
    }
}
