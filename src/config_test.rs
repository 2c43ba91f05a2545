use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 8081 ")).unwrap(), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port(Some("http")), Err(HostError::InvalidPort(v)) if v == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(HostError::InvalidPort(_))));
}
