use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn port_and_host_are_read() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "http".to_owned() });
    assert!(err.to_string().contains("`http`"));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
