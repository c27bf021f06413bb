use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8084);
    assert!(config.site_dir.ends_with("site"));
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.bind_addr(), "0.0.0.0:8084");
    assert_eq!(config.metrics_bind_addr(), "0.0.0.0:9084");
}

#[test]
fn explicit_values_override_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 9000 "),
        ("METRICS_PORT", "9100"),
        ("SITE_DIR", "/srv/site"),
        ("LOG_FORMAT", "JSON"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    assert_eq!(config.metrics_bind_addr(), "127.0.0.1:9100");
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn blank_values_count_as_unset() {
    let config = Config::from_lookup(lookup(&[("PORT", "  "), ("LOG_FORMAT", "")])).unwrap();
    assert_eq!(config.port, 8084);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "-1", "70000"] {
        let err = Config::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var: "PORT", ref value } if value == raw), "PORT={raw:?}");
    }
}

#[test]
fn invalid_metrics_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("METRICS_PORT", "prom")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid METRICS_PORT \"prom\"");
}

#[test]
fn invalid_log_format_is_rejected() {
    let err = Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid LOG_FORMAT \"xml\" (expected \"pretty\" or \"json\")");
}
