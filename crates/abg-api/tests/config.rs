use std::collections::HashMap;

use abg_api::config::{ApiConfig, LogFormat};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_variables() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.cors_allow_any);
    assert!(!config.lambda);
}

#[test]
fn variables_override_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("ABG_BIND_ADDR", "127.0.0.1:8080"),
        ("ABG_LOG_FORMAT", "pretty"),
        ("ABG_CORS_ALLOW_ANY", "false"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(!config.cors_allow_any);
    assert!(config.lambda);
}

#[test]
fn invalid_values_name_the_variable() {
    let err = ApiConfig::from_lookup(lookup(&[("ABG_BIND_ADDR", "nowhere")])).unwrap_err();
    assert!(err.to_string().contains("ABG_BIND_ADDR"));

    let err = ApiConfig::from_lookup(lookup(&[("ABG_LOG_FORMAT", "xml")])).unwrap_err();
    assert!(err.to_string().contains("ABG_LOG_FORMAT"));

    let err = ApiConfig::from_lookup(lookup(&[("ABG_CORS_ALLOW_ANY", "maybe")])).unwrap_err();
    assert!(err.to_string().contains("ABG_CORS_ALLOW_ANY"));
}
