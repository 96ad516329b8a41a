#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::path::Path;

use counterd_gateway::config;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
counter:
  pth: "/tmp/counter.txt" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:5000");
    assert_eq!(cfg.counter.path, Path::new("/data/counter.txt"));
    assert!(cfg.admin.token.is_none());
}

#[test]
fn full_config_parses() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
counter:
  path: "/var/lib/counterd/value"
admin:
  token: "s3cret"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.counter.path, Path::new("/var/lib/counterd/value"));
    assert_eq!(cfg.admin.token.as_deref(), Some("s3cret"));
}

#[test]
fn wrong_version_is_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn invalid_listen_and_path_are_rejected() {
    let err = config::load_from_str("version: 1\ngateway:\n  listen: \"nope\"\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = config::load_from_str("version: 1\ncounter:\n  path: \"\"\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = config::load_from_str("version: 1\ncounter:\n  path: \"/\"\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn env_only_applies_compat_variables() {
    let cfg = config::load_with(env(&[
        ("COUNTER_PATH", "/tmp/c/counter.txt"),
        ("ADMIN_TOKEN", "secret"),
    ]))
    .expect("must load");

    assert_eq!(cfg.counter.path, Path::new("/tmp/c/counter.txt"));
    assert_eq!(cfg.admin.token.as_deref(), Some("secret"));
    assert_eq!(cfg.gateway.listen, "0.0.0.0:5000");
}

#[test]
fn env_without_values_keeps_defaults() {
    let cfg = config::load_with(env(&[])).expect("must load");
    assert_eq!(cfg.counter.path, Path::new("/data/counter.txt"));
    assert!(cfg.admin.token.is_none());
}

#[test]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("counterd.yaml");
    std::fs::write(
        &file,
        "version: 1\ncounter:\n  path: \"/from/file.txt\"\nadmin:\n  token: \"file-token\"\n",
    )
    .unwrap();
    let file = file.to_str().unwrap();

    let cfg = config::load_with(env(&[
        ("COUNTERD_CONFIG", file),
        ("COUNTER_PATH", "/from/env.txt"),
        ("COUNTERD_LISTEN", "127.0.0.1:7000"),
    ]))
    .expect("must load");

    assert_eq!(cfg.counter.path, Path::new("/from/env.txt"));
    assert_eq!(cfg.admin.token.as_deref(), Some("file-token"));
    assert_eq!(cfg.gateway.listen, "127.0.0.1:7000");
}

#[test]
fn empty_admin_token_env_clears_file_token() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("counterd.yaml");
    std::fs::write(
        &file,
        "version: 1\ncounter:\n  path: \"/from/file.txt\"\nadmin:\n  token: \"file-token\"\n",
    )
    .unwrap();

    let cfg = config::load_with(env(&[
        ("COUNTERD_CONFIG", file.to_str().unwrap()),
        ("COUNTER_PATH", ""),
        ("ADMIN_TOKEN", ""),
    ]))
    .expect("must load");

    assert_eq!(cfg.counter.path, Path::new("/from/file.txt"));
    assert!(cfg.admin.token.is_none());
}

#[test]
fn missing_config_file_is_internal() {
    let err = config::load_with(env(&[("COUNTERD_CONFIG", "/definitely/not/here.yaml")]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
