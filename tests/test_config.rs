use std::collections::HashMap;
use std::path::PathBuf;

use typhoon::config::{Config, InterpreterConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.root, PathBuf::from("."));
    assert!(cfg.routing.static_extensions.iter().any(|e| e == "ico"));
    assert_eq!(cfg.routing.interpreters[0], InterpreterConfig::new(".js", "node"));
    assert_eq!(cfg.routing.interpreters.len(), 4);
}

#[test]
fn test_config_listen_override() {
    let cfg = Config::default().with_overrides(lookup(&[("LISTEN", "0.0.0.0:3000")]));

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.root, PathBuf::from("."));
}

#[test]
fn test_config_root_override() {
    let cfg = Config::default().with_overrides(lookup(&[("TYPHOON_ROOT", "/srv/www")]));

    assert_eq!(cfg.server.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_no_overrides() {
    let cfg = Config::default().with_overrides(lookup(&[]));

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml("server:\n  listen_addr: \"0.0.0.0:9000\"\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.server.root, PathBuf::from("."));
    assert_eq!(cfg.routing.interpreters.len(), 4);
}

#[test]
fn test_config_from_yaml_interpreters() {
    let yaml = "\
routing:
  interpreters:
    - extension: .py
      program: python3
    - extension: .lua
      program: lua
";
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        cfg.routing.interpreters,
        vec![
            InterpreterConfig::new(".py", "python3"),
            InterpreterConfig::new(".lua", "lua"),
        ]
    );
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typhoon.yaml");
    std::fs::write(&path, "server:\n  root: /tmp/site\n").unwrap();

    let cfg = Config::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.server.root, PathBuf::from("/tmp/site"));
}

#[test]
fn test_config_missing_file_is_error() {
    let err = Config::from_file("/nonexistent/typhoon.yaml").unwrap_err();

    assert!(format!("{:#}", err).contains("reading config file"));
}

#[test]
fn test_config_invalid_yaml_is_error() {
    assert!(Config::from_yaml("server: [1, 2").is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
