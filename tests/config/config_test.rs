//! Coverage for config parsing, env overrides, and path resolution.

use std::path::PathBuf;

use rejoinder::config::{config_dir, config_path_with, RejoinderConfig, CONFIG_FILE_NAME};
use rejoinder::Letterhead;

fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn defaults_without_file() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let config = RejoinderConfig::load_from(dir.path().join("missing.toml")).expect("defaults");
    assert_eq!(config.letterhead, Letterhead::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.dir.is_none());
}

#[test]
fn parse_full_config() {
    let toml_str = r#"
[letterhead]
recipient_lines = ["Department of the Treasury", "Internal Revenue Service", "Ogden, UT 84201"]
greeting = "Dear Sir or Madam:"

[logging]
level = "debug"
dir = "/var/log/rejoinder"
"#;
    let config = RejoinderConfig::from_toml(toml_str).expect("config should parse");
    assert_eq!(config.letterhead.recipient_lines.len(), 3);
    assert_eq!(config.letterhead.greeting, "Dear Sir or Madam:");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.dir, Some(PathBuf::from("/var/log/rejoinder")));
}

#[test]
fn partial_sections_keep_defaults() {
    let config = RejoinderConfig::from_toml("[letterhead]\ngreeting = \"Hello:\"\n")
        .expect("config should parse");
    assert_eq!(config.letterhead.greeting, "Hello:");
    assert_eq!(
        config.letterhead.recipient_lines,
        vec!["Internal Revenue Service".to_owned()]
    );
}

#[test]
fn malformed_config_is_an_error() {
    assert!(RejoinderConfig::from_toml("[letterhead\n").is_err());
    assert!(RejoinderConfig::from_toml("[logging]\nlevel = 3\n").is_err());
}

#[test]
fn load_from_reads_file() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").expect("write config");
    let config = RejoinderConfig::load_from(&path).expect("load");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut config = RejoinderConfig::from_toml("[logging]\nlevel = \"warn\"\n")
        .expect("config should parse");
    config.apply_overrides(env_from(&[
        ("REJOINDER_RECIPIENT", "Department of the Treasury; Kansas City, MO"),
        ("REJOINDER_GREETING", " Dear Examiner: "),
        ("REJOINDER_LOG_LEVEL", "rejoinder=debug"),
        ("REJOINDER_LOG_DIR", "/tmp/rejoinder-logs"),
    ]));
    assert_eq!(
        config.letterhead.recipient_lines,
        vec![
            "Department of the Treasury".to_owned(),
            "Kansas City, MO".to_owned()
        ]
    );
    assert_eq!(config.letterhead.greeting, "Dear Examiner:");
    assert_eq!(config.logging.level, "rejoinder=debug");
    assert_eq!(config.logging.dir, Some(PathBuf::from("/tmp/rejoinder-logs")));
}

#[test]
fn blank_env_overrides_are_ignored() {
    let mut config = RejoinderConfig::default();
    config.apply_overrides(env_from(&[
        ("REJOINDER_RECIPIENT", " ; "),
        ("REJOINDER_GREETING", "  "),
    ]));
    assert_eq!(config.letterhead, Letterhead::default());
}

#[test]
fn config_path_prefers_env_then_user_dir() {
    let explicit = config_path_with(
        env_from(&[("REJOINDER_CONFIG_PATH", "/etc/rejoinder/custom.toml")]),
        None,
    );
    assert_eq!(explicit, PathBuf::from("/etc/rejoinder/custom.toml"));

    let user = PathBuf::from("/nonexistent-home/.rejoinder");
    let resolved = config_path_with(env_from(&[]), Some(user.clone()));
    if !PathBuf::from(CONFIG_FILE_NAME).exists() {
        assert_eq!(resolved, user.join(CONFIG_FILE_NAME));
    }
}

#[test]
fn config_dir_resolves() {
    let dir = config_dir();
    assert!(dir.is_ok());
    let path = match dir {
        Ok(path) => path,
        Err(err) => panic!("config dir should resolve: {err}"),
    };
    assert!(path.ends_with(".rejoinder"));
}
