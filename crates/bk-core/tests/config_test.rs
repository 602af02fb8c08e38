use std::io::Write;

use bk_core::config::Config;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.log_level, "info");
    assert_eq!(cfg.locales.supported, vec!["ja", "en"]);
    assert_eq!(cfg.locales.default, "ja");
    assert!(cfg.skeleton.animate);
    assert_eq!(cfg.skeleton.label, "Loading...");
}

#[test]
fn config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("Loading..."));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.locales.supported, cfg.locales.supported);
    assert_eq!(parsed.skeleton.animate, cfg.skeleton.animate);
    parsed.validate().expect("config validates");
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[skeleton]
animate = false
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert!(!cfg.skeleton.animate);
    // defaults should fill in the rest
    assert_eq!(cfg.skeleton.label, "Loading...");
    assert_eq!(cfg.locales.default, "ja");
    cfg.validate().expect("config validates");
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[general]
log_level = "debug"

[locales]
supported = ["en"]
default = "en"
"#
    )
    .unwrap();

    let cfg = Config::load_from(file.path()).expect("load config");
    assert_eq!(cfg.general.log_level, "debug");
    assert_eq!(cfg.locales.default, "en");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(dir.path().join("absent.toml")).expect_err("should fail");
    assert!(err.to_string().starts_with("io:"));
}

#[test]
fn malformed_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[skeleton\nanimate = ").unwrap();
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(err.to_string().starts_with("parse:"));
}

#[test]
fn default_locale_outside_supported_fails_validation() {
    let mut cfg = Config::default();
    cfg.locales.default = "fr".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("locales.default"));
}

#[test]
fn empty_supported_locales_fails_validation() {
    let mut cfg = Config::default();
    cfg.locales.supported.clear();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("locales.supported"));
}

#[test]
fn blank_label_fails_validation() {
    let mut cfg = Config::default();
    cfg.skeleton.label = "   ".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("skeleton.label"));
}

#[test]
fn unknown_log_level_fails_validation() {
    let mut cfg = Config::default();
    cfg.general.log_level = "verbose".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("general.log_level"));
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn per_target_log_directives_validate() {
    let mut cfg = Config::default();
    cfg.general.log_level = "bk_core=debug, warn".to_string();
    cfg.validate().expect("config validates");

    cfg.general.log_level = "bk_core=loud".to_string();
    assert!(cfg.validate().is_err());

    cfg.general.log_level = "=debug".to_string();
    assert!(cfg.validate().is_err());

    cfg.general.log_level = String::new();
    assert!(cfg.validate().is_err());
}

#[test]
fn invalid_log_level_in_file_is_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general]\nlog_level = \"verbose\"").unwrap();
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(err.to_string().starts_with("validation:"));
}
