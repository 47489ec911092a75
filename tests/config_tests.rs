// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use std::io::Write;
use tgcached::config::AppConfig;
use tgcached::models::ParseMode;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.logging.format, "compact");
    assert_eq!(config.defaults().unwrap().parse_mode, None);
}

#[test]
fn test_file_sets_default_parse_mode() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[defaults]\nparse_mode = \"HTML\"\n\n[logging]\nlevel = \"debug\"").unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.defaults().unwrap().parse_mode, Some(ParseMode::Html));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "compact");
}

#[test]
fn test_file_with_unknown_parse_mode_fails_on_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[defaults]\nparse_mode = \"wiki\"").unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert!(config.defaults().is_err());
}
