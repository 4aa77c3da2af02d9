use std::fs;

use pimbridge_contacts::{ConfigError, ContactsConfig};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn defaults() {
    let config = ContactsConfig::default();
    assert!(config.persist_photos);
    assert_eq!(config.single_result_limit, 1);
}

#[test]
fn empty_document_uses_defaults() {
    assert_eq!(ContactsConfig::from_toml_str("").unwrap(), ContactsConfig::default());
}

#[test]
fn parses_contacts_table() {
    let config = ContactsConfig::from_toml_str(
        r#"
        [contacts]
        persist-photos = false
        single-result-limit = 5
        "#,
    )
    .unwrap();
    assert!(!config.persist_photos);
    assert_eq!(config.single_result_limit, 5);
}

#[test]
fn partial_table_keeps_other_defaults() {
    let config = ContactsConfig::from_toml_str("[contacts]\npersist-photos = false\n").unwrap();
    assert_eq!(config.single_result_limit, 1);
}

#[test]
fn zero_limit_is_invalid() {
    let err = ContactsConfig::from_toml_str("[contacts]\nsingle-result-limit = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ContactsConfig::from_toml_str("[contacts\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// ── Loading from disk ────────────────────────────────────────────

#[test]
fn load_from_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.toml");
    fs::write(&path, "[contacts]\nsingle-result-limit = 3\n").unwrap();
    assert_eq!(ContactsConfig::load_from(&path).single_result_limit, 3);
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ContactsConfig::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, ContactsConfig::default());
}

#[test]
fn load_from_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.toml");
    fs::write(&path, "[contacts]\nsingle-result-limit = \"many\"\n").unwrap();
    assert_eq!(ContactsConfig::load_from(&path), ContactsConfig::default());
}
