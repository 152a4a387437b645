//! End-to-end tests loading real files from disk, mirroring typical
//! application usage of `load_config` / `load_config_with`.

use std::io::Write;

use confit::{load_config, load_config_with, ConfigValue, ParseError, Parser};
use tempfile::NamedTempFile;

const SMALL_CONFIG: &str = r#"
[common]
basic_size_limit = 26214400
student_size_limit = 52428800

[ftp]
name = "hello there, ftp uploading"
path = /tmp/
path<production> = /etc/var/uploads
path<staging> = /srv/uploads/
enabled = no

[http]
name = "http uploading"
path = /tmp/
path<production> = /srv/var/tmp/
params = array,of,values

; trailing comment
"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".conf").unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_small_config_without_overrides() {
    let file = write_temp(SMALL_CONFIG);
    let config = load_config(file.path().to_str().unwrap()).unwrap();

    // Absent keys at every level resolve to None.
    assert!(config.group("something").is_none());
    assert!(config.get("http", "something").is_none());

    assert_eq!(config.get("common", "student_size_limit"), Some(&ConfigValue::Integer(52428800)));
    assert_eq!(
        config.get("http", "params"),
        Some(&ConfigValue::List(vec![
            ConfigValue::from("array"),
            ConfigValue::from("of"),
            ConfigValue::from("values"),
        ]))
    );

    let ftp = config.group("ftp").unwrap();
    assert_eq!(ftp.get_str("name"), Some("hello there, ftp uploading"));
    assert_eq!(ftp.get_str("path"), Some("/tmp/"));
    assert_eq!(ftp.get_bool("enabled"), Some(false));
    assert_eq!(ftp.len(), 3);
}

#[test]
fn test_small_config_with_overrides() {
    let file = write_temp(SMALL_CONFIG);
    let config = load_config_with(
        file.path().to_str().unwrap(),
        ["production", "ubuntu"],
    )
    .unwrap();

    assert_eq!(config.get("common", "student_size_limit"), Some(&ConfigValue::Integer(52428800)));

    // The enabled production override wins; the staging one is dropped.
    let ftp = config.group("ftp").unwrap();
    assert_eq!(ftp.get_str("path"), Some("/etc/var/uploads"));
    assert_eq!(ftp.get_str("name"), Some("hello there, ftp uploading"));
    assert_eq!(ftp.get_bool("enabled"), Some(false));

    assert_eq!(config.group("http").unwrap().get_str("path"), Some("/srv/var/tmp/"));
}

#[test]
fn test_groups_come_back_in_file_order() {
    let file = write_temp(SMALL_CONFIG);
    let config = load_config(file.path().to_str().unwrap()).unwrap();
    let names: Vec<&str> = config.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["common", "ftp", "http"]);
}

#[test]
fn test_missing_group_error() {
    let file = write_temp("path = /tmp/\n[a]\n");
    let err = load_config(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::MissingGroup { line: 1, .. }));
}

#[test]
fn test_duplicate_group_error() {
    let file = write_temp("[a]\nx = 1\n[a]\n");
    let err = load_config(file.path().to_str().unwrap()).unwrap_err();
    match err {
        ParseError::DuplicateGroup { group, line, .. } => {
            assert_eq!(group, "a");
            assert_eq!(line, 3);
        }
        other => panic!("expected DuplicateGroup, got {other:?}"),
    }
}

#[test]
fn test_garbage_line_error() {
    let file = write_temp("[a]\nx = 1\ngarbage without equals\n");
    let err = load_config(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 3, .. }));
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let err = load_config("/nonexistent/confit-test/missing.conf").unwrap_err();
    match err {
        ParseError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_same_file_different_override_sets() {
    // Independent parse calls over the same file are fully independent.
    let file = write_temp(SMALL_CONFIG);
    let path = file.path().to_str().unwrap();

    let plain = load_config(path).unwrap();
    let production = load_config_with(path, ["production"]).unwrap();
    let staging = load_config_with(path, ["staging"]).unwrap();

    assert_eq!(plain.group("ftp").unwrap().get_str("path"), Some("/tmp/"));
    assert_eq!(production.group("ftp").unwrap().get_str("path"), Some("/etc/var/uploads"));
    assert_eq!(staging.group("ftp").unwrap().get_str("path"), Some("/srv/uploads/"));
}

#[test]
fn test_parse_lines_accepts_any_line_source() {
    let lines = vec!["[http]", "path = /tmp/", "enabled = no"];
    let config = Parser::new("inline.conf").parse_lines(lines).unwrap();
    assert_eq!(config.group("http").unwrap().get_bool("enabled"), Some(false));
}
