// tests/config_test.rs
use scaffold_kit::config::{find_config_file, load_config, Config, CONFIG_CANDIDATES};
use serial_test::serial;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile, TempDir};

struct CwdGuard {
    original: std::path::PathBuf,
}

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.scaffold_file, "scaffold.yaml");
    assert_eq!(config.ignore_file, ".scaffoldignore");
    assert_eq!(config.checklist_directory, ".");
    assert_eq!(config.checklist_file, "empty-files-checklist.txt");
    assert_eq!(config.tree_directory, ".");
    assert_eq!(config.tree_file, "tree.txt");
    assert_eq!(config.conventions.max_header_length, 72);
}

#[test]
fn test_load_yaml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let yaml_content = r#"
ignore_file: .gitignore
tree_directory: docs
conventions:
  max_header_length: 50
  protected_branches: [trunk]
"#;
    temp_file.write_all(yaml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.ignore_file, ".gitignore");
    assert_eq!(config.tree_directory, "docs");
    assert_eq!(config.tree_file, "tree.txt");
    assert_eq!(config.conventions.max_header_length, 50);
    assert_eq!(config.conventions.protected_branches, vec!["trunk"]);
    assert!(config
        .conventions
        .breaking_change_indicators
        .contains(&"BREAKING CHANGE:".to_string()));
}

#[test]
fn test_scaffold_file_is_kept_from_rc_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"scaffold_file: layout.yaml\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.scaffold_file, "layout.yaml");
    assert_eq!(config.ignore_file, ".scaffoldignore");
}

#[test]
fn test_load_json_file() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    temp_file
        .write_all(br#"{"checklist_file": "todo.txt", "conventions": {"exempt_prefixes": []}}"#)
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.checklist_file, "todo.txt");
    assert!(config.conventions.exempt_prefixes.is_empty());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"conventions: [not, a, map]").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(load_config(Some(missing.as_path())).is_err());
}

#[test]
fn test_candidate_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scaffoldkitrc.json"), "{}").unwrap();
    fs::write(dir.path().join(".scaffoldkitrc"), "tree_file: a.txt").unwrap();

    let found = find_config_file(dir.path()).unwrap();
    assert_eq!(found.file_name().unwrap(), ".scaffoldkitrc");
    assert_eq!(CONFIG_CANDIDATES[0], ".scaffoldkitrc.yaml");
}

#[test]
#[serial]
fn test_discovers_config_in_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".scaffoldkitrc.json"),
        r#"{"tree_file": "layout.txt"}"#,
    )
    .unwrap();

    let _guard = CwdGuard::enter(dir.path());
    let config = load_config(None).unwrap();
    assert_eq!(config.tree_file, "layout.txt");
}

#[test]
#[serial]
fn test_yaml_candidate_wins_over_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".scaffoldkitrc.yaml"), "tree_file: from-yaml.txt\n").unwrap();
    fs::write(
        dir.path().join(".scaffoldkitrc.json"),
        r#"{"tree_file": "from-json.txt"}"#,
    )
    .unwrap();

    let _guard = CwdGuard::enter(dir.path());
    let config = load_config(None).unwrap();
    assert_eq!(config.tree_file, "from-yaml.txt");
}
