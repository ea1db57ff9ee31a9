use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const DEFINITION: &str = r#"
apiVersion: primer.dev/v1
kind: Catalog
entries:
  - title: Observer
    category: behavioral-pattern
    explanation: Notify dependents of state changes.
  - title: Singleton
    category: creational-pattern
    explanation: Exactly one instance.
"#;

/// Run the binary in an isolated directory with no ambient catalog sources
fn run_primer(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(args)
        .current_dir(dir)
        .env_remove("PRIMER_CATALOG")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .output()
        .expect("Failed to execute primer")
}

fn workspace_with_definition() -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("primer.yaml"), DEFINITION).unwrap();
    dir
}

#[test]
fn test_cli_help_command() {
    let dir = tempdir().unwrap();
    let output = run_primer(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for command in ["show", "list", "search", "categories", "validate"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_show_uses_project_file() {
    let dir = workspace_with_definition();
    let output = run_primer(dir.path(), &["show", "observer", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "Observer");
    assert_eq!(value["category"], "behavioral-pattern");
}

#[test]
fn test_show_missing_entry_fails() {
    let dir = workspace_with_definition();
    let output = run_primer(dir.path(), &["show", "__does_not_exist__"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Entry not found: __does_not_exist__"));
}

#[test]
fn test_list_invalid_category_fails() {
    let dir = workspace_with_definition();
    let output = run_primer(dir.path(), &["list", "--category", "Quantum"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid category"));
}

#[test]
fn test_search_no_match_succeeds() {
    let dir = workspace_with_definition();
    let output = run_primer(dir.path(), &["search", "zzz-no-match"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No entries found."));
}

#[test]
fn test_builtin_catalog_when_no_file() {
    let dir = tempdir().unwrap();
    let output = run_primer(dir.path(), &["search", "singleton", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value
        .as_array()
        .unwrap()
        .iter()
        .any(|entry| entry["id"] == "singleton"));
}

#[test]
fn test_explicit_catalog_flag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, DEFINITION).unwrap();

    let output = run_primer(
        dir.path(),
        &["categories", "--json", "--catalog", path.to_str().unwrap()],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_validate_reports_broken_definition() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "apiVersion: primer.dev/v9\nkind: Catalog\n").unwrap();

    let output = run_primer(dir.path(), &["validate", path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unsupported apiVersion"));
}

#[test]
fn test_validate_good_definition() {
    let dir = workspace_with_definition();
    let output = run_primer(dir.path(), &["validate"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("OK (2 entries in 2 categories"));
}

#[test]
fn test_validate_path_with_missing_env_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("good.yaml");
    std::fs::write(&path, DEFINITION).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["validate", path.to_str().unwrap()])
        .current_dir(dir.path())
        .env("PRIMER_CATALOG", "/nope/missing.yaml")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute primer");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("OK (2 entries in 2 categories"));
}

#[test]
fn test_query_with_missing_env_catalog_fails() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["list"])
        .current_dir(dir.path())
        .env("PRIMER_CATALOG", "/nope/missing.yaml")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute primer");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("PRIMER_CATALOG points to a missing file"));
}
