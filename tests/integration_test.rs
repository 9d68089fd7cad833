// tests/integration_test.rs
use std::process::Command;

fn recap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_recap"))
}

#[test]
fn test_recap_help() {
    let output = recap().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("recap"));
    assert!(stdout.contains("Parse Markdown release notes"));
}

#[test]
fn test_recap_version() {
    let output = recap().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_recap_text_output() {
    let output = recap()
        .args(["--file", "tests/fixtures/Releases.md"])
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let newest = stdout.find("1.1.1 - Fixes (patch)").expect("newest release listed");
    let oldest = stdout.find("1.0.0 - Initial Release (major)").expect("oldest release listed");
    assert!(newest < oldest);
    assert!(stdout.contains("New Feature [star, #FF0000FF]"));
}

#[test]
fn test_recap_json_output() {
    let output = recap()
        .args(["--file", "tests/fixtures/Releases.md", "--format", "json", "--since", "1.0.0"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["version"]["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["1.1.1", "1.1.0"]);
    assert_eq!(value[1]["resolved_colors"][0], "#30B0C7FF");
}

#[test]
fn test_recap_check_fails_on_warnings() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.md");
    std::fs::write(&path, "# 1.0.0\n## Nothing yet\n").unwrap();

    let output = recap()
        .arg("--file")
        .arg(&path)
        .arg("--check")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no features"));
}

#[test]
fn test_recap_missing_resource_is_not_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = recap()
        .arg("Absent")
        .arg("--dir")
        .arg(dir.path())
        .arg("--config")
        .arg("tests/fixtures/config_with_colors.toml")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}

#[test]
fn test_recap_duplicate_labels_follow_selection() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(
        &path,
        "# 1.0.0\n### major\n- title: A\n# 1.0.0\n### patch\n- title: B\n",
    )
    .unwrap();

    let output = recap()
        .arg("--file")
        .arg(&path)
        .args(["--format", "json", "--minimum-change", "minor"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let releases = value.as_array().unwrap();
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0]["version"]["change"], "major");
    assert_eq!(releases[0]["features"][0]["title"], "A");
}

#[test]
fn test_recap_rejects_unknown_minimum_change() {
    let output = recap()
        .args(["--file", "tests/fixtures/Releases.md", "--minimum-change", "majr"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("majr"));
}

#[test]
fn test_recap_minimum_change_ignores_case() {
    let output = recap()
        .args(["--file", "tests/fixtures/Releases.md", "--format", "json", "--minimum-change", "Major"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}
