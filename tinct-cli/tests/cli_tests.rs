//! CLI integration tests against a fixture project.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  theme: {
    extend: {
      colors: {
        brand: {
          DEFAULT: 'var(--brand)',
          accent: 'var(--brand-accent)',
        },
      },
    },
  },
};
"#;

const SHEET: &str = r#":root {
  --brand: #1d4ed8;
  --brand-accent: #60a5fa;
}

.dark {
  --brand: #60a5fa;
  --brand-accent: #1e3a8a;
}
"#;

fn tinct_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tinct"))
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write fixture");
}

fn fixture_project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "tailwind.config.ts", CONFIG);
    write(dir.path(), "app/globals.css", SHEET);
    write(
        dir.path(),
        "src/Button.tsx",
        r#"export const Button = () => <button className="bg-brand-accent" />;"#,
    );
    dir
}

#[test]
fn add_writes_and_reports_success() {
    let project = fixture_project();

    tinct_cmd()
        .args(["add"])
        .arg(project.path())
        .args(["--name", "ink", "--color", "#00ff00"])
        .assert()
        .success()
        .stdout(contains("added color 'ink'"));

    let sheet = fs::read_to_string(project.path().join("app/globals.css")).expect("read");
    assert_eq!(sheet.matches("--ink: #00ff00;").count(), 2);
}

#[test]
fn rename_propagates_and_reports_success() {
    let project = fixture_project();

    tinct_cmd()
        .args(["rename"])
        .arg(project.path())
        .args(["brand-accent", "--name", "accent2"])
        .assert()
        .success()
        .stdout(contains("updated color 'brand-accent' -> 'accent2'"));

    let button = fs::read_to_string(project.path().join("src/Button.tsx")).expect("read");
    assert!(button.contains("bg-brand-accent2"));
}

#[test]
fn remove_unknown_group_fails_with_message() {
    let project = fixture_project();

    tinct_cmd()
        .args(["remove"])
        .arg(project.path())
        .args(["ghost"])
        .assert()
        .failure()
        .stderr(contains("unknown color group 'ghost'"));
}

#[test]
fn add_outside_a_project_fails_to_prepare() {
    let empty = TempDir::new().expect("tempdir");

    tinct_cmd()
        .args(["add"])
        .arg(empty.path())
        .args(["--name", "ink", "--color", "#fff"])
        .assert()
        .failure()
        .stderr(contains("Failed to prepare color update"));
}

#[test]
fn dry_run_prints_diff_and_writes_nothing() {
    let project = fixture_project();

    tinct_cmd()
        .args(["rename"])
        .arg(project.path())
        .args(["brand-accent", "--name", "accent2", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("--- a/tailwind.config.ts"))
        .stdout(contains("+++ b/tailwind.config.ts"));

    let config = fs::read_to_string(project.path().join("tailwind.config.ts")).expect("read");
    assert_eq!(config, CONFIG, "dry-run must not modify the config");
    let button = fs::read_to_string(project.path().join("src/Button.tsx")).expect("read");
    assert!(button.contains("bg-brand-accent"));
}

#[test]
fn scan_json_exposes_both_sides() {
    let project = fixture_project();

    let assert = tinct_cmd()
        .args(["scan"])
        .arg(project.path())
        .args(["--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(json["configContent"]["brand"]["DEFAULT"], "var(--brand)");
    assert_eq!(json["cssContent"]["root"]["brand-accent"], "#60a5fa");
    assert_eq!(json["cssContent"]["dark"]["brand"], "#60a5fa");
}

#[test]
fn scan_without_theme_reports_not_found() {
    let empty = TempDir::new().expect("tempdir");

    tinct_cmd()
        .args(["scan"])
        .arg(empty.path())
        .assert()
        .success()
        .stdout(contains("No Tailwind theme found"));
}
