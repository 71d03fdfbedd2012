//! End-to-end tests for the `twconf` binary.
//!
//! Each test builds a throwaway project directory, runs the binary inside it,
//! and checks stdout, stderr, and the exit status.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PORTFOLIO_TOML: &str = r##"
darkMode = "class"
content = [
    "./apps/portfolio/templates/**/*.html",
    "./apps/blog/templates/**/*.html",
    "./templates/**/*.html",
]

[theme.extend.colors]
primary = "#6366f1"
secondary = "#a855f7"
accent = "#10b981"
darkBg = "#020617"

[theme.extend.fontFamily]
sans = ["Inter", "sans-serif"]
mono = ["Fira Code", "monospace"]
"##;

fn project(config_name: &str, config: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp project");
    fs::write(dir.path().join(config_name), config).expect("Failed to write config");
    dir
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture has a parent")).expect("Failed to create dirs");
    fs::write(path, "<main class=\"dark:bg-darkBg\"></main>").expect("Failed to write template");
}

fn twconf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("twconf").expect("Failed to locate twconf binary");
    cmd.current_dir(dir)
        .env_remove("TWCONF_CONFIG")
        .env_remove("TWCONF_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn check_reports_summary_for_discovered_config() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);

    twconf(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("tailwind.config.toml: ok"))
        .stdout(predicate::str::contains(
            "darkMode=class content=3 (excluded 0) extend=2 categories/6 tokens overrides=0 plugins=0",
        ));
}

#[test]
fn check_fails_on_unknown_dark_mode() {
    let dir = project("tailwind.config.toml", "darkMode = \"sometimes\"\n");

    twconf(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unrecognised darkMode strategy 'sometimes'"));
}

#[test]
fn check_fails_without_config() {
    let dir = TempDir::new().unwrap();

    twconf(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no config file found"));
}

#[test]
fn config_env_var_selects_file() {
    let dir = project("site.json", r#"{ "darkMode": "selector" }"#);

    twconf(dir.path())
        .env("TWCONF_CONFIG", dir.path().join("site.json"))
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("darkMode=selector"));
}

#[test]
fn show_prints_normalised_json() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);

    let output = twconf(dir.path())
        .args(["show", "--format", "json"])
        .output()
        .expect("Failed to run twconf");

    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(shown["darkMode"], "class");
    assert_eq!(shown["content"][2], "./templates/**/*.html");
    assert_eq!(shown["theme"]["extend"]["colors"]["primary"], "#6366f1");
    assert_eq!(
        shown["theme"]["extend"]["fontFamily"]["mono"],
        serde_json::json!(["Fira Code", "monospace"])
    );
}

#[test]
fn show_toml_output_loads_back() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);

    let output = twconf(dir.path()).arg("show").output().expect("Failed to run twconf");
    assert!(output.status.success());

    let normalised = TempDir::new().unwrap();
    fs::write(normalised.path().join("tailwind.config.toml"), &output.stdout).unwrap();
    twconf(normalised.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("extend=2 categories/6 tokens"));
}

#[test]
fn theme_category_shows_extension_over_defaults() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);

    let output = twconf(dir.path())
        .args(["theme", "--category", "fontFamily"])
        .output()
        .expect("Failed to run twconf");

    assert!(output.status.success());
    let theme: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let families = theme["fontFamily"].as_object().expect("fontFamily present");
    assert_eq!(families["sans"], serde_json::json!(["Inter", "sans-serif"]));
    assert!(families.contains_key("serif"), "default serif stack survives");
    assert!(theme.get("colors").is_none());
}

#[test]
fn theme_rejects_unknown_category_argument() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);

    twconf(dir.path())
        .args(["theme", "--category", "colours"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colours"));
}

#[test]
fn content_lists_matched_templates() {
    let dir = project("tailwind.config.toml", PORTFOLIO_TOML);
    touch(dir.path(), "apps/portfolio/templates/portfolio/index.html");
    touch(dir.path(), "templates/base.html");

    twconf(dir.path())
        .arg("content")
        .assert()
        .success()
        .stdout(predicate::str::contains("# ./apps/blog/templates/**/*.html (0 files)"))
        .stdout(predicate::str::contains("apps/portfolio/templates/portfolio/index.html"))
        .stdout(predicate::str::contains("templates/base.html"));
}

#[test]
fn relative_content_resolves_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("site");
    fs::create_dir_all(&site).unwrap();
    fs::write(
        site.join("tailwind.config.toml"),
        "content = { files = [\"./templates/*.html\"], relative = true }\n",
    )
    .unwrap();
    touch(&site, "templates/base.html");

    twconf(dir.path())
        .args(["--dir", "site", "content"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# root site\n"))
        .stdout(predicate::str::contains("# ./templates/*.html (1 files)"))
        .stdout(predicate::str::contains("templates/base.html"));
}
