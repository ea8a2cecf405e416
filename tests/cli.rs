use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("prcheck");
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

#[test]
fn advisories_only_pass() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".env", "TOKEN=1\n");
    write(tmp.path(), ".github/workflows/ci.yml", "on: push\n");
    write(tmp.path(), "README.md", "# hi\n");

    cmd(tmp.path())
        .args(["check", "--files", ".env", ".github/workflows/ci.yml", "README.md"])
        .assert()
        .success()
        .stdout(contains("warn .env:"))
        .stdout(contains("warn .github/workflows/ci.yml:"))
        .stdout(contains("0 blocking, 3 advisory"));
}

#[test]
fn console_call_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/app.ts", "console.log(\"x\")\n");

    cmd(tmp.path())
        .args(["check", "--files", "src/app.ts"])
        .assert()
        .code(1)
        .stdout(contains("fail src/app.ts:"))
        .stdout(contains("1 blocking"));
}

#[test]
fn schema_without_migration_fails() {
    let tmp = TempDir::new().unwrap();

    let output = cmd(tmp.path())
        .args(["check", "--format", "json", "--files", "schema.prisma"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["ok"], false);
    assert_eq!(value["blocking"], 1);
    // Summary plus the schema advisory.
    assert_eq!(value["advisory"], 2);
}

#[test]
fn schema_with_migration_passes() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "prisma/migrations/20240101_init/migration.sql",
        "CREATE TABLE a ();\n",
    );

    cmd(tmp.path())
        .args([
            "check",
            "--files",
            "schema.prisma",
            "prisma/migrations/20240101_init/migration.sql",
        ])
        .assert()
        .success()
        .stdout(contains("Schema changes detected"));
}

#[test]
fn missing_script_file_is_an_error() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .args(["check", "--files", "src/deleted.js"])
        .assert()
        .failure()
        .stdout(contains("blocking").not());
}

#[test]
fn disabled_policy_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/app.ts", "console.log(1)\n");
    write(
        tmp.path(),
        "prcheck.toml",
        "[debug_statements]\nenabled = false\n",
    );

    cmd(tmp.path())
        .args(["check", "--files", "src/app.ts"])
        .assert()
        .success();
}

#[test]
fn init_then_config() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created"));
    assert!(tmp.path().join("prcheck.toml").exists());

    cmd(tmp.path()).arg("init").assert().failure();

    cmd(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Loaded from"))
        .stdout(contains("[schema_migration]"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "README.md", "# hi\n");

    cmd(tmp.path())
        .args(["--config", "ci/prcheck.toml", "check", "--files", "README.md"])
        .assert()
        .failure()
        .stderr(contains("Config not found"));
}
