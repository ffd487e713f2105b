//! Integration tests for the envgen binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str, packages: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("envgen.yml"), config).unwrap();
    for package in packages {
        fs::create_dir_all(temp.path().join(package)).unwrap();
    }
    temp
}

fn envgen(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envgen"));
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env_remove("ENVGEN_STRICT")
        .arg("--no-color");
    cmd
}

const API_CONFIG: &str = r#"
packages:
  - package: api
    variables: [PORT]
globals: [ENV]
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envgen"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("per-package .env files"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envgen"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_config_argument() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envgen"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_generates_package_file_with_globals() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(API_CONFIG, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml").env("PORT", "8080").env("ENV", "prod");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Finished env files generation!"));

    assert_eq!(
        fs::read_to_string(temp.path().join("api/.env"))?,
        "PORT=8080\nENV=prod\n"
    );
    Ok(())
}

#[test]
fn cli_applies_branch_suffix() -> Result<(), Box<dyn std::error::Error>> {
    let config = r#"
branchVarName: CI_BRANCH
branchVarDefault: develop
branches:
  - name: main
    suffix: _PROD
packages:
  - package: api
    variables: [DB_URL]
"#;
    let temp = setup_project(config, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml")
        .env("CI_BRANCH", "main")
        .env("DB_URL_PROD", "x")
        .env_remove("DB_URL");
    cmd.assert().success();

    assert_eq!(fs::read_to_string(temp.path().join("api/.env"))?, "DB_URL=x\n");
    Ok(())
}

#[test]
fn cli_warns_about_missing_variables() -> Result<(), Box<dyn std::error::Error>> {
    let config = r#"
packages:
  - package: api
    variables: [ENVGEN_CLI_HOST, ENVGEN_CLI_ABSENT]
"#;
    let temp = setup_project(config, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml")
        .env("ENVGEN_CLI_HOST", "localhost")
        .env_remove("ENVGEN_CLI_ABSENT");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("[api] missing env vars: ENVGEN_CLI_ABSENT"));

    assert_eq!(
        fs::read_to_string(temp.path().join("api/.env"))?,
        "ENVGEN_CLI_HOST=localhost\n"
    );
    Ok(())
}

#[test]
fn cli_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Configuration not found"));
    Ok(())
}

#[test]
fn cli_invalid_config_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: {api: [PORT]}\n", &["api"]);
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml").env("PORT", "1");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));

    assert!(!temp.path().join("api/.env").exists());
    Ok(())
}

#[test]
fn cli_write_failure_does_not_stop_other_packages() -> Result<(), Box<dyn std::error::Error>> {
    let config = r#"
packages:
  - package: ghost
    variables: [ENVGEN_CLI_VALUE]
  - package: api
    variables: [ENVGEN_CLI_VALUE]
"#;
    let temp = setup_project(config, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.arg("envgen.yml").env("ENVGEN_CLI_VALUE", "v");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Could not write env files for: ghost"))
        .stderr(predicate::str::contains("[ghost]"));

    assert_eq!(
        fs::read_to_string(temp.path().join("api/.env"))?,
        "ENVGEN_CLI_VALUE=v\n"
    );
    Ok(())
}

#[test]
fn cli_preloads_env_files_without_overriding() -> Result<(), Box<dyn std::error::Error>> {
    let config = r#"
packages:
  - package: api
    variables: [ENVGEN_CLI_FROM_FILE, ENVGEN_CLI_FROM_ENV]
"#;
    let temp = setup_project(config, &["api"]);
    fs::write(
        temp.path().join("ci.env"),
        "ENVGEN_CLI_FROM_FILE=file\nENVGEN_CLI_FROM_ENV=file\n",
    )?;
    let mut cmd = envgen(&temp);
    cmd.args(["envgen.yml", "ci.env"])
        .env_remove("ENVGEN_CLI_FROM_FILE")
        .env("ENVGEN_CLI_FROM_ENV", "env");
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(temp.path().join("api/.env"))?,
        "ENVGEN_CLI_FROM_FILE=file\nENVGEN_CLI_FROM_ENV=env\n"
    );
    Ok(())
}

#[test]
fn cli_unreadable_env_file_is_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(API_CONFIG, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.args(["envgen.yml", "missing.env"])
        .env("PORT", "1")
        .env("ENV", "dev");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error loading env file"));

    assert!(temp.path().join("api/.env").exists());
    Ok(())
}

#[test]
fn cli_strict_fails_on_missing_variables() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(API_CONFIG, &["api"]);
    let mut cmd = envgen(&temp);
    cmd.args(["--strict", "envgen.yml"])
        .env("PORT", "1")
        .env_remove("ENV");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[globals] missing env vars: ENV"))
        .stderr(predicate::str::contains("Strict mode"));

    assert_eq!(fs::read_to_string(temp.path().join("api/.env"))?, "PORT=1\n");
    Ok(())
}

#[test]
fn cli_project_flag_sets_package_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(API_CONFIG, &["repo/api"]);
    let mut cmd = envgen(&temp);
    cmd.args(["--project", "repo", "envgen.yml"])
        .env("PORT", "2")
        .env("ENV", "test");
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(temp.path().join("repo/api/.env"))?,
        "PORT=2\nENV=test\n"
    );
    Ok(())
}

#[test]
fn cli_quiet_suppresses_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: []\n", &[]);
    let mut cmd = envgen(&temp);
    cmd.args(["--quiet", "envgen.yml"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Finished").not());
    Ok(())
}

#[test]
fn cli_piped_logs_have_no_ansi_codes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(API_CONFIG, &["api"]);

    let mut cmd = Command::new(cargo_bin("envgen"));
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env_remove("ENVGEN_STRICT")
        .env_remove("NO_COLOR")
        .env_remove("PORT")
        .env_remove("ENV")
        .args(["--debug", "envgen.yml"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("missing env vars"))
        .stderr(predicate::str::contains("\u{1b}[").not());
    Ok(())
}
