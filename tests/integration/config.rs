use predicates::prelude::*;
use std::fs;

use super::common::TestEnv;

#[test]
fn test_config_output_dir_is_used() {
    let env = TestEnv::new();
    let out = env.home().join("prompts-out");
    env.write_config(&format!("output_dir = \"{}\"\n", out.display()));

    env.command().args(["research_plan", "dart"]).assert().success();

    assert!(out.join("research_plan_dart.prompt.md").is_file());
}

#[test]
fn test_config_base_dir_is_used() {
    let env = TestEnv::new();
    env.write_config(&format!("base_dir = \"{}\"\n", env.base_dir().display()));
    let elsewhere = tempfile::TempDir::new().unwrap();

    let mut cmd = env.command();
    cmd.current_dir(elsewhere.path())
        .args(["test_rules", "java"])
        .assert()
        .success();

    assert!(env.store.default_output_dir().join("test_rules_java.prompt.md").is_file());
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let custom = env.home().join("custom.toml");
    let out = env.home().join("custom-out");
    fs::write(&custom, format!("output_dir = \"{}\"\n", out.display())).unwrap();

    env.command()
        .args(["research_plan", "android", "--config"])
        .arg(&custom)
        .assert()
        .success();

    assert!(out.join("research_plan_android.prompt.md").is_file());
}

#[test]
fn test_invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("output_dir = [");

    env.command()
        .args(["research_plan", "rust"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse global config"));
}
