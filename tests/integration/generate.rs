use predicates::prelude::*;
use std::fs;

use super::common::TestEnv;

#[test]
fn test_generate_single_into_default_dir() {
    let env = TestEnv::new();

    env.command()
        .args(["research_plan", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Generated:"))
        .stdout(predicate::str::contains("research_plan_rust.prompt.md"))
        .stdout(predicate::str::contains("Location:"));

    let out = env.store.default_output_dir().join("research_plan_rust.prompt.md");
    let content = fs::read_to_string(out).unwrap();
    assert!(content.contains("**Build Command:** `cargo build`"));
    assert!(content.contains("**Linter:** `clippy`"));
    assert!(!content.contains("<!--"));
}

#[test]
fn test_generate_with_alias_feature_and_requirements() {
    let env = TestEnv::new();

    env.command()
        .args(["implementation_plan", "reactjs", "-f", "Shopping Cart", "-r", "Cart with coupons"])
        .assert()
        .success();

    let out = env
        .store
        .default_output_dir()
        .join("implementation_plan_react_Shopping_Cart.prompt.md");
    let content = fs::read_to_string(out).unwrap();
    assert!(content.starts_with("---\ndescription: implementation_plan for React (TypeScript)\n---\n"));
    assert!(content.contains("**User Requirements:**\nCart with coupons"));
    assert!(content.contains("Compose React.Component-free components."));
    assert!(!content.contains("Keep StatefulWidget"));
}

#[test]
fn test_generate_to_explicit_file() {
    let env = TestEnv::new();
    let target = env.base_dir().join("plans/go-plan.md");

    env.command()
        .args(["test_rules", "golang", "--output"])
        .arg(&target)
        .assert()
        .success();

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("Go section body."));
    assert!(content.contains("**Linter:** `golangci-lint`"));
}

#[test]
fn test_generate_into_existing_output_dir() {
    let env = TestEnv::new();
    let dir = env.base_dir().join("out");
    fs::create_dir_all(&dir).unwrap();

    env.command()
        .args(["ui_ux_bridge", "swiftui", "-o"])
        .arg(&dir)
        .assert()
        .success();

    assert!(dir.join("ui_ux_bridge_swift.prompt.md").is_file());
}

#[test]
fn test_generate_all() {
    let env = TestEnv::new();

    env.command()
        .args(["all", "kotlin", "--feature", "Shopping Cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating all prompts for kotlin..."))
        .stdout(predicate::str::contains("✓ Generated 6 files in"));

    for prefix in [
        "research_plan",
        "implementation_plan",
        "ui_ux_design",
        "ui_ux_bridge",
        "project_rules",
        "test_rules",
    ] {
        let file = env
            .store
            .default_output_dir()
            .join(format!("{prefix}_kotlin_Shopping_Cart.prompt.md"));
        assert!(file.is_file(), "missing {}", file.display());
    }
}

#[test]
fn test_generate_all_continues_past_missing_template() {
    let env = TestEnv::new();
    fs::remove_file(env.store.template_path(cursorflow::core::PromptType::UiUxDesign)).unwrap();

    env.command()
        .args(["all", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Failed to generate ui_ux_design: Template not found"))
        .stdout(predicate::str::contains("✓ Generated 5 files in"));
}

#[test]
fn test_base_dir_flag() {
    let env = TestEnv::new();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let mut cmd = env.command();
    cmd.current_dir(elsewhere.path())
        .arg("project_rules")
        .arg("ts")
        .arg("--base-dir")
        .arg(env.base_dir())
        .assert()
        .success();

    assert!(
        env.store
            .default_output_dir()
            .join("project_rules_typescript.prompt.md")
            .is_file()
    );
}
