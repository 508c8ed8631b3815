use predicates::prelude::*;

use super::common::TestEnv;
use cursorflow::test_utils::TemplateStore;

#[test]
fn test_unsupported_language_lists_keys() {
    let env = TestEnv::new();

    env.command()
        .args(["research_plan", "cobol"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported language: cobol"))
        .stderr(predicate::str::contains(
            "android, csharp, dart, flutter, go, ios, java, kotlin, python, react, rust, swift, typescript",
        ));
}

#[test]
fn test_unsupported_prompt_type() {
    let env = TestEnv::new();

    env.command()
        .args(["essay", "rust"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported prompt type: essay"))
        .stderr(predicate::str::contains("test_rules, all"));
}

#[test]
fn test_missing_template() {
    let env = TestEnv::from_store(TemplateStore::empty().unwrap());

    env.command()
        .args(["research_plan", "rust"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template not found:"))
        .stderr(predicate::str::contains("research_plan_common.prompt.md"));
}

#[test]
fn test_all_with_unsupported_language_reports_failures_and_exits_zero() {
    let env = TestEnv::new();

    env.command()
        .args(["all", "cobol"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✗ Failed to generate research_plan"))
        .stdout(predicate::str::contains("✓ Generated 0 files in"));
}

#[test]
fn test_prompt_type_without_language_is_a_usage_error() {
    let env = TestEnv::new();

    env.command().arg("research_plan").assert().failure();
}

#[test]
fn test_output_flag_without_prompt_type_is_a_usage_error() {
    let env = TestEnv::new();

    env.command()
        .args(["-o", "plans"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("CursorFlow Project Wizard").not());
}
