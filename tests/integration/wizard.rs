use predicates::prelude::*;
use std::fs;

use super::common::TestEnv;

#[test]
fn test_wizard_generates_all_into_default_folder() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("A flutter recipe app\nHome cooks\nmobile\noffline first\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CursorFlow Project Wizard"))
        .stdout(predicate::str::contains("a good default could be: flutter"))
        .stdout(predicate::str::contains("Project name   : a_flutter_recipe_app"))
        .stdout(predicate::str::contains("Done. Generated files:"));

    let folder = env.home().join("Desktop/CursorFlow");
    let plan = folder.join("research_plan_flutter_a_flutter_recipe_app.prompt.md");
    let content = fs::read_to_string(plan).unwrap();
    assert!(content.contains("## Project Idea\nA flutter recipe app"));
    assert!(content.contains("## Platforms\nmobile"));
    assert!(content.contains("**Generated for:** Flutter"));
}

#[test]
fn test_wizard_uses_configured_output_folder() {
    let env = TestEnv::new();
    let folder = env.home().join("wizard-out");
    env.write_config(&format!("wizard_output_dir = \"{}\"\n", folder.display()));

    env.command()
        .write_stdin("Payments api\n\n\n\n\nbilling\n\n\n")
        .assert()
        .success();

    assert!(folder.join("project_rules_python_billing.prompt.md").is_file());
}

#[test]
fn test_wizard_empty_description_aborts() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No description provided, aborting."));
}

#[test]
fn test_wizard_stdin_closed_midway_writes_nothing() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("A flutter app\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Input ended before the wizard finished. No files generated."))
        .stdout(predicate::str::contains("Generating files for").not());

    assert!(!env.home().join("Desktop/CursorFlow").exists());
}

#[test]
fn test_wizard_cancel() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("Todo website\n\n\n\n\n\n\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled. No files generated."));

    assert!(!env.home().join("Desktop/CursorFlow").exists());
}
