use crate::harness::TestContext;
use predicates::prelude::*;

const PROMPT: &str = "Finished. Press enter to exit...";

#[test]
fn no_prompt_by_default() {
    let ctx = TestContext::new();

    ctx.cli().arg("setup").assert().success().stdout(predicate::str::contains(PROMPT).not());
}

#[test]
fn pause_flag_waits_for_enter() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--pause"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(PROMPT));
}

#[test]
fn pause_happens_after_conflict_too() {
    let ctx = TestContext::new();
    ctx.write_config("[session]\npause_before_exit = true\n");
    ctx.write_file("build", "file");

    ctx.cli()
        .arg("setup")
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: some reserved directory paths"))
        .stdout(predicate::str::contains(PROMPT));
}

#[test]
fn no_pause_flag_overrides_config() {
    let ctx = TestContext::new();
    ctx.write_config("[session]\npause_before_exit = true\n");

    ctx.cli()
        .args(["setup", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains(PROMPT).not());
}
