use crate::harness::TestContext;

#[test]
fn failing_configure_is_ignored_by_default() {
    let ctx = TestContext::new();

    ctx.cli().arg("setup").env("FAKE_CMAKE_EXIT", "4").assert().success();

    assert!(ctx.cmake().was_invoked());
}

#[test]
fn propagate_flag_returns_configure_exit_code() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--exit-status", "propagate"])
        .env("FAKE_CMAKE_EXIT", "4")
        .assert()
        .code(4);
}

#[test]
fn propagate_from_config_file() {
    let ctx = TestContext::new();
    ctx.write_config("[configure]\nexit_status = \"propagate\"\n");

    ctx.cli().arg("setup").env("FAKE_CMAKE_EXIT", "3").assert().code(3);
}

#[test]
fn flag_overrides_config_policy() {
    let ctx = TestContext::new();
    ctx.write_config("[configure]\nexit_status = \"propagate\"\n");

    ctx.cli()
        .args(["setup", "--exit-status", "ignore"])
        .env("FAKE_CMAKE_EXIT", "3")
        .assert()
        .success();
}

#[test]
fn missing_program_is_a_warning_when_ignored() {
    let ctx = TestContext::new();
    ctx.write_config("[configure]\nprogram = \"buildprep-missing-tool\"\n");

    ctx.cli()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicates::str::contains("buildprep-missing-tool"));

    assert!(ctx.build_dir().is_dir());
}

#[test]
fn missing_program_fails_when_propagating() {
    let ctx = TestContext::new();
    ctx.write_config("[configure]\nprogram = \"buildprep-missing-tool\"\n");

    ctx.cli()
        .args(["setup", "--exit-status", "propagate"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Error:"));
}
