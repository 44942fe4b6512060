use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn plan_lists_actions_without_applying_them() {
    let ctx = TestContext::new();
    ctx.write_file("hunter/_Base/Cache/meta", "v1");

    ctx.cli()
        .args(["plan", "--dependency-cache", "--platform", "windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dependency cache: promoted project cache into shared cache",
        ))
        .stdout(predicate::str::contains("move "))
        .stdout(predicate::str::contains("Configure: cmake -G \"Visual Studio 16 2019\" ../"));

    assert!(!ctx.build_dir().exists());
    assert!(!ctx.project_base().is_symlink());
    assert!(ctx.project_base().join("Cache/meta").is_file());
    assert!(!ctx.shared_base().exists());
}

#[test]
fn plan_reports_existing_build_dir() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.build_dir()).unwrap();

    ctx.cli()
        .args(["p", "--platform", "posix", "--exit-status", "propagate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"))
        .stdout(predicate::str::contains("Configure: cmake ../ (exit status: propagate)"));
}

#[test]
fn plan_fails_on_conflict() {
    let ctx = TestContext::new();
    ctx.write_file("build", "file");

    ctx.cli()
        .args(["plan", "--platform", "posix"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: some reserved directory paths"));
}

#[test]
fn plan_rejects_unknown_platform() {
    let ctx = TestContext::new();

    ctx.cli().args(["plan", "--platform", "beos"]).assert().failure();
}
