use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn file_at_build_path_exits_with_conflict() {
    let ctx = TestContext::new();
    let build = ctx.write_file("build", "not a directory");

    ctx.cli()
        .args(["setup", "--dependency-cache"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "ERROR: some reserved directory paths are occupied by files.",
        ))
        .stdout(predicate::str::contains(build.to_string_lossy().as_ref()));

    assert!(build.is_file());
    assert!(!ctx.work_dir().join("hunter").exists());
    assert!(!ctx.parent_dir().join("hunter").exists());
    assert!(!ctx.cmake().was_invoked());
}

#[test]
fn file_at_cache_path_exits_with_conflict() {
    let ctx = TestContext::new();
    ctx.write_file("hunter", "stray file");

    ctx.cli()
        .args(["setup", "--dependency-cache"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("hunter"));

    assert!(!ctx.build_dir().exists());
    assert!(!ctx.cmake().was_invoked());
}

#[test]
fn cache_paths_are_not_reserved_when_cache_is_off() {
    let ctx = TestContext::new();
    ctx.write_file("hunter", "unrelated file");

    ctx.cli().arg("setup").assert().success();

    assert!(ctx.build_dir().is_dir());
}
