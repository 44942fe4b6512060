use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn setup_creates_build_dir_and_configures_inside_it() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Setting up build directory..."))
        .stdout(predicate::str::contains("-- Build directory is ready."))
        .stdout(predicate::str::contains("dependency cache").not());

    assert!(ctx.build_dir().is_dir());
    assert!(!ctx.work_dir().join("hunter").exists());

    let dirs = ctx.cmake().invocation_dirs();
    assert_eq!(dirs, vec![ctx.build_dir().canonicalize().unwrap()]);
    assert_eq!(ctx.cmake().invocation_args(), vec!["../".to_string()]);
}

#[test]
fn setup_alias_and_existing_build_dir_are_accepted() {
    let ctx = TestContext::new();
    ctx.write_file("build/CMakeCache.txt", "cached");

    ctx.cli().arg("s").assert().success();

    assert_eq!(
        std::fs::read_to_string(ctx.build_dir().join("CMakeCache.txt")).unwrap(),
        "cached"
    );
    assert_eq!(ctx.cmake().invocation_dirs().len(), 1);
}

#[test]
fn setup_honors_root_flag() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.parent_dir())
        .args(["--root", "project", "setup"])
        .assert()
        .success();

    assert!(ctx.build_dir().is_dir());
    assert_eq!(ctx.cmake().invocation_dirs(), vec![ctx.build_dir().canonicalize().unwrap()]);
}
