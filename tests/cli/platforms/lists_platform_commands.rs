use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn platforms_prints_default_table() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("windows  cmake -G \"Visual Studio 16 2019\" ../"))
        .stdout(predicate::str::contains("posix    cmake ../"));
}

#[test]
fn platforms_reflects_configure_section() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[configure]
program = "cmake3"
windows_generator = "Ninja"
extra_args = ["-Wno-dev"]
"#,
    );

    ctx.cli()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("windows  cmake3 -G Ninja -Wno-dev ../"))
        .stdout(predicate::str::contains("posix    cmake3 -Wno-dev ../"));
}
