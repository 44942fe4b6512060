#![allow(dead_code, unused_imports)]

#[cfg(unix)]
pub(crate) mod fake_cmake;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
