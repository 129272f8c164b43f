//! Compile-fail tests to verify error messages
//!
//! These tests ensure that unsupported struct shapes and malformed
//! annotations produce clear messages pointing at the offending tokens.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
