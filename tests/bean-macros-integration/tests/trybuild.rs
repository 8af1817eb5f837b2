//! trybuild compile-time tests for bean_macros

#[test]
fn trybuild_bean_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/bean_ok.rs");
    t.pass("tests/trybuild/inject_ok.rs");
}
