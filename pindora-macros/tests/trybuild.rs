#![allow(missing_docs)]

#[test]
fn ui() {
    if std::env::var_os("CARGO_TARPAULIN").is_some() {
        return;
    }

    let tests = trybuild::TestCases::new();
    tests.pass("tests/ui/inject_ok.rs");
    tests.pass("tests/ui/inject_crate_path_ok.rs");
}
