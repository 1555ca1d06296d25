mod common;

use common::{assert_ok, run};

#[test]
fn uninitialized_variable_is_nil() {
    assert_ok("var a; print a;", &["nil"]);
}

#[test]
fn redeclaring_a_global_is_allowed() {
    assert_ok("var a = 1; var a = 2; print a;", &["2"]);
}

#[test]
fn redeclaring_a_local_in_the_same_scope_is_a_compile_error() {
    let result = run("{ var a = 1; var a = 2; }");
    assert!(result.had_compile_error);
}

#[test]
fn assignment_returns_the_assigned_value() {
    assert_ok("var a = 1; print a = 2;", &["2"]);
}

#[test]
fn reading_an_undefined_variable_is_a_runtime_error() {
    let result = run("print missing;");
    assert!(result.had_runtime_error);
}

#[test]
fn shadowing_in_nested_blocks() {
    assert_ok(
        "var a = \"global\"; { var a = \"block\"; print a; } print a;",
        &["block", "global"],
    );
}
