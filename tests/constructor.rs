mod common;

use common::{assert_ok, run};

#[test]
fn init_runs_on_construction() {
    assert_ok(
        "class Point { init(x, y) { this.x = x; this.y = y; } } var p = Point(1, 2); print p.x; print p.y;",
        &["1", "2"],
    );
}

#[test]
fn init_always_returns_this_even_on_explicit_early_return() {
    assert_ok(
        "class Thing { init() { return; } } print Thing();",
        &["<class Thing instance>"],
    );
}

#[test]
fn returning_a_value_from_init_is_a_compile_error() {
    let result = run("class Thing { init() { return 1; } }");
    assert!(result.had_compile_error);
}

#[test]
fn class_arity_matches_its_initializer() {
    let result = run("class Point { init(x, y) { this.x = x; } } Point(1);");
    assert!(result.had_runtime_error);
}

#[test]
fn a_class_with_no_initializer_takes_no_arguments() {
    assert_ok("class Empty {} var e = Empty(); print e;", &["<class Empty instance>"]);
}
