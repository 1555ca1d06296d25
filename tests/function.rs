mod common;

use common::{assert_ok, run};

#[test]
fn calling_a_function_with_arguments() {
    assert_ok("fun add(a, b) { return a + b; } print add(1, 2);", &["3"]);
}

#[test]
fn functions_without_a_return_yield_nil() {
    assert_ok("fun nothing() {} print nothing();", &["nil"]);
}

#[test]
fn return_exits_early() {
    assert_ok(
        "fun first(a, b) { if (a) return \"a\"; return b; } print first(true, \"b\"); print first(false, \"b\");",
        &["a", "b"],
    );
}

#[test]
fn recursion() {
    assert_ok(
        "fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(10);",
        &["55"],
    );
}

#[test]
fn functions_are_first_class_values() {
    assert_ok(
        "fun add(a, b) { return a + b; } var op = add; print op(2, 3);",
        &["5"],
    );
}

#[test]
fn calling_with_the_wrong_arity_is_a_runtime_error() {
    let result = run("fun one(a) { return a; } print one(1, 2);");
    assert!(result.had_runtime_error);
}

#[test]
fn calling_a_non_callable_is_a_runtime_error() {
    let result = run("var x = 1; x();");
    assert!(result.had_runtime_error);
}

#[test]
fn function_stringifies_with_its_name() {
    assert_ok("fun greet() {} print greet;", &["<fn greet>"]);
}
