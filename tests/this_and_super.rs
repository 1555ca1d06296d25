mod common;

use common::run;

#[test]
fn this_outside_a_class_is_a_compile_error() {
    let result = run("print this;");
    assert!(result.had_compile_error);
}

#[test]
fn this_inside_a_plain_function_is_a_compile_error() {
    let result = run("fun notAMethod() { print this; }");
    assert!(result.had_compile_error);
}

#[test]
fn super_outside_a_class_is_a_compile_error() {
    let result = run("print super.foo;");
    assert!(result.had_compile_error);
}

#[test]
fn super_in_a_class_with_no_superclass_is_a_compile_error() {
    let result = run("class A { method() { super.method(); } }");
    assert!(result.had_compile_error);
}
