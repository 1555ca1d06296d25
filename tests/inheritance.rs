mod common;

use common::{assert_ok, run};

#[test]
fn subclass_inherits_superclass_methods() {
    assert_ok(
        "class Animal { speak() { return \"...\"; } } class Dog < Animal {} print Dog().speak();",
        &["..."],
    );
}

#[test]
fn subclass_can_override_superclass_methods() {
    assert_ok(
        "class Animal { speak() { return \"...\"; } } class Dog < Animal { speak() { return \"woof\"; } } print Dog().speak();",
        &["woof"],
    );
}

#[test]
fn super_calls_the_overridden_method() {
    assert_ok(
        "class Animal { speak() { return \"...\"; } } \
         class Dog < Animal { speak() { return super.speak() + \" woof\"; } } \
         print Dog().speak();",
        &["... woof"],
    );
}

#[test]
fn a_class_cannot_inherit_from_itself() {
    let result = run("class Oops < Oops {}");
    assert!(result.had_compile_error);
}

#[test]
fn inheriting_from_a_non_class_is_a_runtime_error() {
    let result = run("var notAClass = 1; class Dog < notAClass {}");
    assert!(result.had_runtime_error);
}

#[test]
fn initializer_is_inherited_when_not_overridden() {
    assert_ok(
        "class Animal { init(name) { this.name = name; } } class Dog < Animal {} print Dog(\"Rex\").name;",
        &["Rex"],
    );
}
