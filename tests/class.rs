mod common;

use common::{assert_ok, run};

#[test]
fn methods_are_bound_to_their_instance() {
    assert_ok(
        "class Greeter { greet() { return \"hi, \" + this.name; } } var g = Greeter(); g.name = \"Ada\"; print g.greet();",
        &["hi, Ada"],
    );
}

#[test]
fn fields_can_be_read_and_written() {
    assert_ok(
        "class Box {} var b = Box(); b.value = 42; print b.value;",
        &["42"],
    );
}

#[test]
fn reading_an_undefined_property_is_a_runtime_error() {
    let result = run("class Box {} var b = Box(); print b.missing;");
    assert!(result.had_runtime_error);
}

#[test]
fn setting_a_field_on_a_non_instance_is_a_runtime_error() {
    let result = run("var x = 1; x.field = 2;");
    assert!(result.had_runtime_error);
}

#[test]
fn class_and_instance_stringify_per_convention() {
    assert_ok("class Box {} print Box; print Box();", &["<class Box>", "<class Box instance>"]);
}

#[test]
fn method_values_close_over_the_instance_that_bound_them() {
    assert_ok(
        "class Box { init(v) { this.v = v; } getter() { fun get() { return this.v; } return get; } } \
         var b = Box(7); var getter = b.getter(); print getter();",
        &["7"],
    );
}
