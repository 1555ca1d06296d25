mod common;

use common::{assert_ok, run};

#[test]
fn length_reports_list_and_string_size() {
    assert_ok(r#"print length([1, 2, 3]); print length("hello");"#, &["3", "5"]);
}

#[test]
fn sqrt_and_exp_family() {
    assert_ok("print sqrt(9); print ln(E); print log10(100);", &["3", "1", "2"]);
}

#[test]
fn is_type_checks_the_runtime_tag() {
    assert_ok(
        r#"print isType(1, "number"); print isType("s", "number"); print isType([1], "list");"#,
        &["true", "false", "true"],
    );
}

#[test]
fn convert_between_representations() {
    assert_ok(
        r#"print convert("3.5", "number"); print convert(3, "string"); print convert("false", "boolean"); print convert("yes", "boolean");"#,
        &["3.5", "3", "false", "true"],
    );
}

#[test]
fn pi_and_e_are_predefined_constants() {
    assert_ok("print PI > 3.1; print E > 2.7;", &["true", "true"]);
}

#[test]
fn native_functions_stringify_with_their_name() {
    assert_ok("print clock;", &["<native fn clock>"]);
}

#[test]
fn calling_a_native_function_with_the_wrong_arity_is_a_runtime_error() {
    let result = run("sqrt(1, 2);");
    assert!(result.had_runtime_error);
}
