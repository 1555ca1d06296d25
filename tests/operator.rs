mod common;

use common::assert_ok;

#[test]
fn arithmetic() {
    assert_ok("print 1 + 2; print 6 - 4; print 3 * 4; print 8 / 2;", &["3", "2", "12", "4"]);
}

#[test]
fn power_operator() {
    assert_ok("print 2 ^ 10;", &["1024"]);
}

#[test]
fn string_concatenation() {
    assert_ok(r#"print "foo" + "bar";"#, &["foobar"]);
}

#[test]
fn string_and_number_concatenation() {
    assert_ok(r#"print "count: " + 3;"#, &["count: 3"]);
}

#[test]
fn comparison() {
    assert_ok("print 1 < 2; print 2 <= 2; print 3 > 2; print 2 >= 3;", &["true", "true", "true", "false"]);
}

#[test]
fn equality_across_types_is_false_not_an_error() {
    assert_ok(r#"print 1 == "1"; print nil == false;"#, &["false", "false"]);
}

#[test]
fn negation() {
    assert_ok("print -3; print -(-3);", &["-3", "3"]);
}

#[test]
fn logical_not() {
    assert_ok("print !true; print !nil; print !0;", &["false", "true", "false"]);
}

#[test]
fn integral_numbers_print_without_trailing_zero() {
    assert_ok("print 4 / 2; print 1.5 * 2;", &["2", "3"]);
}

#[test]
fn adding_number_and_nil_is_a_runtime_error() {
    let result = common::run("print 1 + nil;");
    assert!(result.had_runtime_error);
}

#[test]
fn dividing_by_zero_is_a_runtime_error() {
    let result = common::run("print 1 / 0;");
    assert!(result.had_runtime_error);
}
