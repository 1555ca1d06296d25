mod common;

use common::assert_ok;

#[test]
fn and_returns_the_first_falsey_operand_or_the_last() {
    assert_ok(
        r#"print false and "bad"; print true and 1; print 1 and 2 and 3;"#,
        &["false", "1", "3"],
    );
}

#[test]
fn or_returns_the_first_truthy_operand_or_the_last() {
    assert_ok(
        r#"print false or "ok"; print nil or false or "last"; print 1 or 2;"#,
        &["ok", "last", "1"],
    );
}

#[test]
fn and_short_circuits() {
    assert_ok(
        r#"fun bomb() { print "should not run"; return true; } print false and bomb();"#,
        &["false"],
    );
}

#[test]
fn or_short_circuits() {
    assert_ok(
        r#"fun bomb() { print "should not run"; return true; } print true or bomb();"#,
        &["true"],
    );
}
