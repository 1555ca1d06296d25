mod common;

use common::assert_ok;

#[test]
fn if_else() {
    assert_ok(
        r#"if (true) { print "yes"; } else { print "no"; } if (false) { print "yes"; } else { print "no"; }"#,
        &["yes", "no"],
    );
}

#[test]
fn if_without_else_is_optional() {
    assert_ok(r#"if (false) print "unreachable"; print "done";"#, &["done"]);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    assert_ok(
        r#"if (true) if (false) print "a"; else print "b";"#,
        &["b"],
    );
}

#[test]
fn while_loop() {
    assert_ok(
        "var i = 0; while (i < 3) { print i; i = i + 1; }",
        &["0", "1", "2"],
    );
}

#[test]
fn for_loop_desugars_into_a_while_loop() {
    assert_ok(
        "for (var i = 0; i < 3; i = i + 1) print i;",
        &["0", "1", "2"],
    );
}

#[test]
fn for_loop_clauses_are_all_optional() {
    assert_ok(
        "fun count() { var i = 0; for (;;) { if (i >= 2) return; print i; i = i + 1; } } count();",
        &["0", "1"],
    );
}
