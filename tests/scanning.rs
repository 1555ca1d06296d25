mod common;

use common::{assert_ok, run};

#[test]
fn line_comments_are_ignored() {
    assert_ok("// this is ignored\nprint 1; // also ignored", &["1"]);
}

#[test]
fn block_comments_are_ignored() {
    assert_ok("/* this\n   spans lines */ print 1;", &["1"]);
}

#[test]
fn block_comments_do_not_nest_and_close_at_the_first_terminator() {
    // The inner `/*` does not open a nested comment, so the block comment
    // closes at its first `*/` and the rest of the line is real code.
    assert_ok("/* outer /* inner */ print 1;", &["1"]);
}

#[test]
fn unterminated_string_is_a_compile_error() {
    let result = run("print \"unterminated;");
    assert!(result.had_compile_error);
}

#[test]
fn unexpected_character_is_a_compile_error() {
    let result = run("print 1 @ 2;");
    assert!(result.had_compile_error);
}

#[test]
fn block_scoping() {
    assert_ok(
        "var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
        &["inner", "outer"],
    );
}
