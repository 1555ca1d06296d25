mod common;

use common::assert_ok;

#[test]
fn closures_capture_their_defining_environment() {
    assert_ok(
        "fun makeCounter() { var count = 0; fun increment() { count = count + 1; return count; } return increment; } \
         var counter = makeCounter(); print counter(); print counter(); print counter();",
        &["1", "2", "3"],
    );
}

#[test]
fn independent_closures_do_not_share_state() {
    assert_ok(
        "fun makeCounter() { var count = 0; fun increment() { count = count + 1; return count; } return increment; } \
         var a = makeCounter(); var b = makeCounter(); print a(); print a(); print b();",
        &["1", "2", "1"],
    );
}

#[test]
fn nested_functions_close_over_outer_locals() {
    assert_ok(
        "fun outer() { var x = \"outer\"; fun middle() { fun inner() { print x; } inner(); } middle(); } outer();",
        &["outer"],
    );
}

#[test]
fn closures_see_later_assignments_to_the_captured_variable() {
    assert_ok(
        "var a = \"before\"; fun showA() { print a; } showA(); a = \"after\"; showA();",
        &["before", "after"],
    );
}
