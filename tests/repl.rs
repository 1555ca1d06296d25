mod common;

use common::Buffer;
use rocks::Rocks;

#[test]
fn a_bare_expression_statement_echoes_its_value() {
    let buffer = Buffer::default();
    let mut rocks = Rocks::new_with_writer(Box::new(buffer.clone()));

    rocks.run_line("1 + 1;");

    assert_eq!("2\n", buffer.contents());
}

#[test]
fn a_bare_nil_expression_produces_no_output() {
    let buffer = Buffer::default();
    let mut rocks = Rocks::new_with_writer(Box::new(buffer.clone()));

    rocks.run_line("nil;");

    assert_eq!("", buffer.contents());
}

#[test]
fn print_statements_are_unaffected_by_echo() {
    let buffer = Buffer::default();
    let mut rocks = Rocks::new_with_writer(Box::new(buffer.clone()));

    rocks.run_line("print nil;");

    assert_eq!("nil\n", buffer.contents());
}

#[test]
fn a_compile_error_on_one_line_does_not_poison_the_next() {
    let buffer = Buffer::default();
    let mut rocks = Rocks::new_with_writer(Box::new(buffer.clone()));

    rocks.run_line("var = ;");
    assert!(rocks.had_compile_error());

    rocks.run_line("print 1;");
    assert!(!rocks.had_compile_error());

    assert_eq!("1\n", buffer.contents());
}
