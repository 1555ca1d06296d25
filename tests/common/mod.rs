use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rocks::Rocks;

/// An in-memory sink shared between a test and the `Rocks` instance it
/// drives, so `print` output can be asserted on without spawning a
/// subprocess.
#[derive(Clone, Default)]
pub struct Buffer(Rc<RefCell<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("program output is valid utf-8")
    }
}

pub struct Run {
    pub output: String,
    pub had_compile_error: bool,
    pub had_runtime_error: bool,
}

pub fn run(source: &str) -> Run {
    let buffer = Buffer::default();
    let mut rocks = Rocks::new_with_writer(Box::new(buffer.clone()));

    rocks.run_source(source);

    Run {
        output: buffer.contents(),
        had_compile_error: rocks.had_compile_error(),
        had_runtime_error: rocks.had_runtime_error(),
    }
}

/// Runs `source` and asserts it produced no compile/runtime error, then
/// checks stdout against `expected` joined with newlines (and a trailing
/// newline, matching `print`'s behavior).
pub fn assert_ok(source: &str, expected: &[&str]) {
    let result = run(source);
    assert!(!result.had_compile_error, "unexpected compile error for: {source}");
    assert!(!result.had_runtime_error, "unexpected runtime error for: {source}");

    let expected = if expected.is_empty() {
        String::new()
    } else {
        format!("{}\n", expected.join("\n"))
    };
    assert_eq!(expected, result.output);
}
