//! Rocks is a tree-walk interpreter for Lox, a small dynamically typed
//! scripting language with lexical scoping, closures and single-inheritance
//! classes. Rocks has no bytecode compiler or VM: a hand-written recursive
//! descent parser builds an AST, and the interpreter walks it directly.
//!
//! ## Pipeline
//! A run goes through four strictly staged passes:
//!
//! 1. **Scanning** ([`scanner`]) turns source text into a token stream.
//!    Lexical errors (an unterminated string, an unexpected character) are
//!    reported immediately but do not stop the scan, so multiple mistakes
//!    surface in one pass.
//! 2. **Parsing** ([`parser`]) builds the [`expr::Expr`]/[`stmt::Stmt`] AST
//!    via recursive descent. A parse error triggers panic-mode recovery
//!    (`synchronize`), which skips to the next statement boundary instead
//!    of aborting the whole parse.
//! 3. **Resolving** ([`resolver`]) is a static pre-pass that, for every
//!    variable/`this`/`super` reference, records how many enclosing scopes
//!    to skip to find its binding. This is what gives closures and shadowed
//!    locals their correct lexical semantics at runtime.
//! 4. **Interpreting** ([`interpreter`]) walks the resolved AST, evaluating
//!    expressions and executing statements against a chain of
//!    [`environment::Environment`]s.
//!
//! Each pass shares one [`error::Diagnostics`] sink; a compile-time error
//! in any of the first three stages skips interpretation entirely.

pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod native;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use std::fs;
use std::io::{self, Write};

use error::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Exit code used for a file run that failed to parse or resolve.
pub const EX_DATAERR: i32 = 65;
/// Exit code used for a file run that raised an uncaught runtime error.
pub const EX_SOFTWARE: i32 = 70;

/// Drives the scan -> parse -> resolve -> interpret pipeline over a
/// persistent interpreter, so a REPL session keeps its globals between
/// lines. Generic only in spirit: output is an owned trait object so the
/// type stays nameable from `main.rs` and from tests that inject a buffer.
pub struct Rocks {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
}

impl Rocks {
    pub fn new() -> Self {
        Self::new_with_writer(Box::new(io::stdout()))
    }

    /// Builds a `Rocks` whose `print` output is captured by `writer`
    /// instead of going to stdout. Used by integration tests to assert on
    /// program output without spawning a subprocess.
    pub fn new_with_writer(writer: Box<dyn Write>) -> Self {
        Rocks {
            interpreter: Interpreter::new(writer),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn had_compile_error(&self) -> bool {
        self.diagnostics.had_compile_error()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }

    /// Runs a whole script and exits the process on a compile or runtime
    /// error, matching a standard Unix tool's exit-code conventions.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("could not read script '{path}': {e}"));

        self.run(&contents, false);

        if self.diagnostics.had_compile_error() {
            std::process::exit(EX_DATAERR);
        }
        if self.diagnostics.had_runtime_error() {
            std::process::exit(EX_SOFTWARE);
        }
    }

    /// Runs a single REPL line. Compile errors are cleared between lines so
    /// one bad line doesn't poison the rest of the session; a runtime error
    /// is left recorded (see `Diagnostics::reset_compile_error`). Bare
    /// expression statements have their non-`nil` value echoed.
    pub fn run_line(&mut self, source: &str) {
        self.run(source, true);
        self.diagnostics.reset_compile_error();
    }

    /// Runs `source` as a complete script against a persistent interpreter,
    /// without the REPL's expression-echo behavior or process exit. Used by
    /// embedders and by the test suite to drive scripts in-process.
    pub fn run_source(&mut self, source: &str) {
        self.run(source, false);
    }

    fn run(&mut self, source: &str, repl: bool) {
        let mut scanner = Scanner::new(source, &mut self.diagnostics);
        let tokens = scanner.scan_tokens();

        let mut parser = Parser::new(tokens, &mut self.diagnostics);
        let statements = parser.parse();

        if self.diagnostics.had_compile_error() {
            return;
        }

        {
            let mut resolver = Resolver::new(&mut self.interpreter, &mut self.diagnostics);
            resolver.resolve(&statements);
        }

        if self.diagnostics.had_compile_error() {
            return;
        }

        if repl {
            self.interpreter.interpret_repl(&statements, &mut self.diagnostics);
        } else {
            self.interpreter.interpret(&statements, &mut self.diagnostics);
        }
    }
}

impl Default for Rocks {
    fn default() -> Self {
        Self::new()
    }
}
