use crate::object::Object;
use crate::token::{Token, Type};

/// Runtime error: a message tied to the token whose evaluation raised it.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        RuntimeError { token, message: message.into() }
    }
}

/// Non-local control flow produced while executing a function body.
/// `return` unwinds the body via `Signal::Return` rather than an actual
/// panic; the call site that invoked the function catches it and yields
/// the carried value. Everything else that can interrupt execution is a
/// runtime error.
#[derive(Debug, Clone)]
pub enum Signal {
    Error(RuntimeError),
    Return(Object),
}

impl From<RuntimeError> for Signal {
    fn from(err: RuntimeError) -> Self {
        Signal::Error(err)
    }
}

/// Process-wide in the donor, but owned here by whoever drives a pipeline
/// run (see `Rocks` in lib.rs) so multiple interpreters can be embedded
/// without shared global state.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_compile_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn had_compile_error(&self) -> bool {
        self.had_compile_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears the compile-error flag. Called between REPL lines; the
    /// runtime-error flag is left alone so a failed line doesn't silently
    /// look successful, but it never aborts the session either.
    pub fn reset_compile_error(&mut self) {
        self.had_compile_error = false;
    }

    /// Reports a scan/parse-stage error at a raw line (no token available yet).
    pub fn error_line(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a parse/resolve-stage error at a token.
    pub fn error_token(&mut self, token: &Token, message: &str) {
        let location = if token.r#type == Type::EOF {
            "at end".to_string()
        } else {
            format!("at '{}'", token.lexeme)
        };
        self.report(token.line, &location, message);
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        if location.is_empty() {
            eprintln!("[line {line}] Error: {message}");
        } else {
            eprintln!("[line {line}] Error {location}: {message}");
        }
        self.had_compile_error = true;
    }

    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("[line {}] LoxRuntimeError: {}", error.token.line, error.message);
        self.had_runtime_error = true;
    }
}
