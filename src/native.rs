use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::function::NativeFunction;
use crate::interpreter::Interpreter;
use crate::object::Object;

/// Populates `globals` with the builtin constants and functions available
/// to every script: math helpers, type introspection/conversion, list and
/// string utilities, and process/IO escape hatches.
pub fn define_globals(globals: &Rc<RefCell<Environment>>) {
    let mut env = globals.borrow_mut();

    env.define("PI", Object::Number(std::f64::consts::PI));
    env.define("E", Object::Number(std::f64::consts::E));

    for native in natives() {
        env.define(&native.name.clone(), Object::from(native));
    }
}

fn native(name: &str, arity: usize, function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>) -> NativeFunction {
    NativeFunction { name: name.to_string(), arity, function }
}

fn natives() -> Vec<NativeFunction> {
    vec![
        native("clock", 0, clock),
        native("input", 0, input),
        native("sleep", 1, sleep),
        native("exit", 1, exit),
        native("length", 1, length),
        native("sqrt", 1, sqrt),
        native("ln", 1, ln),
        native("log10", 1, log10),
        native("exp", 1, exp),
        native("randInt", 2, rand_int),
        native("randFloat", 2, rand_float),
        native("isType", 2, is_type),
        native("convert", 2, convert),
        native("print", 1, print),
    ]
}

fn as_number(value: &Object, function: &str) -> Result<f64, RuntimeError> {
    value.as_number().ok_or_else(|| wrong_type(function, "number"))
}

fn as_string<'a>(value: &'a Object, function: &str) -> Result<&'a str, RuntimeError> {
    match value {
        Object::String(s) => Ok(s),
        _ => Err(wrong_type(function, "string")),
    }
}

fn wrong_type(function: &str, want: &str) -> RuntimeError {
    let token = crate::token::Token::new(crate::token::Type::Identifier, function.to_string(), None, 0);
    RuntimeError::new(token, format!("Need arguments of type {want} for {function}."))
}

fn error(function: &str, message: impl Into<String>) -> RuntimeError {
    let token = crate::token::Token::new(crate::token::Type::Identifier, function.to_string(), None, 0);
    RuntimeError::new(token, message.into())
}

fn clock(_: &mut Interpreter, _: Vec<Object>) -> Result<Object, RuntimeError> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| panic!("system clock is before the unix epoch"));
    Ok(Object::Number(now.as_secs_f64()))
}

fn input(_: &mut Interpreter, _: Vec<Object>) -> Result<Object, RuntimeError> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)
        .map_err(|e| error("input", e.to_string()))?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Object::String(line))
}

fn sleep(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let seconds = as_number(&args[0], "sleep")?;
    if seconds <= 0.0 {
        return Err(error("sleep", "Need positive number for sleep."));
    }
    std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
    Ok(Object::Nil)
}

fn exit(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let code = as_number(&args[0], "exit")?;
    std::process::exit(code as i32);
}

fn length(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    match &args[0] {
        Object::List(items) => Ok(Object::Number(items.borrow().len() as f64)),
        Object::String(s) => Ok(Object::Number(s.chars().count() as f64)),
        _ => Err(wrong_type("length", "list or string")),
    }
}

fn sqrt(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    Ok(Object::Number(as_number(&args[0], "sqrt")?.sqrt()))
}

fn ln(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    Ok(Object::Number(as_number(&args[0], "ln")?.ln()))
}

fn log10(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    Ok(Object::Number(as_number(&args[0], "log10")?.log10()))
}

fn exp(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    Ok(Object::Number(as_number(&args[0], "exp")?.exp()))
}

fn rand_float(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let bottom = as_number(&args[0], "randFloat")?;
    let top = as_number(&args[1], "randFloat")?;
    Ok(Object::Number(pseudo_random(bottom, top)))
}

fn rand_int(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let bottom = as_number(&args[0], "randInt")?;
    let top = as_number(&args[1], "randInt")?;
    Ok(Object::Number(pseudo_random(bottom.trunc(), top.trunc() + 1.0).floor()))
}

/// Dependency-free uniform sampler seeded from the system clock. Good
/// enough for scripting use; not cryptographically meaningful.
fn pseudo_random(bottom: f64, top: f64) -> f64 {
    let seed = SystemTime::now().duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| panic!("system clock is before the unix epoch"))
        .subsec_nanos();
    let fraction = (seed as f64) / (u32::MAX as f64 + 1.0);
    bottom + fraction * (top - bottom)
}

fn is_type(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let want = as_string(&args[1], "isType")?;
    let matches = match want {
        "number" => matches!(args[0], Object::Number(_)),
        "boolean" => matches!(args[0], Object::Boolean(_)),
        "string" => matches!(args[0], Object::String(_)),
        "list" => matches!(args[0], Object::List(_)),
        other => return Err(error("isType", format!("Invalid type '{other}' passed to isType. Must be one of ['number', 'boolean', 'string', 'list'].")))
    };
    Ok(Object::Boolean(matches))
}

fn convert(_: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    let target = as_string(&args[1], "convert")?;
    let value = &args[0];

    match target {
        "number" => match value {
            Object::Number(n) => Ok(Object::Number(*n)),
            Object::String(s) => s.trim().parse::<f64>()
                .map(Object::Number)
                .map_err(|_| error("convert", format!("Cannot convert '{value}' to 'number'."))),
            Object::Boolean(b) => Ok(Object::Number(if *b { 1.0 } else { 0.0 })),
            _ => Err(error("convert", format!("Cannot convert '{value}' to 'number'."))),
        },
        "string" => Ok(Object::String(value.to_string())),
        "boolean" => {
            if let Object::String(s) = value {
                if s.eq_ignore_ascii_case("false") {
                    return Ok(Object::Boolean(false));
                }
            }
            Ok(Object::Boolean(value.is_truthy()))
        }
        other => Err(error("convert", format!("Invalid target type '{other}' for convert. Must be one of ['number', 'string', 'boolean']."))),
    }
}

fn print(interpreter: &mut Interpreter, args: Vec<Object>) -> Result<Object, RuntimeError> {
    interpreter.write_line(&args[0].to_string());
    Ok(Object::Nil)
}
