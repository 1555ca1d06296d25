use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Diagnostics, RuntimeError, Signal};
use crate::expr::{Expr, LiteralValue};
use crate::function::Function;
use crate::native;
use crate::object::{Callable, Object};
use crate::stmt::Stmt;
use crate::token::{Token, Type};

/// Tree-walking evaluator. Owns the global scope and the currently active
/// scope chain; `locals` is the resolver's side-table mapping a resolvable
/// expression's `NodeId` to how many enclosing scopes to skip.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<u32, usize>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(output: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new(None)));
        native::define_globals(&globals);

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    pub fn resolve(&mut self, id: u32, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Writes a line through the interpreter's output sink. Used by the
    /// `print` statement and the `print` native function alike, so tests
    /// that inject a writer observe both paths.
    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        self.interpret_inner(statements, false, diagnostics);
    }

    /// Runs top-level statements. In REPL mode, a bare expression statement
    /// that evaluates to something other than `nil` has its value echoed,
    /// the way a REPL session lets you inspect a value without `print`.
    pub fn interpret_repl(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        self.interpret_inner(statements, true, diagnostics);
    }

    fn interpret_inner(&mut self, statements: &[Stmt], repl: bool, diagnostics: &mut Diagnostics) {
        for statement in statements {
            let result = if repl {
                if let Stmt::Expression(data) = statement {
                    self.evaluate(&data.expr).map(|value| {
                        if !matches!(value, Object::Nil) {
                            self.write_line(&value.to_string());
                        }
                    })
                } else {
                    self.execute(statement)
                }
            } else {
                self.execute(statement)
            };

            if let Err(signal) = result {
                match signal {
                    Signal::Error(err) => {
                        diagnostics.runtime_error(&err);
                        return;
                    }
                    Signal::Return(_) => return,
                }
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Signal> {
        match stmt {
            Stmt::Expression(data) => {
                self.evaluate(&data.expr)?;
                Ok(())
            }
            Stmt::Print(data) => {
                let value = self.evaluate(&data.expr)?;
                self.write_line(&value.to_string());
                Ok(())
            }
            Stmt::Var(data) => {
                let value = match &data.initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Object::Nil,
                };
                self.environment.borrow_mut().define(&data.name.lexeme, value);
                Ok(())
            }
            Stmt::Block(data) => {
                let scope = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
                self.execute_block(&data.statements, scope)
            }
            Stmt::If(data) => {
                if self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.then_branch)
                } else if let Some(else_branch) = &data.else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While(data) => {
                while self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.body)?;
                }
                Ok(())
            }
            Stmt::Function(decl) => {
                let function = Function::new(Rc::clone(decl), Rc::clone(&self.environment), false);
                self.environment.borrow_mut().define(&decl.name.lexeme, Object::from(function));
                Ok(())
            }
            Stmt::Return(data) => {
                let value = match &data.value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Object::Nil,
                };
                Err(Signal::Return(value))
            }
            Stmt::Class(data) => self.execute_class(data),
        }
    }

    fn execute_class(&mut self, data: &crate::stmt::ClassData) -> Result<(), Signal> {
        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let token = superclass_token(expr);
                        return Err(RuntimeError::new(token, "Superclass must be a class.").into());
                    }
                }
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::Nil);

        let methods_environment = if let Some(superclass) = &superclass {
            let scope = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            scope.borrow_mut().define("super", Object::from(Rc::clone(superclass)));
            scope
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(Rc::clone(method), Rc::clone(&methods_environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), Rc::new(function));
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))
            .map_err(Signal::Error)?;

        Ok(())
    }

    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> Result<(), Signal> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = (|| {
            for statement in statements {
                self.execute(statement)?;
            }
            Ok(())
        })();

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, Signal> {
        match expr {
            Expr::Literal(value) => Ok(match value {
                LiteralValue::Nil => Object::Nil,
                LiteralValue::Boolean(b) => Object::Boolean(*b),
                LiteralValue::Number(n) => Object::Number(*n),
                LiteralValue::String(s) => Object::String(s.clone()),
            }),
            Expr::Grouping(data) => self.evaluate(&data.expr),
            Expr::Unary(data) => self.evaluate_unary(data),
            Expr::Binary(data) => self.evaluate_binary(data),
            Expr::Logical(data) => self.evaluate_logical(data),
            Expr::Variable(data) => self.look_up_variable(data.id, &data.name).map_err(Signal::Error),
            Expr::Assign(data) => {
                let value = self.evaluate(&data.value)?;
                self.assign_variable(data.id, &data.name, value.clone()).map_err(Signal::Error)?;
                Ok(value)
            }
            Expr::Call(data) => self.evaluate_call(data),
            Expr::Get(data) => {
                let object = self.evaluate(&data.object)?;
                match object {
                    Object::Instance(instance) => {
                        let this = Object::Instance(Rc::clone(&instance));
                        instance.borrow().get(&data.name, &this).map_err(Signal::Error)
                    }
                    _ => Err(RuntimeError::new(data.name.clone(), "Only instances have properties.").into()),
                }
            }
            Expr::Set(data) => {
                let object = self.evaluate(&data.object)?;
                let Object::Instance(instance) = object else {
                    return Err(RuntimeError::new(data.name.clone(), "Only instances have fields.").into());
                };
                let value = self.evaluate(&data.value)?;
                instance.borrow_mut().set(&data.name, value.clone());
                Ok(value)
            }
            Expr::This(data) => self.look_up_variable(data.id, &data.keyword).map_err(Signal::Error),
            Expr::Super(data) => self.evaluate_super(data),
            Expr::List(data) => {
                let mut elements = Vec::with_capacity(data.elements.len());
                for element in &data.elements {
                    elements.push(self.evaluate(element)?);
                }
                Ok(Object::List(Rc::new(RefCell::new(elements))))
            }
            Expr::Access(data) => {
                let list = self.evaluate(&data.list)?;
                let index = self.evaluate(&data.index)?;
                self.index_list(&list, &index, &data.bracket).map_err(Signal::Error)
            }
            Expr::AccessSet(data) => {
                let list = self.evaluate(&data.list)?;
                let index = self.evaluate(&data.index)?;
                let value = self.evaluate(&data.value)?;
                self.assign_index(&list, &index, value.clone(), &data.bracket).map_err(Signal::Error)?;
                Ok(value)
            }
        }
    }

    fn evaluate_unary(&mut self, data: &crate::expr::UnaryData) -> Result<Object, Signal> {
        let right = self.evaluate(&data.expr)?;

        let result = match data.operator.r#type {
            Type::Minus => {
                let n = right.as_number()
                    .ok_or_else(|| RuntimeError::new(data.operator.clone(), "Operand must be a number."))?;
                Ok(Object::Number(-n))
            }
            Type::Bang => Ok(Object::Boolean(!right.is_truthy())),
            _ => unreachable!("unary operator outside {{-, !}}"),
        };

        result.map_err(Signal::Error)
    }

    fn evaluate_logical(&mut self, data: &crate::expr::LogicalData) -> Result<Object, Signal> {
        let left = self.evaluate(&data.left)?;

        if data.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn evaluate_binary(&mut self, data: &crate::expr::BinaryData) -> Result<Object, Signal> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let op = &data.operator;

        let result = match op.r#type {
            Type::Minus => Ok(Object::Number(number(&left, op)? - number(&right, op)?)),
            Type::Slash => {
                let (l, r) = (number(&left, op)?, number(&right, op)?);
                if r == 0.0 {
                    return Err(RuntimeError::new(op.clone(), "Cannot divide by 0.").into());
                }
                Ok(Object::Number(l / r))
            }
            Type::Star => Ok(Object::Number(number(&left, op)? * number(&right, op)?)),
            Type::Carat => Ok(Object::Number(number(&left, op)?.powf(number(&right, op)?))),
            Type::Plus => match (&left, &right) {
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                (Object::List(items), r) => {
                    let mut copy = items.borrow().clone();
                    copy.push(r.clone());
                    Ok(Object::List(Rc::new(RefCell::new(copy))))
                }
                (Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
                (Object::String(l), r) => Ok(Object::String(format!("{l}{r}"))),
                (l, Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
                _ => Err(RuntimeError::new(op.clone(), "Operands must be two numbers or two strings.")),
            },
            Type::Greater => Ok(Object::Boolean(number(&left, op)? > number(&right, op)?)),
            Type::GreaterEqual => Ok(Object::Boolean(number(&left, op)? >= number(&right, op)?)),
            Type::Less => Ok(Object::Boolean(number(&left, op)? < number(&right, op)?)),
            Type::LessEqual => Ok(Object::Boolean(number(&left, op)? <= number(&right, op)?)),
            Type::BangEqual => Ok(Object::Boolean(left != right)),
            Type::EqualEqual => Ok(Object::Boolean(left == right)),
            _ => unreachable!("binary operator outside the arithmetic/comparison/equality set"),
        };

        result.map_err(Signal::Error)
    }

    fn evaluate_call(&mut self, data: &crate::expr::CallData) -> Result<Object, Signal> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(function) => function.arity(),
            Object::NativeFunction(function) => function.arity(),
            Object::Class(class) => class.borrow().arity(),
            _ => return Err(RuntimeError::new(data.paren.clone(), "Can only call functions and classes.").into()),
        };

        if arity != arguments.len() {
            return Err(RuntimeError::new(
                data.paren.clone(),
                format!("Expected {arity} arguments but got {}.", arguments.len()),
            ).into());
        }

        let result = match &callee {
            Object::Function(function) => function.call(self, arguments),
            Object::NativeFunction(function) => function.call(self, arguments),
            Object::Class(class) => Class::construct(class, self, arguments),
            _ => unreachable!("callability already checked above"),
        };

        result.map_err(Signal::Error)
    }

    fn evaluate_super(&mut self, data: &crate::expr::SuperData) -> Result<Object, Signal> {
        let distance = *self.locals.get(&data.id)
            .unwrap_or_else(|| panic!("unresolved 'super' reference"));

        let superclass = self.environment.borrow().get_at(distance, &token_named("super"))
            .map_err(Signal::Error)?;
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' must resolve to a class");
        };

        let this = self.environment.borrow().get_at(distance - 1, &token_named("this"))
            .map_err(Signal::Error)?;

        let method = superclass.borrow().find_method(&data.method.lexeme)
            .ok_or_else(|| RuntimeError::new(data.method.clone(), format!("Undefined property '{}'.", data.method.lexeme)))
            .map_err(Signal::Error)?;

        Ok(Object::from(method.bind(this)))
    }

    fn look_up_variable(&self, id: u32, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn assign_variable(&mut self, id: u32, name: &Token, value: Object) -> Result<(), RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, name, value);
                Ok(())
            }
            None => self.globals.borrow_mut().assign(name, value),
        }
    }

    fn index_list(&self, list: &Object, index: &Object, bracket: &Token) -> Result<Object, RuntimeError> {
        let Object::List(items) = list else {
            return Err(RuntimeError::new(bracket.clone(), "Only lists support indexing."));
        };
        let items = items.borrow();
        let i = list_index(index, items.len(), bracket)?;
        Ok(items[i].clone())
    }

    fn assign_index(&self, list: &Object, index: &Object, value: Object, bracket: &Token) -> Result<(), RuntimeError> {
        let Object::List(items) = list else {
            return Err(RuntimeError::new(bracket.clone(), "Only lists support indexing."));
        };
        let mut items = items.borrow_mut();
        let i = list_index(index, items.len(), bracket)?;
        items[i] = value;
        Ok(())
    }
}

fn number(value: &Object, operator: &Token) -> Result<f64, RuntimeError> {
    value.as_number().ok_or_else(|| RuntimeError::new(operator.clone(), "Operands must be numbers."))
}

/// Resolves a (possibly negative) list index to an in-bounds offset, wrapping
/// negatives from the end (`-len <= i < len`).
fn list_index(index: &Object, len: usize, bracket: &Token) -> Result<usize, RuntimeError> {
    let n = index.as_number()
        .ok_or_else(|| RuntimeError::new(bracket.clone(), "List index must be a number."))?;
    if n.fract() != 0.0 {
        return Err(RuntimeError::new(bracket.clone(), "List index must be a whole number."));
    }
    let n = n as i64;
    let len = len as i64;
    if n >= len || n < -len {
        return Err(RuntimeError::new(bracket.clone(), "List index out of range."));
    }
    Ok((n.rem_euclid(len)) as usize)
}

fn superclass_token(expr: &Expr) -> Token {
    match expr {
        Expr::Variable(data) => data.name.clone(),
        _ => unreachable!("superclass expression must be a Variable"),
    }
}

fn token_named(name: &str) -> Token {
    Token::new(Type::Identifier, name.to_string(), None, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::resolver::Resolver;
    use crate::scanner::Scanner;

    fn run(source: &str) {
        let mut diagnostics = Diagnostics::new();
        let mut scanner = Scanner::new(source, &mut diagnostics);
        let tokens = scanner.scan_tokens();

        let mut parser = Parser::new(tokens, &mut diagnostics);
        let statements = parser.parse();

        let output: Vec<u8> = Vec::new();
        let mut interpreter = Interpreter::new(Box::new(output));

        {
            let mut resolver = Resolver::new(&mut interpreter, &mut diagnostics);
            resolver.resolve(&statements);
        }

        assert!(!diagnostics.had_compile_error(), "unexpected compile error");
        interpreter.interpret(&statements, &mut diagnostics);
        assert!(!diagnostics.had_runtime_error(), "unexpected runtime error");
    }

    #[test]
    fn arithmetic_respects_precedence() {
        run("print 1 + 2 * 3;");
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        run("fun makeCounter() { var i = 0; fun count() { i = i + 1; return i; } return count; } var c = makeCounter(); print c(); print c();");
    }

    #[test]
    fn class_initializer_returns_this_on_fallthrough() {
        run("class Box { init(v) { this.v = v; } } var b = Box(5); print b.v;");
    }

    #[test]
    fn inherited_methods_resolve_through_super() {
        run("class A { greet() { return \"a\"; } } class B < A { greet() { return super.greet() + \"b\"; } } print B().greet();");
    }

    #[test]
    fn list_indexing_reads_and_writes() {
        run("var xs = [1, 2, 3]; xs[1] = 9; print xs[1];");
    }
}
