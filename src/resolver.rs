use std::collections::HashMap;
use std::mem;

use crate::error::Diagnostics;
use crate::expr::Expr;
use crate::interpreter::Interpreter;
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::Token;

#[derive(PartialEq, Eq, Clone, Copy)]
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Static scope pass. Walks the AST once before interpretation and records,
/// for every variable/`this`/`super` reference, how many enclosing scopes
/// to skip to find its binding at runtime (see `Interpreter::resolve`).
pub struct Resolver<'a> {
    interpreter: &'a mut Interpreter,
    diagnostics: &'a mut Diagnostics,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a> Resolver<'a> {
    pub fn new(interpreter: &'a mut Interpreter, diagnostics: &'a mut Diagnostics) -> Self {
        Resolver {
            interpreter,
            diagnostics,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(data) => {
                self.begin_scope();
                self.resolve(&data.statements);
                self.end_scope();
            }
            Stmt::Var(data) => {
                self.declare(&data.name);
                if let Some(initializer) = &data.initializer {
                    self.resolve_expr(initializer);
                }
                self.define(&data.name);
            }
            Stmt::Function(decl) => {
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl, FunctionType::Function);
            }
            Stmt::Expression(data) => self.resolve_expr(&data.expr),
            Stmt::If(data) => {
                self.resolve_expr(&data.condition);
                self.resolve_stmt(&data.then_branch);
                if let Some(else_branch) = &data.else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::Print(data) => self.resolve_expr(&data.expr),
            Stmt::Return(data) => {
                if self.current_function == FunctionType::None {
                    self.diagnostics.error_token(&data.keyword, "Can't return when not in a function.");
                }

                if let Some(value) = &data.value {
                    if self.current_function == FunctionType::Initializer {
                        self.diagnostics.error_token(&data.keyword, "Can't return a value from an initializer.");
                    }
                    self.resolve_expr(value);
                }
            }
            Stmt::While(data) => {
                self.resolve_expr(&data.condition);
                self.resolve_stmt(&data.body);
            }
            Stmt::Class(data) => self.resolve_class(data),
        }
    }

    fn resolve_class(&mut self, data: &crate::stmt::ClassData) {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&data.name);
        self.define(&data.name);

        if let Some(superclass) = &data.superclass {
            if let Expr::Variable(variable) = superclass {
                if data.name.lexeme == variable.name.lexeme {
                    self.diagnostics.error_token(&variable.name, "A class can't inherit from itself.");
                }
            }

            self.current_class = ClassType::Subclass;
            self.resolve_expr(superclass);

            self.begin_scope();
            self.scopes.last_mut().unwrap().insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes.last_mut().unwrap().insert("this".to_string(), true);

        for method in &data.methods {
            let kind = if method.name.lexeme == "init" {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };
            self.resolve_function(method, kind);
        }

        self.end_scope();

        if data.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}
            Expr::Variable(data) => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&data.name.lexeme) == Some(&false) {
                        self.diagnostics.error_token(&data.name, "Can't read local variable in its own initializer.");
                    }
                }
                self.resolve_local(data.id, &data.name);
            }
            Expr::Assign(data) => {
                self.resolve_expr(&data.value);
                self.resolve_local(data.id, &data.name);
            }
            Expr::Unary(data) => self.resolve_expr(&data.expr),
            Expr::Binary(data) => {
                self.resolve_expr(&data.left);
                self.resolve_expr(&data.right);
            }
            Expr::Logical(data) => {
                self.resolve_expr(&data.left);
                self.resolve_expr(&data.right);
            }
            Expr::Grouping(data) => self.resolve_expr(&data.expr),
            Expr::Call(data) => {
                self.resolve_expr(&data.callee);
                for arg in &data.arguments {
                    self.resolve_expr(arg);
                }
            }
            Expr::Get(data) => self.resolve_expr(&data.object),
            Expr::Set(data) => {
                self.resolve_expr(&data.value);
                self.resolve_expr(&data.object);
            }
            Expr::This(data) => {
                if self.current_class == ClassType::None {
                    self.diagnostics.error_token(&data.keyword, "Can't use 'this' outside of a class.");
                    return;
                }
                self.resolve_local(data.id, &data.keyword);
            }
            Expr::Super(data) => {
                match self.current_class {
                    ClassType::Subclass => {}
                    ClassType::None => {
                        self.diagnostics.error_token(&data.keyword, "Can't use 'super' outside of a class.");
                    }
                    ClassType::Class => {
                        self.diagnostics.error_token(&data.keyword, "Can't use 'super' in a class with no superclass.");
                    }
                }
                self.resolve_local(data.id, &data.keyword);
            }
            Expr::List(data) => {
                for element in &data.elements {
                    self.resolve_expr(element);
                }
            }
            Expr::Access(data) => {
                self.resolve_expr(&data.list);
                self.resolve_expr(&data.index);
            }
            Expr::AccessSet(data) => {
                self.resolve_expr(&data.list);
                self.resolve_expr(&data.index);
                self.resolve_expr(&data.value);
            }
        }
    }

    fn resolve_function(&mut self, function: &FunctionDecl, kind: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, kind);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else { return };

        if scope.contains_key(&name.lexeme) {
            self.diagnostics.error_token(name, "Already a variable with this name in this scope.");
        }
        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else { return };
        scope.insert(name.lexeme.clone(), true);
    }

    fn resolve_local(&mut self, id: u32, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, i);
                return;
            }
        }
    }
}
