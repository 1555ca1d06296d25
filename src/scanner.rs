use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::Diagnostics;
use crate::token::{Literal, Token, Type};

/// Converts source text into a token stream. Implemented as a state
/// machine over a `peekmore` iterator so two-character operators and
/// number/comment lookahead don't need a separate buffering layer.
pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, diagnostics: &'a mut Diagnostics) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            diagnostics,
        }
    }

    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(Type::EOF, String::new(), None, self.line));
        std::mem::take(&mut self.tokens)
    }

    fn advance(&mut self) -> char {
        match self.source.next() {
            Some(c) => {
                self.current += 1;
                c
            }
            None => panic!("tried to advance past end of source"),
        }
    }

    fn peek(&mut self) -> char {
        self.source.peek().copied().unwrap_or('\0')
    }

    fn peek_next(&mut self) -> char {
        self.source.peek_next().copied().unwrap_or('\0')
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, r#type: Type, lexeme: String, literal: Option<Literal>) {
        self.tokens.push(Token::new(r#type, lexeme, literal, self.line));
    }

    fn is_at_end(&mut self) -> bool {
        self.source.peek().is_none()
    }

    fn string(&mut self) {
        self.advance();

        let line = self.line;
        let mut value = Vec::new();

        while self.peek() != '"' && !self.is_at_end() {
            let c = self.advance();
            if c == '\n' {
                self.line += 1;
            }
            value.push(c);
        }

        if self.is_at_end() {
            self.diagnostics.error_line(line, "Unterminated string.");
            return;
        }

        self.advance();

        let value: String = value.into_iter().collect();
        self.add_token(Type::String, value.clone(), Some(Literal::String(value)));
    }

    fn number(&mut self, first: char) {
        let mut value = vec![first];

        while self.peek().is_ascii_digit() {
            value.push(self.advance());
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            value.push(self.advance());
            while self.peek().is_ascii_digit() {
                value.push(self.advance());
            }
        }

        let value: String = value.into_iter().collect();
        let number: f64 = value.parse()
            .unwrap_or_else(|_| panic!("scanner produced a non-numeric number lexeme: {value}"));

        self.add_token(Type::Number, value, Some(Literal::Number(number)));
    }

    fn identifier(&mut self, first: char) {
        let mut value = vec![first];

        while self.peek().is_alphanumeric() || self.peek() == '_' {
            value.push(self.advance());
        }

        let value: String = value.into_iter().collect();
        let token_type = match value.as_str() {
            "and" => Type::And,
            "class" => Type::Class,
            "else" => Type::Else,
            "false" => Type::False,
            "for" => Type::For,
            "fun" => Type::Fun,
            "if" => Type::If,
            "nil" => Type::Nil,
            "or" => Type::Or,
            "print" => Type::Print,
            "return" => Type::Return,
            "super" => Type::Super,
            "this" => Type::This,
            "true" => Type::True,
            "var" => Type::Var,
            "while" => Type::While,
            _ => Type::Identifier,
        };

        self.add_token(token_type, value, None);
    }

    /// Consumes a `/* ... */` comment. Nesting is not supported; scanning
    /// stops at the first `*/`, or at end of file if it is never closed.
    fn block_comment(&mut self) {
        let line = self.line;
        let mut closed = false;

        while !self.is_at_end() {
            match (self.peek(), self.peek_next()) {
                ('*', '/') => {
                    self.advance();
                    self.advance();
                    closed = true;
                    break;
                }
                ('\n', _) => {
                    self.advance();
                    self.line += 1;
                }
                _ => {
                    self.advance();
                }
            }
        }

        if !closed {
            self.diagnostics.error_line(line, "Unterminated block comment.");
        }
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(Type::LeftParen, c.to_string(), None),
            ')' => self.add_token(Type::RightParen, c.to_string(), None),
            '{' => self.add_token(Type::LeftBrace, c.to_string(), None),
            '}' => self.add_token(Type::RightBrace, c.to_string(), None),
            '[' => self.add_token(Type::LeftBracket, c.to_string(), None),
            ']' => self.add_token(Type::RightBracket, c.to_string(), None),
            ',' => self.add_token(Type::Comma, c.to_string(), None),
            '.' => self.add_token(Type::Dot, c.to_string(), None),
            ';' => self.add_token(Type::Semicolon, c.to_string(), None),
            '^' => self.add_token(Type::Carat, c.to_string(), None),

            '-' => {
                if self.match_next('-') {
                    self.add_token(Type::MinusMinus, "--".to_string(), None);
                } else if self.match_next('=') {
                    self.add_token(Type::MinusEqual, "-=".to_string(), None);
                } else {
                    self.add_token(Type::Minus, c.to_string(), None);
                }
            }
            '+' => {
                if self.match_next('+') {
                    self.add_token(Type::PlusPlus, "++".to_string(), None);
                } else if self.match_next('=') {
                    self.add_token(Type::PlusEqual, "+=".to_string(), None);
                } else {
                    self.add_token(Type::Plus, c.to_string(), None);
                }
            }
            '*' => {
                if self.match_next('=') {
                    self.add_token(Type::StarEqual, "*=".to_string(), None);
                } else {
                    self.add_token(Type::Star, c.to_string(), None);
                }
            }
            '!' => {
                if self.match_next('=') {
                    self.add_token(Type::BangEqual, "!=".to_string(), None);
                } else {
                    self.add_token(Type::Bang, c.to_string(), None);
                }
            }
            '=' => {
                if self.match_next('=') {
                    self.add_token(Type::EqualEqual, "==".to_string(), None);
                } else {
                    self.add_token(Type::Equal, c.to_string(), None);
                }
            }
            '<' => {
                if self.match_next('=') {
                    self.add_token(Type::LessEqual, "<=".to_string(), None);
                } else {
                    self.add_token(Type::Less, c.to_string(), None);
                }
            }
            '>' => {
                if self.match_next('=') {
                    self.add_token(Type::GreaterEqual, ">=".to_string(), None);
                } else {
                    self.add_token(Type::Greater, c.to_string(), None);
                }
            }
            '/' => {
                if self.match_next('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_next('*') {
                    self.block_comment();
                } else if self.match_next('=') {
                    self.add_token(Type::SlashEqual, "/=".to_string(), None);
                } else {
                    self.add_token(Type::Slash, c.to_string(), None);
                }
            }

            ' ' | '\r' | '\t' => {}

            '\n' => {
                self.line += 1;
            }

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(c),
            c if c.is_alphabetic() || c == '_' => self.identifier(c),

            other => {
                self.diagnostics.error_line(self.line, &format!("Unexpected character '{other}'."));
            }
        }
    }
}
