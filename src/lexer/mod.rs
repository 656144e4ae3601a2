// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::GdError;

mod scanner;
mod tokenizer;

/// Whether `key` reads back as a single bare key: non-empty, without
/// whitespace, `=`, brackets, braces, quotes or `;`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(tokenizer::is_key_char)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    Ident(String),
    /// Identifier carrying a bracketed type parameter, e.g. `Array[int]`.
    /// Only produced when the name is followed by `(`.
    GenericIdent(String),
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,

    // --- structure ---
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Colon,
    Comma,
    Equals,

    // --- layout ---
    Eof,
}

/// Where a token (or the lexer itself) sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the full input.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            offset: 0,
            line: 1,
            column: 1,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    /// Start lexing at byte offset `at`, with line/column counted from the
    /// start of `input`.
    pub fn new_at(input: &'a str, at: usize) -> Result<Self, GdError> {
        if !input.is_char_boundary(at) {
            return Err(GdError::SyntaxError {
                message: format!("Offset {} is not a character boundary of the input", at),
                offset: at,
                line: 0,
                column: 0,
                hint: Some(format!("Input is {} bytes long", input.len())),
                code: Some(100),
            });
        }

        let before = &input[..at];
        let line = 1 + before.matches('\n').count();
        let column = 1 + before.rsplit('\n').next().map_or(0, |l| l.chars().count());

        let mut lexer = Lexer {
            input: input[at..].chars(),
            peek: None,
            offset: at,
            line,
            column,
        };
        lexer.peek = lexer.input.next();
        Ok(lexer)
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Next value-grammar token; whitespace, newlines and `;` comments are skipped.
    pub fn next_token(&mut self) -> Result<Token, GdError> {
        tokenizer::next_token(self)
    }

    /// Bare key on the left of `=` (header attributes and property lines).
    pub fn next_key(&mut self) -> Result<String, GdError> {
        tokenizer::next_key(self)
    }

    /// First significant character ahead, without consuming it.
    pub fn peek_significant(&mut self) -> Option<char> {
        scanner::skip_whitespace_and_comments(self);
        scanner::peek_char(self)
    }

    /// Consume one character; used after `peek_significant`.
    pub fn bump_char(&mut self) -> Option<char> {
        scanner::bump(self)
    }
}

#[cfg(test)]
mod tests;
