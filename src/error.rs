// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// Coarse classification of a [`GdError`].
///
/// Callers that only care whether the text was malformed or the value was
/// semantically invalid can match on this instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Validation,
    Type,
    Export,
}

/// The main error type for parsing, validating and exporting Godot text resources.
#[derive(Debug, Clone, PartialEq)]
pub enum GdError {
    SyntaxError {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for characters that cannot start any token.
    UnexpectedCharacter {
        character: char,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string literal is not closed before end of input.
    UnclosedString {
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidNumber {
        literal: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A literal parsed fine but violates a domain constraint (e.g. a colour
    /// component outside `[0, 1]`).
    ValidationError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A value was asked for as the wrong Rust type.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl GdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GdError::SyntaxError { .. }
            | GdError::UnexpectedCharacter { .. }
            | GdError::UnclosedString { .. }
            | GdError::InvalidNumber { .. }
            | GdError::UnexpectedEof { .. } => ErrorKind::Syntax,
            GdError::ValidationError { .. } => ErrorKind::Validation,
            GdError::TypeError { .. } => ErrorKind::Type,
            GdError::ExportError { .. } => ErrorKind::Export,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Byte offset into the parsed text, for syntax errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            GdError::SyntaxError { offset, .. }
            | GdError::UnexpectedCharacter { offset, .. }
            | GdError::UnclosedString { offset, .. }
            | GdError::InvalidNumber { offset, .. }
            | GdError::UnexpectedEof { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// `(line, column)`, both 1-based, for syntax errors.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            GdError::SyntaxError { line, column, .. }
            | GdError::UnexpectedCharacter { line, column, .. }
            | GdError::UnclosedString { line, column, .. }
            | GdError::InvalidNumber { line, column, .. }
            | GdError::UnexpectedEof { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    pub(crate) fn validation(message: impl Into<String>, hint: Option<&str>, code: u32) -> Self {
        GdError::ValidationError {
            message: message.into(),
            hint: hint.map(str::to_owned),
            code: Some(code),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for GdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GdError::SyntaxError { message, offset, line, column, hint, code } =>
                write!(f, "[GD] Syntax Error at {}:{} (offset {}): {}{}",
                    line, column, offset, message, suffix(hint, code)),
            GdError::UnexpectedCharacter { character, offset, line, column, hint, code } =>
                write!(f, "[GD] Unexpected character '{}' at {}:{} (offset {}){}",
                    character, line, column, offset, suffix(hint, code)),
            GdError::UnclosedString { offset, line, column, hint, code } =>
                write!(f, "[GD] Unclosed string starting at {}:{} (offset {}){}",
                    line, column, offset, suffix(hint, code)),
            GdError::InvalidNumber { literal, offset, line, column, hint, code } =>
                write!(f, "[GD] Invalid number '{}' at {}:{} (offset {}){}",
                    literal, line, column, offset, suffix(hint, code)),
            GdError::UnexpectedEof { message, offset, line, column, hint, code } =>
                write!(f, "[GD] Unexpected EOF at {}:{} (offset {}): {}{}",
                    line, column, offset, message, suffix(hint, code)),
            GdError::ValidationError { message, hint, code } =>
                write!(f, "[GD] Validation Error: {}{}", message, suffix(hint, code)),
            GdError::TypeError { message, hint, code } =>
                write!(f, "[GD] Type Error: {}{}", message, suffix(hint, code)),
            GdError::ExportError { message, hint, code } =>
                write!(f, "[GD] Export Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for GdError {}
