// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::lexer::{Lexer, Position, Token};
use crate::section::{GdSection, SectionHeader, SectionRegistry};
use crate::GdError;

mod section;
mod value;

/// Deepest nesting of lists, dictionaries and object arguments accepted.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent parser over a [`Lexer`].
///
/// Lookahead is filled lazily, so once a value or a header has been parsed
/// nothing past its last character has been consumed and [`Parser::offset`]
/// points right behind it.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<(Token, Position)>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            peek: None,
            depth: 0,
        }
    }

    pub fn new_at(input: &'a str, at: usize) -> Result<Self, GdError> {
        Ok(Self {
            lexer: Lexer::new_at(input, at)?,
            peek: None,
            depth: 0,
        })
    }

    /// Byte offset of the next unconsumed token or character.
    pub fn offset(&self) -> usize {
        match &self.peek {
            Some((_, pos)) => pos.offset,
            None => self.lexer.offset(),
        }
    }

    pub(crate) fn bump(&mut self) -> Result<(Token, Position), GdError> {
        if let Some(peeked) = self.peek.take() {
            return Ok(peeked);
        }
        self.lexer.peek_significant();
        let pos = self.lexer.position();
        let token = self.lexer.next_token()?;
        Ok((token, pos))
    }

    pub(crate) fn peek(&mut self) -> Result<&Token, GdError> {
        let next = match self.peek.take() {
            Some(peeked) => peeked,
            None => self.bump()?,
        };
        let (token, _) = self.peek.insert(next);
        Ok(token)
    }

    pub(crate) fn expect(&mut self, expected: Token, hint: &str) -> Result<Position, GdError> {
        let (token, pos) = self.bump()?;
        if token != expected {
            return Err(unexpected_token(&token, pos, &format!("Expected {:?}", expected), hint));
        }
        Ok(pos)
    }

    /// Next bare key. Char-level, so there must be no pending token lookahead.
    pub(crate) fn key(&mut self) -> Result<(String, Position), GdError> {
        debug_assert!(self.peek.is_none(), "key read with a pending token");
        self.lexer.peek_significant();
        let pos = self.lexer.position();
        let key = self.lexer.next_key()?;
        Ok((key, pos))
    }

    /// First significant character ahead (whitespace and comments skipped).
    pub(crate) fn peek_char(&mut self) -> Option<char> {
        debug_assert!(self.peek.is_none(), "char peek with a pending token");
        self.lexer.peek_significant()
    }

    pub(crate) fn position(&self) -> Position {
        match &self.peek {
            Some((_, pos)) => *pos,
            None => self.lexer.position(),
        }
    }

    /// Run a composite rule one nesting level deeper; `pos` is where the
    /// opening token sits.
    pub(crate) fn nested<T>(
        &mut self,
        pos: Position,
        rule: impl FnOnce(&mut Self) -> Result<T, GdError>,
    ) -> Result<T, GdError> {
        if self.depth >= MAX_DEPTH {
            return Err(GdError::SyntaxError {
                message: format!("Values nested deeper than {} levels", MAX_DEPTH),
                offset: pos.offset,
                line: pos.line,
                column: pos.column,
                hint: Some("Flatten the list, dictionary or object arguments".into()),
                code: Some(204),
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub fn parse_value(&mut self) -> Result<Value, GdError> {
        value::parse_value(self)
    }

    pub fn parse_header(&mut self) -> Result<SectionHeader, GdError> {
        section::parse_header(self)
    }

    pub fn parse_section(&mut self, registry: &SectionRegistry) -> Result<GdSection, GdError> {
        section::parse_section(self, |header| registry.construct(header))
    }
}

pub(crate) fn unexpected_token(token: &Token, pos: Position, message: &str, hint: &str) -> GdError {
    if *token == Token::Eof {
        return GdError::UnexpectedEof {
            message: message.to_string(),
            offset: pos.offset,
            line: pos.line,
            column: pos.column,
            hint: Some(hint.to_string()),
            code: Some(201),
        };
    }
    GdError::SyntaxError {
        message: format!("{}, got {:?}", message, token),
        offset: pos.offset,
        line: pos.line,
        column: pos.column,
        hint: Some(hint.to_string()),
        code: Some(202),
    }
}

/// Parse exactly one value starting at byte offset `at`.
///
/// Returns the value and the offset right after it.
///
/// # Examples
/// ```
/// use godot_parser::{parse_value, Value};
///
/// let (value, end) = parse_value("speed = 4.5", 8).unwrap();
/// assert_eq!(value, Value::Float(4.5));
/// assert_eq!(end, 11);
/// ```
pub fn parse_value(text: &str, at: usize) -> Result<(Value, usize), GdError> {
    let mut parser = Parser::new_at(text, at)?;
    let value = parser.parse_value()?;
    Ok((value, parser.offset()))
}

/// Parse one `[title key=value ...]` header starting at `at`.
pub fn parse_header(text: &str, at: usize) -> Result<(SectionHeader, usize), GdError> {
    let mut parser = Parser::new_at(text, at)?;
    let header = parser.parse_header()?;
    Ok((header, parser.offset()))
}

/// Parse one section (header and its property lines) starting at `at`, using
/// the process-wide section registry.
///
/// The returned offset sits at the next section header or at end of input, so
/// a caller can keep calling this until the text is exhausted.
///
/// # Examples
/// ```
/// use godot_parser::parse_section;
///
/// let text = "[ext_resource path=\"res://x.png\" type=\"Texture\" id=1]\n\n[node name=\"Root\" type=\"Node2D\"]\n";
/// let (first, next) = parse_section(text, 0).unwrap();
/// assert!(first.as_ext_resource().is_some());
/// let (second, end) = parse_section(text, next).unwrap();
/// assert!(second.as_node().is_some());
/// assert_eq!(end, text.len());
/// ```
pub fn parse_section(text: &str, at: usize) -> Result<(GdSection, usize), GdError> {
    let mut parser = Parser::new_at(text, at)?;
    let section = section::parse_section(&mut parser, crate::section::construct_global)?;
    Ok((section, parser.offset()))
}

/// Like [`parse_section`], against an explicit registry.
pub fn parse_section_with(
    registry: &SectionRegistry,
    text: &str,
    at: usize,
) -> Result<(GdSection, usize), GdError> {
    let mut parser = Parser::new_at(text, at)?;
    let section = parser.parse_section(registry)?;
    Ok((section, parser.offset()))
}

#[cfg(test)]
mod tests;
