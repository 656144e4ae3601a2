// Author: Dustin Pilgrim
// License: MIT

use super::*;
use super::scanner::{bump, lookahead, peek_char, skip_whitespace_and_comments};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, GdError> {
    skip_whitespace_and_comments(lexer);

    let start = lexer.position();
    match peek_char(lexer) {
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('(') => tokenize_symbol(lexer, Token::LParen),
        Some(')') => tokenize_symbol(lexer, Token::RParen),
        Some(':') => tokenize_symbol(lexer, Token::Colon),
        Some(',') => tokenize_symbol(lexer, Token::Comma),
        Some('=') => tokenize_symbol(lexer, Token::Equals),
        Some('"') => tokenize_string(lexer, start),
        Some(c @ ('-' | '+')) => tokenize_signed(lexer, c, start),
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer, start),
        Some(c) if c.is_alphabetic() || c == '_' => tokenize_identifier_or_keyword(lexer),
        Some(ch) => tokenize_unexpected_char(lexer, ch, start),
        None => Ok(Token::Eof),
    }
}

pub(super) fn next_key(lexer: &mut Lexer) -> Result<String, GdError> {
    skip_whitespace_and_comments(lexer);

    let start = lexer.position();
    let mut key = String::new();
    while let Some(ch) = peek_char(lexer) {
        if is_key_char(ch) {
            key.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    if !key.is_empty() {
        return Ok(key);
    }

    match peek_char(lexer) {
        Some(ch) => tokenize_unexpected_char(lexer, ch, start).map(|_| key),
        None => Err(GdError::UnexpectedEof {
            message: "Expected a key".into(),
            offset: start.offset,
            line: start.line,
            column: start.column,
            hint: None,
            code: Some(105),
        }),
    }
}

pub(super) fn is_key_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '=' | '[' | ']' | '{' | '}' | '"' | ';')
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, GdError> {
    bump(lexer);
    Ok(token)
}

fn tokenize_string(lexer: &mut Lexer, start: Position) -> Result<Token, GdError> {
    bump(lexer); // consume opening '"'
    let mut content = String::new();

    loop {
        match bump(lexer) {
            Some('"') => return Ok(Token::String(content)),
            Some('\\') => {
                let escaped = match bump(lexer) {
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('r') => '\r',
                    Some('b') => '\u{8}',
                    Some('f') => '\u{c}',
                    Some(other) => other,
                    None => break,
                };
                content.push(escaped);
            }
            Some(ch) => content.push(ch),
            None => break,
        }
    }

    Err(GdError::UnclosedString {
        offset: start.offset,
        line: start.line,
        column: start.column,
        hint: Some("String literal not closed".into()),
        code: Some(103),
    })
}

fn tokenize_signed(lexer: &mut Lexer, sign: char, start: Position) -> Result<Token, GdError> {
    let mut rest = lookahead(lexer);
    match rest.next() {
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer, start),
        Some('i') if sign == '-' && rest.next() == Some('n') && rest.next() == Some('f') => {
            bump(lexer); // consume '-'
            match tokenize_identifier_or_keyword(lexer)? {
                Token::Float(f) if f.is_infinite() => Ok(Token::Float(-f)),
                _ => tokenize_unexpected_char(lexer, sign, start),
            }
        }
        _ => tokenize_unexpected_char(lexer, sign, start),
    }
}

fn tokenize_number(lexer: &mut Lexer, start: Position) -> Result<Token, GdError> {
    let mut literal = String::new();
    let mut is_float = false;

    if let Some(c @ ('-' | '+')) = peek_char(lexer) {
        literal.push(c);
        bump(lexer);
    }
    push_digits(lexer, &mut literal);

    if peek_char(lexer) == Some('.') {
        is_float = true;
        literal.push('.');
        bump(lexer);
        push_digits(lexer, &mut literal);
    }

    if let Some(e @ ('e' | 'E')) = peek_char(lexer) {
        // Only an exponent if digits follow, otherwise leave the 'e' for the next token
        let mut rest = lookahead(lexer);
        let has_exponent = match rest.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('-' | '+') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if has_exponent {
            is_float = true;
            literal.push(e);
            bump(lexer);
            if let Some(c @ ('-' | '+')) = peek_char(lexer) {
                literal.push(c);
                bump(lexer);
            }
            push_digits(lexer, &mut literal);
        }
    }

    let invalid = |literal: &str| GdError::InvalidNumber {
        literal: literal.to_string(),
        offset: start.offset,
        line: start.line,
        column: start.column,
        hint: None,
        code: Some(102),
    };

    if is_float {
        literal.parse::<f64>().map(Token::Float).map_err(|_| invalid(&literal))
    } else {
        literal.parse::<i64>().map(Token::Int).map_err(|_| invalid(&literal))
    }
}

fn push_digits(lexer: &mut Lexer, literal: &mut String) {
    while let Some(ch) = peek_char(lexer) {
        if ch.is_ascii_digit() {
            literal.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Result<Token, GdError> {
    let mut ident = String::new();

    while let Some(ch) = peek_char(lexer) {
        if is_ident_char(ch) {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    // Map keywords to their respective tokens
    let keyword = match ident.to_ascii_lowercase().as_str() {
        "true" => Some(Token::Bool(true)),
        "false" => Some(Token::Bool(false)),
        _ => None,
    };
    if let Some(token) = keyword {
        return Ok(token);
    }

    match ident.as_str() {
        "null" => return Ok(Token::Null),
        "inf" => return Ok(Token::Float(f64::INFINITY)),
        "nan" => return Ok(Token::Float(f64::NAN)),
        _ => {}
    }

    if let Some(len) = generic_suffix_len(lexer) {
        for _ in 0..len {
            if let Some(ch) = bump(lexer) {
                ident.push(ch);
            }
        }
        return Ok(Token::GenericIdent(ident));
    }

    Ok(Token::Ident(ident))
}

/// Length of a `[...]` type parameter directly after an identifier, counted
/// only when the whole name is followed by `(`. A bracket that is not part of
/// a constructor call (e.g. closing a section header) is left alone.
fn generic_suffix_len(lexer: &Lexer) -> Option<usize> {
    if peek_char(lexer) != Some('[') {
        return None;
    }

    let mut rest = lookahead(lexer);
    let mut len = 1;
    let mut next = rest.next();
    while let Some(c) = next {
        if is_ident_char(c) || c == '[' || c == ']' {
            len += 1;
            next = rest.next();
        } else {
            break;
        }
    }
    while let Some(' ' | '\t' | '\r' | '\n') = next {
        next = rest.next();
    }

    (next == Some('(')).then_some(len)
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char, start: Position) -> Result<Token, GdError> {
    bump(lexer);
    Err(GdError::UnexpectedCharacter {
        character: ch,
        offset: start.offset,
        line: start.line,
        column: start.column,
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    })
}
