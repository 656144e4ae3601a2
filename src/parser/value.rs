// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::*;
use crate::ast::GdObject;

/// One value. Plain `Name(...)` objects and `Name[T](...)` generic objects are
/// told apart by the lexer, which only emits a generic identifier when the
/// bracketed name is followed by `(`; everything else falls through to the
/// plain rules first.
pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, GdError> {
    let (token, pos) = parser.bump()?;
    match token {
        Token::Null => Ok(Value::Null),
        Token::String(s) => Ok(Value::String(s)),
        Token::Bool(b) => Ok(Value::Bool(b)),
        Token::Int(i) => Ok(Value::Int(i)),
        Token::Float(f) => Ok(Value::Float(f)),
        Token::LBracket => parser.nested(pos, parse_list_value),
        Token::LBrace => parser.nested(pos, parse_dict_value),
        Token::Ident(name) => parser.nested(pos, |p| parse_object_args(p, name)).map(Value::Object),
        Token::GenericIdent(name) => parser.nested(pos, |p| parse_object_args(p, name)).map(Value::GenericObject),
        other => Err(unexpected_token(
            &other,
            pos,
            "Expected a value",
            "Values are null, booleans, numbers, strings, lists, dictionaries or Name(...) objects",
        )),
    }
}

fn parse_list_value(parser: &mut Parser) -> Result<Value, GdError> {
    let mut items = Vec::new();

    if *parser.peek()? == Token::RBracket {
        parser.bump()?;
        return Ok(Value::List(items));
    }

    loop {
        items.push(parse_value(parser)?);

        let (token, pos) = parser.bump()?;
        match token {
            Token::Comma => {
                // trailing comma
                if *parser.peek()? == Token::RBracket {
                    parser.bump()?;
                    break;
                }
            }
            Token::RBracket => break,
            other => {
                return Err(unexpected_token(&other, pos, "Expected ',' or ']' in list", "Separate list items with commas"));
            }
        }
    }

    Ok(Value::List(items))
}

fn parse_dict_value(parser: &mut Parser) -> Result<Value, GdError> {
    let mut map = IndexMap::new();

    if *parser.peek()? == Token::RBrace {
        parser.bump()?;
        return Ok(Value::Dict(map));
    }

    loop {
        let key = match parser.bump()? {
            (Token::String(key), _) => key,
            (other, pos) => {
                return Err(unexpected_token(&other, pos, "Expected a quoted dictionary key", "Dictionary keys are strings: { \"key\": value }"));
            }
        };
        parser.expect(Token::Colon, "Separate a dictionary key from its value with ':'")?;
        let value = parse_value(parser)?;
        // a repeated key overwrites the value in its first slot
        map.insert(key, value);

        let (token, pos) = parser.bump()?;
        match token {
            Token::Comma => {}
            Token::RBrace => break,
            other => {
                return Err(unexpected_token(&other, pos, "Expected ',' or '}' in dictionary", "Separate dictionary entries with commas"));
            }
        }
    }

    Ok(Value::Dict(map))
}

fn parse_object_args(parser: &mut Parser, name: String) -> Result<GdObject, GdError> {
    parser.expect(Token::LParen, "Objects are written Name(arg, ...)")?;
    let mut args = Vec::new();

    if *parser.peek()? == Token::RParen {
        parser.bump()?;
        return Ok(GdObject::new(name, args));
    }

    loop {
        args.push(parse_value(parser)?);

        let (token, pos) = parser.bump()?;
        match token {
            Token::Comma => {}
            Token::RParen => break,
            other => {
                return Err(unexpected_token(&other, pos, "Expected ',' or ')' in argument list", "Separate arguments with commas"));
            }
        }
    }

    Ok(GdObject::new(name, args))
}
