// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;

#[test]
fn test_value_tokens() {
    let input = r#"[null, true, FALSE, -3, 2.5, "hi"] { } ( ) : ="#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::LBracket,
        Token::Null,
        Token::Comma,
        Token::Bool(true),
        Token::Comma,
        Token::Bool(false),
        Token::Comma,
        Token::Int(-3),
        Token::Comma,
        Token::Float(2.5),
        Token::Comma,
        Token::String("hi".into()),
        Token::RBracket,
        Token::LBrace,
        Token::RBrace,
        Token::LParen,
        Token::RParen,
        Token::Colon,
        Token::Equals,
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token();
        assert_eq!(tok, Ok(expected));
    }
}

#[test]
fn test_numbers() {
    let cases = [
        ("0", Token::Int(0)),
        ("42", Token::Int(42)),
        ("+7", Token::Int(7)),
        ("-1.5", Token::Float(-1.5)),
        ("1.", Token::Float(1.0)),
        ("1e3", Token::Float(1000.0)),
        ("2.5E-2", Token::Float(0.025)),
        ("inf", Token::Float(f64::INFINITY)),
        ("-inf", Token::Float(f64::NEG_INFINITY)),
    ];

    for (input, expected) in cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), Ok(expected), "input: {}", input);
        assert_eq!(lexer.next_token(), Ok(Token::Eof), "input: {}", input);
    }
}

#[test]
fn test_nan_keyword() {
    let mut lexer = Lexer::new("nan");
    match lexer.next_token() {
        Ok(Token::Float(f)) => assert!(f.is_nan()),
        other => panic!("Expected NaN float, got {:?}", other),
    }
}

#[test]
fn test_integer_overflow_is_invalid_number() {
    let mut lexer = Lexer::new("99999999999999999999");
    match lexer.next_token() {
        Err(GdError::InvalidNumber { literal, .. }) => assert_eq!(literal, "99999999999999999999"),
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_string_escapes_and_newlines() {
    let input = "\"a\\\"b\\\\c\\nd\ne\"";
    let mut lexer = Lexer::new(input);
    assert_eq!(lexer.next_token(), Ok(Token::String("a\"b\\c\nd\ne".into())));
}

#[test]
fn test_unclosed_string_reports_start() {
    let input = "  \"never closed";
    let mut lexer = Lexer::new(input);
    match lexer.next_token() {
        Err(GdError::UnclosedString { offset, line, column, .. }) => {
            assert_eq!(offset, 2);
            assert_eq!(line, 1);
            assert_eq!(column, 3);
        }
        other => panic!("Expected UnclosedString, got {:?}", other),
    }
}

#[test]
fn test_generic_identifier_only_before_paren() {
    let mut lexer = Lexer::new("Array[int](1)");
    assert_eq!(lexer.next_token(), Ok(Token::GenericIdent("Array[int]".into())));
    assert_eq!(lexer.next_token(), Ok(Token::LParen));

    // a header title followed by ']' must not swallow the bracket
    let mut lexer = Lexer::new("gd_scene]");
    assert_eq!(lexer.next_token(), Ok(Token::Ident("gd_scene".into())));
    assert_eq!(lexer.next_token(), Ok(Token::RBracket));

    let mut lexer = Lexer::new("Vector2 (1, 2)");
    assert_eq!(lexer.next_token(), Ok(Token::Ident("Vector2".into())));
    assert_eq!(lexer.next_token(), Ok(Token::LParen));
}

#[test]
fn test_comments_and_whitespace_skipped() {
    let input = "; leading comment\n\t  42 ; trailing\n";
    let mut lexer = Lexer::new(input);
    assert_eq!(lexer.next_token(), Ok(Token::Int(42)));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_keys() {
    let mut lexer = Lexer::new("  tracks/0/keys = 1");
    assert_eq!(lexer.next_key(), Ok("tracks/0/keys".to_string()));
    assert_eq!(lexer.next_token(), Ok(Token::Equals));

    let mut lexer = Lexer::new("load_steps=3]");
    assert_eq!(lexer.next_key(), Ok("load_steps".to_string()));
    assert_eq!(lexer.next_token(), Ok(Token::Equals));
}

#[test]
fn test_empty_key_is_error() {
    let mut lexer = Lexer::new("= 1");
    assert!(matches!(
        lexer.next_key(),
        Err(GdError::UnexpectedCharacter { character: '=', .. })
    ));

    let mut lexer = Lexer::new("   ");
    assert!(matches!(lexer.next_key(), Err(GdError::UnexpectedEof { .. })));
}

#[test]
fn test_new_at_tracks_line_and_column() {
    let input = "[a]\nx = 1\n  @";
    let at = input.find('@').unwrap();
    let mut lexer = Lexer::new_at(input, at).unwrap();
    assert_eq!(lexer.line(), 3);
    assert_eq!(lexer.column(), 3);
    match lexer.next_token() {
        Err(GdError::UnexpectedCharacter { character, offset, .. }) => {
            assert_eq!(character, '@');
            assert_eq!(offset, at);
        }
        other => panic!("Expected UnexpectedCharacter, got {:?}", other),
    }
}

#[test]
fn test_new_at_rejects_bad_offset() {
    assert!(Lexer::new_at("é", 1).is_err());
    assert!(Lexer::new_at("abc", 4).is_err());
    assert!(Lexer::new_at("abc", 3).is_ok());
}
