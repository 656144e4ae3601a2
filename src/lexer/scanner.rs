// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Advance the character iterator and update offset/line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Skip whitespace (newlines included) and `;` comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                bump(lexer);
            }
            ';' => {
                // Skip comment until end of line
                while let Some(ch) = bump(lexer) {
                    if ch == '\n' {
                        break;
                    }
                }
            }
            _ => break,
        }
    }
}

/// Peek at the current character without consuming it
pub(super) fn peek_char(lexer: &Lexer) -> Option<char> {
    lexer.peek
}

/// Characters after the current one, without consuming anything
pub(super) fn lookahead<'a>(lexer: &Lexer<'a>) -> Chars<'a> {
    lexer.input.clone()
}
