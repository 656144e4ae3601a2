// Author: Dustin Pilgrim
// License: MIT

use log::{debug, trace};

use super::*;

pub(super) fn parse_header(parser: &mut Parser) -> Result<SectionHeader, GdError> {
    parser.expect(Token::LBracket, "A section starts with a [title key=value ...] header")?;

    let title = match parser.bump()? {
        (Token::Ident(title), _) => title,
        (other, pos) => {
            return Err(unexpected_token(&other, pos, "Expected a section title", "e.g. [node ...] or [ext_resource ...]"));
        }
    };

    let mut header = SectionHeader::new(title);
    loop {
        match parser.peek_char() {
            Some(']') => {
                parser.bump()?;
                break;
            }
            Some(_) => {
                let (key, value) = parse_pair(parser)?;
                header.set(key, value);
            }
            None => {
                let pos = parser.position();
                return Err(GdError::UnexpectedEof {
                    message: format!("Section header [{}] is not closed", header.title),
                    offset: pos.offset,
                    line: pos.line,
                    column: pos.column,
                    hint: Some("Close the header with ']'".into()),
                    code: Some(203),
                });
            }
        }
    }

    trace!("parsed header [{}] with {} attribute(s)", header.title, header.len());
    Ok(header)
}

/// Header, then `key = value` lines until the next header or end of input.
/// `construct` picks the section's kind once the header is known.
pub(super) fn parse_section(
    parser: &mut Parser,
    construct: impl FnOnce(SectionHeader) -> GdSection,
) -> Result<GdSection, GdError> {
    let header = parse_header(parser)?;
    let mut section = construct(header);

    while let Some(c) = parser.peek_char() {
        if c == '[' {
            break;
        }
        let (key, value) = parse_pair(parser)?;
        // a repeated key overwrites the value in its first slot
        section.section_mut().set(key, value);
    }

    debug!(
        "parsed [{}] section with {} propert{}",
        section.header().title,
        section.section().len(),
        if section.section().len() == 1 { "y" } else { "ies" }
    );
    Ok(section)
}

fn parse_pair(parser: &mut Parser) -> Result<(String, Value), GdError> {
    let (key, _) = parser.key()?;
    parser.expect(Token::Equals, &format!("Assign a value with {} = value", key))?;
    let value = value::parse_value(parser)?;
    Ok((key, value))
}
