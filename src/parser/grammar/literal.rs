//! Literal and identifier parsers

use crate::ast::{BoolLiteral, Ident, IntLiteral, StringLiteral};
use crate::lexer::{Token, unescape};

use crate::parser::combinators::{BoxedParser, select};
use crate::parser::state::ParseError;

/// Parse a lowercase identifier
pub fn ident() -> BoxedParser<Ident> {
    select(
        |tok| match tok {
            Token::Ident(id) => Some(Ident {
                value: id.value.clone(),
                position: id.position.clone(),
            }),
            _ => None,
        },
        "identifier",
    )
}

/// Parse an integer literal
pub fn integer() -> BoxedParser<IntLiteral> {
    let digits = select(
        |tok| match tok {
            Token::Integer(int) => Some((int.value.clone(), int.position.clone())),
            _ => None,
        },
        "integer",
    );

    digits.try_map(|(digits, position)| match digits.parse::<i64>() {
        Ok(value) => Ok(IntLiteral { value, position }),
        Err(_) => Err(ParseError::new("integer literal out of range")
            .found(format!("integer '{}'", digits))
            .at(position)),
    })
}

/// Parse a string literal, resolving its escapes
pub fn string_literal() -> BoxedParser<StringLiteral> {
    select(
        |tok| match tok {
            Token::StringLiteral(s) => Some(StringLiteral {
                value: unescape(&s.value),
                position: s.position.clone(),
            }),
            _ => None,
        },
        "string",
    )
}

/// Parse `true` or `false`
pub fn boolean() -> BoxedParser<BoolLiteral> {
    select(
        |tok| match tok {
            Token::True(t) => Some(BoolLiteral {
                value: true,
                position: t.position.clone(),
            }),
            Token::False(f) => Some(BoolLiteral {
                value: false,
                position: f.position.clone(),
            }),
            _ => None,
        },
        "boolean",
    )
}
