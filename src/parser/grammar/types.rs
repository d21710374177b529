//! Type expression parsers
//!
//! ```text
//! type      := type_atom ["->" type]
//! type_atom := "(" type ")" | "Int" | "Bool" | "String" | "u" digits
//! ```

use crate::lexer::Token;
use crate::types::Monotype;

use crate::parser::combinators::{BoxedParser, expect_arrow, expect_lparen, expect_rparen, optional};
use crate::parser::state::{ParseError, ParseState, Parser};

/// type := type_atom ["->" type]
///
/// The arrow is right-associative.
pub fn monotype() -> BoxedParser<Monotype> {
    BoxedParser::new(|state: &mut ParseState| {
        let argument = type_atom().parse(state)?;
        match optional(expect_arrow() * monotype()).parse(state)? {
            Some(result) => Ok(Monotype::function(argument, result)),
            None => Ok(argument),
        }
    })
}

fn type_atom() -> BoxedParser<Monotype> {
    let parenthesized = BoxedParser::new(|state: &mut ParseState| {
        expect_lparen().parse(state)?;
        let inner = monotype().parse(state)?;
        expect_rparen().parse(state)?;
        Ok(inner)
    });

    parenthesized | named_type()
}

/// A primitive type name or an unknown written `uN`.
fn named_type() -> BoxedParser<Monotype> {
    BoxedParser::new(|state: &mut ParseState| {
        let result = match state.peek() {
            Some(Token::UpperIdent(name)) => match name.value.as_str() {
                "Int" => Ok(Monotype::Int),
                "Bool" => Ok(Monotype::Bool),
                "String" => Ok(Monotype::String),
                _ => Err(ParseError::new("unknown type")
                    .found(format!("'{}'", name.value))
                    .at(name.position.clone())),
            },
            Some(Token::Ident(name)) => match parse_unknown(&name.value) {
                Some(id) => Ok(Monotype::Unknown(id)),
                None => Err(ParseError::new("type unknowns are written u<number>")
                    .found(format!("'{}'", name.value))
                    .at(name.position.clone())),
            },
            Some(tok) => Err(ParseError::new("unexpected token")
                .expected("type")
                .found(tok.describe())
                .at(tok.pos())),
            None => Err(ParseError::new("unexpected end of input").expected("type")),
        };

        match result {
            Ok(ty) => {
                state.advance();
                Ok(ty)
            }
            Err(err) => {
                state.record_error(err.clone());
                Err(err)
            }
        }
    })
}

/// `u12` is unknown 12. Unknowns are numbered from 1.
fn parse_unknown(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('u')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&id| id > 0)
}
