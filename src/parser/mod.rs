//! Combinator parser for expressions and type syntax.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::*;

use crate::ast::Expression;
use crate::lexer::Token;
use crate::types::Monotype;

fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    Token::lex(source).map_err(|err| ParseError::new(format!("lexing failed: {}", err)))
}

/// Parse a complete expression, e.g. `let id = \x -> x in id 1`.
pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    let mut state = ParseState::new(tokenize(source)?);
    parse_all(expression(), &mut state)
}

/// Parse a type such as `(u1 -> Int) -> Bool`. `uN` denotes unknown `N`.
pub fn parse_type(source: &str) -> ParseResult<Monotype> {
    let mut state = ParseState::new(tokenize(source)?);
    parse_all(monotype(), &mut state)
}
