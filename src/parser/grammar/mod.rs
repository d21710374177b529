//! Grammar rules, organized by category:
//! - `literal`: identifiers, integers, strings, booleans
//! - `expression`: application spines, lambdas, `let`, `if`
//! - `types`: monotype syntax used by tests and tooling

mod expression;
mod literal;
mod types;

pub use expression::expression;
pub use types::monotype;

use super::combinators::BoxedParser;
use super::state::{ParseResult, ParseState, Parser};

/// Run `parser` over the whole token stream.
///
/// Leftover tokens are an error. On failure the error recorded furthest into the
/// input is reported.
pub fn parse_all<T: 'static>(parser: BoxedParser<T>, state: &mut ParseState) -> ParseResult<T> {
    match parser.parse(state) {
        Ok(_) if state.has_next() => Err(state
            .furthest_error()
            .cloned()
            .unwrap_or_else(|| state.error_here("unexpected token"))),
        Ok(value) => Ok(value),
        Err(err) => {
            state.restore(0);
            Err(state.furthest_error().cloned().unwrap_or(err))
        }
    }
}
