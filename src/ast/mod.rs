//! Syntax tree of the expression language.
//!
//! Every node carries the `Span` it was parsed from. Trees built by hand through
//! the constructors on [`Expression`] use `Span::default()`.

pub mod expression;

pub use expression::{
    Application, BoolLiteral, Expression, Ident, IfThenElse, IntLiteral, Lambda, Let,
    StringLiteral,
};
