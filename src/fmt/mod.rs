//! Pretty printing for the expression language.
//!
//! [`Expression`](crate::ast::Expression) implements `Display` as single-line source
//! text that parses back to the same tree.

mod expression;
