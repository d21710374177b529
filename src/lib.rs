//! # monoinfer - Monomorphic Hindley-Milner type inference
//!
//! Infers types for a tiny lambda language with integers, booleans, strings,
//! single-argument lambdas, application, `let` (possibly recursive) and `if`.
//! Every binding is monomorphic: nothing is generalized at `let`.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Expression
//!     ↓                    ↘
//! [Type Checker] → Monotype   [Interpreter] → Value
//! ```
//!
//! Type checking and evaluation are independent of each other; the driver runs both
//! and reports each outcome.
//!
//! ## Example
//!
//! ```
//! use monoinfer::{parser::parse_expression, prelude, types::infer_expr};
//!
//! let expr = parse_expression(r"let id = \x -> x in id 1").unwrap();
//! let ty = infer_expr(&prelude::type_env(), &expr).unwrap();
//! assert_eq!(ty.pretty(), "Int");
//! ```
//!
//! ## Module Structure
//!
//! - [`ast`] - expression tree
//! - [`lexer`] - tokenization using lachs
//! - [`parser`] - combinator-based grammar for expressions and types
//! - [`fmt`] - source rendering of expressions
//! - [`types`] - monotypes, substitutions, unification and inference
//! - [`prelude`] - primitive operations and their signatures
//! - [`interpreter`] - call-by-value evaluation
//! - [`driver`] - runs one program end to end
//! - [`programs`] - built-in example programs

pub mod ast;
pub mod driver;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod prelude;
pub mod programs;
pub mod types;
