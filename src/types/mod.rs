//! # Type Inference
//!
//! Monomorphic Hindley-Milner inference over [`crate::ast::Expression`].
//!
//! - [`ty`] - monotypes and their rendering
//! - [`subst`] - solutions found for unknowns, and resolving types through them
//! - [`supply`] - fresh unknown ids
//! - [`env`] - persistent typing environment
//! - [`state`] - per-run check state (substitution + supply)
//! - [`unify`] - unification with occurs check
//! - [`infer`] - the inference walk and the [`infer_expr`] entry point
//! - [`error`] - errors reported to callers
//!
//! Bindings are never generalized: a `let`-bound name has one monotype throughout
//! its body, like a lambda parameter.

pub mod env;
pub mod error;
pub mod infer;
pub mod state;
pub mod subst;
pub mod supply;
pub mod ty;
pub mod unify;

pub use env::TypeEnv;
pub use error::TypeError;
pub use infer::infer_expr;
pub use state::CheckState;
pub use subst::Substitution;
pub use supply::FreshSupply;
pub use ty::{Monotype, UnknownId};
pub use unify::UnifyError;
