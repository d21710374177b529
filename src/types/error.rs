//! # Type Error Definitions
//!
//! Errors produced while inferring the type of an expression:
//!
//! - A variable is used but not bound (`UnknownVariable`)
//! - Two types cannot be made equal (`Mismatch`)
//! - A solution would produce an infinite type (`OccursCheck`)
//!
//! Every error aborts the whole inference run. Each one carries the span of the
//! expression being checked when it occurred; hand-built trees have empty spans,
//! in which case `Display` prints the bare message.

use std::fmt;

use lachs::Span;

use super::ty::{Monotype, UnknownId};
use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Reference to a name that is not in scope.
    UnknownVariable { name: String, span: Span },

    /// Two types that must be equal are not.
    ///
    /// The order of `left` and `right` carries no meaning; compare with
    /// [`TypeError::is_mismatch_between`].
    Mismatch {
        left: Monotype,
        right: Monotype,
        span: Span,
    },

    /// An unknown would have to contain itself, e.g. `u1 = u1 -> Int`.
    OccursCheck {
        unknown: UnknownId,
        ty: Monotype,
        span: Span,
    },
}

impl TypeError {
    pub fn unknown_variable(name: impl Into<String>, span: Span) -> Self {
        TypeError::UnknownVariable {
            name: name.into(),
            span,
        }
    }

    /// Attach the span of the failing expression to a unification error.
    pub fn from_unify_error(err: UnifyError, span: Span) -> Self {
        match err {
            UnifyError::Mismatch { left, right } => TypeError::Mismatch { left, right, span },
            UnifyError::OccursCheck { unknown, ty } => {
                TypeError::OccursCheck { unknown, ty, span }
            }
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            TypeError::UnknownVariable { span, .. }
            | TypeError::Mismatch { span, .. }
            | TypeError::OccursCheck { span, .. } => span,
        }
    }

    pub fn is_mismatch_between(&self, a: &Monotype, b: &Monotype) -> bool {
        match self {
            TypeError::Mismatch { left, right, .. } => {
                (left == a && right == b) || (left == b && right == a)
            }
            _ => false,
        }
    }

    /// The message without source location.
    pub fn message(&self) -> String {
        match self {
            TypeError::UnknownVariable { name, .. } => format!("Unknown variable {}", name),
            TypeError::Mismatch { left, right, .. } => {
                format!("Can't match {} with {}", left.pretty(), right.pretty())
            }
            TypeError::OccursCheck { unknown, ty, .. } => format!(
                "cannot construct infinite type: {} = {}",
                Monotype::Unknown(*unknown).pretty(),
                ty.pretty()
            ),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = self.message();
        let span = self.span();
        if span.source.is_empty() {
            write!(f, "Type error: {}", msg)
        } else {
            write!(f, "{}", span.to_string(&msg))
        }
    }
}

impl std::error::Error for TypeError {}
