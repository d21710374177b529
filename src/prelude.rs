//! Primitive operations available to every program.
//!
//! The same table feeds both the initial typing environment and the evaluator,
//! so a name is typed exactly when it can be run.

use crate::types::{Monotype, TypeEnv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Add,
    Sub,
    IntEquals,
    Concat,
    IntToString,
}

impl Primitive {
    pub const ALL: [Primitive; 5] = [
        Primitive::Add,
        Primitive::Sub,
        Primitive::IntEquals,
        Primitive::Concat,
        Primitive::IntToString,
    ];

    /// Source names bound to this primitive. `eq_int` is an alias of `int_equals`.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Primitive::Add => &["add"],
            Primitive::Sub => &["sub"],
            Primitive::IntEquals => &["int_equals", "eq_int"],
            Primitive::Concat => &["concat"],
            Primitive::IntToString => &["int_to_string"],
        }
    }

    pub fn name(self) -> &'static str {
        self.names()[0]
    }

    pub fn lookup(name: &str) -> Option<Primitive> {
        Primitive::ALL
            .into_iter()
            .find(|primitive| primitive.names().contains(&name))
    }

    pub fn arity(self) -> usize {
        match self {
            Primitive::IntToString => 1,
            _ => 2,
        }
    }

    pub fn signature(self) -> Monotype {
        use Monotype::{Bool, Int, String};

        match self {
            Primitive::Add | Primitive::Sub => Monotype::curried([Int, Int], Int),
            Primitive::IntEquals => Monotype::curried([Int, Int], Bool),
            Primitive::Concat => Monotype::curried([String, String], String),
            Primitive::IntToString => Monotype::function(Int, String),
        }
    }
}

/// Typing environment binding every primitive name to its signature.
pub fn type_env() -> TypeEnv {
    TypeEnv::with_bindings(Primitive::ALL.into_iter().flat_map(|primitive| {
        primitive
            .names()
            .iter()
            .map(move |name| (*name, primitive.signature()))
    }))
}
