use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a unification variable. Allocated from 1 upwards per inference run.
pub type UnknownId = usize;

/// A type without quantified variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Monotype {
    Int,
    Bool,
    String,
    Function(Box<Monotype>, Box<Monotype>),
    Unknown(UnknownId),
}

impl Monotype {
    pub fn function(argument: Monotype, result: Monotype) -> Self {
        Monotype::Function(Box::new(argument), Box::new(result))
    }

    /// Build a curried function type `a1 -> a2 -> ... -> result`.
    pub fn curried(arguments: impl IntoIterator<Item = Monotype>, result: Monotype) -> Self {
        let arguments: Vec<_> = arguments.into_iter().collect();
        arguments
            .into_iter()
            .rev()
            .fold(result, |acc, argument| Monotype::function(argument, acc))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Monotype::Int | Monotype::Bool | Monotype::String)
    }

    /// All unknowns mentioned in this type, in ascending order.
    pub fn unknowns(&self) -> BTreeSet<UnknownId> {
        match self {
            Monotype::Int | Monotype::Bool | Monotype::String => BTreeSet::new(),
            Monotype::Unknown(id) => BTreeSet::from([*id]),
            Monotype::Function(argument, result) => {
                let mut set = argument.unknowns();
                set.extend(result.unknowns());
                set
            }
        }
    }

    /// Does `Unknown(id)` appear anywhere in this type?
    ///
    /// The type is inspected as-is; callers resolve it through the substitution first.
    pub fn contains_unknown(&self, id: UnknownId) -> bool {
        match self {
            Monotype::Int | Monotype::Bool | Monotype::String => false,
            Monotype::Unknown(other) => *other == id,
            Monotype::Function(argument, result) => {
                argument.contains_unknown(id) || result.contains_unknown(id)
            }
        }
    }

    pub fn pretty(&self) -> String {
        match self {
            Monotype::Int => "Int".to_string(),
            Monotype::Bool => "Bool".to_string(),
            Monotype::String => "String".to_string(),
            Monotype::Unknown(id) => format!("u{}", id),
            Monotype::Function(argument, result) => {
                let argument_str = if matches!(**argument, Monotype::Function(_, _)) {
                    format!("({})", argument.pretty())
                } else {
                    argument.pretty()
                };
                format!("{} -> {}", argument_str, result.pretty())
            }
        }
    }
}

impl fmt::Display for Monotype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
