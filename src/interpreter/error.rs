use thiserror::Error;

/// Runtime failures. Values are carried in their printed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unknown variable {0}")]
    UnknownVariable(String),
    #[error("{0} is not a function")]
    NotAFunction(String),
    #[error("Expected an Int but got {0}")]
    ExpectedInt(String),
    #[error("Expected a Bool but got {0}")]
    ExpectedBool(String),
    #[error("Expected a String but got {0}")]
    ExpectedString(String),
    #[error("Only functions may be declared recursively, but {name} is {value}")]
    RecursiveNonFunction { name: String, value: String },
    #[error("Evaluation nested deeper than {max_depth} levels")]
    RecursionTooDeep { max_depth: usize },
}
