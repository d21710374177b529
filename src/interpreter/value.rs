use std::fmt;
use std::sync::Arc;

use crate::ast::Expression;
use crate::lexer::escape;
use crate::prelude::Primitive;

use super::error::EvalError;
use super::scope::Scope;

/// A lambda together with the scope it was created in.
#[derive(Debug, Clone)]
pub struct Closure {
    pub binder: String,
    pub body: Arc<Expression>,
    pub env: Scope,
    /// Set for closures bound by a recursive `let`; applying the closure binds
    /// this name to the closure itself.
    pub name: Option<String>,
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    String(String),
    Closure(Closure),
    /// A builtin together with the arguments it has received so far.
    Primitive {
        primitive: Primitive,
        args: Vec<Value>,
    },
}

impl Value {
    pub fn primitive(primitive: Primitive) -> Self {
        Value::Primitive {
            primitive,
            args: vec![],
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Primitive { .. })
    }

    pub fn match_int(&self) -> Result<i64, EvalError> {
        match self {
            Value::Int(value) => Ok(*value),
            other => Err(EvalError::ExpectedInt(other.to_string())),
        }
    }

    pub fn match_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(value) => Ok(*value),
            other => Err(EvalError::ExpectedBool(other.to_string())),
        }
    }

    pub fn match_string(&self) -> Result<&str, EvalError> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(EvalError::ExpectedString(other.to_string())),
        }
    }
}

/// Data values compare by content; functions are never equal to anything.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::String(value) => f.write_str(&escape(value)),
            Value::Closure(Closure {
                name: Some(name), ..
            }) => write!(f, "<function {}>", name),
            Value::Closure(closure) => write!(f, "<closure \\{}>", closure.binder),
            Value::Primitive { primitive, .. } => write!(f, "<primitive {}>", primitive.name()),
        }
    }
}
