//! Parse, type check and evaluate one program.
//!
//! Typing and evaluation are independent: an ill-typed program still runs, and a
//! failure in one program never affects the next.

use std::fmt;

use tracing::debug;

use crate::ast::Expression;
use crate::interpreter::{self, EvalError, Value};
use crate::parser::{ParseError, parse_expression};
use crate::prelude;
use crate::types::{Monotype, TypeError, infer_expr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub evaluate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { evaluate: true }
    }
}

/// Outcome of running one program.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub expression: Expression,
    pub typing: Result<Monotype, TypeError>,
    /// `None` when evaluation was not requested.
    pub evaluation: Option<Result<Value, EvalError>>,
}

impl Report {
    pub fn is_well_typed(&self) -> bool {
        self.typing.is_ok()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Running \"{}\":", self.name)?;
        match &self.typing {
            Ok(ty) => writeln!(f, "Inferred {}", ty)?,
            Err(err) => writeln!(f, "Inference failed with: {}", err.message())?,
        }
        match &self.evaluation {
            Some(Ok(Value::String(text))) => writeln!(f, "{}", text),
            Some(Ok(value)) => writeln!(f, "{}", value),
            Some(Err(err)) => writeln!(f, "Execution failed with: {}", err),
            None => Ok(()),
        }
    }
}

/// Check an already parsed expression against the prelude, then evaluate it.
pub fn check_and_run(name: &str, expression: Expression, options: Options) -> Report {
    debug!(program = name, "type checking");
    let typing = infer_expr(&prelude::type_env(), &expression);

    let evaluation = options.evaluate.then(|| {
        debug!(program = name, "evaluating");
        interpreter::run(&expression)
    });

    Report {
        name: name.to_string(),
        expression,
        typing,
        evaluation,
    }
}

/// Parse `source` and run it. Only a parse failure is an error here.
pub fn run_program(name: &str, source: &str, options: Options) -> Result<Report, ParseError> {
    let expression = parse_expression(source)?;
    debug!(program = name, expression = %expression, "parsed");
    Ok(check_and_run(name, expression, options))
}
