//! Tree-walking evaluator.
//!
//! Runs any parsed expression, independently of whether it type checks. Values
//! live in a persistent [`Scope`]; closures capture the scope they were built in.

mod error;
mod eval;
mod scope;
mod value;

pub use error::EvalError;
pub use eval::{MAX_DEPTH, apply, eval};
pub use scope::Scope;
pub use value::{Closure, Value};

use std::{panic, thread};

use tracing::{debug, warn};

use crate::ast::Expression;

/// Stack for the evaluator thread; enough for [`MAX_DEPTH`] nested evaluations.
const EVAL_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Evaluate `expr` with every primitive in scope.
///
/// Evaluation happens on its own thread with a large stack, so deeply nested
/// programs end in [`EvalError::RecursionTooDeep`] rather than overflowing the
/// caller's stack.
pub fn run(expr: &Expression) -> Result<Value, EvalError> {
    let spawned = thread::scope(|scope| {
        thread::Builder::new()
            .name("evaluator".to_string())
            .stack_size(EVAL_STACK_SIZE)
            .spawn_scoped(scope, || eval(&Scope::prelude(), expr))
            .map(|handle| handle.join())
    });

    let result = match spawned {
        Ok(Ok(result)) => result,
        Ok(Err(payload)) => panic::resume_unwind(payload),
        Err(err) => {
            warn!(%err, "could not spawn evaluator thread, evaluating in place");
            eval(&Scope::prelude(), expr)
        }
    };
    match &result {
        Ok(value) => debug!(%value, "evaluation finished"),
        Err(err) => debug!(%err, "evaluation failed"),
    }
    result
}
