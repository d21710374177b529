use std::sync::Arc;

use crate::ast::{Expression, Let};
use crate::prelude::Primitive;

use super::error::EvalError;
use super::scope::Scope;
use super::value::{Closure, Value};

/// How many non-tail evaluations may be nested before giving up.
pub const MAX_DEPTH: usize = 10_000;

/// Result of a single evaluation step.
///
/// Tail positions (`if` branches, `let` bodies, closure bodies) are handed back as
/// `Continue` so the caller loops instead of recursing.
enum Step {
    Done(Value),
    Continue(Scope, Arc<Expression>),
}

/// Evaluate `expr` call-by-value under `scope`.
pub fn eval(scope: &Scope, expr: &Expression) -> Result<Value, EvalError> {
    eval_nested(scope, expr, 0)
}

fn eval_nested(scope: &Scope, expr: &Expression, depth: usize) -> Result<Value, EvalError> {
    if depth > MAX_DEPTH {
        return Err(EvalError::RecursionTooDeep {
            max_depth: MAX_DEPTH,
        });
    }

    let mut next = step(scope, expr, depth)?;
    loop {
        match next {
            Step::Done(value) => return Ok(value),
            Step::Continue(scope, expr) => next = step(&scope, &expr, depth)?,
        }
    }
}

fn step(scope: &Scope, expr: &Expression, depth: usize) -> Result<Step, EvalError> {
    match expr {
        Expression::Int(lit) => Ok(Step::Done(Value::Int(lit.value))),
        Expression::Bool(lit) => Ok(Step::Done(Value::Bool(lit.value))),
        Expression::String(lit) => Ok(Step::Done(Value::String(lit.value.clone()))),
        Expression::Var(ident) => scope
            .resolve(&ident.value)
            .cloned()
            .map(Step::Done)
            .ok_or_else(|| EvalError::UnknownVariable(ident.value.clone())),
        Expression::Lambda(lambda) => Ok(Step::Done(Value::Closure(Closure {
            binder: lambda.binder.value.clone(),
            body: Arc::clone(&lambda.body),
            env: scope.clone(),
            name: None,
        }))),
        Expression::App(app) => {
            let function = eval_nested(scope, &app.function, depth + 1)?;
            let argument = eval_nested(scope, &app.argument, depth + 1)?;
            call(function, argument)
        }
        Expression::Let(let_expr) => {
            let value = eval_nested(scope, &let_expr.value, depth + 1)?;
            let value = bind_recursive(let_expr, value)?;
            Ok(Step::Continue(
                scope.extend(let_expr.binder.value.clone(), value),
                Arc::clone(&let_expr.body),
            ))
        }
        Expression::If(if_expr) => {
            let branch = if eval_nested(scope, &if_expr.condition, depth + 1)?.match_bool()? {
                &if_expr.then_case
            } else {
                &if_expr.else_case
            };
            Ok(Step::Continue(scope.clone(), Arc::clone(branch)))
        }
    }
}

/// A recursive `let` must bind a closure, which then knows its own name.
fn bind_recursive(let_expr: &Let, value: Value) -> Result<Value, EvalError> {
    if !let_expr.recursive {
        return Ok(value);
    }

    let binder = &let_expr.binder.value;
    match value {
        Value::Closure(closure) => Ok(Value::Closure(Closure {
            name: Some(binder.clone()),
            ..closure
        })),
        other => Err(EvalError::RecursiveNonFunction {
            name: binder.clone(),
            value: other.to_string(),
        }),
    }
}

/// Apply a function value to one argument.
pub fn apply(function: Value, argument: Value) -> Result<Value, EvalError> {
    match call(function, argument)? {
        Step::Done(value) => Ok(value),
        Step::Continue(scope, body) => eval(&scope, &body),
    }
}

fn call(function: Value, argument: Value) -> Result<Step, EvalError> {
    match function {
        Value::Closure(closure) => {
            let mut env = closure.env.clone();
            if let Some(name) = &closure.name {
                env = env.extend(name.clone(), Value::Closure(closure.clone()));
            }
            let env = env.extend(closure.binder.clone(), argument);
            Ok(Step::Continue(env, Arc::clone(&closure.body)))
        }
        Value::Primitive {
            primitive,
            mut args,
        } => {
            args.push(argument);
            if args.len() < primitive.arity() {
                Ok(Step::Done(Value::Primitive { primitive, args }))
            } else {
                run_primitive(primitive, &args).map(Step::Done)
            }
        }
        other => Err(EvalError::NotAFunction(other.to_string())),
    }
}

fn run_primitive(primitive: Primitive, args: &[Value]) -> Result<Value, EvalError> {
    match (primitive, args) {
        (Primitive::Add, [x, y]) => Ok(Value::Int(x.match_int()?.wrapping_add(y.match_int()?))),
        (Primitive::Sub, [x, y]) => Ok(Value::Int(x.match_int()?.wrapping_sub(y.match_int()?))),
        (Primitive::IntEquals, [x, y]) => Ok(Value::Bool(x.match_int()? == y.match_int()?)),
        (Primitive::Concat, [x, y]) => Ok(Value::String(format!(
            "{}{}",
            x.match_string()?,
            y.match_string()?
        ))),
        (Primitive::IntToString, [x]) => Ok(Value::String(x.match_int()?.to_string())),
        // `apply` only saturates a primitive at exactly its arity
        (primitive, _) => Err(EvalError::NotAFunction(format!(
            "<primitive {}>",
            primitive.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(expr: &Expression) -> Result<Value, EvalError> {
        eval(&Scope::prelude(), expr)
    }

    #[test]
    fn test_partial_application() {
        let add_one = Expression::app(Expression::var("add"), Expression::int(1));
        let value = run(&add_one).unwrap();
        assert!(matches!(
            value,
            Value::Primitive { primitive: Primitive::Add, ref args } if args.len() == 1
        ));
        assert_eq!(
            run(&Expression::app(add_one, Expression::int(41))),
            Ok(Value::Int(42))
        );
    }

    #[test]
    fn test_arithmetic_wraps() {
        let expr = Expression::apps(
            Expression::var("add"),
            [Expression::int(i64::MAX), Expression::int(1)],
        );
        assert_eq!(run(&expr), Ok(Value::Int(i64::MIN)));
    }

    #[test]
    fn test_closure_captures_scope() {
        // let y = 1 in let f = \x -> add x y in let y = 100 in f 1
        let f = Expression::lambda(
            "x",
            Expression::apps(Expression::var("add"), [Expression::var("x"), Expression::var("y")]),
        );
        let expr = Expression::let_in(
            "y",
            Expression::int(1),
            Expression::let_in(
                "f",
                f,
                Expression::let_in(
                    "y",
                    Expression::int(100),
                    Expression::app(Expression::var("f"), Expression::int(1)),
                ),
            ),
        );
        assert_eq!(run(&expr), Ok(Value::Int(2)));
    }

    #[test]
    fn test_recursive_closure_rebinds_itself() {
        // let rec count = \n -> if int_equals n 0 then 0 else add 1 (count (sub n 1)) in count 5
        let n = || Expression::var("n");
        let value = Expression::lambda(
            "n",
            Expression::if_then_else(
                Expression::apps(Expression::var("int_equals"), [n(), Expression::int(0)]),
                Expression::int(0),
                Expression::apps(
                    Expression::var("add"),
                    [
                        Expression::int(1),
                        Expression::app(
                            Expression::var("count"),
                            Expression::apps(Expression::var("sub"), [n(), Expression::int(1)]),
                        ),
                    ],
                ),
            ),
        );
        let expr = Expression::let_rec(
            "count",
            value,
            Expression::app(Expression::var("count"), Expression::int(5)),
        );
        assert_eq!(run(&expr), Ok(Value::Int(5)));
    }

    #[test]
    fn test_recursive_non_function() {
        let expr = Expression::let_rec("x", Expression::int(1), Expression::var("x"));
        assert!(matches!(
            run(&expr),
            Err(EvalError::RecursiveNonFunction { ref name, .. }) if name == "x"
        ));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            run(&Expression::app(Expression::int(1), Expression::int(2))),
            Err(EvalError::NotAFunction("1".to_string()))
        );
        assert_eq!(
            run(&Expression::if_then_else(
                Expression::int(1),
                Expression::int(2),
                Expression::int(3)
            )),
            Err(EvalError::ExpectedBool("1".to_string()))
        );
        assert_eq!(
            run(&Expression::var("nope")),
            Err(EvalError::UnknownVariable("nope".to_string()))
        );
    }

    /// `let rec count = \n -> if int_equals n 0 then "done" else count (sub n 1) in count n`
    fn countdown(n: i64) -> Expression {
        let var = Expression::var;
        let value = Expression::lambda(
            "n",
            Expression::if_then_else(
                Expression::apps(var("int_equals"), [var("n"), Expression::int(0)]),
                Expression::string("done"),
                Expression::app(
                    var("count"),
                    Expression::apps(var("sub"), [var("n"), Expression::int(1)]),
                ),
            ),
        );
        Expression::let_rec("count", value, Expression::app(var("count"), Expression::int(n)))
    }

    #[test]
    fn test_closure_shares_lambda_body() {
        let expr = Expression::lambda("x", Expression::var("x"));
        let Expression::Lambda(lambda) = &expr else {
            unreachable!()
        };
        match run(&expr) {
            Ok(Value::Closure(closure)) => assert!(Arc::ptr_eq(&closure.body, &lambda.body)),
            other => panic!("expected a closure, got {:?}", other),
        }
    }

    #[test]
    fn test_tail_calls_run_in_constant_depth() {
        // far more iterations than MAX_DEPTH
        assert_eq!(
            run(&countdown(100_000)),
            Ok(Value::String("done".to_string()))
        );
    }

    #[test]
    fn test_deep_recursion_is_an_error() {
        // let rec f = \n -> add 1 (f n) in f 0 never terminates and is not a tail call
        let var = Expression::var;
        let value = Expression::lambda(
            "n",
            Expression::apps(
                var("add"),
                [Expression::int(1), Expression::app(var("f"), var("n"))],
            ),
        );
        let expr = Expression::let_rec("f", value, Expression::app(var("f"), Expression::int(0)));
        let result = crate::interpreter::run(&expr);
        assert_eq!(result, Err(EvalError::RecursionTooDeep { max_depth: MAX_DEPTH }));
    }

    #[test]
    fn test_ill_typed_branch_not_taken_still_runs() {
        let expr = Expression::if_then_else(
            Expression::bool(true),
            Expression::int(42),
            Expression::string("Hello"),
        );
        assert_eq!(run(&expr), Ok(Value::Int(42)));
    }
}
