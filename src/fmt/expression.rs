use std::fmt::{self, Display};

use crate::ast::Expression;
use crate::lexer::escape;

/// Where an expression is printed, which decides whether it needs parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Delimited on the right by a keyword, `)` or the end of input.
    Open,
    /// Head of an application spine.
    Function,
    /// Argument of an application.
    Argument,
}

fn is_atomic(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Int(_) | Expression::Bool(_) | Expression::String(_) | Expression::Var(_)
    )
}

fn needs_parens(expr: &Expression, slot: Slot) -> bool {
    match slot {
        Slot::Open => false,
        Slot::Function => !is_atomic(expr) && !matches!(expr, Expression::App(_)),
        Slot::Argument => !is_atomic(expr),
    }
}

fn write_expr(expr: &Expression, slot: Slot, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if needs_parens(expr, slot) {
        f.write_str("(")?;
        write_expr(expr, Slot::Open, f)?;
        return f.write_str(")");
    }

    match expr {
        Expression::Int(lit) => write!(f, "{}", lit.value),
        Expression::Bool(lit) => write!(f, "{}", lit.value),
        Expression::String(lit) => f.write_str(&escape(&lit.value)),
        Expression::Var(ident) => f.write_str(&ident.value),
        Expression::Lambda(lambda) => {
            write!(f, "\\{} -> ", lambda.binder.value)?;
            write_expr(&lambda.body, Slot::Open, f)
        }
        Expression::App(app) => {
            write_expr(&app.function, Slot::Function, f)?;
            f.write_str(" ")?;
            write_expr(&app.argument, Slot::Argument, f)
        }
        Expression::Let(let_expr) => {
            let keyword = if let_expr.recursive { "let rec" } else { "let" };
            write!(f, "{} {} = ", keyword, let_expr.binder.value)?;
            write_expr(&let_expr.value, Slot::Open, f)?;
            f.write_str(" in ")?;
            write_expr(&let_expr.body, Slot::Open, f)
        }
        Expression::If(if_expr) => {
            f.write_str("if ")?;
            write_expr(&if_expr.condition, Slot::Open, f)?;
            f.write_str(" then ")?;
            write_expr(&if_expr.then_case, Slot::Open, f)?;
            f.write_str(" else ")?;
            write_expr(&if_expr.else_case, Slot::Open, f)
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(self, Slot::Open, f)
    }
}
