//! Expression parsers

use std::sync::Arc;

use crate::ast::{Application, Expression, IfThenElse, Lambda, Let};

use crate::parser::combinators::{
    BoxedParser, expect_arrow, expect_backslash, expect_else, expect_equals, expect_if, expect_in,
    expect_let, expect_lparen, expect_rec, expect_rparen, expect_then, many, optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{boolean, ident, integer, string_literal};

/// expression := atom+
///
/// Juxtaposed atoms form a left-associative application spine: `f a b` is `(f a) b`.
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let head = atom().parse(state)?;
        let arguments = many(atom()).parse(state)?;

        Ok(arguments.into_iter().fold(head, |function, argument| {
            let position = function.position().merge(argument.position());
            Expression::App(Application {
                function: Arc::new(function),
                argument: Arc::new(argument),
                position,
            })
        }))
    })
}

/// atom := "(" expression ")" | lambda | let | if | ident | int | bool | string
fn atom() -> BoxedParser<Expression> {
    let var = ident() >> Expression::Var;
    let int = integer() >> Expression::Int;
    let bool = boolean() >> Expression::Bool;
    let string = string_literal() >> Expression::String;

    (parenthesized() | lambda() | let_in() | if_then_else() | var | int | bool | string)
        .label("expression")
}

/// "(" expression ")"
fn parenthesized() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        expect_lparen().parse(state)?;
        let inner = expression().parse(state)?;
        expect_rparen().parse(state)?;
        Ok(inner)
    })
}

/// lambda := "\" ident "->" expression
fn lambda() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_backslash().parse(state)?;
        let binder = ident().parse(state)?;
        expect_arrow().parse(state)?;
        let body = expression().parse(state)?;

        Ok(Expression::Lambda(Lambda {
            position: start.pos().merge(body.position()),
            binder,
            body: Arc::new(body),
        }))
    })
}

/// let := "let" ["rec"] ident "=" expression "in" expression
///
/// Without `rec`, the binding is still recursive when its value mentions the binder.
fn let_in() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_let().parse(state)?;
        let rec = optional(expect_rec()).parse(state)?;
        let binder = ident().parse(state)?;
        expect_equals().parse(state)?;
        let value = expression().parse(state)?;
        expect_in().parse(state)?;
        let body = expression().parse(state)?;

        let recursive = rec.is_some() || value.free_vars().contains(&binder.value);

        Ok(Expression::Let(Let {
            position: start.pos().merge(body.position()),
            recursive,
            binder,
            value: Arc::new(value),
            body: Arc::new(body),
        }))
    })
}

/// if := "if" expression "then" expression "else" expression
fn if_then_else() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_if().parse(state)?;
        let condition = expression().parse(state)?;
        expect_then().parse(state)?;
        let then_case = expression().parse(state)?;
        expect_else().parse(state)?;
        let else_case = expression().parse(state)?;

        Ok(Expression::If(IfThenElse {
            position: start.pos().merge(else_case.position()),
            condition: Arc::new(condition),
            then_case: Arc::new(then_case),
            else_case: Arc::new(else_case),
        }))
    })
}
