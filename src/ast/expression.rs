use std::collections::BTreeSet;
use std::sync::Arc;

use lachs::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Int(IntLiteral),
    Bool(BoolLiteral),
    String(StringLiteral),
    Var(Ident),
    Lambda(Lambda),
    App(Application),
    Let(Let),
    If(IfThenElse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: i64,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolLiteral {
    pub value: bool,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub position: Span,
}

/// `\binder -> body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    pub binder: Ident,
    pub body: Arc<Expression>,
    pub position: Span,
}

/// `function argument`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub function: Arc<Expression>,
    pub argument: Arc<Expression>,
    pub position: Span,
}

/// `let [rec] binder = value in body`
///
/// A recursive let makes `binder` visible inside `value` as well as in `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Let {
    pub recursive: bool,
    pub binder: Ident,
    pub value: Arc<Expression>,
    pub body: Arc<Expression>,
    pub position: Span,
}

/// `if condition then then_case else else_case`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfThenElse {
    pub condition: Arc<Expression>,
    pub then_case: Arc<Expression>,
    pub else_case: Arc<Expression>,
    pub position: Span,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            position: Span::default(),
        }
    }
}

// Position-less constructors for trees built by hand.
impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Int(IntLiteral {
            value,
            position: Span::default(),
        })
    }

    pub fn bool(value: bool) -> Self {
        Expression::Bool(BoolLiteral {
            value,
            position: Span::default(),
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(StringLiteral {
            value: value.into(),
            position: Span::default(),
        })
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expression::Var(Ident::new(name))
    }

    pub fn lambda(binder: impl Into<String>, body: Expression) -> Self {
        Expression::Lambda(Lambda {
            binder: Ident::new(binder),
            body: Arc::new(body),
            position: Span::default(),
        })
    }

    pub fn app(function: Expression, argument: Expression) -> Self {
        Expression::App(Application {
            function: Arc::new(function),
            argument: Arc::new(argument),
            position: Span::default(),
        })
    }

    /// `function a1 a2 ...`, applied left to right.
    pub fn apps(function: Expression, arguments: impl IntoIterator<Item = Expression>) -> Self {
        arguments.into_iter().fold(function, Expression::app)
    }

    pub fn let_in(binder: impl Into<String>, value: Expression, body: Expression) -> Self {
        Self::make_let(false, binder, value, body)
    }

    pub fn let_rec(binder: impl Into<String>, value: Expression, body: Expression) -> Self {
        Self::make_let(true, binder, value, body)
    }

    fn make_let(
        recursive: bool,
        binder: impl Into<String>,
        value: Expression,
        body: Expression,
    ) -> Self {
        Expression::Let(Let {
            recursive,
            binder: Ident::new(binder),
            value: Arc::new(value),
            body: Arc::new(body),
            position: Span::default(),
        })
    }

    pub fn if_then_else(
        condition: Expression,
        then_case: Expression,
        else_case: Expression,
    ) -> Self {
        Expression::If(IfThenElse {
            condition: Arc::new(condition),
            then_case: Arc::new(then_case),
            else_case: Arc::new(else_case),
            position: Span::default(),
        })
    }

    pub fn position(&self) -> &Span {
        match self {
            Expression::Int(inner) => &inner.position,
            Expression::Bool(inner) => &inner.position,
            Expression::String(inner) => &inner.position,
            Expression::Var(inner) => &inner.position,
            Expression::Lambda(inner) => &inner.position,
            Expression::App(inner) => &inner.position,
            Expression::Let(inner) => &inner.position,
            Expression::If(inner) => &inner.position,
        }
    }

    /// Names referenced but not bound inside this expression.
    pub fn free_vars(&self) -> BTreeSet<String> {
        match self {
            Expression::Int(_) | Expression::Bool(_) | Expression::String(_) => BTreeSet::new(),
            Expression::Var(ident) => BTreeSet::from([ident.value.clone()]),
            Expression::Lambda(lambda) => {
                let mut free = lambda.body.free_vars();
                free.remove(&lambda.binder.value);
                free
            }
            Expression::App(app) => {
                let mut free = app.function.free_vars();
                free.extend(app.argument.free_vars());
                free
            }
            Expression::Let(let_expr) => {
                let mut free = let_expr.body.free_vars();
                free.remove(&let_expr.binder.value);
                let mut value_free = let_expr.value.free_vars();
                if let_expr.recursive {
                    value_free.remove(&let_expr.binder.value);
                }
                free.extend(value_free);
                free
            }
            Expression::If(if_expr) => {
                let mut free = if_expr.condition.free_vars();
                free.extend(if_expr.then_case.free_vars());
                free.extend(if_expr.else_case.free_vars());
                free
            }
        }
    }
}
