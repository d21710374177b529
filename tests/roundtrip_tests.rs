//! Rendering then parsing gives back the same tree.

use monoinfer::ast::Expression;
use monoinfer::parser::{parse_expression, parse_type};
use monoinfer::types::Monotype;
use proptest::prelude::*;

/// Strategy for unknown-free monotypes
fn monotype_strategy() -> impl Strategy<Value = Monotype> {
    let leaf = prop_oneof![
        Just(Monotype::Int),
        Just(Monotype::Bool),
        Just(Monotype::String),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), inner).prop_map(|(argument, result)| Monotype::function(argument, result))
    })
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("x"), Just("y"), Just("f"), Just("add")].prop_map(String::from)
}

/// Strategy for expressions the parser can produce
fn expr_strategy() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        (0i64..10_000).prop_map(Expression::int),
        any::<bool>().prop_map(Expression::bool),
        "[a-z \"\\\\\n]{0,8}".prop_map(Expression::string),
        name_strategy().prop_map(Expression::var),
    ];

    leaf.prop_recursive(4, 48, 3, |inner| {
        prop_oneof![
            (name_strategy(), inner.clone()).prop_map(|(x, body)| Expression::lambda(x, body)),
            (inner.clone(), inner.clone()).prop_map(|(f, a)| Expression::app(f, a)),
            (name_strategy(), inner.clone(), inner.clone()).prop_map(|(x, value, body)| {
                // the parser marks a let recursive exactly when its value mentions the binder
                if value.free_vars().contains(&x) {
                    Expression::let_rec(x, value, body)
                } else {
                    Expression::let_in(x, value, body)
                }
            }),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(c, t, e)| Expression::if_then_else(c, t, e)),
        ]
    })
}

proptest! {
    #[test]
    fn monotype_render_parse_roundtrip(ty in monotype_strategy()) {
        let rendered = ty.pretty();
        let parsed = parse_type(&rendered);
        prop_assert_eq!(parsed, Ok(ty), "rendered as {}", rendered);
    }

    #[test]
    fn expression_render_parse_roundtrip(expr in expr_strategy()) {
        let rendered = expr.to_string();
        let parsed = parse_expression(&rendered);
        prop_assert_eq!(parsed, Ok(expr), "rendered as {}", rendered);
    }
}

#[test]
fn unknowns_roundtrip() {
    for source in ["u1", "u1 -> u2", "(u1 -> u1) -> u12", "Int -> (u3 -> Bool) -> String"] {
        let ty = parse_type(source).unwrap();
        assert_eq!(ty.pretty(), source);
    }
}
