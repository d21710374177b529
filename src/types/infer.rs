use tracing::debug;

use super::env::TypeEnv;
use super::error::TypeError;
use super::state::CheckState;
use super::ty::Monotype;
use crate::ast::{Application, Expression, IfThenElse, Lambda, Let};

/// Infer the type of `expr` in a fresh check state.
///
/// The result is fully resolved: it never mentions an unknown that has a solution.
/// Unknown ids start at 1 for every call.
pub fn infer_expr(env: &TypeEnv, expr: &Expression) -> Result<Monotype, TypeError> {
    let mut state = CheckState::new();
    let ty = state.infer(env, expr)?;
    let ty = state.zonk(&ty);
    debug!(
        ty = %ty,
        unknowns = state.supply.allocated(),
        solved = state.substitution.len(),
        "inferred expression type"
    );
    Ok(ty)
}

impl CheckState {
    /// Infer the type of `expr` under `env`.
    ///
    /// The returned type may still mention unknowns solved later by the caller's
    /// unifications; resolve it with [`CheckState::zonk`] before presenting it.
    pub fn infer(&mut self, env: &TypeEnv, expr: &Expression) -> Result<Monotype, TypeError> {
        match expr {
            Expression::Int(_) => Ok(Monotype::Int),

            Expression::Bool(_) => Ok(Monotype::Bool),

            Expression::String(_) => Ok(Monotype::String),

            Expression::Var(ident) => match env.lookup(&ident.value) {
                Some(ty) => Ok(ty.clone()),
                None => Err(TypeError::unknown_variable(
                    ident.value.clone(),
                    ident.position.clone(),
                )),
            },

            Expression::Lambda(lambda) => self.infer_lambda(env, lambda),

            Expression::App(app) => self.infer_application(env, app),

            Expression::Let(let_expr) => self.infer_let(env, let_expr),

            Expression::If(if_expr) => self.infer_if(env, if_expr),
        }
    }

    fn infer_lambda(&mut self, env: &TypeEnv, lambda: &Lambda) -> Result<Monotype, TypeError> {
        // parameters stay monomorphic inside the body
        let argument_ty = self.fresh_unknown();
        let body_env = env.extend(lambda.binder.value.clone(), argument_ty.clone());
        let body_ty = self.infer(&body_env, &lambda.body)?;
        Ok(Monotype::function(argument_ty, body_ty))
    }

    fn infer_application(
        &mut self,
        env: &TypeEnv,
        app: &Application,
    ) -> Result<Monotype, TypeError> {
        let function_ty = self.infer(env, &app.function)?;
        let argument_ty = self.infer(env, &app.argument)?;
        let result_ty = self.fresh_unknown();

        let expected = Monotype::function(argument_ty, result_ty.clone());
        self.unify(&function_ty, &expected)
            .map_err(|err| TypeError::from_unify_error(err, app.position.clone()))?;

        Ok(result_ty)
    }

    fn infer_let(&mut self, env: &TypeEnv, let_expr: &Let) -> Result<Monotype, TypeError> {
        let binder = &let_expr.binder.value;

        let binder_ty = if let_expr.recursive {
            let placeholder = self.fresh_unknown();
            let value_env = env.extend(binder.clone(), placeholder.clone());
            let value_ty = self.infer(&value_env, &let_expr.value)?;
            self.unify(&placeholder, &value_ty)
                .map_err(|err| TypeError::from_unify_error(err, let_expr.position.clone()))?;
            self.zonk(&placeholder)
        } else {
            let value_ty = self.infer(env, &let_expr.value)?;
            self.zonk(&value_ty)
        };

        // no generalization: the binder keeps exactly this monotype in the body
        let body_env = env.extend(binder.clone(), binder_ty);
        self.infer(&body_env, &let_expr.body)
    }

    fn infer_if(&mut self, env: &TypeEnv, if_expr: &IfThenElse) -> Result<Monotype, TypeError> {
        let condition_ty = self.infer(env, &if_expr.condition)?;
        self.unify(&condition_ty, &Monotype::Bool).map_err(|err| {
            TypeError::from_unify_error(err, if_expr.condition.position().clone())
        })?;

        let then_ty = self.infer(env, &if_expr.then_case)?;
        let else_ty = self.infer(env, &if_expr.else_case)?;
        self.unify(&then_ty, &else_ty)
            .map_err(|err| TypeError::from_unify_error(err, if_expr.position.clone()))?;

        Ok(self.zonk(&then_ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(id: usize) -> Monotype {
        Monotype::Unknown(id)
    }

    fn int_ops_env() -> TypeEnv {
        let int_op = Monotype::curried([Monotype::Int, Monotype::Int], Monotype::Int);
        TypeEnv::with_bindings([
            ("add", int_op.clone()),
            ("sub", int_op),
            (
                "eq_int",
                Monotype::curried([Monotype::Int, Monotype::Int], Monotype::Bool),
            ),
        ])
    }

    #[test]
    fn test_infer_literals() {
        let env = TypeEnv::empty();
        assert_eq!(infer_expr(&env, &Expression::int(42)), Ok(Monotype::Int));
        assert_eq!(infer_expr(&env, &Expression::bool(true)), Ok(Monotype::Bool));
        assert_eq!(
            infer_expr(&env, &Expression::string("x")),
            Ok(Monotype::String)
        );
    }

    #[test]
    fn test_literals_leave_state_untouched() {
        let mut state = CheckState::new();
        state
            .infer(&TypeEnv::empty(), &Expression::string("hi"))
            .unwrap();
        assert_eq!(state, CheckState::new());
    }

    #[test]
    fn test_infer_unknown_variable() {
        let result = infer_expr(&TypeEnv::empty(), &Expression::var("x"));
        match result {
            Err(TypeError::UnknownVariable { name, .. }) => assert_eq!(name, "x"),
            other => panic!("expected UnknownVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_infer_const_lambda() {
        let expr = Expression::lambda("x", Expression::int(42));
        assert_eq!(
            infer_expr(&TypeEnv::empty(), &expr),
            Ok(Monotype::function(u(1), Monotype::Int))
        );
    }

    #[test]
    fn test_fresh_ids_follow_traversal_order() {
        // \x -> (\y -> x)
        let expr = Expression::lambda("x", Expression::lambda("y", Expression::var("x")));
        assert_eq!(
            infer_expr(&TypeEnv::empty(), &expr),
            Ok(Monotype::curried([u(1), u(2)], u(1)))
        );
    }

    #[test]
    fn test_fresh_ids_reset_per_call() {
        let expr = Expression::lambda("x", Expression::var("x"));
        let env = TypeEnv::empty();
        let first = infer_expr(&env, &expr);
        let second = infer_expr(&env, &expr);
        assert_eq!(first, Ok(Monotype::function(u(1), u(1))));
        assert_eq!(first, second);
    }

    #[test]
    fn test_application_allocates_result_after_operands() {
        // (\x -> x) 5: x gets u1, the result u2
        let expr = Expression::app(
            Expression::lambda("x", Expression::var("x")),
            Expression::int(5),
        );
        let mut state = CheckState::new();
        let ty = state.infer(&TypeEnv::empty(), &expr).unwrap();
        assert_eq!(ty, u(2));
        assert_eq!(state.zonk(&ty), Monotype::Int);
        assert_eq!(state.supply.allocated(), 2);
    }

    #[test]
    fn test_let_binding_not_visible_in_value() {
        // let x = x in x, with no outer x
        let expr = Expression::let_in("x", Expression::var("x"), Expression::var("x"));
        assert!(matches!(
            infer_expr(&TypeEnv::empty(), &expr),
            Err(TypeError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn test_let_is_not_generalized() {
        // let id = \x -> x in id 1 used at a second type fails
        let id = Expression::lambda("x", Expression::var("x"));
        let body = Expression::app(
            Expression::app(Expression::var("id"), Expression::var("id")),
            Expression::int(1),
        );
        let expr = Expression::let_in("id", id, body);
        assert!(infer_expr(&TypeEnv::empty(), &expr).is_err());
    }

    #[test]
    fn test_recursive_let() {
        // let sum = \x -> if eq_int x 0 then 0 else add x (sum (sub x 1)) in sum 3
        let x = || Expression::var("x");
        let recursive_call = Expression::app(
            Expression::var("sum"),
            Expression::apps(Expression::var("sub"), [x(), Expression::int(1)]),
        );
        let value = Expression::lambda(
            "x",
            Expression::if_then_else(
                Expression::apps(Expression::var("eq_int"), [x(), Expression::int(0)]),
                Expression::int(0),
                Expression::apps(Expression::var("add"), [x(), recursive_call]),
            ),
        );
        let expr = Expression::let_rec(
            "sum",
            value,
            Expression::app(Expression::var("sum"), Expression::int(3)),
        );
        assert_eq!(infer_expr(&int_ops_env(), &expr), Ok(Monotype::Int));
    }

    #[test]
    fn test_if_condition_must_be_bool() {
        let expr = Expression::if_then_else(
            Expression::int(1),
            Expression::int(0),
            Expression::int(1),
        );
        let err = infer_expr(&TypeEnv::empty(), &expr).unwrap_err();
        assert!(err.is_mismatch_between(&Monotype::Bool, &Monotype::Int));
    }

    #[test]
    fn test_if_branches_must_agree() {
        let expr = Expression::if_then_else(
            Expression::bool(true),
            Expression::int(0),
            Expression::string("Hello"),
        );
        let err = infer_expr(&TypeEnv::empty(), &expr).unwrap_err();
        assert!(err.is_mismatch_between(&Monotype::Int, &Monotype::String));
    }

    #[test]
    fn test_if_result_is_resolved() {
        // \x -> if true then x else 1
        let expr = Expression::lambda(
            "x",
            Expression::if_then_else(
                Expression::bool(true),
                Expression::var("x"),
                Expression::int(1),
            ),
        );
        assert_eq!(
            infer_expr(&TypeEnv::empty(), &expr),
            Ok(Monotype::function(Monotype::Int, Monotype::Int))
        );
    }

    #[test]
    fn test_self_application_fails_occurs_check() {
        // \x -> x x
        let expr = Expression::lambda(
            "x",
            Expression::app(Expression::var("x"), Expression::var("x")),
        );
        let err = infer_expr(&TypeEnv::empty(), &expr).unwrap_err();
        assert!(matches!(err, TypeError::OccursCheck { unknown: 1, .. }));
    }

    #[test]
    fn test_first_error_wins() {
        // (y z): y is looked up before z
        let expr = Expression::app(Expression::var("y"), Expression::var("z"));
        match infer_expr(&TypeEnv::empty(), &expr) {
            Err(TypeError::UnknownVariable { name, .. }) => assert_eq!(name, "y"),
            other => panic!("expected UnknownVariable, got {:?}", other),
        }
    }
}
