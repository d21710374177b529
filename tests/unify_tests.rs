use monoinfer::parser::parse_type;
use monoinfer::types::{CheckState, Monotype, Substitution, UnifyError, UnknownId};

fn ty(source: &str) -> Monotype {
    parse_type(source).unwrap_or_else(|err| panic!("bad type {:?}: {}", source, err))
}

fn given(solutions: &[(UnknownId, &str)]) -> CheckState {
    CheckState::with_substitution(
        solutions
            .iter()
            .map(|(id, solution)| (*id, ty(solution)))
            .collect(),
    )
}

fn unify(state: &mut CheckState, left: &str, right: &str) -> Result<(), UnifyError> {
    state.unify(&ty(left), &ty(right))
}

fn assert_solved(state: &CheckState, id: UnknownId, expected: &str) {
    assert_eq!(
        state.zonk(&Monotype::Unknown(id)),
        ty(expected),
        "u{} under {}",
        id,
        state.substitution
    );
}

fn assert_mismatch(result: Result<(), UnifyError>, a: &str, b: &str) {
    match result {
        Err(err) => assert!(
            err.is_mismatch_between(&ty(a), &ty(b)),
            "expected a mismatch between {} and {}, got: {}",
            a,
            b,
            err
        ),
        Ok(()) => panic!("expected {} and {} not to unify", a, b),
    }
}

#[test]
fn matching_primitives_unify() {
    let mut state = CheckState::new();
    unify(&mut state, "Int", "Int").unwrap();
    unify(&mut state, "String", "String").unwrap();
    unify(&mut state, "Bool", "Bool").unwrap();
}

#[test]
fn non_matching_primitives_fail() {
    let mut state = CheckState::new();
    assert_mismatch(unify(&mut state, "Int", "String"), "Int", "String");
    assert_mismatch(unify(&mut state, "String", "Bool"), "String", "Bool");
    assert_mismatch(unify(&mut state, "Int", "Bool"), "Int", "Bool");
    assert_mismatch(unify(&mut state, "Int -> Int", "Bool"), "Int -> Int", "Bool");
}

#[test]
fn unknowns_are_solved() {
    let mut state = CheckState::new();
    unify(&mut state, "u1", "Int").unwrap();
    unify(&mut state, "u2", "String").unwrap();
    unify(&mut state, "u3", "u4").unwrap();
    unify(&mut state, "u5", "String -> String").unwrap();

    assert_solved(&state, 1, "Int");
    assert_solved(&state, 2, "String");
    assert_solved(&state, 3, "u4");
    assert_solved(&state, 5, "String -> String");
}

#[test]
fn unification_with_unknowns_is_commutative() {
    let mut state = CheckState::new();
    unify(&mut state, "Int", "u1").unwrap();
    unify(&mut state, "String", "u2").unwrap();
    unify(&mut state, "u4", "u3").unwrap();
    unify(&mut state, "String -> String", "u5").unwrap();

    assert_solved(&state, 1, "Int");
    assert_solved(&state, 2, "String");
    assert_solved(&state, 4, "u3");
    assert_solved(&state, 5, "String -> String");
}

#[test]
fn unknown_with_itself_changes_nothing() {
    let mut state = CheckState::new();
    unify(&mut state, "u1", "u1").unwrap();
    assert_solved(&state, 1, "u1");
    assert_eq!(state, CheckState::new());
}

#[test]
fn no_circular_solutions() {
    let mut state = CheckState::new();
    unify(&mut state, "u1", "u2").unwrap();
    unify(&mut state, "u2", "u1").unwrap();

    assert_solved(&state, 1, "u2");
    assert_solved(&state, 2, "u2");
}

#[test]
fn occurs_check() {
    let mut state = CheckState::new();
    assert!(matches!(
        unify(&mut state, "u1", "u1 -> u1"),
        Err(UnifyError::OccursCheck { unknown: 1, .. })
    ));
    assert!(matches!(
        unify(&mut state, "u1 -> u1", "u1"),
        Err(UnifyError::OccursCheck { unknown: 1, .. })
    ));
    assert_eq!(state.substitution, Substitution::empty());
}

#[test]
fn existing_substitution_is_used() {
    let mut state = given(&[(1, "Int")]);
    unify(&mut state, "u1", "u5").unwrap();
    assert_solved(&state, 5, "Int");
}

#[test]
fn failure_through_substitution() {
    let mut state = given(&[(1, "Int"), (2, "u3"), (3, "String")]);
    assert_mismatch(unify(&mut state, "u1", "u3"), "Int", "String");
}

#[test]
fn function_types_unify() {
    let mut state = CheckState::new();
    unify(&mut state, "String -> Int", "String -> Int").unwrap();
    unify(&mut state, "Bool -> Bool", "Bool -> Bool").unwrap();
}

#[test]
fn solves_through_function_types() {
    let mut state = CheckState::new();
    unify(&mut state, "u1 -> String", "Int -> u2").unwrap();
    assert_solved(&state, 1, "Int");
    assert_solved(&state, 2, "String");

    unify(&mut state, "u3 -> Int", "(Bool -> String) -> Int").unwrap();
    assert_solved(&state, 3, "Bool -> String");
}

#[test]
fn no_circular_solutions_through_function_types() {
    let mut state = CheckState::new();
    unify(&mut state, "u1 -> u2", "u2 -> u1").unwrap();
    assert_solved(&state, 1, "u2");
    assert_solved(&state, 2, "u2");
}

#[test]
fn substitution_applies_transitively() {
    let subst: Substitution = [
        (1, ty("Int")),
        (2, ty("String")),
        (3, ty("u1")),
        (4, ty("u1 -> u2")),
    ]
    .into_iter()
    .collect();

    assert_eq!(subst.apply(&ty("Bool")), ty("Bool"));
    assert_eq!(subst.apply(&ty("u1 -> u2")), ty("Int -> String"));
    assert_eq!(subst.apply(&ty("u3")), ty("Int"));
    assert_eq!(subst.apply(&ty("u4")), ty("Int -> String"));
    assert_eq!(subst.apply(&ty("u9")), ty("u9"));
}
