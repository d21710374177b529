use thiserror::Error;
use tracing::trace;

use super::state::CheckState;
use super::ty::{Monotype, UnknownId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("Can't match {left} with {right}")]
    Mismatch { left: Monotype, right: Monotype },
    #[error("cannot construct infinite type: u{unknown} = {ty}")]
    OccursCheck { unknown: UnknownId, ty: Monotype },
}

impl UnifyError {
    /// Is this a mismatch between `a` and `b`, in either order?
    ///
    /// The unifier does not promise which operand is reported first.
    pub fn is_mismatch_between(&self, a: &Monotype, b: &Monotype) -> bool {
        match self {
            UnifyError::Mismatch { left, right } => {
                (left == a && right == b) || (left == b && right == a)
            }
            UnifyError::OccursCheck { .. } => false,
        }
    }
}

impl CheckState {
    /// Make `left` and `right` equal, recording solutions in the substitution.
    ///
    /// # Algorithm
    ///
    /// Both sides are resolved through the current substitution first, then:
    ///
    /// ```text
    /// Int ~ Int, Bool ~ Bool, String ~ String    = ok
    /// (a1 -> r1) ~ (a2 -> r2)                    = a1 ~ a2, then r1 ~ r2
    /// uN ~ uN                                    = ok
    /// uN ~ t, t ~ uN                             = [N := t] unless t mentions uN
    /// anything else                              = Mismatch
    /// ```
    ///
    /// Two distinct unknowns always solve the left one to the right one, so
    /// `u1 ~ u2` records `u1 := u2` and `u4 ~ u3` records `u4 := u3`.
    ///
    /// Result types of a function are resolved again before they are compared,
    /// because unifying the arguments may have solved unknowns they mention:
    ///
    /// ```text
    /// (u1 -> u1) ~ (Int -> u2):
    ///   u1 ~ Int   records u1 := Int
    ///   Int ~ u2   records u2 := Int
    /// ```
    pub fn unify(&mut self, left: &Monotype, right: &Monotype) -> Result<(), UnifyError> {
        let left = self.zonk(left);
        let right = self.zonk(right);

        match (&left, &right) {
            (Monotype::Int, Monotype::Int)
            | (Monotype::Bool, Monotype::Bool)
            | (Monotype::String, Monotype::String) => Ok(()),

            (Monotype::Function(left_arg, left_res), Monotype::Function(right_arg, right_res)) => {
                self.unify(left_arg, right_arg)?;
                // `unify` zonks its operands, which picks up the argument solutions
                self.unify(left_res, right_res)
            }

            (Monotype::Unknown(a), Monotype::Unknown(b)) if a == b => Ok(()),

            // left before right: a pair of unknowns binds the left one
            (Monotype::Unknown(id), ty) | (ty, Monotype::Unknown(id)) => self.solve(*id, ty),

            _ => Err(UnifyError::Mismatch { left, right }),
        }
    }

    fn solve(&mut self, id: UnknownId, ty: &Monotype) -> Result<(), UnifyError> {
        if ty.contains_unknown(id) {
            return Err(UnifyError::OccursCheck {
                unknown: id,
                ty: ty.clone(),
            });
        }
        trace!(unknown = id, solution = %ty, "solved unknown");
        self.substitution.insert(id, ty.clone());
        Ok(())
    }
}
