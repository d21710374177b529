use tracing::trace;

use super::subst::Substitution;
use super::supply::FreshSupply;
use super::ty::Monotype;

/// Mutable state of one inference run: the substitution and the fresh supply.
///
/// Every run owns its own `CheckState`; nothing is shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckState {
    pub substitution: Substitution,
    pub supply: FreshSupply,
}

impl CheckState {
    pub fn new() -> Self {
        CheckState {
            substitution: Substitution::empty(),
            supply: FreshSupply::new(),
        }
    }

    /// Start from an existing substitution, e.g. to replay a known solution.
    pub fn with_substitution(substitution: Substitution) -> Self {
        CheckState {
            substitution,
            supply: FreshSupply::new(),
        }
    }

    pub fn fresh_unknown(&mut self) -> Monotype {
        let id = self.supply.next();
        trace!(unknown = id, "allocated fresh unknown");
        Monotype::Unknown(id)
    }

    /// Resolve `ty` through everything solved so far.
    pub fn zonk(&self, ty: &Monotype) -> Monotype {
        self.substitution.apply(ty)
    }
}
