use std::collections::BTreeMap;
use std::fmt;

use super::ty::{Monotype, UnknownId};

/// Solutions for unknowns found so far.
///
/// Entries are only ever added. The unifier runs the occurs check before every
/// insertion, so resolving through the map always terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(BTreeMap<UnknownId, Monotype>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(BTreeMap::new())
    }

    pub fn singleton(id: UnknownId, ty: Monotype) -> Self {
        let mut subst = Substitution::empty();
        subst.insert(id, ty);
        subst
    }

    pub fn insert(&mut self, id: UnknownId, ty: Monotype) {
        debug_assert!(
            !self.apply(&ty).contains_unknown(id),
            "cyclic solution u{} = {}",
            id,
            ty
        );
        self.0.insert(id, ty);
    }

    pub fn get(&self, id: UnknownId) -> Option<&Monotype> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnknownId, &Monotype)> {
        self.0.iter().map(|(id, ty)| (*id, ty))
    }

    /// Fully resolve `ty`, following chains like `u1 ↦ u2 ↦ Int`.
    pub fn apply(&self, ty: &Monotype) -> Monotype {
        match ty {
            Monotype::Int | Monotype::Bool | Monotype::String => ty.clone(),
            Monotype::Unknown(id) => match self.0.get(id) {
                Some(solution) => self.apply(solution),
                None => ty.clone(),
            },
            Monotype::Function(argument, result) => {
                Monotype::function(self.apply(argument), self.apply(result))
            }
        }
    }
}

impl FromIterator<(UnknownId, Monotype)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (UnknownId, Monotype)>>(iter: I) -> Self {
        let mut subst = Substitution::empty();
        for (id, ty) in iter {
            subst.insert(id, ty);
        }
        subst
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{{}}");
        }
        let entries: Vec<_> = self
            .0
            .iter()
            .map(|(id, ty)| format!("u{} ↦ {}", id, ty))
            .collect();
        write!(f, "{{ {} }}", entries.join(", "))
    }
}
