use imbl::HashMap;

use super::ty::Monotype;

/// Scoped typing environment.
///
/// Backed by a persistent map: `extend` shares structure with the receiver and
/// leaves it untouched, so sibling scopes never observe each other's bindings.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    bindings: HashMap<String, Monotype>,
}

impl TypeEnv {
    pub fn empty() -> Self {
        TypeEnv {
            bindings: HashMap::new(),
        }
    }

    pub fn with_bindings<N: Into<String>>(
        bindings: impl IntoIterator<Item = (N, Monotype)>,
    ) -> Self {
        TypeEnv {
            bindings: bindings
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Monotype> {
        self.bindings.get(name)
    }

    pub fn extend(&self, name: impl Into<String>, ty: Monotype) -> TypeEnv {
        TypeEnv {
            bindings: self.bindings.update(name.into(), ty),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
