use imbl::HashMap;

use crate::prelude::Primitive;

use super::value::Value;

/// Persistent mapping from names to runtime values.
///
/// Extending a scope returns a new one; closures keep the scope they captured.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: HashMap<String, Value>,
}

impl Scope {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scope binding every primitive under each of its names.
    pub fn prelude() -> Self {
        let bindings = Primitive::ALL
            .into_iter()
            .flat_map(|primitive| {
                primitive
                    .names()
                    .iter()
                    .map(move |name| (name.to_string(), Value::primitive(primitive)))
            })
            .collect();
        Self { bindings }
    }

    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self {
            bindings: self.bindings.update(name.into(), value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_leaves_parent() {
        let parent = Scope::empty().extend("x", Value::Int(1));
        let child = parent.extend("x", Value::Int(2));
        assert_eq!(parent.resolve("x"), Some(&Value::Int(1)));
        assert_eq!(child.resolve("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_prelude_binds_aliases() {
        let scope = Scope::prelude();
        assert!(scope.resolve("eq_int").is_some_and(Value::is_function));
        assert!(scope.resolve("int_equals").is_some_and(Value::is_function));
        assert!(scope.resolve("mul").is_none());
    }
}
