use std::collections::{BTreeMap, BTreeSet};

use super::subst::Substitution;
use super::ty::{TypeScheme, TypeVar};

/// Identifier to scheme mapping.
///
/// Scopes are modelled as copy-and-extend: `extend` returns a new
/// environment and never touches the one it was called on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeEnv {
    bindings: BTreeMap<String, TypeScheme>,
}

impl TypeEnv {
    pub fn empty() -> Self {
        TypeEnv {
            bindings: BTreeMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<(String, TypeScheme)>) -> Self {
        TypeEnv {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeScheme)> {
        self.bindings.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn extend(&self, name: String, scheme: TypeScheme) -> TypeEnv {
        let mut new_bindings = self.bindings.clone();
        new_bindings.insert(name, scheme);
        TypeEnv {
            bindings: new_bindings,
        }
    }

    pub fn extend_many(&self, bindings: Vec<(String, TypeScheme)>) -> TypeEnv {
        let mut new_bindings = self.bindings.clone();
        for (name, scheme) in bindings {
            new_bindings.insert(name, scheme);
        }
        TypeEnv {
            bindings: new_bindings,
        }
    }

    /// Variables free in some binding, i.e. not quantified by that binding's
    /// scheme. Generalization must leave these alone.
    pub fn free_type_vars(&self) -> BTreeSet<TypeVar> {
        let mut free = BTreeSet::new();
        for scheme in self.bindings.values() {
            free.extend(scheme.free_type_vars());
        }
        free
    }

    pub fn apply_subst(&self, subst: &Substitution) -> TypeEnv {
        if subst.is_empty() {
            return self.clone();
        }
        let bindings = self
            .bindings
            .iter()
            .map(|(name, scheme)| (name.clone(), subst.apply_scheme(scheme)))
            .collect();

        TypeEnv { bindings }
    }
}
