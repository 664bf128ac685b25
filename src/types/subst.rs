use std::collections::BTreeMap;

use super::ty::{Type, TypeScheme, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution(pub BTreeMap<TypeVar, Type>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(BTreeMap::new())
    }

    /// One-entry substitution. No occurs-check is done here: that is the
    /// unifier's job.
    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        let mut map = BTreeMap::new();
        map.insert(var, ty);
        Substitution(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn apply(&self, ty: &Type) -> Type {
        if self.is_empty() {
            return ty.clone();
        }
        match ty {
            Type::Int | Type::Float | Type::Bool | Type::Char | Type::String | Type::Unit => {
                ty.clone()
            }
            Type::Var(v) => self.0.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Type::Option(t) => Type::option(self.apply(t)),
            Type::List(t) => Type::list(self.apply(t)),
            Type::Measured(t, m) => Type::Measured(Box::new(self.apply(t)), m.clone()),
            Type::Func(t1, t2) => Type::func(self.apply(t1), self.apply(t2)),
            Type::Tuple(t1, t2, rest) => Type::tuple(
                self.apply(t1),
                self.apply(t2),
                rest.iter().map(|t| self.apply(t)).collect(),
            ),
        }
    }

    /// Apply to a scheme's body. The scheme's own quantified variables are
    /// not substituted.
    pub fn apply_scheme(&self, scheme: &TypeScheme) -> TypeScheme {
        let ty = if scheme.vars.iter().any(|v| self.0.contains_key(v)) {
            self.without(&scheme.vars).apply(&scheme.ty)
        } else {
            self.apply(&scheme.ty)
        };
        TypeScheme {
            vars: scheme.vars.clone(),
            ty,
        }
    }

    /// This substitution minus the given keys.
    pub fn without(&self, vars: &[TypeVar]) -> Substitution {
        Substitution(
            self.0
                .iter()
                .filter(|(var, _)| !vars.contains(var))
                .map(|(var, ty)| (*var, ty.clone()))
                .collect(),
        )
    }

    /// `self.compose(&other)` behaves like applying `other` first and `self`
    /// second: every type `other` maps to is rewritten by `self`, then the
    /// entries of `self` for keys `other` does not mention are added.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = BTreeMap::new();

        for (var, ty) in &other.0 {
            result.insert(*var, self.apply(ty));
        }

        for (var, ty) in &self.0 {
            if !result.contains_key(var) {
                result.insert(*var, ty.clone());
            }
        }

        Substitution(result)
    }
}
