use thiserror::Error;

use super::subst::Substitution;
use super::ty::{Type, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch { expected: Type, found: Type },
    #[error("occurs check: cannot construct infinite type {var} = {ty}")]
    OccursCheck { var: TypeVar, ty: Type },
}

/// Check if a type variable occurs within a type (occurs check).
///
/// The occurs check prevents the creation of infinite types by ensuring
/// we never create a substitution like `'t0 = 't0 -> int`.
///
/// ```text
/// occurs_in('t0, int) = false
/// occurs_in('t0, 't0) = true
/// occurs_in('t0, 't0 list) = true
/// occurs_in('t0, 't1 * 't2) = false
/// ```
fn occurs_in(var: &TypeVar, ty: &Type) -> bool {
    match ty {
        Type::Int | Type::Float | Type::Bool | Type::Char | Type::String | Type::Unit => false,
        Type::Var(v) => v == var,
        Type::Option(t) | Type::List(t) | Type::Measured(t, _) => occurs_in(var, t),
        Type::Func(t1, t2) => occurs_in(var, t1) || occurs_in(var, t2),
        Type::Tuple(t1, t2, rest) => {
            occurs_in(var, t1) || occurs_in(var, t2) || rest.iter().any(|t| occurs_in(var, t))
        }
    }
}

/// Unify two types, finding the most general substitution that makes them
/// equal.
///
/// # Algorithm
///
/// Structural recursion on both types:
///
/// ```text
/// Unify(int, int) = ∅
/// Unify('t0, 't0) = ∅
/// Unify('t0, int) = [t0 := int]
/// Unify('t0, 't0 -> int) = Error (occurs check)
///
/// Unify(a1 -> r1, a2 -> r2):
///   1. Unify a1 with a2, getting S1
///   2. Unify S1(r1) with S1(r2), getting S2
///   3. Return S2 ∘ S1
/// ```
///
/// Tuples of equal arity unify component-wise from left to right, threading
/// the substitution solved so far into every later pair exactly like the
/// function case. Lists and options unify their element types. Measured
/// numbers unify only when their measures are structurally identical.
///
/// When a variable meets a variable, the left one is bound, so the result
/// is deterministic for a fixed argument order.
pub fn unify(t1: &Type, t2: &Type) -> Result<Substitution, UnifyError> {
    log::trace!("unify {} ~ {}", t1, t2);
    match (t1, t2) {
        (Type::Int, Type::Int)
        | (Type::Float, Type::Float)
        | (Type::Bool, Type::Bool)
        | (Type::Char, Type::Char)
        | (Type::String, Type::String)
        | (Type::Unit, Type::Unit) => Ok(Substitution::empty()),

        (Type::Var(v1), Type::Var(v2)) if v1 == v2 => Ok(Substitution::empty()),
        (Type::Var(v), t) | (t, Type::Var(v)) => bind(v, t),

        (Type::Func(a1, r1), Type::Func(a2, r2)) => {
            unify_sequence(&[(&**a1, &**a2), (&**r1, &**r2)])
        }

        (Type::Tuple(a1, b1, rest1), Type::Tuple(a2, b2, rest2)) => {
            if rest1.len() != rest2.len() {
                return Err(UnifyError::Mismatch {
                    expected: t1.clone(),
                    found: t2.clone(),
                });
            }
            let mut pairs = vec![(&**a1, &**a2), (&**b1, &**b2)];
            pairs.extend(rest1.iter().zip(rest2.iter()));
            unify_sequence(&pairs)
        }

        (Type::List(e1), Type::List(e2)) | (Type::Option(e1), Type::Option(e2)) => unify(e1, e2),

        (Type::Measured(b1, m1), Type::Measured(b2, m2)) if m1 == m2 => unify(b1, b2),

        _ => Err(UnifyError::Mismatch {
            expected: t1.clone(),
            found: t2.clone(),
        }),
    }
}

fn bind(var: &TypeVar, ty: &Type) -> Result<Substitution, UnifyError> {
    if occurs_in(var, ty) {
        Err(UnifyError::OccursCheck {
            var: *var,
            ty: ty.clone(),
        })
    } else {
        Ok(Substitution::singleton(*var, ty.clone()))
    }
}

/// Unify pairs left to right. Each pair is unified under everything solved
/// by the pairs before it.
fn unify_sequence(pairs: &[(&Type, &Type)]) -> Result<Substitution, UnifyError> {
    let mut subst = Substitution::empty();
    for (left, right) in pairs {
        let left = subst.apply(left);
        let right = subst.apply(right);
        let s = unify(&left, &right)?;
        subst = s.compose(&subst);
    }
    Ok(subst)
}
