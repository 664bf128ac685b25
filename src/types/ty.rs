use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeVar {
    pub id: usize,
}

impl TypeVar {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'t{}", self.id)
    }
}

/// A unit-of-measure expression, compared structurally.
///
/// `m/s` and `m * s^-1` are different measures: no algebraic normalization
/// is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Measure {
    /// The dimensionless measure `1`.
    One,
    Named(String),
    Product(Box<Measure>, Box<Measure>),
    Quotient(Box<Measure>, Box<Measure>),
    Power(Box<Measure>, i32),
}

impl Measure {
    pub fn named(name: impl Into<String>) -> Self {
        Measure::Named(name.into())
    }

    pub fn product(m1: Measure, m2: Measure) -> Self {
        Measure::Product(Box::new(m1), Box::new(m2))
    }

    pub fn quotient(m1: Measure, m2: Measure) -> Self {
        Measure::Quotient(Box::new(m1), Box::new(m2))
    }

    pub fn power(m: Measure, exponent: i32) -> Self {
        Measure::Power(Box::new(m), exponent)
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Measure::One | Measure::Named(_) | Measure::Power(_, _))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Measure::One => write!(f, "1"),
            Measure::Named(name) => write!(f, "{}", name),
            Measure::Product(m1, m2) => write!(f, "{} {}", m1, m2),
            Measure::Quotient(m1, m2) => {
                if m2.is_atomic() {
                    write!(f, "{}/{}", m1, m2)
                } else {
                    write!(f, "{}/({})", m1, m2)
                }
            }
            Measure::Power(m, exponent) => {
                if m.is_atomic() {
                    write!(f, "{}^{}", m, exponent)
                } else {
                    write!(f, "({})^{}", m, exponent)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Bool,
    Char,
    String,
    Unit,
    Var(TypeVar),
    Option(Box<Type>),
    List(Box<Type>),
    Func(Box<Type>, Box<Type>),
    /// A tuple of at least two components: the first two plus the rest.
    Tuple(Box<Type>, Box<Type>, Vec<Type>),
    /// A numeric base type carrying a unit of measure, e.g. `float<m/s>`.
    Measured(Box<Type>, Measure),
}

impl Type {
    pub fn func(t1: Type, t2: Type) -> Self {
        Type::Func(Box::new(t1), Box::new(t2))
    }

    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    pub fn option(elem: Type) -> Self {
        Type::Option(Box::new(elem))
    }

    pub fn pair(t1: Type, t2: Type) -> Self {
        Type::Tuple(Box::new(t1), Box::new(t2), Vec::new())
    }

    pub fn tuple(t1: Type, t2: Type, rest: Vec<Type>) -> Self {
        Type::Tuple(Box::new(t1), Box::new(t2), rest)
    }

    /// Build a tuple type from its components, or `None` when there are
    /// fewer than two of them.
    pub fn tuple_of(components: Vec<Type>) -> Option<Self> {
        let mut iter = components.into_iter();
        let first = iter.next()?;
        let second = iter.next()?;
        Some(Type::tuple(first, second, iter.collect()))
    }

    /// A measured numeric type. The dimensionless measure collapses to the
    /// bare base type, so `float<1>` and `float` are the same type.
    pub fn measured(base: Type, measure: Measure) -> Self {
        match measure {
            Measure::One => base,
            measure => Type::Measured(Box::new(base), measure),
        }
    }

    pub fn var(id: usize) -> Self {
        Type::Var(TypeVar::new(id))
    }

    /// The components of a tuple type, in order.
    pub fn tuple_components(&self) -> Option<Vec<&Type>> {
        match self {
            Type::Tuple(t1, t2, rest) => {
                let mut components = vec![t1.as_ref(), t2.as_ref()];
                components.extend(rest.iter());
                Some(components)
            }
            _ => None,
        }
    }

    pub fn free_type_vars(&self) -> BTreeSet<TypeVar> {
        let mut set = BTreeSet::new();
        self.collect_free_vars(&mut set);
        set
    }

    fn collect_free_vars(&self, set: &mut BTreeSet<TypeVar>) {
        match self {
            Type::Int | Type::Float | Type::Bool | Type::Char | Type::String | Type::Unit => {}
            Type::Var(v) => {
                set.insert(*v);
            }
            Type::Option(t) | Type::List(t) | Type::Measured(t, _) => t.collect_free_vars(set),
            Type::Func(t1, t2) => {
                t1.collect_free_vars(set);
                t2.collect_free_vars(set);
            }
            Type::Tuple(t1, t2, rest) => {
                t1.collect_free_vars(set);
                t2.collect_free_vars(set);
                for t in rest {
                    t.collect_free_vars(set);
                }
            }
        }
    }

    /// Type variables in order of first appearance, left to right.
    pub fn vars_in_order(&self) -> Vec<TypeVar> {
        let mut order = Vec::new();
        self.collect_vars_in_order(&mut order);
        order
    }

    fn collect_vars_in_order(&self, order: &mut Vec<TypeVar>) {
        match self {
            Type::Int | Type::Float | Type::Bool | Type::Char | Type::String | Type::Unit => {}
            Type::Var(v) => {
                if !order.contains(v) {
                    order.push(*v);
                }
            }
            Type::Option(t) | Type::List(t) | Type::Measured(t, _) => {
                t.collect_vars_in_order(order)
            }
            Type::Func(t1, t2) => {
                t1.collect_vars_in_order(order);
                t2.collect_vars_in_order(order);
            }
            Type::Tuple(t1, t2, rest) => {
                t1.collect_vars_in_order(order);
                t2.collect_vars_in_order(order);
                for t in rest {
                    t.collect_vars_in_order(order);
                }
            }
        }
    }

    pub fn pretty(&self) -> String {
        self.pretty_with(&|v| v.to_string())
    }

    fn pretty_with(&self, name_of: &dyn Fn(&TypeVar) -> String) -> String {
        match self {
            Type::Int => "int".to_string(),
            Type::Float => "float".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Char => "char".to_string(),
            Type::String => "string".to_string(),
            Type::Unit => "unit".to_string(),
            Type::Var(v) => name_of(v),
            Type::Option(t) => format!("{} option", t.pretty_postfix_arg(name_of)),
            Type::List(t) => format!("{} list", t.pretty_postfix_arg(name_of)),
            Type::Measured(t, m) => format!("{}<{}>", t.pretty_with(name_of), m),
            Type::Func(t1, t2) => {
                let t1_str = if matches!(**t1, Type::Func(_, _)) {
                    format!("({})", t1.pretty_with(name_of))
                } else {
                    t1.pretty_with(name_of)
                };
                format!("{} -> {}", t1_str, t2.pretty_with(name_of))
            }
            Type::Tuple(_, _, _) => self
                .tuple_components()
                .unwrap_or_default()
                .iter()
                .map(|t| {
                    if matches!(t, Type::Func(_, _) | Type::Tuple(_, _, _)) {
                        format!("({})", t.pretty_with(name_of))
                    } else {
                        t.pretty_with(name_of)
                    }
                })
                .collect::<Vec<_>>()
                .join(" * "),
        }
    }

    fn pretty_postfix_arg(&self, name_of: &dyn Fn(&TypeVar) -> String) -> String {
        if matches!(self, Type::Func(_, _) | Type::Tuple(_, _, _)) {
            format!("({})", self.pretty_with(name_of))
        } else {
            self.pretty_with(name_of)
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScheme {
    pub vars: Vec<TypeVar>,
    pub ty: Type,
}

impl TypeScheme {
    pub fn monomorphic(ty: Type) -> Self {
        TypeScheme {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn polymorphic(vars: Vec<TypeVar>, ty: Type) -> Self {
        TypeScheme { vars, ty }
    }

    pub fn free_type_vars(&self) -> BTreeSet<TypeVar> {
        let mut free = self.ty.free_type_vars();
        for var in &self.vars {
            free.remove(var);
        }
        free
    }

    /// Rename the quantified variables to `0, 1, 2, ...` in order of first
    /// appearance in the body. Two schemes equal up to renaming of bound
    /// variables normalize to the same value.
    pub fn normalize(&self) -> TypeScheme {
        let mut renaming = BTreeMap::new();
        for var in self.ty.vars_in_order() {
            if self.vars.contains(&var) {
                let next = TypeVar::new(renaming.len());
                renaming.insert(var, Type::Var(next));
            }
        }
        let vars = (0..renaming.len()).map(TypeVar::new).collect();
        let ty = super::subst::Substitution(renaming).apply(&self.ty);
        TypeScheme { vars, ty }
    }
}

impl fmt::Display for TypeScheme {
    /// Quantified variables print as `'a`, `'b`, ... in order of appearance;
    /// variables left free print with their raw id.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: BTreeMap<TypeVar, String> = self
            .ty
            .vars_in_order()
            .into_iter()
            .filter(|v| self.vars.contains(v))
            .enumerate()
            .map(|(i, v)| (v, letter_name(i)))
            .collect();
        let body = self.ty.pretty_with(&|v| match names.get(v) {
            Some(name) => format!("'{}", name),
            None => v.to_string(),
        });
        write!(f, "{}", body)
    }
}

fn letter_name(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    if index < 26 {
        letter.to_string()
    } else {
        format!("{}{}", letter, index / 26)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_type_vars_concrete() {
        let ty = Type::func(Type::Int, Type::String);
        assert!(ty.free_type_vars().is_empty());
    }

    #[test]
    fn test_free_type_vars_single() {
        let var = TypeVar::new(0);
        let ty = Type::Var(var);
        let free = ty.free_type_vars();
        assert_eq!(free.len(), 1);
        assert!(free.contains(&var));
    }

    #[test]
    fn test_free_type_vars_compound() {
        let ty = Type::tuple(
            Type::list(Type::var(0)),
            Type::option(Type::var(1)),
            vec![Type::func(Type::var(2), Type::var(0))],
        );
        let free: Vec<_> = ty.free_type_vars().into_iter().map(|v| v.id).collect();
        assert_eq!(free, vec![0, 1, 2]);
    }

    #[test]
    fn test_tuple_of_requires_two_components() {
        assert!(Type::tuple_of(vec![]).is_none());
        assert!(Type::tuple_of(vec![Type::Int]).is_none());
        assert_eq!(
            Type::tuple_of(vec![Type::Int, Type::Bool]),
            Some(Type::pair(Type::Int, Type::Bool))
        );
    }

    #[test]
    fn test_measured_one_collapses() {
        assert_eq!(Type::measured(Type::Float, Measure::One), Type::Float);
        assert_eq!(
            Type::measured(Type::Float, Measure::named("m")),
            Type::Measured(Box::new(Type::Float), Measure::named("m"))
        );
    }

    #[test]
    fn test_pretty_print_simple() {
        assert_eq!(Type::Int.pretty(), "int");
        assert_eq!(Type::String.pretty(), "string");
        assert_eq!(Type::Unit.pretty(), "unit");
        assert_eq!(Type::var(3).pretty(), "'t3");
    }

    #[test]
    fn test_pretty_print_nested_function() {
        let ty = Type::func(Type::func(Type::Int, Type::Int), Type::String);
        assert_eq!(ty.pretty(), "(int -> int) -> string");
    }

    #[test]
    fn test_pretty_print_containers() {
        let ty = Type::list(Type::option(Type::pair(Type::Int, Type::Bool)));
        assert_eq!(ty.pretty(), "(int * bool) option list");
        let ty = Type::measured(
            Type::Float,
            Measure::quotient(Measure::named("m"), Measure::power(Measure::named("s"), 2)),
        );
        assert_eq!(ty.pretty(), "float<m/s^2>");
    }

    #[test]
    fn test_scheme_display_uses_letters() {
        let scheme = TypeScheme::polymorphic(
            vec![TypeVar::new(7), TypeVar::new(3)],
            Type::func(Type::var(7), Type::func(Type::var(3), Type::var(7))),
        );
        assert_eq!(scheme.to_string(), "'a -> 'b -> 'a");
    }

    #[test]
    fn test_normalize_renames_in_order_of_appearance() {
        let s1 = TypeScheme::polymorphic(
            vec![TypeVar::new(4), TypeVar::new(9)],
            Type::func(Type::var(9), Type::var(4)),
        );
        let s2 = TypeScheme::polymorphic(
            vec![TypeVar::new(1), TypeVar::new(2)],
            Type::func(Type::var(1), Type::var(2)),
        );
        assert_eq!(s1.normalize(), s2.normalize());
    }

    #[test]
    fn test_scheme_free_vars_exclude_quantified() {
        let scheme = TypeScheme::polymorphic(
            vec![TypeVar::new(0)],
            Type::func(Type::var(0), Type::var(1)),
        );
        let free: Vec<_> = scheme.free_type_vars().into_iter().collect();
        assert_eq!(free, vec![TypeVar::new(1)]);
    }
}
