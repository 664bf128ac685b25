//! # Pattern AST
//!
//! Patterns appear in lambda parameters, `let` bindings and match rules.
//! Inference checks a pattern against the type of the value it
//! destructures and returns the names it binds.
//!
//! ```text
//! _                 Pattern::Wildcard
//! x                 Pattern::Ident
//! 42, 'c', ()       Pattern::Constant
//! (a, b, c)         Pattern::Tuple      (at least two components)
//! [a; b]            Pattern::List       (fixed-length list)
//! head :: tail      Pattern::Cons
//! Some p, None      Pattern::OptionSome, Pattern::OptionNone
//! (p : int list)    Pattern::Typed
//! ```
//!
//! Every identifier may be bound at most once in one pattern: `(x, x)` is
//! rejected during inference.

use lachs::Span;

use super::expression::{Constant, Ident, Literal, OptionNone};
use super::types::TypeExpr;

#[derive(Debug, Clone)]
pub enum Pattern<T> {
    Wildcard(Wildcard<T>),
    Ident(Ident<T>),
    Constant(Constant<T>),
    Tuple(TuplePattern<T>),
    List(ListPattern<T>),
    Cons(ConsPattern<T>),
    OptionSome(SomePattern<T>),
    OptionNone(OptionNone<T>),
    Typed(TypedPattern<T>),
}

impl<T> Pattern<T> {
    /// Get the source position of this pattern
    pub fn position(&self) -> &Span {
        match self {
            Pattern::Wildcard(w) => &w.position,
            Pattern::Ident(id) => &id.position,
            Pattern::Constant(c) => &c.position,
            Pattern::Tuple(t) => &t.position,
            Pattern::List(l) => &l.position,
            Pattern::Cons(c) => &c.position,
            Pattern::OptionSome(s) => &s.position,
            Pattern::OptionNone(n) => &n.position,
            Pattern::Typed(t) => &t.position,
        }
    }

    /// Identifiers bound by this pattern, left to right, duplicates included.
    pub fn bound_idents(&self) -> Vec<&Ident<T>> {
        let mut idents = Vec::new();
        self.collect_idents(&mut idents);
        idents
    }

    fn collect_idents<'a>(&'a self, idents: &mut Vec<&'a Ident<T>>) {
        match self {
            Pattern::Wildcard(_) | Pattern::Constant(_) | Pattern::OptionNone(_) => {}
            Pattern::Ident(id) => idents.push(id),
            Pattern::Tuple(TuplePattern { elements, .. })
            | Pattern::List(ListPattern { elements, .. }) => {
                for element in elements {
                    element.collect_idents(idents);
                }
            }
            Pattern::Cons(cons) => {
                cons.head.collect_idents(idents);
                cons.tail.collect_idents(idents);
            }
            Pattern::OptionSome(some) => some.inner.collect_idents(idents),
            Pattern::Typed(typed) => typed.pattern.collect_idents(idents),
        }
    }
}

/// `_`, matches anything and binds nothing.
#[derive(Debug, Clone)]
pub struct Wildcard<T> {
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct TuplePattern<T> {
    pub elements: Vec<Pattern<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct ListPattern<T> {
    pub elements: Vec<Pattern<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct ConsPattern<T> {
    pub head: Box<Pattern<T>>,
    pub tail: Box<Pattern<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct SomePattern<T> {
    pub inner: Box<Pattern<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct TypedPattern<T> {
    pub pattern: Box<Pattern<T>>,
    pub annotation: TypeExpr,
    pub position: Span,
    pub info: T,
}

impl Pattern<()> {
    pub fn wildcard() -> Self {
        Pattern::Wildcard(Wildcard {
            position: Span::default(),
            info: (),
        })
    }

    pub fn ident(name: &str) -> Self {
        Pattern::Ident(Ident {
            value: name.to_string(),
            position: Span::default(),
            info: (),
        })
    }

    pub fn literal(value: Literal) -> Self {
        Pattern::Constant(Constant {
            value,
            position: Span::default(),
            info: (),
        })
    }

    pub fn int(value: i64) -> Self {
        Self::literal(Literal::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::literal(Literal::Bool(value))
    }

    pub fn string(value: &str) -> Self {
        Self::literal(Literal::String(value.to_string()))
    }

    pub fn unit() -> Self {
        Self::literal(Literal::Unit)
    }

    pub fn tuple(elements: Vec<Pattern<()>>) -> Self {
        Pattern::Tuple(TuplePattern {
            elements,
            position: Span::default(),
            info: (),
        })
    }

    pub fn list(elements: Vec<Pattern<()>>) -> Self {
        Pattern::List(ListPattern {
            elements,
            position: Span::default(),
            info: (),
        })
    }

    pub fn cons(head: Pattern<()>, tail: Pattern<()>) -> Self {
        Pattern::Cons(ConsPattern {
            head: Box::new(head),
            tail: Box::new(tail),
            position: Span::default(),
            info: (),
        })
    }

    pub fn some(inner: Pattern<()>) -> Self {
        Pattern::OptionSome(SomePattern {
            inner: Box::new(inner),
            position: Span::default(),
            info: (),
        })
    }

    pub fn none() -> Self {
        Pattern::OptionNone(OptionNone {
            position: Span::default(),
            info: (),
        })
    }

    pub fn typed(pattern: Pattern<()>, annotation: TypeExpr) -> Self {
        Pattern::Typed(TypedPattern {
            pattern: Box::new(pattern),
            annotation,
            position: Span::default(),
            info: (),
        })
    }
}
