//! # AST - The Tree Handed Over by the Parser
//!
//! Parsing is done outside this crate. A parser delivers a [`Program`]: an
//! ordered list of top-level [`Item`]s built from the node types defined
//! here.
//!
//! ## Items
//!
//! ```text
//! let x = 1                      Item::Let      (recursive: false)
//! let rec f n = ... and g = ...  Item::Let      (recursive: true, two bindings)
//! f 10                           Item::Expression
//! [<Measure>] type m             Item::Measure  (definition: None)
//! [<Measure>] type N = kg m/s^2  Item::Measure  (definition: Some(...))
//! ```
//!
//! Function definitions arrive already desugared to lambdas:
//! `let f x y = e` is the binding `f = fun x -> fun y -> e`.
//!
//! ## Type Parameter `T`
//!
//! Every node is generic over an `info: T` slot, `()` straight out of the
//! parser. Inference does not look at it.
//!
//! ## Spans
//!
//! Nodes carry a [`lachs::Span`]. Type errors point at the span of the
//! construct that failed. The span-less constructors (`Expression::int`,
//! `Pattern::tuple`, `Item::let_binding`, ...) use `Span::default()`.

use lachs::Span;

pub mod expression;
pub mod pattern;
pub mod types;

pub use expression::*;
pub use pattern::*;
pub use types::*;

#[derive(Debug, Clone)]
pub struct Program<T> {
    pub items: Vec<Item<T>>,
}

#[derive(Debug, Clone)]
pub enum Item<T> {
    /// A bare expression, evaluated for its effect.
    Expression(Expression<T>),
    Let(LetItem<T>),
    Measure(MeasureDef),
}

/// A top-level `let` or `let rec` group without a trailing body.
#[derive(Debug, Clone)]
pub struct LetItem<T> {
    pub recursive: bool,
    pub bindings: Vec<Binding<T>>,
    pub position: Span,
    pub info: T,
}

/// `[<Measure>] type name [= definition]`
#[derive(Debug, Clone)]
pub struct MeasureDef {
    pub name: String,
    pub definition: Option<MeasureExpr>,
    pub position: Span,
}

impl<T> Program<T> {
    pub fn new(items: Vec<Item<T>>) -> Self {
        Program { items }
    }
}

impl Item<()> {
    pub fn expression(expr: Expression<()>) -> Self {
        Item::Expression(expr)
    }

    /// `let pattern = value`
    pub fn let_binding(pattern: Pattern<()>, value: Expression<()>) -> Self {
        Self::let_group(false, vec![Binding::new(pattern, value)])
    }

    /// `let name = value`
    pub fn let_value(name: &str, value: Expression<()>) -> Self {
        Self::let_binding(Pattern::ident(name), value)
    }

    /// `let rec name = value`
    pub fn let_rec(name: &str, value: Expression<()>) -> Self {
        Self::let_group(true, vec![Binding::new(Pattern::ident(name), value)])
    }

    pub fn let_group(recursive: bool, bindings: Vec<Binding<()>>) -> Self {
        Item::Let(LetItem {
            recursive,
            bindings,
            position: Span::default(),
            info: (),
        })
    }

    pub fn measure(name: &str) -> Self {
        Item::Measure(MeasureDef {
            name: name.to_string(),
            definition: None,
            position: Span::default(),
        })
    }

    pub fn measure_as(name: &str, definition: MeasureExpr) -> Self {
        Item::Measure(MeasureDef {
            name: name.to_string(),
            definition: Some(definition),
            position: Span::default(),
        })
    }
}
