use lachs::Span;

/// A type annotation as written in source.
///
/// Constructor names are resolved during inference: `int`, `float`,
/// `bool`, `char`, `string` and `unit` take no arguments, `list` and
/// `option` take one (`int list` is `Con { name: "list", args: [int] }`).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Con {
        name: String,
        args: Vec<TypeExpr>,
        position: Span,
    },
    /// A named type variable such as `'a`, without the quote.
    Var { name: String, position: Span },
    Func(Box<TypeExpr>, Box<TypeExpr>),
    Tuple {
        elements: Vec<TypeExpr>,
        position: Span,
    },
    /// `float<m/s>`
    Measured {
        base: Box<TypeExpr>,
        measure: MeasureExpr,
        position: Span,
    },
}

impl TypeExpr {
    pub fn position(&self) -> Span {
        match self {
            TypeExpr::Con { position, .. }
            | TypeExpr::Var { position, .. }
            | TypeExpr::Tuple { position, .. }
            | TypeExpr::Measured { position, .. } => position.clone(),
            TypeExpr::Func(param, _) => param.position(),
        }
    }

    pub fn con(name: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Con {
            name: name.to_string(),
            args,
            position: Span::default(),
        }
    }

    pub fn named(name: &str) -> Self {
        Self::con(name, Vec::new())
    }

    pub fn var(name: &str) -> Self {
        TypeExpr::Var {
            name: name.to_string(),
            position: Span::default(),
        }
    }

    pub fn func(param: TypeExpr, ret: TypeExpr) -> Self {
        TypeExpr::Func(Box::new(param), Box::new(ret))
    }

    pub fn list(elem: TypeExpr) -> Self {
        Self::con("list", vec![elem])
    }

    pub fn option(elem: TypeExpr) -> Self {
        Self::con("option", vec![elem])
    }

    pub fn tuple(elements: Vec<TypeExpr>) -> Self {
        TypeExpr::Tuple {
            elements,
            position: Span::default(),
        }
    }

    pub fn measured(base: TypeExpr, measure: MeasureExpr) -> Self {
        TypeExpr::Measured {
            base: Box::new(base),
            measure,
            position: Span::default(),
        }
    }
}

/// A unit-of-measure expression as written in source, e.g. `kg m / s^2`.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureExpr {
    /// The dimensionless measure `1`.
    One,
    Named { name: String, position: Span },
    Product(Box<MeasureExpr>, Box<MeasureExpr>),
    Quotient(Box<MeasureExpr>, Box<MeasureExpr>),
    Power(Box<MeasureExpr>, i32),
}

impl MeasureExpr {
    pub fn named(name: &str) -> Self {
        MeasureExpr::Named {
            name: name.to_string(),
            position: Span::default(),
        }
    }

    pub fn product(m1: MeasureExpr, m2: MeasureExpr) -> Self {
        MeasureExpr::Product(Box::new(m1), Box::new(m2))
    }

    pub fn quotient(m1: MeasureExpr, m2: MeasureExpr) -> Self {
        MeasureExpr::Quotient(Box::new(m1), Box::new(m2))
    }

    pub fn power(m: MeasureExpr, exponent: i32) -> Self {
        MeasureExpr::Power(Box::new(m), exponent)
    }
}
