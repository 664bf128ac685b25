use lachs::Span;

use super::pattern::Pattern;
use super::types::{MeasureExpr, TypeExpr};

#[derive(Debug, Clone)]
pub enum Expression<T> {
    Constant(Constant<T>),
    Ident(Ident<T>),
    Lambda(Lambda<T>),
    Apply(Apply<T>),
    Let(Let<T>),
    IfThenElse(IfThenElse<T>),
    Match(Match<T>),
    Function(Function<T>),
    Tuple(Tuple<T>),
    List(List<T>),
    Cons(Cons<T>),
    OptionSome(OptionSome<T>),
    OptionNone(OptionNone<T>),
    Typed(Typed<T>),
}

impl<T> Expression<T> {
    /// Get the source position of this expression
    pub fn position(&self) -> &Span {
        match self {
            Expression::Constant(c) => &c.position,
            Expression::Ident(id) => &id.position,
            Expression::Lambda(l) => &l.position,
            Expression::Apply(a) => &a.position,
            Expression::Let(l) => &l.position,
            Expression::IfThenElse(i) => &i.position,
            Expression::Match(m) => &m.position,
            Expression::Function(f) => &f.position,
            Expression::Tuple(t) => &t.position,
            Expression::List(l) => &l.position,
            Expression::Cons(c) => &c.position,
            Expression::OptionSome(s) => &s.position,
            Expression::OptionNone(n) => &n.position,
            Expression::Typed(t) => &t.position,
        }
    }
}

/// The value of a literal, shared by constant expressions and constant
/// patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    String(String),
    Unit,
    /// A numeric literal with a unit of measure, e.g. `9.81<m/s^2>`.
    Measured { value: Number, measure: MeasureExpr },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone)]
pub struct Constant<T> {
    pub value: Literal,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct Ident<T> {
    pub value: String,
    pub position: Span,
    pub info: T,
}

/// `fun pattern -> body`
#[derive(Debug, Clone)]
pub struct Lambda<T> {
    pub param: Box<Pattern<T>>,
    pub body: Box<Expression<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct Apply<T> {
    pub func: Box<Expression<T>>,
    pub arg: Box<Expression<T>>,
    pub position: Span,
    pub info: T,
}

/// One `pattern = value` binding of a `let` or `let rec` group.
#[derive(Debug, Clone)]
pub struct Binding<T> {
    pub pattern: Pattern<T>,
    pub value: Expression<T>,
    pub position: Span,
}

/// `let [rec] b1 and b2 ... in body`
#[derive(Debug, Clone)]
pub struct Let<T> {
    pub recursive: bool,
    pub bindings: Vec<Binding<T>>,
    pub body: Box<Expression<T>>,
    pub position: Span,
    pub info: T,
}

/// Conditional expression. A missing `else` branch has type `unit`.
#[derive(Debug, Clone)]
pub struct IfThenElse<T> {
    pub condition: Box<Expression<T>>,
    pub then_expr: Box<Expression<T>>,
    pub else_expr: Option<Box<Expression<T>>>,
    pub position: Span,
    pub info: T,
}

/// `| pattern [when guard] -> body`
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub pattern: Pattern<T>,
    pub guard: Option<Expression<T>>,
    pub body: Expression<T>,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct Match<T> {
    pub scrutinee: Box<Expression<T>>,
    pub rules: Vec<Rule<T>>,
    pub position: Span,
    pub info: T,
}

/// `function | p1 -> e1 | p2 -> e2`, a lambda that matches on its argument.
#[derive(Debug, Clone)]
pub struct Function<T> {
    pub rules: Vec<Rule<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct Tuple<T> {
    pub elements: Vec<Expression<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct List<T> {
    pub elements: Vec<Expression<T>>,
    pub position: Span,
    pub info: T,
}

/// `head :: tail`
#[derive(Debug, Clone)]
pub struct Cons<T> {
    pub head: Box<Expression<T>>,
    pub tail: Box<Expression<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct OptionSome<T> {
    pub value: Box<Expression<T>>,
    pub position: Span,
    pub info: T,
}

#[derive(Debug, Clone)]
pub struct OptionNone<T> {
    pub position: Span,
    pub info: T,
}

/// `(expr : annotation)`
#[derive(Debug, Clone)]
pub struct Typed<T> {
    pub expr: Box<Expression<T>>,
    pub annotation: TypeExpr,
    pub position: Span,
    pub info: T,
}

impl Binding<()> {
    pub fn new(pattern: Pattern<()>, value: Expression<()>) -> Self {
        Binding {
            pattern,
            value,
            position: Span::default(),
        }
    }
}

impl Rule<()> {
    pub fn new(pattern: Pattern<()>, body: Expression<()>) -> Self {
        Rule {
            pattern,
            guard: None,
            body,
            position: Span::default(),
        }
    }

    pub fn guarded(pattern: Pattern<()>, guard: Expression<()>, body: Expression<()>) -> Self {
        Rule {
            pattern,
            guard: Some(guard),
            body,
            position: Span::default(),
        }
    }
}

/// Span-less constructors for building trees in code.
impl Expression<()> {
    pub fn literal(value: Literal) -> Self {
        Expression::Constant(Constant {
            value,
            position: Span::default(),
            info: (),
        })
    }

    pub fn int(value: i64) -> Self {
        Self::literal(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Self::literal(Literal::Float(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::literal(Literal::Bool(value))
    }

    pub fn char(value: char) -> Self {
        Self::literal(Literal::Char(value))
    }

    pub fn string(value: &str) -> Self {
        Self::literal(Literal::String(value.to_string()))
    }

    pub fn unit() -> Self {
        Self::literal(Literal::Unit)
    }

    pub fn measured(value: Number, measure: MeasureExpr) -> Self {
        Self::literal(Literal::Measured { value, measure })
    }

    pub fn ident(name: &str) -> Self {
        Expression::Ident(Ident {
            value: name.to_string(),
            position: Span::default(),
            info: (),
        })
    }

    pub fn lambda(param: Pattern<()>, body: Expression<()>) -> Self {
        Expression::Lambda(Lambda {
            param: Box::new(param),
            body: Box::new(body),
            position: Span::default(),
            info: (),
        })
    }

    /// `fun name -> body`
    pub fn fun(param: &str, body: Expression<()>) -> Self {
        Self::lambda(Pattern::ident(param), body)
    }

    pub fn apply(func: Expression<()>, arg: Expression<()>) -> Self {
        Expression::Apply(Apply {
            func: Box::new(func),
            arg: Box::new(arg),
            position: Span::default(),
            info: (),
        })
    }

    /// Curried application `func a1 a2 ...`.
    pub fn call(func: Expression<()>, args: Vec<Expression<()>>) -> Self {
        args.into_iter().fold(func, Self::apply)
    }

    pub fn let_in(pattern: Pattern<()>, value: Expression<()>, body: Expression<()>) -> Self {
        Self::let_group(false, vec![Binding::new(pattern, value)], body)
    }

    pub fn let_rec_in(bindings: Vec<Binding<()>>, body: Expression<()>) -> Self {
        Self::let_group(true, bindings, body)
    }

    pub fn let_group(recursive: bool, bindings: Vec<Binding<()>>, body: Expression<()>) -> Self {
        Expression::Let(Let {
            recursive,
            bindings,
            body: Box::new(body),
            position: Span::default(),
            info: (),
        })
    }

    pub fn if_then_else(
        condition: Expression<()>,
        then_expr: Expression<()>,
        else_expr: Option<Expression<()>>,
    ) -> Self {
        Expression::IfThenElse(IfThenElse {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: else_expr.map(Box::new),
            position: Span::default(),
            info: (),
        })
    }

    pub fn match_with(scrutinee: Expression<()>, rules: Vec<Rule<()>>) -> Self {
        Expression::Match(Match {
            scrutinee: Box::new(scrutinee),
            rules,
            position: Span::default(),
            info: (),
        })
    }

    pub fn function(rules: Vec<Rule<()>>) -> Self {
        Expression::Function(Function {
            rules,
            position: Span::default(),
            info: (),
        })
    }

    pub fn tuple(elements: Vec<Expression<()>>) -> Self {
        Expression::Tuple(Tuple {
            elements,
            position: Span::default(),
            info: (),
        })
    }

    pub fn list(elements: Vec<Expression<()>>) -> Self {
        Expression::List(List {
            elements,
            position: Span::default(),
            info: (),
        })
    }

    pub fn cons(head: Expression<()>, tail: Expression<()>) -> Self {
        Expression::Cons(Cons {
            head: Box::new(head),
            tail: Box::new(tail),
            position: Span::default(),
            info: (),
        })
    }

    pub fn some(value: Expression<()>) -> Self {
        Expression::OptionSome(OptionSome {
            value: Box::new(value),
            position: Span::default(),
            info: (),
        })
    }

    pub fn none() -> Self {
        Expression::OptionNone(OptionNone {
            position: Span::default(),
            info: (),
        })
    }

    pub fn typed(expr: Expression<()>, annotation: TypeExpr) -> Self {
        Expression::Typed(Typed {
            expr: Box::new(expr),
            annotation,
            position: Span::default(),
            info: (),
        })
    }
}
