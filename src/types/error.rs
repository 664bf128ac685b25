//! # Type Error Definitions
//!
//! Errors raised while inferring a program. Inference stops at the first
//! one, so a failed run produces exactly one `TypeError`.
//!
//! - a name is used but never bound (`UnboundVariable`)
//! - an annotation names an unknown type or measure (`UnboundType`,
//!   `UnboundMeasure`, `TypeConstructorArity`)
//! - two types cannot be unified (`TypeMismatch`, `OccursCheck`)
//! - a pattern cannot match the type it is checked against
//!   (`DuplicatePatternVariable`, `PatternArity`, `ImpossiblePattern`)
//!
//! ## Error Reporting
//!
//! `Display` gives the bare message. [`TypeError::render`] additionally
//! points at the source span when the parser attached one:
//!
//! ```text
//! Type error: unbound variable: x
//! Type error: type mismatch: expected int, found bool
//! Type error: cannot construct infinite type: 't0 = 't0 -> 't1
//! ```

use lachs::Span;
use thiserror::Error;

use super::ty::{Type, TypeVar};
use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Reference to a name that is not bound in the current scope.
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String, span: Span },

    /// Two types that must be equal have incompatible shapes.
    #[error("type mismatch: expected {expected}, found {found}{}", note(.context))]
    TypeMismatch {
        expected: Type,
        found: Type,
        span: Span,
        /// Optional additional context for the error
        context: Option<String>,
    },

    /// Unification would bind a variable to a type containing it.
    #[error("cannot construct infinite type: {var} = {ty}")]
    OccursCheck { var: TypeVar, ty: Type, span: Span },

    /// An annotation names a type constructor that does not exist.
    #[error("unbound type: {name}")]
    UnboundType { name: String, span: Span },

    /// A measure expression names a measure that was never declared.
    #[error("unbound measure: {name}")]
    UnboundMeasure { name: String, span: Span },

    #[error("type {name} expects {expected} argument(s), found {found}")]
    TypeConstructorArity {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    /// The same name is bound twice in one pattern or one `let ... and` group.
    #[error("variable {name} is bound more than once in this pattern")]
    DuplicatePatternVariable { name: String, span: Span },

    /// A tuple pattern's length differs from the tuple type it is matched against.
    #[error("tuple pattern has {found} components but the matched type has {expected}")]
    PatternArity {
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("impossible pattern: {reason}")]
    ImpossiblePattern { reason: String, span: Span },

    /// A tuple expression or tuple annotation with fewer than two components.
    #[error("a tuple needs at least two components, found {arity}")]
    MalformedTuple { arity: usize, span: Span },
}

fn note(context: &Option<String>) -> String {
    match context {
        Some(ctx) => format!("\n  Note: {}", ctx),
        None => String::new(),
    }
}

impl TypeError {
    pub fn unbound_variable(name: String, span: Span) -> Self {
        TypeError::UnboundVariable { name, span }
    }

    pub fn type_mismatch(expected: Type, found: Type, span: Span) -> Self {
        TypeError::TypeMismatch {
            expected,
            found,
            span,
            context: None,
        }
    }

    /// Add context to this error (only affects `TypeMismatch`).
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let TypeError::TypeMismatch { context: ctx, .. } = &mut self {
            *ctx = Some(context.into());
        }
        self
    }

    pub fn occurs_check(var: TypeVar, ty: Type, span: Span) -> Self {
        TypeError::OccursCheck { var, ty, span }
    }

    /// Attach a source span to a unification error.
    pub fn from_unify_error(err: UnifyError, span: Span) -> Self {
        match err {
            UnifyError::Mismatch { expected, found } => {
                TypeError::type_mismatch(expected, found, span)
            }
            UnifyError::OccursCheck { var, ty } => TypeError::occurs_check(var, ty, span),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            TypeError::UnboundVariable { span, .. }
            | TypeError::TypeMismatch { span, .. }
            | TypeError::OccursCheck { span, .. }
            | TypeError::UnboundType { span, .. }
            | TypeError::UnboundMeasure { span, .. }
            | TypeError::TypeConstructorArity { span, .. }
            | TypeError::DuplicatePatternVariable { span, .. }
            | TypeError::PatternArity { span, .. }
            | TypeError::ImpossiblePattern { span, .. }
            | TypeError::MalformedTuple { span, .. } => span,
        }
    }

    /// The message, rendered against its source span when one is attached.
    pub fn render(&self) -> String {
        let msg = self.to_string();
        let span = self.span();
        if span.source.is_empty() {
            format!("Type error: {}", msg)
        } else {
            span.to_string(&msg)
        }
    }
}
