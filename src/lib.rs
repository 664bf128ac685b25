//! # mlinfer - Type Inference for a Small ML Dialect
//!
//! `mlinfer` infers the most general types of programs written in a small
//! ML-family language (F#-flavoured syntax) using Hindley-Milner type
//! inference (Algorithm W), extended with tuples, lists, options, pattern
//! matching and units of measure.
//!
//! ## Pipeline Position
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Parser, not part of this crate] → AST (ast::Program<()>)
//!     ↓
//! [Type Inference] → TypeEnv (name → generalized TypeScheme)
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Let-Polymorphism
//! - Only `let`-bound names are generalized; lambda and pattern-bound
//!   names stay monomorphic
//! - Generalization quantifies the variables free in the type but not in
//!   the substitution-applied outer environment
//! - `let rec` groups pre-bind every name to a monomorphic placeholder so
//!   mutually recursive definitions see each other
//!
//! ### Units of Measure
//! Measures are declared with `[<Measure>] type m` items and attached to
//! numeric literals and annotations (`float<m/s>`). Two measured types are
//! compatible only when their measure expressions are structurally equal;
//! there is no algebraic normalization.
//!
//! ### Determinism
//! Substitutions, environments and free-variable sets are ordered maps and
//! sets, and fresh variables come from a counter owned by one inference
//! run. Running inference twice on the same program yields identical
//! results.
//!
//! ## Module Structure
//!
//! - [`ast`] - Expression, pattern and annotation trees handed over by a parser
//! - [`types`] - Types, substitutions, unification and the inference engine
//!
//! ## Getting Started
//!
//! ```
//! use mlinfer::ast::{Expression, Item, Program};
//! use mlinfer::types::run_infer;
//!
//! let program = Program::new(vec![
//!     Item::let_value("id", Expression::fun("x", Expression::ident("x"))),
//! ]);
//! let env = run_infer(&program).unwrap();
//! assert_eq!(env.lookup("id").unwrap().to_string(), "'a -> 'a");
//! ```

pub mod ast;
pub mod types;

pub use types::{run_infer, run_infer_with};

/// Type alias for a program as it arrives from the parser
pub type ParsedProgram = ast::Program<()>;
