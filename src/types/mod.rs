pub mod env;
pub mod error;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;


pub use env::TypeEnv;
pub use error::TypeError;
pub use infer::Infer;
pub use subst::Substitution;
pub use ty::{Measure, Type, TypeScheme, TypeVar};
pub use unify::{UnifyError, unify};

use crate::ast::Program;

/// Infer every top-level item of `program`, starting from an empty
/// environment, and return the environment holding the generalized scheme
/// of every top-level name.
pub fn run_infer<T>(program: &Program<T>) -> Result<TypeEnv, TypeError> {
    run_infer_with(&TypeEnv::empty(), program)
}

/// Like [`run_infer`], but the first item already sees the bindings of
/// `prelude`. The returned environment contains the prelude as well.
pub fn run_infer_with<T>(prelude: &TypeEnv, program: &Program<T>) -> Result<TypeEnv, TypeError> {
    let mut infer = Infer::new();
    infer.reserve_vars(prelude);
    infer.infer_program(prelude, program)
}
