//! # Algorithm W
//!
//! [`Infer`] walks the AST and returns, for every expression, the
//! substitution it solved together with the expression's type. Callers
//! compose substitutions in the order the sub-expressions were visited:
//!
//! ```text
//! infer(env, f a):
//!   (S1, tf) = infer(env, f)
//!   (S2, ta) = infer(S1 env, a)
//!   S3       = unify(S2 tf, ta -> β)
//!   result   = (S3 ∘ S2 ∘ S1, S3 β)
//! ```
//!
//! Let-bound names are generalized against the substitution-applied outer
//! environment and instantiated with fresh variables at every use, which
//! is what makes `let id = fun x -> x in (id 1, id true)` well typed while
//! `fun id -> (id 1, id true)` is not.
//!
//! The fresh-variable counter lives in the `Infer` value; nothing is
//! global, so independent runs never observe each other.

use std::collections::{BTreeMap, BTreeSet};

use lachs::Span;

use super::env::TypeEnv;
use super::error::TypeError;
use super::subst::Substitution;
use super::ty::{Measure, Type, TypeScheme, TypeVar};
use super::unify::unify;
use crate::ast::*;

/// Names bound by a pattern, with their (monomorphic) types.
type Bindings = Vec<(String, Type)>;

pub struct Infer {
    next_var: usize,
    /// Declared units of measure and their optional definitions.
    measures: BTreeMap<String, Option<Measure>>,
    /// Named annotation variables (`'a`) seen in the current top-level item.
    annotation_vars: BTreeMap<String, Type>,
    /// Every unifier solved so far in the current top-level item, composed
    /// in the order the unifications happened.
    solved: Substitution,
}

impl Infer {
    pub fn new() -> Self {
        Infer {
            next_var: 0,
            measures: BTreeMap::new(),
            annotation_vars: BTreeMap::new(),
            solved: Substitution::empty(),
        }
    }

    /// Make sure fresh variables never collide with variables already
    /// mentioned in `env`.
    pub fn reserve_vars(&mut self, env: &TypeEnv) {
        for (_, scheme) in env.iter() {
            let mentioned = scheme
                .ty
                .free_type_vars()
                .into_iter()
                .chain(scheme.vars.iter().copied());
            for var in mentioned {
                self.next_var = self.next_var.max(var.id + 1);
            }
        }
    }

    fn fresh_var(&mut self) -> TypeVar {
        let id = self.next_var;
        self.next_var += 1;
        TypeVar::new(id)
    }

    fn fresh(&mut self) -> Type {
        Type::Var(self.fresh_var())
    }

    fn instantiate(&mut self, scheme: &TypeScheme) -> Type {
        let subst: BTreeMap<_, _> = scheme
            .vars
            .iter()
            .map(|v| (*v, Type::Var(self.fresh_var())))
            .collect();
        Substitution(subst).apply(&scheme.ty)
    }

    fn generalize(&self, env: &TypeEnv, ty: &Type) -> TypeScheme {
        let free_in_env = env.free_type_vars();
        let free_in_ty = ty.free_type_vars();
        let vars: Vec<_> = free_in_ty.difference(&free_in_env).copied().collect();
        TypeScheme {
            vars,
            ty: ty.clone(),
        }
    }

    fn unify_at(&mut self, t1: &Type, t2: &Type, span: &Span) -> Result<Substitution, TypeError> {
        let s = unify(t1, t2).map_err(|e| TypeError::from_unify_error(e, span.clone()))?;
        self.solved = s.compose(&self.solved);
        Ok(s)
    }

    pub fn infer_expr<T>(
        &mut self,
        env: &TypeEnv,
        expr: &Expression<T>,
    ) -> Result<(Substitution, Type), TypeError> {
        match expr {
            Expression::Constant(constant) => {
                let ty = self.literal_type(&constant.value, &constant.position)?;
                Ok((Substitution::empty(), ty))
            }

            Expression::Ident(ident) => match env.lookup(&ident.value) {
                Some(scheme) => {
                    let ty = self.instantiate(scheme);
                    Ok((Substitution::empty(), ty))
                }
                None => Err(TypeError::unbound_variable(
                    ident.value.clone(),
                    ident.position.clone(),
                )),
            },

            Expression::Lambda(lambda) => self.infer_lambda(env, lambda),

            Expression::Apply(apply) => self.infer_apply(env, apply),

            Expression::Let(let_expr) => {
                let (s1, body_env) =
                    self.infer_bindings(env, let_expr.recursive, &let_expr.bindings)?;
                let (s2, body_ty) = self.infer_expr(&body_env, &let_expr.body)?;
                Ok((s2.compose(&s1), body_ty))
            }

            Expression::IfThenElse(if_expr) => self.infer_if(env, if_expr),

            Expression::Match(match_expr) => {
                let (s1, scrutinee_ty) = self.infer_expr(env, &match_expr.scrutinee)?;
                self.infer_rules(env, s1, &scrutinee_ty, &match_expr.rules)
            }

            Expression::Function(function) => {
                let param_ty = self.fresh();
                let (s, result_ty) =
                    self.infer_rules(env, Substitution::empty(), &param_ty, &function.rules)?;
                let func_ty = Type::func(s.apply(&param_ty), result_ty);
                Ok((s, func_ty))
            }

            Expression::Tuple(tuple) => {
                let (s, types) = self.infer_sequence(env, &tuple.elements)?;
                let arity = types.len();
                let ty = Type::tuple_of(types).ok_or_else(|| TypeError::MalformedTuple {
                    arity,
                    span: tuple.position.clone(),
                })?;
                Ok((s, ty))
            }

            Expression::List(list) => {
                let elem_ty = self.fresh();
                let mut subst = Substitution::empty();
                for element in &list.elements {
                    let (s1, ty) = self.infer_expr(&env.apply_subst(&subst), element)?;
                    subst = s1.compose(&subst);
                    let s2 = self
                        .unify_at(&subst.apply(&elem_ty), &ty, element.position())
                        .map_err(|e| e.with_context("list elements must all have the same type"))?;
                    subst = s2.compose(&subst);
                }
                let ty = Type::list(subst.apply(&elem_ty));
                Ok((subst, ty))
            }

            Expression::Cons(cons) => {
                let (s1, head_ty) = self.infer_expr(env, &cons.head)?;
                let (s2, tail_ty) = self.infer_expr(&env.apply_subst(&s1), &cons.tail)?;
                let expected = Type::list(s2.apply(&head_ty));
                let s3 = self.unify_at(&expected, &tail_ty, &cons.position)?;
                let subst = s3.compose(&s2).compose(&s1);
                let ty = subst.apply(&expected);
                Ok((subst, ty))
            }

            Expression::OptionSome(some) => {
                let (s, ty) = self.infer_expr(env, &some.value)?;
                Ok((s, Type::option(ty)))
            }

            Expression::OptionNone(_) => Ok((Substitution::empty(), Type::option(self.fresh()))),

            Expression::Typed(typed) => {
                let (s1, ty) = self.infer_expr(env, &typed.expr)?;
                let annotated = self.resolve_type(&typed.annotation)?;
                let s2 = self.unify_at(&annotated, &ty, &typed.position)?;
                let subst = s2.compose(&s1);
                let ty = subst.apply(&annotated);
                Ok((subst, ty))
            }
        }
    }

    fn literal_type(&self, literal: &Literal, span: &Span) -> Result<Type, TypeError> {
        let ty = match literal {
            Literal::Int(_) => Type::Int,
            Literal::Float(_) => Type::Float,
            Literal::Bool(_) => Type::Bool,
            Literal::Char(_) => Type::Char,
            Literal::String(_) => Type::String,
            Literal::Unit => Type::Unit,
            Literal::Measured { value, measure } => {
                let base = match value {
                    Number::Int(_) => Type::Int,
                    Number::Float(_) => Type::Float,
                };
                let measure = self.resolve_measure(measure, span)?;
                Type::measured(base, measure)
            }
        };
        Ok(ty)
    }

    fn infer_lambda<T>(
        &mut self,
        env: &TypeEnv,
        lambda: &Lambda<T>,
    ) -> Result<(Substitution, Type), TypeError> {
        let param_ty = self.fresh();
        let (s1, bindings) = self.infer_pattern(&param_ty, &lambda.param)?;
        let env1 = env.apply_subst(&s1).extend_many(monomorphic(bindings));
        let (s2, body_ty) = self.infer_expr(&env1, &lambda.body)?;
        let subst = s2.compose(&s1);
        let func_ty = Type::func(subst.apply(&param_ty), body_ty);
        Ok((subst, func_ty))
    }

    fn infer_apply<T>(
        &mut self,
        env: &TypeEnv,
        apply: &Apply<T>,
    ) -> Result<(Substitution, Type), TypeError> {
        let (s1, func_ty) = self.infer_expr(env, &apply.func)?;
        let env1 = env.apply_subst(&s1);
        let (s2, arg_ty) = self.infer_expr(&env1, &apply.arg)?;

        let result_ty = self.fresh();
        let expected_func_ty = Type::func(arg_ty, result_ty.clone());

        let func_ty_subst = s2.apply(&func_ty);
        let s3 = self.unify_at(&func_ty_subst, &expected_func_ty, &apply.position)?;

        let final_subst = s3.compose(&s2).compose(&s1);
        let final_ty = final_subst.apply(&result_ty);

        Ok((final_subst, final_ty))
    }

    fn infer_if<T>(
        &mut self,
        env: &TypeEnv,
        if_expr: &IfThenElse<T>,
    ) -> Result<(Substitution, Type), TypeError> {
        let (s1, cond_ty) = self.infer_expr(env, &if_expr.condition)?;
        let s2 = self
            .unify_at(&Type::Bool, &cond_ty, if_expr.condition.position())
            .map_err(|e| e.with_context("the condition of an if must be a bool"))?;
        let mut subst = s2.compose(&s1);

        let (s3, then_ty) = self.infer_expr(&env.apply_subst(&subst), &if_expr.then_expr)?;
        subst = s3.compose(&subst);

        let else_ty = match &if_expr.else_expr {
            Some(else_expr) => {
                let (s4, ty) = self.infer_expr(&env.apply_subst(&subst), else_expr)?;
                subst = s4.compose(&subst);
                ty
            }
            None => Type::Unit,
        };

        let s5 = self
            .unify_at(&subst.apply(&then_ty), &subst.apply(&else_ty), &if_expr.position)
            .map_err(|e| e.with_context("both branches of an if must have the same type"))?;
        subst = s5.compose(&subst);

        let ty = subst.apply(&then_ty);
        Ok((subst, ty))
    }

    /// Check match rules against `input_ty` under the substitution solved so
    /// far. Every pattern must accept the input type and every body must
    /// produce the same result type.
    fn infer_rules<T>(
        &mut self,
        env: &TypeEnv,
        mut subst: Substitution,
        input_ty: &Type,
        rules: &[Rule<T>],
    ) -> Result<(Substitution, Type), TypeError> {
        let result_ty = self.fresh();

        for rule in rules {
            let (s1, bindings) = self.infer_pattern(&subst.apply(input_ty), &rule.pattern)?;
            subst = s1.compose(&subst);
            let rule_env = env.apply_subst(&subst).extend_many(monomorphic(bindings));

            if let Some(guard) = &rule.guard {
                let (s2, guard_ty) = self.infer_expr(&rule_env, guard)?;
                subst = s2.compose(&subst);
                let s3 = self
                    .unify_at(&Type::Bool, &guard_ty, guard.position())
                    .map_err(|e| e.with_context("a when guard must be a bool"))?;
                subst = s3.compose(&subst);
            }

            let (s4, body_ty) = self.infer_expr(&rule_env.apply_subst(&subst), &rule.body)?;
            subst = s4.compose(&subst);

            let s5 = self
                .unify_at(
                    &subst.apply(&result_ty),
                    &subst.apply(&body_ty),
                    rule.body.position(),
                )
                .map_err(|e| e.with_context("all match rules must return the same type"))?;
            subst = s5.compose(&subst);
        }

        let ty = subst.apply(&result_ty);
        Ok((subst, ty))
    }

    /// Infer expressions left to right, each under the substitution solved
    /// by the ones before it.
    fn infer_sequence<T>(
        &mut self,
        env: &TypeEnv,
        exprs: &[Expression<T>],
    ) -> Result<(Substitution, Vec<Type>), TypeError> {
        let mut subst = Substitution::empty();
        let mut types = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let (s, ty) = self.infer_expr(&env.apply_subst(&subst), expr)?;
            subst = s.compose(&subst);
            types.push(ty);
        }
        let types = types.iter().map(|ty| subst.apply(ty)).collect();
        Ok((subst, types))
    }

    /// Infer a `let` or `let rec` group and return the environment its body
    /// (or the following top-level items) sees.
    fn infer_bindings<T>(
        &mut self,
        env: &TypeEnv,
        recursive: bool,
        bindings: &[Binding<T>],
    ) -> Result<(Substitution, TypeEnv), TypeError> {
        check_unique(bindings.iter().flat_map(|b| b.pattern.bound_idents()))?;

        let (subst, bound) = if recursive {
            self.infer_recursive_bindings(env, bindings)?
        } else {
            self.infer_plain_bindings(env, bindings)?
        };

        let outer = env.apply_subst(&subst);
        let schemes: Vec<_> = bound
            .into_iter()
            .map(|(name, ty)| {
                let scheme = self.generalize(&outer, &subst.apply(&ty));
                log::debug!("generalized {} : {}", name, scheme);
                (name, scheme)
            })
            .collect();

        Ok((subst, outer.extend_many(schemes)))
    }

    /// Every bound expression is inferred in the outer environment; the
    /// bindings of the group do not see each other.
    fn infer_plain_bindings<T>(
        &mut self,
        env: &TypeEnv,
        bindings: &[Binding<T>],
    ) -> Result<(Substitution, Bindings), TypeError> {
        let mut subst = Substitution::empty();
        let mut bound = Vec::new();
        for binding in bindings {
            let (s1, value_ty) = self.infer_expr(&env.apply_subst(&subst), &binding.value)?;
            subst = s1.compose(&subst);
            let (s2, names) = self.infer_pattern(&value_ty, &binding.pattern)?;
            subst = s2.compose(&subst);
            bound.extend(names);
        }
        Ok((subst, bound))
    }

    /// Every name of the group is bound to a fresh monomorphic placeholder
    /// first, so all bound expressions see all names. Each expression's type
    /// is then unified with its placeholder.
    fn infer_recursive_bindings<T>(
        &mut self,
        env: &TypeEnv,
        bindings: &[Binding<T>],
    ) -> Result<(Substitution, Bindings), TypeError> {
        let mut subst = Substitution::empty();
        let mut placeholders = Vec::with_capacity(bindings.len());
        let mut bound = Vec::new();
        for binding in bindings {
            let placeholder = self.fresh();
            let (s, names) = self.infer_pattern(&placeholder, &binding.pattern)?;
            subst = s.compose(&subst);
            placeholders.push(placeholder);
            bound.extend(names);
        }

        let rec_env = env.extend_many(monomorphic(bound.clone()));

        for (binding, placeholder) in bindings.iter().zip(&placeholders) {
            let (s1, value_ty) = self.infer_expr(&rec_env.apply_subst(&subst), &binding.value)?;
            subst = s1.compose(&subst);
            let s2 = self.unify_at(
                &subst.apply(placeholder),
                &subst.apply(&value_ty),
                binding.value.position(),
            )?;
            subst = s2.compose(&subst);
        }

        Ok((subst, bound))
    }

    /// Check `pattern` against `ty` and collect the names it binds. The
    /// returned types are already under the returned substitution.
    pub fn infer_pattern<T>(
        &mut self,
        ty: &Type,
        pattern: &Pattern<T>,
    ) -> Result<(Substitution, Bindings), TypeError> {
        check_unique(pattern.bound_idents())?;
        self.infer_pattern_inner(ty, pattern)
    }

    fn infer_pattern_inner<T>(
        &mut self,
        ty: &Type,
        pattern: &Pattern<T>,
    ) -> Result<(Substitution, Bindings), TypeError> {
        match pattern {
            Pattern::Wildcard(_) => Ok((Substitution::empty(), Vec::new())),

            Pattern::Ident(ident) => Ok((
                Substitution::empty(),
                vec![(ident.value.clone(), ty.clone())],
            )),

            Pattern::Constant(constant) => {
                let constant_ty = self.literal_type(&constant.value, &constant.position)?;
                let s = self.unify_at(ty, &constant_ty, &constant.position)?;
                Ok((s, Vec::new()))
            }

            Pattern::Typed(typed) => {
                let annotated = self.resolve_type(&typed.annotation)?;
                let s = self.unify_at(ty, &annotated, &typed.position)?;
                let parts = vec![(annotated, typed.pattern.as_ref())];
                self.infer_sub_patterns(s, parts)
            }

            Pattern::Tuple(tuple) => {
                let found = tuple.elements.len();
                if let Some(components) = ty.tuple_components()
                    && components.len() != found
                {
                    return Err(TypeError::PatternArity {
                        expected: components.len(),
                        found,
                        span: tuple.position.clone(),
                    });
                }

                let vars: Vec<Type> = (0..found).map(|_| self.fresh()).collect();
                let shape = Type::tuple_of(vars.clone()).ok_or_else(|| {
                    TypeError::ImpossiblePattern {
                        reason: format!(
                            "a tuple pattern needs at least two components, found {}",
                            found
                        ),
                        span: tuple.position.clone(),
                    }
                })?;
                let s = self.unify_at(ty, &shape, &tuple.position)?;
                let parts = vars.into_iter().zip(tuple.elements.iter()).collect();
                self.infer_sub_patterns(s, parts)
            }

            Pattern::List(list) => {
                let elem_ty = self.fresh();
                let s = self.unify_at(ty, &Type::list(elem_ty.clone()), &list.position)?;
                let parts = list.elements.iter().map(|p| (elem_ty.clone(), p)).collect();
                self.infer_sub_patterns(s, parts)
            }

            Pattern::Cons(cons) => {
                let elem_ty = self.fresh();
                let list_ty = Type::list(elem_ty.clone());
                let s = self.unify_at(ty, &list_ty, &cons.position)?;
                let parts = vec![(elem_ty, cons.head.as_ref()), (list_ty, cons.tail.as_ref())];
                self.infer_sub_patterns(s, parts)
            }

            Pattern::OptionSome(some) => {
                let elem_ty = self.fresh();
                let s = self.unify_at(ty, &Type::option(elem_ty.clone()), &some.position)?;
                self.infer_sub_patterns(s, vec![(elem_ty, some.inner.as_ref())])
            }

            Pattern::OptionNone(none) => {
                let elem_ty = self.fresh();
                let s = self.unify_at(ty, &Type::option(elem_ty), &none.position)?;
                Ok((s, Vec::new()))
            }
        }
    }

    /// Check each `(type, pattern)` pair in order, threading the
    /// substitution, and merge the bindings.
    fn infer_sub_patterns<T>(
        &mut self,
        mut subst: Substitution,
        parts: Vec<(Type, &Pattern<T>)>,
    ) -> Result<(Substitution, Bindings), TypeError> {
        let mut bindings = Vec::new();
        for (ty, pattern) in parts {
            let (s, names) = self.infer_pattern_inner(&subst.apply(&ty), pattern)?;
            subst = s.compose(&subst);
            bindings.extend(names);
        }
        let bindings = bindings
            .into_iter()
            .map(|(name, ty)| (name, subst.apply(&ty)))
            .collect();
        Ok((subst, bindings))
    }

    /// Turn a written annotation into a type. Named variables (`'a`) map to
    /// the same fresh variable everywhere in the current top-level item.
    fn resolve_type(&mut self, annotation: &TypeExpr) -> Result<Type, TypeError> {
        match annotation {
            TypeExpr::Con {
                name,
                args,
                position,
            } => {
                let expected = constructor_arity(name).ok_or_else(|| TypeError::UnboundType {
                    name: name.clone(),
                    span: position.clone(),
                })?;
                if expected != args.len() {
                    return Err(TypeError::TypeConstructorArity {
                        name: name.clone(),
                        expected,
                        found: args.len(),
                        span: position.clone(),
                    });
                }
                let ty = match (name.as_str(), args.as_slice()) {
                    ("int", []) => Type::Int,
                    ("float", []) => Type::Float,
                    ("bool", []) => Type::Bool,
                    ("char", []) => Type::Char,
                    ("string", []) => Type::String,
                    ("unit", []) => Type::Unit,
                    ("list", [elem]) => Type::list(self.resolve_type(elem)?),
                    ("option", [elem]) => Type::option(self.resolve_type(elem)?),
                    _ => {
                        return Err(TypeError::UnboundType {
                            name: name.clone(),
                            span: position.clone(),
                        });
                    }
                };
                Ok(ty)
            }

            TypeExpr::Var { name, .. } => {
                if let Some(ty) = self.annotation_vars.get(name) {
                    return Ok(self.solved.apply(ty));
                }
                let ty = self.fresh();
                self.annotation_vars.insert(name.clone(), ty.clone());
                Ok(ty)
            }

            TypeExpr::Func(param, ret) => {
                let param = self.resolve_type(param)?;
                let ret = self.resolve_type(ret)?;
                Ok(Type::func(param, ret))
            }

            TypeExpr::Tuple { elements, position } => {
                let types = elements
                    .iter()
                    .map(|element| self.resolve_type(element))
                    .collect::<Result<Vec<_>, _>>()?;
                Type::tuple_of(types).ok_or_else(|| TypeError::MalformedTuple {
                    arity: elements.len(),
                    span: position.clone(),
                })
            }

            TypeExpr::Measured {
                base,
                measure,
                position,
            } => {
                let base = self.resolve_type(base)?;
                if !matches!(base, Type::Int | Type::Float) {
                    return Err(TypeError::type_mismatch(Type::Float, base, position.clone())
                        .with_context("units of measure apply to int or float"));
                }
                let measure = self.resolve_measure(measure, position)?;
                Ok(Type::measured(base, measure))
            }
        }
    }

    /// Every measure name must have been declared by an earlier measure
    /// definition. `span` is used for names that carry no position.
    fn resolve_measure(&self, measure: &MeasureExpr, span: &Span) -> Result<Measure, TypeError> {
        match measure {
            MeasureExpr::One => Ok(Measure::One),
            MeasureExpr::Named { name, position } => {
                if self.measures.contains_key(name) {
                    Ok(Measure::Named(name.clone()))
                } else {
                    let span = if position.source.is_empty() {
                        span.clone()
                    } else {
                        position.clone()
                    };
                    Err(TypeError::UnboundMeasure {
                        name: name.clone(),
                        span,
                    })
                }
            }
            MeasureExpr::Product(m1, m2) => Ok(Measure::product(
                self.resolve_measure(m1, span)?,
                self.resolve_measure(m2, span)?,
            )),
            MeasureExpr::Quotient(m1, m2) => Ok(Measure::quotient(
                self.resolve_measure(m1, span)?,
                self.resolve_measure(m2, span)?,
            )),
            MeasureExpr::Power(m, exponent) => {
                Ok(Measure::power(self.resolve_measure(m, span)?, *exponent))
            }
        }
    }

    /// Infer one top-level item and return the environment the next item
    /// sees.
    pub fn infer_item<T>(&mut self, env: &TypeEnv, item: &Item<T>) -> Result<TypeEnv, TypeError> {
        self.annotation_vars.clear();
        self.solved = Substitution::empty();
        match item {
            Item::Expression(expr) => {
                let (s, ty) = self.infer_expr(env, expr)?;
                log::debug!("expression : {}", ty);
                Ok(env.apply_subst(&s))
            }
            Item::Let(let_item) => {
                let (_, env1) = self.infer_bindings(env, let_item.recursive, &let_item.bindings)?;
                Ok(env1)
            }
            Item::Measure(def) => {
                let definition = def
                    .definition
                    .as_ref()
                    .map(|m| self.resolve_measure(m, &def.position))
                    .transpose()?;
                log::debug!("measure {}", def.name);
                self.measures.insert(def.name.clone(), definition);
                Ok(env.clone())
            }
        }
    }

    /// Infer every item in source order, starting from `env`. The first
    /// error aborts the run.
    pub fn infer_program<T>(
        &mut self,
        env: &TypeEnv,
        program: &Program<T>,
    ) -> Result<TypeEnv, TypeError> {
        log::debug!("inferring {} top-level item(s)", program.items.len());
        let mut env = env.clone();
        for item in &program.items {
            env = self.infer_item(&env, item)?;
        }
        Ok(env)
    }
}

impl Default for Infer {
    fn default() -> Self {
        Self::new()
    }
}

fn monomorphic(bindings: Bindings) -> Vec<(String, TypeScheme)> {
    bindings
        .into_iter()
        .map(|(name, ty)| (name, TypeScheme::monomorphic(ty)))
        .collect()
}

fn constructor_arity(name: &str) -> Option<usize> {
    match name {
        "int" | "float" | "bool" | "char" | "string" | "unit" => Some(0),
        "list" | "option" => Some(1),
        _ => None,
    }
}

fn check_unique<'a, T: 'a>(
    idents: impl IntoIterator<Item = &'a Ident<T>>,
) -> Result<(), TypeError> {
    let mut seen = BTreeSet::new();
    for ident in idents {
        if !seen.insert(ident.value.as_str()) {
            return Err(TypeError::DuplicatePatternVariable {
                name: ident.value.clone(),
                span: ident.position.clone(),
            });
        }
    }
    Ok(())
}
