//! Pattern checking in let bindings, lambdas and match rules

use mlinfer::ast::{Binding, Expression, Item, Pattern, Program, Rule, TypeExpr};
use mlinfer::types::{TypeEnv, TypeError, run_infer};

fn infer_ok(items: Vec<Item<()>>) -> TypeEnv {
    match run_infer(&Program::new(items)) {
        Ok(env) => env,
        Err(err) => panic!("inference failed: {}", err.render()),
    }
}

fn infer_err(items: Vec<Item<()>>) -> TypeError {
    run_infer(&Program::new(items)).expect_err("expected a type error")
}

fn scheme_of(env: &TypeEnv, name: &str) -> String {
    env.lookup(name)
        .unwrap_or_else(|| panic!("{} is not bound", name))
        .to_string()
}

fn ident(name: &str) -> Expression<()> {
    Expression::ident(name)
}

fn pair(a: Pattern<()>, b: Pattern<()>) -> Pattern<()> {
    Pattern::tuple(vec![a, b])
}

#[test]
fn tuple_destructuring_let() {
    let env = infer_ok(vec![Item::let_binding(
        pair(Pattern::ident("a"), Pattern::ident("b")),
        Expression::tuple(vec![Expression::int(1), Expression::bool(true)]),
    )]);
    assert_eq!(scheme_of(&env, "a"), "int");
    assert_eq!(scheme_of(&env, "b"), "bool");
}

#[test]
fn nested_tuple_destructuring() {
    // let (x, (y, z)) = (1, ('c', "s"))
    let env = infer_ok(vec![Item::let_binding(
        pair(
            Pattern::ident("x"),
            pair(Pattern::ident("y"), Pattern::ident("z")),
        ),
        Expression::tuple(vec![
            Expression::int(1),
            Expression::tuple(vec![Expression::char('c'), Expression::string("s")]),
        ]),
    )]);
    assert_eq!(scheme_of(&env, "x"), "int");
    assert_eq!(scheme_of(&env, "y"), "char");
    assert_eq!(scheme_of(&env, "z"), "string");
}

#[test]
fn tuple_pattern_arity_mismatch() {
    let err = infer_err(vec![Item::let_binding(
        pair(Pattern::ident("a"), Pattern::ident("b")),
        Expression::tuple(vec![
            Expression::int(1),
            Expression::int(2),
            Expression::int(3),
        ]),
    )]);
    assert!(
        matches!(
            err,
            TypeError::PatternArity {
                expected: 3,
                found: 2,
                ..
            }
        ),
        "expected arity error, got {:?}",
        err
    );
}

#[test]
fn tuple_pattern_arity_against_inferred_type() {
    // fun t -> match t with (a, b, c) -> a | (x, y) -> x
    let err = infer_err(vec![Item::expression(Expression::fun(
        "t",
        Expression::match_with(
            ident("t"),
            vec![
                Rule::new(
                    Pattern::tuple(vec![
                        Pattern::ident("a"),
                        Pattern::ident("b"),
                        Pattern::ident("c"),
                    ]),
                    ident("a"),
                ),
                Rule::new(pair(Pattern::ident("x"), Pattern::ident("y")), ident("x")),
            ],
        ),
    ))]);
    assert!(matches!(
        err,
        TypeError::PatternArity {
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[test]
fn single_component_tuple_pattern_is_impossible() {
    let err = infer_err(vec![Item::expression(Expression::lambda(
        Pattern::tuple(vec![Pattern::ident("x")]),
        ident("x"),
    ))]);
    assert!(matches!(err, TypeError::ImpossiblePattern { .. }));
}

#[test]
fn duplicate_name_in_pattern() {
    let err = infer_err(vec![Item::expression(Expression::lambda(
        pair(Pattern::ident("x"), Pattern::ident("x")),
        ident("x"),
    ))]);
    assert!(matches!(err, TypeError::DuplicatePatternVariable { name, .. } if name == "x"));
}

#[test]
fn duplicate_name_in_let_group() {
    let err = infer_err(vec![Item::let_group(
        false,
        vec![
            Binding::new(Pattern::ident("a"), Expression::int(1)),
            Binding::new(Pattern::ident("a"), Expression::int(2)),
        ],
    )]);
    assert!(matches!(err, TypeError::DuplicatePatternVariable { name, .. } if name == "a"));
}

#[test]
fn duplicate_name_in_match_rule() {
    // function h :: h -> h
    let err = infer_err(vec![Item::expression(Expression::function(vec![Rule::new(
        Pattern::cons(Pattern::ident("h"), Pattern::ident("h")),
        ident("h"),
    )]))]);
    assert!(matches!(err, TypeError::DuplicatePatternVariable { .. }));
}

#[test]
fn fixed_length_list_pattern() {
    // function [x; y] -> x | _ -> 0
    let env = infer_ok(vec![Item::let_value(
        "first_of_two",
        Expression::function(vec![
            Rule::new(
                Pattern::list(vec![Pattern::ident("x"), Pattern::ident("y")]),
                ident("x"),
            ),
            Rule::new(Pattern::wildcard(), Expression::int(0)),
        ]),
    )]);
    assert_eq!(scheme_of(&env, "first_of_two"), "int list -> int");
}

#[test]
fn option_patterns() {
    // function Some x -> x | None -> 0
    let env = infer_ok(vec![Item::let_value(
        "or_zero",
        Expression::function(vec![
            Rule::new(Pattern::some(Pattern::ident("x")), ident("x")),
            Rule::new(Pattern::none(), Expression::int(0)),
        ]),
    )]);
    assert_eq!(scheme_of(&env, "or_zero"), "int option -> int");
}

#[test]
fn safe_head() {
    // function [] -> None | h :: _ -> Some h
    let env = infer_ok(vec![Item::let_value(
        "safe_head",
        Expression::function(vec![
            Rule::new(Pattern::list(vec![]), Expression::none()),
            Rule::new(
                Pattern::cons(Pattern::ident("h"), Pattern::wildcard()),
                Expression::some(ident("h")),
            ),
        ]),
    )]);
    assert_eq!(scheme_of(&env, "safe_head"), "'a list -> 'a option");
}

#[test]
fn option_pattern_against_list_fails() {
    let err = infer_err(vec![Item::expression(Expression::match_with(
        Expression::list(vec![Expression::int(1)]),
        vec![Rule::new(Pattern::some(Pattern::wildcard()), Expression::unit())],
    ))]);
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
}

#[test]
fn constant_patterns_must_share_type() {
    // function 0 -> "zero" | true -> "yes"
    let err = infer_err(vec![Item::expression(Expression::function(vec![
        Rule::new(Pattern::int(0), Expression::string("zero")),
        Rule::new(Pattern::bool(true), Expression::string("yes")),
    ]))]);
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
}

#[test]
fn rule_bodies_must_share_type() {
    let err = infer_err(vec![Item::expression(Expression::function(vec![
        Rule::new(Pattern::int(0), Expression::string("zero")),
        Rule::new(Pattern::wildcard(), Expression::int(1)),
    ]))]);
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
    assert!(err.to_string().contains("all match rules must return the same type"));
}

#[test]
fn guard_must_be_bool() {
    let ok = infer_ok(vec![Item::let_value(
        "pick",
        Expression::function(vec![
            Rule::guarded(Pattern::ident("b"), ident("b"), Expression::int(1)),
            Rule::new(Pattern::wildcard(), Expression::int(0)),
        ]),
    )]);
    assert_eq!(scheme_of(&ok, "pick"), "bool -> int");

    let err = infer_err(vec![Item::expression(Expression::function(vec![
        Rule::guarded(Pattern::ident("n"), Expression::int(1), Expression::int(1)),
    ]))]);
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
}

#[test]
fn guard_sees_pattern_bindings() {
    // function (a, b) when b -> a | (a, _) -> a
    let env = infer_ok(vec![Item::let_value(
        "first_if",
        Expression::function(vec![
            Rule::guarded(
                pair(Pattern::ident("a"), Pattern::ident("b")),
                ident("b"),
                ident("a"),
            ),
            Rule::new(pair(Pattern::ident("a"), Pattern::wildcard()), ident("a")),
        ]),
    )]);
    assert_eq!(scheme_of(&env, "first_if"), "'a * bool -> 'a");
}

#[test]
fn pattern_bound_names_are_monomorphic() {
    // fun f -> match f with g -> (g 1, g true)
    let err = infer_err(vec![Item::expression(Expression::fun(
        "f",
        Expression::match_with(
            ident("f"),
            vec![Rule::new(
                Pattern::ident("g"),
                Expression::tuple(vec![
                    Expression::apply(ident("g"), Expression::int(1)),
                    Expression::apply(ident("g"), Expression::bool(true)),
                ]),
            )],
        ),
    ))]);
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
}

#[test]
fn wildcard_binds_nothing() {
    let err = infer_err(vec![Item::expression(Expression::lambda(
        Pattern::wildcard(),
        ident("x"),
    ))]);
    assert!(matches!(err, TypeError::UnboundVariable { name, .. } if name == "x"));
}

#[test]
fn typed_pattern_constrains_scrutinee() {
    // fun ((xs : int list)) -> match xs with h :: _ -> h | [] -> 0
    let env = infer_ok(vec![Item::let_value(
        "head_or_zero",
        Expression::lambda(
            Pattern::typed(Pattern::ident("xs"), TypeExpr::list(TypeExpr::named("int"))),
            Expression::match_with(
                ident("xs"),
                vec![
                    Rule::new(
                        Pattern::cons(Pattern::ident("h"), Pattern::wildcard()),
                        ident("h"),
                    ),
                    Rule::new(Pattern::list(vec![]), Expression::int(0)),
                ],
            ),
        ),
    )]);
    assert_eq!(scheme_of(&env, "head_or_zero"), "int list -> int");
}

#[test]
fn let_rec_pattern_binding() {
    // let rec (f, g) = (fun x -> g x, fun y -> y)
    let env = infer_ok(vec![Item::let_group(
        true,
        vec![Binding::new(
            pair(Pattern::ident("f"), Pattern::ident("g")),
            Expression::tuple(vec![
                Expression::fun("x", Expression::apply(ident("g"), ident("x"))),
                Expression::fun("y", ident("y")),
            ]),
        )],
    )]);
    assert_eq!(scheme_of(&env, "f"), "'a -> 'a");
    assert_eq!(scheme_of(&env, "g"), "'a -> 'a");
}
