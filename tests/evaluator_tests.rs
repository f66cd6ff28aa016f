mod common;

use std::sync::Arc;

use reify_lang::{EvalError, Expr, add1, checked_eval, eval, example_program};
use rstest::rstest;

fn lit(n: i64) -> Expr {
    Expr::literal(n)
}

fn add(left: Expr, right: Expr) -> Expr {
    Expr::add(left, right)
}

/// Left-leaning chain `((((a + b) + c) + d) ...)`.
fn left_chain(values: &[i64]) -> Expr {
    let mut iter = values.iter().copied();
    let first = iter.next().map(lit).unwrap_or(lit(0));
    iter.fold(first, |acc, v| add(acc, lit(v)))
}

/// Right-leaning chain `(a + (b + (c + ...)))`.
fn right_chain(values: &[i64]) -> Expr {
    let mut iter = values.iter().rev().copied();
    let last = iter.next().map(lit).unwrap_or(lit(0));
    iter.fold(last, |acc, v| add(lit(v), acc))
}

/// Balanced split of `values` into a tree.
fn balanced(values: &[i64]) -> Expr {
    match values {
        [] => lit(0),
        [v] => lit(*v),
        _ => {
            let (l, r) = values.split_at(values.len() / 2);
            add(balanced(l), balanced(r))
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

#[rstest]
#[case(1)]
#[case(0)]
#[case(-1)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn test_literal_evaluates_to_itself(#[case] n: i64) {
    common::init_test_setup();
    assert_eq!(eval(&lit(n)), n);
    assert_eq!(checked_eval(&lit(n)), Ok(n));
}

#[test]
fn test_add_with_negative_operand() {
    assert_eq!(eval(&add(lit(2), lit(-1))), 1);
}

// ============================================================================
// Example program and wrapping
// ============================================================================

#[test]
fn test_example_program() {
    common::init_test_setup();
    let prog = example_program();
    assert_eq!(eval(&prog), 11);
    assert_eq!(prog.leaf_count(), 5);
}

#[test]
fn test_example_program_built_by_hand() {
    let prog = add(add(lit(3), add(lit(5), lit(0))), add(lit(1), lit(2)));
    assert_eq!(prog, example_program());
    assert_eq!(prog.eval(), 11);
}

#[test]
fn test_add1_of_example_program() {
    assert_eq!(eval(&add1(example_program())), 12);
}

#[test]
fn test_add1_leaves_the_wrapped_tree_untouched() {
    let base = Arc::new(example_program());
    let wrapped = add1(base.clone());
    let twice = add1(Arc::new(wrapped.clone()));

    assert_eq!(base.eval(), 11);
    assert_eq!(wrapped.eval(), 12);
    assert_eq!(twice.eval(), 13);
    assert_eq!(*base, example_program());
}

#[rstest]
#[case(lit(-5), -4)]
#[case(lit(0), 1)]
#[case(add(lit(10), lit(10)), 21)]
fn test_add1_increments(#[case] expr: Expr, #[case] expected: i64) {
    assert_eq!(add1(expr).eval(), expected);
}

// ============================================================================
// Shape independence
// ============================================================================

#[rstest]
#[case(vec![3, 5, 0, 1, 2])]
#[case(vec![-7, 7])]
#[case(vec![100, -50, 25, -12, 6, -3, 1])]
#[case(vec![42])]
fn test_grouping_does_not_change_result(#[case] values: Vec<i64>) {
    let expected: i64 = values.iter().sum();

    let left = left_chain(&values);
    let right = right_chain(&values);
    let bal = balanced(&values);

    assert_eq!(eval(&left), expected);
    assert_eq!(eval(&right), expected);
    assert_eq!(eval(&bal), expected);
    assert_eq!(left.leaf_count(), values.len());
}

#[test]
fn test_deep_chain() {
    let values: Vec<i64> = (1..=1000).collect();
    let expr = left_chain(&values);
    assert_eq!(expr.depth(), 1000);
    assert_eq!(eval(&expr), 500_500);
}

// ============================================================================
// Structural sharing
// ============================================================================

#[test]
fn test_shared_subtree_counts_once_per_use() {
    let shared = Arc::new(add(lit(2), lit(3)));
    let expr = Expr::add(shared.clone(), Expr::add(shared.clone(), shared));
    assert_eq!(eval(&expr), 15);
    assert_eq!(expr.leaf_count(), 6);
}

#[test]
fn test_concurrent_evaluation_of_shared_subtree() {
    let shared = Arc::new(balanced(&(1..=64).collect::<Vec<_>>()));
    let left = Expr::add(shared.clone(), lit(1));
    let right = Expr::add(lit(-1), shared.clone());

    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| eval(&left));
        let b = s.spawn(|| eval(&right));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(a, 2081);
    assert_eq!(b, 2079);
    assert_eq!(shared.eval(), 2080);
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn test_eval_wraps_on_overflow() {
    assert_eq!(eval(&add(lit(i64::MAX), lit(1))), i64::MIN);
    assert_eq!(eval(&add(lit(i64::MIN), lit(-1))), i64::MAX);
}

#[test]
fn test_checked_eval_reports_overflow() {
    let expr = add(lit(i64::MAX), lit(1));
    assert_eq!(
        checked_eval(&expr),
        Err(EvalError::Overflow { left: i64::MAX, right: 1 })
    );
}

#[test]
fn test_checked_eval_reports_innermost_overflow() {
    let expr = add(lit(0), add(lit(i64::MIN), lit(-2)));
    assert_eq!(
        expr.checked_eval(),
        Err(EvalError::Overflow { left: i64::MIN, right: -2 })
    );
}

#[test]
fn test_checked_eval_intermediate_near_limit() {
    // MAX + (1 + -1) stays in range
    let expr = add(lit(i64::MAX), add(lit(1), lit(-1)));
    assert_eq!(checked_eval(&expr), Ok(i64::MAX));
}
