//! Ready-made expression trees.

use std::sync::Arc;

use crate::ast::Expr;

/// The tree for `((3 + (5 + 0)) + (1 + 2))`, which evaluates to 11.
pub fn example_program() -> Expr {
    Expr::add(
        Expr::add(Expr::literal(3), Expr::add(Expr::literal(5), Expr::literal(0))),
        Expr::add(Expr::literal(1), Expr::literal(2)),
    )
}

/// Wraps `expr` as the left operand of an addition with `1`.
///
/// The input tree is reused as-is; pass an `Arc<Expr>` to keep using it
/// elsewhere.
///
/// ```
/// use std::sync::Arc;
/// use reify_lang::{add1, example_program};
///
/// let base = Arc::new(example_program());
/// let bumped = add1(base.clone());
/// assert_eq!(base.eval(), 11);
/// assert_eq!(bumped.eval(), 12);
/// ```
pub fn add1(expr: impl Into<Arc<Expr>>) -> Expr {
    Expr::add(expr, Expr::literal(1))
}
