use thiserror::Error;
use tracing::{instrument, trace};

use crate::ast::Expr;

/// Errors that can occur during checked evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The sum of two fully evaluated operands does not fit in an `i64`
    #[error("integer overflow: {left} + {right} does not fit in i64")]
    Overflow { left: i64, right: i64 },
}

/// Evaluates an expression tree to an integer.
///
/// `Add` nodes evaluate both operands before combining them. Addition wraps
/// on overflow (two's-complement), in debug and release builds alike; use
/// [`checked_eval`] to detect overflow instead.
///
/// Recursion is unbounded: a degenerate tree deep enough to exhaust the
/// stack will abort the process.
///
/// # Examples
///
/// ```
/// use reify_lang::{Expr, eval};
///
/// let expr = Expr::add(Expr::literal(2), Expr::literal(-1));
/// assert_eq!(eval(&expr), 1);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn eval(expr: &Expr) -> i64 {
    let value = eval_node(expr);
    trace!(value, "evaluated expression");
    value
}

/// Evaluates an expression tree, failing on `i64` overflow.
///
/// Both operands of every `Add` are evaluated fully before their sum is
/// checked, so the reported operands are the actual subtree values.
///
/// ```
/// use reify_lang::{Expr, EvalError, checked_eval};
///
/// let expr = Expr::add(Expr::literal(i64::MAX), Expr::literal(1));
/// assert_eq!(
///     checked_eval(&expr),
///     Err(EvalError::Overflow { left: i64::MAX, right: 1 })
/// );
/// ```
#[instrument(level = "trace", skip_all)]
pub fn checked_eval(expr: &Expr) -> Result<i64, EvalError> {
    let result = checked_eval_node(expr);
    trace!(?result, "checked evaluation finished");
    result
}

fn eval_node(expr: &Expr) -> i64 {
    match expr {
        Expr::Literal(value) => *value,
        Expr::Add { left, right } => {
            let left = eval_node(left);
            let right = eval_node(right);
            left.wrapping_add(right)
        }
    }
}

fn checked_eval_node(expr: &Expr) -> Result<i64, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Add { left, right } => {
            let left = checked_eval_node(left);
            let right = checked_eval_node(right);
            let (left, right) = (left?, right?);
            left.checked_add(right).ok_or(EvalError::Overflow { left, right })
        }
    }
}

impl Expr {
    /// Method form of [`eval`].
    pub fn eval(&self) -> i64 {
        eval(self)
    }

    /// Method form of [`checked_eval`].
    pub fn checked_eval(&self) -> Result<i64, EvalError> {
        checked_eval(self)
    }
}
