//! # Abstract Syntax Trees
//!
//! Two closed data models live here:
//!
//! - **[expressions]** - arithmetic expression nodes ([`Expr`])
//! - **[query]** - query clauses ([`Clause`])
//!
//! Neither can be extended from outside this crate: both are plain enums,
//! and every consumer in the crate matches them exhaustively.
//!
//! ## Expressions
//!
//! Trees are built bottom-up, leaves first:
//!
//! ```text
//! ((3 + (5 + 0)) + (1 + 2))
//! ```
//!
//! ```
//! use reify_lang::Expr;
//!
//! let expr = Expr::add(
//!     Expr::add(Expr::literal(3), Expr::add(Expr::literal(5), Expr::literal(0))),
//!     Expr::add(Expr::literal(1), Expr::literal(2)),
//! );
//! assert_eq!(expr.eval(), 11);
//! ```
//!
//! ## Clauses
//!
//! Clauses are kept as an ordered sequence and lowered by
//! [`crate::render`]:
//!
//! ```text
//! [SortBy(username), OrderBy(email)]  →  " SORT BY username  ORDER BY email "
//! ```
pub mod expressions;
pub mod query;

pub use expressions::Expr;
pub use query::Clause;
