//! Lowering of clause sequences into a query string fragment.
//!
//! Each clause becomes a fixed fragment, emitted in input order:
//!
//! - `OrderBy(field)` → `" ORDER BY <field> "`
//! - `SortBy(field)` → `" SORT BY <field> "`
//!
//! Fragments are concatenated without extra separators, so two adjacent
//! clauses are joined by two spaces.
//!
//! # Dropped clauses
//!
//! A clause whose field is not on the allow-list is skipped: it produces no
//! output and no error. Callers that need every clause to appear get no
//! warning from [`render`]. This permissive behaviour is kept for
//! compatibility even though it hides mistakes; use
//! [`Renderer::render_report`] to see what was left out.
//!
//! The allow-list constrains field names only. The output is not escaped and
//! is not a general defense against injection.
//!
//! # Examples
//!
//! ```
//! use reify_lang::{Clause, render};
//!
//! let clauses = vec![Clause::sort_by("username"), Clause::order_by("email")];
//! assert_eq!(render(&clauses), " SORT BY username  ORDER BY email ");
//! ```

use tracing::{debug, trace};

use crate::allow_list::AllowList;
use crate::ast::Clause;

/// Renders clauses against the standard allow-list.
pub fn render(clauses: &[Clause]) -> String {
    let mut out = String::new();
    lower(AllowList::standard(), clauses, &mut out, |_| {});
    out
}

/// Result of [`Renderer::render_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered fragment, identical to what `render` returns
    pub text: String,
    /// Number of clauses that produced output
    pub emitted: usize,
    /// Clauses skipped because their field is not allowed, in input order
    pub dropped: Vec<Clause>,
}

impl Rendered {
    /// Total number of clauses that were passed in.
    pub fn total(&self) -> usize {
        self.emitted + self.dropped.len()
    }

    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Clause renderer bound to a specific allow-list.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    allow_list: AllowList,
}

impl Renderer {
    pub fn new(allow_list: AllowList) -> Self {
        Renderer { allow_list }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn render(&self, clauses: &[Clause]) -> String {
        let mut out = String::new();
        lower(&self.allow_list, clauses, &mut out, |_| {});
        out
    }

    /// Renders `clauses` directly after `prefix`, e.g. a `SELECT ... FROM ...`
    /// base query. No separator is inserted.
    ///
    /// ```
    /// use reify_lang::{Clause, Renderer};
    ///
    /// let sql = Renderer::default()
    ///     .render_with_prefix("SELECT * FROM users", &[Clause::order_by("email")]);
    /// assert_eq!(sql, "SELECT * FROM users ORDER BY email ");
    /// ```
    pub fn render_with_prefix(&self, prefix: &str, clauses: &[Clause]) -> String {
        let mut out = String::from(prefix);
        lower(&self.allow_list, clauses, &mut out, |_| {});
        out
    }

    /// Renders `clauses` and reports which of them were dropped.
    pub fn render_report(&self, clauses: &[Clause]) -> Rendered {
        let mut text = String::new();
        let mut dropped = Vec::new();
        let emitted = lower(&self.allow_list, clauses, &mut text, |clause| {
            dropped.push(clause.clone())
        });
        Rendered {
            text,
            emitted,
            dropped,
        }
    }
}

/// Appends the fragment of every allowed clause to `out`, handing each
/// rejected clause to `on_drop`. Returns the number of clauses emitted.
fn lower<F>(allow_list: &AllowList, clauses: &[Clause], out: &mut String, mut on_drop: F) -> usize
where
    F: FnMut(&Clause),
{
    let mut emitted = 0;
    for clause in clauses {
        let field = clause.field();
        if !allow_list.contains(field) {
            debug!(field, keyword = clause.keyword(), "dropping clause: field not allowed");
            on_drop(clause);
            continue;
        }
        out.push(' ');
        out.push_str(clause.keyword());
        out.push(' ');
        out.push_str(field);
        out.push(' ');
        emitted += 1;
    }
    trace!(total = clauses.len(), emitted, "rendered clauses");
    emitted
}
