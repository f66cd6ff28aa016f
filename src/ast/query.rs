/// A single query clause.
///
/// The set of clause kinds is closed. Each clause names the field it applies
/// to; whether that field is permitted is decided at render time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// Ordering clause
    ///
    /// # Example
    /// ```text
    ///  ORDER BY email
    /// ```
    OrderBy(String),

    /// Sorting clause
    ///
    /// # Example
    /// ```text
    ///  SORT BY username
    /// ```
    SortBy(String),
}

impl Clause {
    pub fn order_by(field: impl Into<String>) -> Self {
        Clause::OrderBy(field.into())
    }

    pub fn sort_by(field: impl Into<String>) -> Self {
        Clause::SortBy(field.into())
    }

    /// The field this clause applies to.
    pub fn field(&self) -> &str {
        match self {
            Clause::OrderBy(field) | Clause::SortBy(field) => field,
        }
    }

    /// The keyword emitted in front of the field.
    pub fn keyword(&self) -> &'static str {
        match self {
            Clause::OrderBy(_) => "ORDER BY",
            Clause::SortBy(_) => "SORT BY",
        }
    }
}
