use std::sync::Arc;

/// Node of an arithmetic expression tree.
///
/// The set of node kinds is closed: a tree is built only from integer
/// literals and binary additions. Every `match` over `Expr` in this crate is
/// exhaustive, so there is no "unknown node" state to recover from.
///
/// Children are held behind [`Arc`] so a finished tree can be reused as a
/// subtree of a larger one without copying it. Nodes are never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Literal integer
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Literal(i64),

    /// Sum of two sub-expressions
    ///
    /// # Example
    /// ```text
    /// (3 + (5 + 0))
    /// ```
    Add {
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
}

impl Expr {
    /// Creates a literal leaf.
    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    /// Creates an addition node.
    ///
    /// Either operand may be an owned `Expr` or an already shared
    /// `Arc<Expr>`; passing an `Arc` reuses the subtree as-is.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use reify_lang::Expr;
    ///
    /// let shared = Arc::new(Expr::add(Expr::literal(1), Expr::literal(2)));
    /// let twice = Expr::add(shared.clone(), shared);
    /// assert_eq!(twice.eval(), 6);
    /// ```
    pub fn add(left: impl Into<Arc<Expr>>, right: impl Into<Arc<Expr>>) -> Self {
        Expr::Add {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Add { left, right } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of literal leaves reachable from this node.
    ///
    /// A shared subtree is counted once per path that reaches it.
    pub fn leaf_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Add { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(value)
    }
}
