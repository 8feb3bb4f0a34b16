//! The unevaluated equality node.

use crate::expr::Expr;

/// An equality `lhs = rhs` between two expressions.
///
/// Building one is purely structural: both sides are held exactly as given, with no reduction and
/// no comparison between them. `Equality::new(two_plus_two, four)` is a perfectly good equality
/// whose sides happen to be written differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equality {
    /// The left-hand side.
    pub lhs: Expr,

    /// The right-hand side.
    pub rhs: Expr,
}

impl Equality {
    /// Creates an equality between the two sides.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Self { lhs, rhs }
    }
}

impl std::fmt::Display for Equality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
