//! A representation of mathematical expressions built for manipulation, not parsing.
//!
//! Expressions are trees of [`Expr`] nodes over a small vocabulary: numbers, symbols, n-ary sums,
//! n-ary products, and powers. Division and subtraction are not node kinds of their own; `a / b`
//! is `a * b^-1` and `a - b` is `a + (-1 * b)`, which keeps every reduction rule working on just
//! three shapes.
//!
//! # Written form versus reduced form
//!
//! The constructors in this module come in two flavors, and the distinction carries the whole
//! crate:
//!
//! - The free functions [`sum`], [`product`], [`power`] (and the derived [`negated`],
//!   [`reciprocal`], [`fraction`]) build **unevaluated** nodes. They wrap their operands verbatim:
//!   no flattening, no constant folding, no reordering. `sum(vec![two, two])` stays a two-term sum
//!   and renders as `2 + 2`, not `4`. This is how an equation keeps the structure a caller wrote
//!   down through an arbitrarily long chain of transformations.
//! - The [`Add`](std::ops::Add), [`Mul`](std::ops::Mul) and [`Neg`](std::ops::Neg) operator
//!   implementations are **reducing** constructors used by the simplification and expansion
//!   passes. They flatten nested sums/products into one list of terms/factors and fold numeric
//!   operands of the same type.
//!
//! Nothing in this module ever reduces an expression behind the caller's back; reduction happens
//! only inside [`crate::simplify`] and [`crate::expand`], which are explicit calls.
//!
//! # Strict equality
//!
//! Deciding whether two expressions are *mathematically* equal is as hard as simplification
//! itself, so [`PartialEq`] for [`Expr`] implements a cheaper relation called **strict equality**:
//! two expressions are strictly equal if they are the same kind of node and their children are
//! strictly equal, where the children of a sum or product may appear in any order. Strict equality
//! never reports a false positive (strictly equal expressions are always mathematically equal),
//! but `x^2 + 2x + 1` and `(x + 1)^2` are *not* strictly equal even though they are mathematically
//! the same. Reduction rules use strict equality to decide when terms or factors can be combined.

mod iter;

use crate::primitive::int;
use crate::symbol::Symbol;
use iter::ExprIter;
use rug::{Float, Integer};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};

/// A single indivisible value: a number or a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An integer, such as `2` or `144`.
    Integer(Integer),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(Float),

    /// A symbol, such as `x` or `y`, with its assumptions.
    Symbol(Symbol),
}

/// [`Eq`] is implemented manually because of [`Primary::Float`]. This module **must never**
/// produce non-normal [`Float`]s (such as `NaN`); interpretation rejects them at the boundary.
impl Eq for Primary {}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) => write!(f, "{}", num.to_f64()),
            Self::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}

/// Adds two [`Primary`]s together. If both are the **same numeric type**, the numbers are added;
/// otherwise the two values are wrapped in an [`Expr::Add`].
impl Add<Primary> for Primary {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                Expr::Primary(Primary::Integer(lhs + rhs))
            },
            (Primary::Float(lhs), Primary::Float(rhs)) => {
                Expr::Primary(Primary::Float(lhs + rhs))
            },
            (lhs, rhs) => Expr::Add(vec![
                Expr::Primary(lhs),
                Expr::Primary(rhs),
            ]),
        }
    }
}

/// Multiplies two [`Primary`]s together. If both are the **same numeric type**, the numbers are
/// multiplied; otherwise the two values are wrapped in an [`Expr::Mul`].
impl Mul<Primary> for Primary {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                Expr::Primary(Primary::Integer(lhs * rhs))
            },
            (Primary::Float(lhs), Primary::Float(rhs)) => {
                Expr::Primary(Primary::Float(lhs * rhs))
            },
            (lhs, rhs) => Expr::Mul(vec![
                Expr::Primary(lhs),
                Expr::Primary(rhs),
            ]),
        }
    }
}

/// A mathematical expression.
///
/// Sums and products are n-ary: `x + y + z` can be a single [`Expr::Add`] with three children.
/// Whether nested sums/products are flattened depends on how the expression was built; see the
/// [module-level documentation](self).
#[derive(Debug, Clone, Eq)]
pub enum Expr {
    /// A number or symbol.
    Primary(Primary),

    /// A sum of terms.
    Add(Vec<Expr>),

    /// A product of factors.
    Mul(Vec<Expr>),

    /// An expression raised to a power.
    Exp(Box<Expr>, Box<Expr>),
}

/// Operator precedence, used only to decide where the plain-text form needs parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Add,
    Mul,
    Exp,
    Primary,
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        write!(f, " + {}", term)?;
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => {
                let mut iter = factors.iter();
                if let Some(factor) = iter.next() {
                    if factor.cmp_precedence(self) == Ordering::Less {
                        write!(f, "({})", factor)?;
                    } else {
                        write!(f, "{}", factor)?;
                    }
                    for factor in iter {
                        if factor.cmp_precedence(self) == Ordering::Less {
                            write!(f, " * ({})", factor)?;
                        } else {
                            write!(f, " * {}", factor)?;
                        }
                    }
                }
                Ok(())
            },
            Self::Exp(base, exp) => {
                if base.cmp_precedence(self) == Ordering::Less {
                    write!(f, "({})", base)?;
                } else {
                    write!(f, "{}", base)?;
                }
                write!(f, "^")?;
                if exp.cmp_precedence(self) == Ordering::Less {
                    write!(f, "({})", exp)?;
                } else {
                    write!(f, "{}", exp)?;
                }
                Ok(())
            },
        }
    }
}

impl Expr {
    fn precedence(&self) -> Precedence {
        match self {
            Self::Primary(_) => Precedence::Primary,
            Self::Add(_) => Precedence::Add,
            Self::Mul(_) => Precedence::Mul,
            Self::Exp(_, _) => Precedence::Exp,
        }
    }

    /// Compares the precedence of two expressions, used to determine whether parentheses are
    /// needed around `self` when printing it inside `other`.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Integer`], returns the contained integer.
    pub fn into_integer(self) -> Option<Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// Returns true if the expression is a **nonzero** [`Primary::Integer`] raised to the power
    /// of -1, the canonical shape of a denominator.
    ///
    /// A zero base is deliberately not matched: `0^-1` is left alone as a symbolic artifact for
    /// the reduction stage to ignore, rather than treated as a number.
    pub fn is_integer_recip(&self) -> bool {
        self.as_integer_recip().is_some()
    }

    /// If the expression is a nonzero [`Primary::Integer`] raised to the power of -1, returns a
    /// reference to the contained integer (the denominator of the fraction).
    pub fn as_integer_recip(&self) -> Option<&Integer> {
        if let Self::Exp(base, exp) = self {
            if let (Some(base), Some(exp)) = (base.as_integer(), exp.as_integer()) {
                if exp == &-1 && !base.is_zero() {
                    return Some(base);
                }
            }
        }

        None
    }

    /// Returns true if the expression is a [`Primary::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Primary(Primary::Float(_)))
    }

    /// If the expression is a [`Primary::Float`], returns a reference to the contained float.
    pub fn as_float(&self) -> Option<&Float> {
        match self {
            Self::Primary(Primary::Float(float)) => Some(float),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Returns true if the expression is provably nonzero from its structure and the assumptions
    /// on its symbols.
    ///
    /// This is conservative: `false` means "not known", not "zero". Sums are never claimed
    /// nonzero unless every term is known positive.
    pub fn is_known_nonzero(&self) -> bool {
        match self {
            Self::Primary(Primary::Integer(int)) => !int.is_zero(),
            Self::Primary(Primary::Float(float)) => !float.is_zero(),
            Self::Primary(Primary::Symbol(sym)) => sym.is_nonzero(),
            Self::Add(terms) => !terms.is_empty() && terms.iter().all(|t| t.is_known_positive()),
            Self::Mul(factors) => factors.iter().all(|f| f.is_known_nonzero()),
            // a nonzero base raised to anything stays nonzero
            Self::Exp(base, _) => base.is_known_nonzero(),
        }
    }

    /// Returns true if the expression is provably positive. Same caveats as
    /// [`is_known_nonzero`](Self::is_known_nonzero).
    pub fn is_known_positive(&self) -> bool {
        match self {
            Self::Primary(Primary::Integer(int)) => int.cmp0() == Ordering::Greater,
            Self::Primary(Primary::Float(float)) => float.cmp0() == Some(Ordering::Greater),
            Self::Primary(Primary::Symbol(sym)) => sym.is_positive(),
            Self::Add(terms) => !terms.is_empty() && terms.iter().all(|t| t.is_known_positive()),
            Self::Mul(factors) => factors.iter().all(|f| f.is_known_positive()),
            _ => false,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some reductions may leave an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`] with
    /// zero / one factor. This function collapses those cases into the single child, or the
    /// identity element 0 / 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::Primary(Primary::Integer(int(0)))
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::Primary(Primary::Integer(int(1)))
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// A total order over expressions used to put the children of sums and products into one
    /// canonical arrangement, so that a simplified expression always renders the same way.
    ///
    /// The order is arbitrary but fixed: numbers before symbols before powers before products
    /// before sums, with ties broken by contents.
    pub(crate) fn canonical_cmp(&self, other: &Self) -> Ordering {
        fn rank(expr: &Expr) -> u8 {
            match expr {
                Expr::Primary(Primary::Integer(_)) => 0,
                Expr::Primary(Primary::Float(_)) => 1,
                Expr::Primary(Primary::Symbol(_)) => 2,
                Expr::Exp(..) => 3,
                Expr::Mul(_) => 4,
                Expr::Add(_) => 5,
            }
        }

        fn cmp_children(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
            for (l, r) in lhs.iter().zip(rhs) {
                match l.canonical_cmp(r) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            lhs.len().cmp(&rhs.len())
        }

        rank(self).cmp(&rank(other)).then_with(|| match (self, other) {
            (Expr::Primary(Primary::Integer(l)), Expr::Primary(Primary::Integer(r))) => l.cmp(r),
            (Expr::Primary(Primary::Float(l)), Expr::Primary(Primary::Float(r))) => {
                // non-normal floats are rejected at interpretation, so this is total in practice
                l.partial_cmp(r).unwrap_or(Ordering::Equal)
            },
            (Expr::Primary(Primary::Symbol(l)), Expr::Primary(Primary::Symbol(r))) => l.cmp(r),
            (Expr::Exp(lb, le), Expr::Exp(rb, re)) => {
                lb.canonical_cmp(rb).then_with(|| le.canonical_cmp(re))
            },
            (Expr::Mul(l), Expr::Mul(r)) | (Expr::Add(l), Expr::Add(r)) => cmp_children(l, r),
            _ => Ordering::Equal,
        })
    }
}

/// Checks if two expressions are **strictly** equal. See the
/// [module-level documentation](self) for what that does and does not mean.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs.iter().all(|lhs| rhs.contains(lhs))
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

impl From<Symbol> for Expr {
    fn from(sym: Symbol) -> Self {
        Self::Primary(Primary::Symbol(sym))
    }
}

/// Adds two [`Expr`]s together, **flattening** mixes of [`Primary`] and / or [`Expr::Add`]
/// operands into one list of terms. Used by the reduction passes; not a substitute for [`sum`].
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs + rhs,
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Add(Vec::new()));
        *self = lhs + rhs;
    }
}

/// Multiplies two [`Expr`]s together, **flattening** mixes of [`Primary`] and / or [`Expr::Mul`]
/// operands into one list of factors. Used by the reduction passes; not a substitute for
/// [`product`].
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs * rhs,
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Mul(Vec::new()));
        *self = lhs * rhs;
    }
}

/// Multiplies the expression by -1, folding the sign into numeric values.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Primary(Primary::Float(float)) => Self::Primary(Primary::Float(-float)),
            expr => Self::Primary(Primary::Integer(int(-1))) * expr,
        }
    }
}

/// Creates an integer constant expression.
pub fn integer<T>(value: T) -> Expr
where
    Integer: From<T>,
{
    Expr::Primary(Primary::Integer(int(value)))
}

/// An **unevaluated** sum node. The terms keep their count, order, and nesting exactly as given.
pub fn sum(terms: Vec<Expr>) -> Expr {
    Expr::Add(terms)
}

/// An **unevaluated** product node. The factors keep their count, order, and nesting exactly as
/// given.
pub fn product(factors: Vec<Expr>) -> Expr {
    Expr::Mul(factors)
}

/// An **unevaluated** power node.
pub fn power(base: Expr, exponent: Expr) -> Expr {
    Expr::Exp(Box::new(base), Box::new(exponent))
}

/// An **unevaluated** negation, written as the product `-1 * expr`.
pub fn negated(expr: Expr) -> Expr {
    product(vec![integer(-1), expr])
}

/// An **unevaluated** reciprocal, written as the power `expr^-1`.
pub fn reciprocal(expr: Expr) -> Expr {
    power(expr, integer(-1))
}

/// An **unevaluated** fraction, written as the product `numerator * denominator^-1`.
pub fn fraction(numerator: Expr, denominator: Expr) -> Expr {
    product(vec![numerator, reciprocal(denominator)])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn strict_equality_ignores_order() {
        let a = Expr::Mul(vec![integer(2), sym("x")]);
        let b = Expr::Mul(vec![sym("x"), integer(2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_is_structural() {
        // mathematically equal, structurally different
        let written = sum(vec![integer(2), integer(2)]);
        let reduced = integer(4);
        assert_ne!(written, reduced);
    }

    #[test]
    fn unevaluated_constructors_preserve_shape() {
        let nested = sum(vec![sum(vec![integer(2), integer(3)]), integer(4)]);
        assert_eq!(nested.to_string(), "2 + 3 + 4");
        match nested {
            Expr::Add(terms) => {
                assert_eq!(terms.len(), 2);
                assert!(matches!(terms[0], Expr::Add(_)));
            },
            _ => panic!("sum must build an Add node"),
        }
    }

    #[test]
    fn reducing_operators_flatten_and_fold() {
        let folded = integer(2) + integer(3);
        assert_eq!(folded, integer(5));

        let flattened = (sym("x") + sym("y")) + sym("z");
        assert_eq!(flattened, Expr::Add(vec![sym("x"), sym("y"), sym("z")]));
    }

    #[test]
    fn fraction_shape() {
        let frac = fraction(sym("c"), sym("a"));
        assert_eq!(frac, Expr::Mul(vec![
            sym("c"),
            Expr::Exp(Box::new(sym("a")), Box::new(integer(-1))),
        ]));
        assert_eq!(frac.to_string(), "c * a^-1");
    }

    #[test]
    fn integer_recip_requires_nonzero_base() {
        assert!(reciprocal(integer(4)).is_integer_recip());
        assert!(!reciprocal(integer(0)).is_integer_recip());
        assert!(!reciprocal(sym("x")).is_integer_recip());
    }

    #[test]
    fn nonzero_knowledge() {
        let k = Expr::from(Symbol::new("k").unwrap().nonzero());
        assert!(k.is_known_nonzero());
        assert!(!sym("x").is_known_nonzero());
        assert!(product(vec![k.clone(), integer(3)]).is_known_nonzero());
        assert!(power(k, sym("x")).is_known_nonzero());
        assert!(!integer(0).is_known_nonzero());
    }

    #[test]
    fn display_parenthesizes_by_precedence() {
        let expr = power(sum(vec![sym("x"), integer(1)]), integer(2));
        assert_eq!(expr.to_string(), "(x + 1)^2");
    }
}
