//! Tools to manipulate numeric coefficients and fractions.
//!
//! Reduced expressions represent a fraction as a [`Expr::Mul`] whose factors include an integer
//! numerator and an integer denominator raised to the power of -1. The helpers here move between
//! that shape and [`Rational`] arithmetic.

use crate::expr::{Expr, Primary};
use crate::primitive::{float, int, rational};
use rug::{Float, Rational};

/// Converts a rational into its canonical expression shape: a plain integer when the denominator
/// is 1, a bare reciprocal when the numerator is 1, and a numerator-times-reciprocal product
/// otherwise.
pub(crate) fn rational_to_expr(value: Rational) -> Expr {
    let (numer, denom) = value.into_numer_denom();
    let denom_is_one = denom == 1;
    let numer_expr = Expr::Primary(Primary::Integer(numer));
    if denom_is_one {
        numer_expr
    } else {
        let recip = Expr::Exp(
            Box::new(Expr::Primary(Primary::Integer(denom))),
            Box::new(Expr::Primary(Primary::Integer(int(-1)))),
        );
        if numer_expr.as_integer().map(|n| n == &1).unwrap_or(false) {
            recip
        } else {
            Expr::Mul(vec![numer_expr, recip])
        }
    }
}

/// Reads an exact rational value out of an expression, if the whole expression is one.
///
/// Recognizes integers, integer reciprocals, and sums / products / integer powers thereof.
/// Floats are not rationals; anything containing one returns `None`.
pub(crate) fn as_rational(expr: &Expr) -> Option<Rational> {
    match expr {
        Expr::Primary(Primary::Integer(n)) => Some(rational(n.clone())),
        Expr::Primary(_) => None,
        Expr::Add(terms) => {
            let mut total = Rational::new();
            for term in terms {
                total += as_rational(term)?;
            }
            Some(total)
        },
        Expr::Mul(factors) => {
            let mut total = rational(1);
            for factor in factors {
                total *= as_rational(factor)?;
            }
            Some(total)
        },
        Expr::Exp(base, exp) => {
            let base = as_rational(base)?;
            let exp = exp.as_integer()?.to_i32()?;
            if base.cmp0() == std::cmp::Ordering::Equal && exp <= 0 {
                // 0^0 and division by zero stay symbolic
                return None;
            }
            Some(rug::ops::Pow::pow(base, exp))
        },
    }
}

/// A numeric coefficient accumulated while scanning the factors of a term.
///
/// Exact as long as every contributing value is exact; one float makes the whole coefficient
/// approximate, mirroring the usual numeric contagion.
#[derive(Debug, Clone)]
pub(crate) enum Coefficient {
    Exact(Rational),
    Approx(Float),
}

impl Coefficient {
    pub(crate) fn one() -> Self {
        Self::Exact(rational(1))
    }

    pub(crate) fn is_one(&self) -> bool {
        match self {
            Self::Exact(value) => *value == 1,
            Self::Approx(value) => *value == 1,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Self::Exact(value) => value.cmp0() == std::cmp::Ordering::Equal,
            Self::Approx(value) => value.is_zero(),
        }
    }

    fn promote(&mut self) -> &mut Float {
        if let Self::Exact(value) = self {
            *self = Self::Approx(float(&*value));
        }
        match self {
            Self::Approx(value) => value,
            Self::Exact(_) => unreachable!(),
        }
    }

    pub(crate) fn multiply_rational(&mut self, value: &Rational) {
        match self {
            Self::Exact(current) => *current *= value,
            Self::Approx(current) => *current *= float(value),
        }
    }

    pub(crate) fn multiply_float(&mut self, value: &Float) {
        *self.promote() *= value;
    }

    pub(crate) fn add(&mut self, other: Coefficient) {
        match other {
            Self::Approx(rhs) => *self.promote() += rhs,
            Self::Exact(rhs) => match self {
                Self::Exact(lhs) => *lhs += rhs,
                Self::Approx(lhs) => *lhs += float(&rhs),
            },
        }
    }

    /// The canonical expression for this coefficient.
    pub(crate) fn into_expr(self) -> Expr {
        match self {
            Self::Exact(value) => rational_to_expr(value),
            Self::Approx(value) => Expr::Primary(Primary::Float(value)),
        }
    }
}

/// Splits a term into its numeric coefficient and the product of its remaining factors (the
/// integer 1 when nothing remains).
///
/// - `5` -> `(5, 1)`
/// - `3*a` -> `(3, a)`
/// - `a * 4^-1 * b` -> `(1/4, a*b)`
/// - `a` -> `(1, a)`
pub(crate) fn split_coefficient(term: &Expr) -> (Coefficient, Expr) {
    let mut coefficient = Coefficient::one();

    let consume = |coefficient: &mut Coefficient, factor: &Expr| -> bool {
        if let Some(n) = factor.as_integer() {
            coefficient.multiply_rational(&rational(n.clone()));
            true
        } else if let Some(d) = factor.as_integer_recip() {
            coefficient.multiply_rational(&rational(d.clone()).recip());
            true
        } else if let Some(f) = factor.as_float() {
            coefficient.multiply_float(f);
            true
        } else {
            false
        }
    };

    match term {
        Expr::Mul(factors) => {
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                if !consume(&mut coefficient, factor) {
                    rest.push(factor.clone());
                }
            }
            (coefficient, Expr::Mul(rest).downgrade())
        },
        factor => {
            if consume(&mut coefficient, factor) {
                (coefficient, Expr::Primary(Primary::Integer(int(1))))
            } else {
                (coefficient, term.clone())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{integer, product, reciprocal, sum, Expr};
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn rational_round_trip() {
        assert_eq!(rational_to_expr(rational(7)), integer(7));
        assert_eq!(rational_to_expr(rational((1, 4))), reciprocal(integer(4)));
        assert_eq!(
            rational_to_expr(rational((3, 4))),
            product(vec![integer(3), reciprocal(integer(4))]),
        );

        for value in [rational(7), rational((1, 4)), rational((-3, 4))] {
            assert_eq!(as_rational(&rational_to_expr(value.clone())), Some(value));
        }
    }

    #[test]
    fn as_rational_reads_compound_numerics() {
        // 2 + 3 * 4^-1
        let expr = sum(vec![
            integer(2),
            product(vec![integer(3), reciprocal(integer(4))]),
        ]);
        assert_eq!(as_rational(&expr), Some(rational((11, 4))));

        assert_eq!(as_rational(&sym("x")), None);
        assert_eq!(as_rational(&reciprocal(integer(0))), None);
    }

    #[test]
    fn split_extracts_every_numeric_factor() {
        let term = product(vec![sym("a"), integer(3), reciprocal(integer(4)), sym("b")]);
        let (coefficient, rest) = split_coefficient(&term);
        assert!(matches!(&coefficient, Coefficient::Exact(r) if *r == rational((3, 4))));
        assert_eq!(rest, product(vec![sym("a"), sym("b")]));
    }

    #[test]
    fn split_of_plain_term_has_unit_coefficient() {
        let (coefficient, rest) = split_coefficient(&sym("x"));
        assert!(coefficient.is_one());
        assert_eq!(rest, sym("x"));
    }
}
