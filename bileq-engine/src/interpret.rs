//! Interpretation of raw caller-supplied values as expressions.
//!
//! The accepted inputs form a closed set, modeled by [`Raw`]: machine integers, arbitrary
//! precision numbers, symbol names, [`Symbol`]s, and expressions themselves. There is no
//! duck-typing and no parsing of arithmetic out of strings; a string is a symbol name or it is an
//! error.

use crate::error::ConversionError;
use crate::expr::{fraction, integer, Expr, Primary};
use crate::primitive::{float, int};
use crate::symbol::Symbol;
use rug::{Float, Integer, Rational};

/// A raw value that [`interpret`] knows how to turn into an expression.
///
/// Callers rarely name this type; the `From` implementations let any accepted value be passed to
/// [`interpret`] (or to any operation that takes `impl Into<Raw>`) directly.
#[derive(Debug, Clone)]
pub enum Raw {
    /// An integer constant.
    Integer(Integer),

    /// An exact ratio of two integers.
    Rational(Rational),

    /// A floating-point constant. Must be finite.
    Float(Float),

    /// A symbol referenced by name, with no assumptions.
    Name(String),

    /// An already-built expression, passed through unchanged.
    Expr(Expr),
}

macro_rules! raw_from_machine_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Raw {
                fn from(value: $t) -> Self {
                    Self::Integer(int(value))
                }
            }
        )*
    };
}

raw_from_machine_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<Integer> for Raw {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<Rational> for Raw {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<f64> for Raw {
    fn from(value: f64) -> Self {
        Self::Float(float(value))
    }
}

impl From<Float> for Raw {
    fn from(value: Float) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Symbol> for Raw {
    fn from(value: Symbol) -> Self {
        Self::Expr(value.into())
    }
}

impl From<Expr> for Raw {
    fn from(value: Expr) -> Self {
        Self::Expr(value)
    }
}

impl From<&Expr> for Raw {
    fn from(value: &Expr) -> Self {
        Self::Expr(value.clone())
    }
}

/// Interprets a raw value as an expression.
///
/// Exact rationals become the canonical fraction shape `numerator * denominator^-1` (or a plain
/// integer when the denominator is 1). Floats must be finite; symbol names must satisfy
/// [`Symbol::new`]. Expressions pass through untouched; in particular, interpretation never
/// reduces anything.
///
/// ```
/// use bileq_engine::interpret;
///
/// let three = interpret(3)?;
/// assert_eq!(three.to_string(), "3");
///
/// let x = interpret("x")?;
/// assert_eq!(x.to_string(), "x");
/// # Ok::<(), bileq_engine::ConversionError>(())
/// ```
pub fn interpret(value: impl Into<Raw>) -> Result<Expr, ConversionError> {
    match value.into() {
        Raw::Integer(value) => Ok(Expr::Primary(Primary::Integer(value))),
        Raw::Rational(value) => {
            if value.is_integer() {
                Ok(integer(value.numer().clone()))
            } else {
                Ok(fraction(
                    integer(value.numer().clone()),
                    integer(value.denom().clone()),
                ))
            }
        },
        Raw::Float(value) => {
            if value.is_finite() {
                Ok(Expr::Primary(Primary::Float(value)))
            } else {
                Err(ConversionError::NonFiniteFloat)
            }
        },
        Raw::Name(name) => Ok(Symbol::new(name)?.into()),
        Raw::Expr(expr) => Ok(expr),
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{reciprocal, product};
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn integers_and_names() {
        assert_eq!(interpret(42).unwrap(), integer(42));
        assert_eq!(interpret("x").unwrap(), Symbol::new("x").unwrap().into());
    }

    #[test]
    fn rationals_become_fractions() {
        let half = interpret(rational((1, 2))).unwrap();
        assert_eq!(half, product(vec![integer(1), reciprocal(integer(2))]));

        let whole = interpret(rational((6, 3))).unwrap();
        assert_eq!(whole, integer(2));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert_eq!(interpret(f64::NAN), Err(ConversionError::NonFiniteFloat));
        assert_eq!(interpret(f64::INFINITY), Err(ConversionError::NonFiniteFloat));
        assert!(interpret(2.5).is_ok());
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(matches!(
            interpret("2x"),
            Err(ConversionError::InvalidSymbolName(_)),
        ));
    }

    #[test]
    fn expressions_pass_through_unreduced() {
        let written = crate::expr::sum(vec![integer(2), integer(2)]);
        assert_eq!(interpret(written.clone()).unwrap(), written);
    }
}
