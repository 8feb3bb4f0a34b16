//! Rational approximation of floats.

use crate::primitive::float;
use rug::{Float, Integer, Rational};

/// Collapses a continued fraction `[a0; a1, a2, ...]` into a single rational.
fn collapse(terms: &[Integer]) -> Rational {
    let mut value = Rational::new();
    for (i, term) in terms.iter().rev().enumerate() {
        value += term;
        // every term after a0 is at least 1, so the reciprocal is always defined
        if i + 1 < terms.len() {
            value = value.recip();
        }
    }
    value
}

/// Approximates the given float as an exact rational.
///
/// [`Float::to_rational`] reproduces the float bit-for-bit, which turns `0.1` into a fraction
/// with a 2^55 denominator. Expanding the continued fraction instead and stopping once the error
/// drops below `1e-60` recovers the small fraction the caller almost certainly meant.
pub fn approximate_rational(n: &Float) -> Rational {
    if n.is_zero() {
        return Rational::new();
    }

    let mut terms = Vec::new();
    let mut rest = n.clone();
    loop {
        let (whole, fractional) = rest.trunc_fract(float(0));
        // finite by construction: interpretation rejects non-finite floats
        terms.push(whole.to_integer().unwrap());

        let so_far = collapse(&terms);
        let error = float(n - float(&so_far)).abs();
        if fractional.is_zero() || error < 1e-60 {
            return so_far;
        }

        rest = fractional.recip();
    }
}
