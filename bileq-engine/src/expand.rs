//! Expansion of products and powers into sums of monomials.
//!
//! Expansion is the second explicit reduction pass next to [`crate::simplify`]. It pushes
//! products into sums, unrolls integer powers of sums, and splits powers of products and of sums
//! of exponents, but it does **not** collect like terms or fold coefficients; pairing it with a
//! following [`simplify`](crate::simplify::simplify) call yields the familiar collected form.

use crate::error::EngineError;
use crate::expr::{integer, Expr};
use crate::simplify::fraction::{split_coefficient, Coefficient};
use rug::ops::RemRounding;
use rug::{Integer, Rational};

/// Per-call configuration for [`expand_with`].
///
/// A field left as `None` is **absent**: the engine applies its own default (`true` for every
/// toggle, no modulus), which is not the same thing as passing any particular explicit value.
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Recurse into sub-expressions instead of only rewriting the outermost node.
    pub deep: Option<bool>,

    /// Reduce the integer coefficients of the expanded form modulo this value. Requires every
    /// coefficient to be an integer.
    pub modulus: Option<Integer>,

    /// Distribute products over sums: `a*(b+c) -> a*b + a*c`.
    pub mul: Option<bool>,

    /// Unroll positive integer powers of sums: `(a+b)^2 -> a*a + a*b + b*a + b*b`.
    pub multinomial: Option<bool>,

    /// Split powers with sums in the exponent: `x^(a+b) -> x^a * x^b`.
    pub power_exp: Option<bool>,

    /// Split integer powers of products: `(a*b)^n -> a^n * b^n`.
    pub power_base: Option<bool>,
}

/// The resolved toggles, after engine defaulting.
#[derive(Debug, Clone, Copy)]
struct Flags {
    deep: bool,
    mul: bool,
    multinomial: bool,
    power_exp: bool,
    power_base: bool,
}

impl Flags {
    fn resolve(options: &ExpandOptions) -> Self {
        Self {
            deep: options.deep.unwrap_or(true),
            mul: options.mul.unwrap_or(true),
            multinomial: options.multinomial.unwrap_or(true),
            power_exp: options.power_exp.unwrap_or(true),
            power_base: options.power_base.unwrap_or(true),
        }
    }
}

/// Expands an expression with the engine's defaults.
pub fn expand(expr: &Expr) -> Expr {
    expand_node(expr, &Flags::resolve(&ExpandOptions::default()))
}

/// Expands an expression with the given options.
pub fn expand_with(expr: &Expr, options: &ExpandOptions) -> Result<Expr, EngineError> {
    let expanded = expand_node(expr, &Flags::resolve(options));
    match &options.modulus {
        Some(modulus) => apply_modulus(&expanded, modulus),
        None => Ok(expanded),
    }
}

fn expand_node(expr: &Expr, flags: &Flags) -> Expr {
    match expr {
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => {
            let children = expand_children(terms, flags);
            // the reducing + flattens nested sums as they surface
            children.into_iter()
                .reduce(|acc, term| acc + term)
                .unwrap_or_else(|| integer(0))
        },
        Expr::Mul(factors) => {
            let children = expand_children(factors, flags);
            distribute_product(children, flags)
        },
        Expr::Exp(base, exp) => {
            let (base, exp) = if flags.deep {
                (expand_node(base, flags), expand_node(exp, flags))
            } else {
                ((**base).clone(), (**exp).clone())
            };
            expand_power(base, exp, flags)
        },
    }
}

fn expand_children(children: &[Expr], flags: &Flags) -> Vec<Expr> {
    if flags.deep {
        children.iter().map(|child| expand_node(child, flags)).collect()
    } else {
        children.to_vec()
    }
}

/// Multiplies a list of factors out, crossing every sum encountered (when `mul` allows) so the
/// result is a sum of products.
fn distribute_product(factors: Vec<Expr>, flags: &Flags) -> Expr {
    let mut partials: Option<Vec<Expr>> = None;

    for factor in factors {
        partials = Some(match (partials, factor) {
            (None, Expr::Add(terms)) if flags.mul => terms,
            (None, other) => vec![other],
            (Some(acc), Expr::Add(terms)) if flags.mul => {
                let mut crossed = Vec::with_capacity(acc.len() * terms.len());
                for left in &acc {
                    for term in &terms {
                        crossed.push(left.clone() * term.clone());
                    }
                }
                crossed
            },
            (Some(acc), other) => {
                acc.into_iter().map(|left| left * other.clone()).collect()
            },
        });
    }

    match partials {
        None => integer(1),
        Some(mut terms) if terms.len() == 1 => terms.pop().unwrap(),
        Some(terms) => Expr::Add(terms),
    }
}

fn expand_power(base: Expr, exp: Expr, flags: &Flags) -> Expr {
    // (a^m)^n with integer exponents folds into a^(m*n) before anything else
    if let Some(outer) = exp.as_integer() {
        if let Expr::Exp(inner_base, inner_exp) = &base {
            if let Some(inner) = inner_exp.as_integer() {
                let folded = integer(rug::Integer::from(inner * outer));
                return expand_power((**inner_base).clone(), folded, flags);
            }
        }
    }

    // x^(a+b) -> x^a * x^b
    if flags.power_exp {
        if let Expr::Add(terms) = &exp {
            let factors = terms.iter()
                .map(|term| expand_power(base.clone(), term.clone(), flags))
                .collect::<Vec<_>>();
            return distribute_product(factors, flags);
        }
    }

    if let Some(n) = exp.as_integer() {
        if *n == 1 {
            return base;
        }

        // (a*b)^n -> a^n * b^n
        if flags.power_base {
            if let Expr::Mul(factors) = &base {
                let factors = factors.iter()
                    .map(|factor| expand_power(factor.clone(), exp.clone(), flags))
                    .collect::<Vec<_>>();
                return distribute_product(factors, flags);
            }
        }

        // (a+b)^n by repeated multiplication, for positive integer n
        if flags.multinomial && *n >= 2 && matches!(base, Expr::Add(_)) {
            if let Some(count) = n.to_u32() {
                // the crossing itself is what multinomial enables, independent of `mul`
                let crossing = Flags { mul: true, ..*flags };
                let mut result = base.clone();
                for _ in 1..count {
                    result = distribute_product(vec![result, base.clone()], &crossing);
                }
                return result;
            }
        }
    }

    Expr::Exp(Box::new(base), Box::new(exp))
}

/// Reduces the integer coefficients of an expanded sum modulo `modulus`, collecting like terms
/// first so duplicated monomials reduce as one coefficient.
fn apply_modulus(expr: &Expr, modulus: &Integer) -> Result<Expr, EngineError> {
    if modulus.is_zero() {
        return Err(EngineError::ZeroModulus);
    }

    let terms = match expr {
        Expr::Add(terms) => terms.clone(),
        other => vec![other.clone()],
    };

    let mut buckets: Vec<(Rational, Expr)> = Vec::new();
    for term in &terms {
        let (coefficient, rest) = split_coefficient(term);
        let value = match coefficient {
            Coefficient::Exact(value) => value,
            Coefficient::Approx(_) => return Err(EngineError::NonIntegerModulus),
        };

        match buckets.iter().position(|(_, existing)| *existing == rest) {
            Some(idx) => buckets[idx].0 += value,
            None => buckets.push((value, rest)),
        }
    }

    let mut new_terms = Vec::with_capacity(buckets.len());
    for (value, rest) in buckets {
        if !value.is_integer() {
            return Err(EngineError::NonIntegerModulus);
        }

        let reduced = value.into_numer_denom().0.rem_euc(modulus.clone());
        if reduced.is_zero() {
            continue;
        }

        let rest_is_one = rest.as_integer().map(|n| n == &1).unwrap_or(false);
        if rest_is_one {
            new_terms.push(integer(reduced));
        } else if reduced == 1 {
            new_terms.push(rest);
        } else {
            new_terms.push(integer(reduced) * rest);
        }
    }

    Ok(Expr::Add(new_terms).downgrade())
}

#[cfg(test)]
mod tests {
    use crate::expr::{power, product, reciprocal, sum, Expr};
    use crate::primitive::int;
    use crate::simplify::simplify;
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn products_push_into_sums() {
        // (x + 1) * y -> x*y + 1*y
        let expr = product(vec![sum(vec![sym("x"), integer(1)]), sym("y")]);
        let expanded = expand(&expr);
        assert_eq!(expanded, sum(vec![
            Expr::Mul(vec![sym("x"), sym("y")]),
            Expr::Mul(vec![integer(1), sym("y")]),
        ]));
    }

    #[test]
    fn squares_of_sums_unroll() {
        let expr = power(sum(vec![sym("x"), integer(1)]), integer(2));
        let expanded = expand(&expr);

        // expansion leaves collection to simplify
        assert!(matches!(&expanded, Expr::Add(terms) if terms.len() == 4));
        assert_eq!(
            simplify(&expanded),
            simplify(&sum(vec![
                power(sym("x"), integer(2)),
                product(vec![integer(2), sym("x")]),
                integer(1),
            ])),
        );
    }

    #[test]
    fn powers_of_products_split() {
        // (2a)^-2 -> 2^-2 * a^-2
        let expr = power(product(vec![integer(2), sym("a")]), integer(-2));
        let expanded = expand(&expr);
        assert_eq!(expanded, product(vec![
            power(integer(2), integer(-2)),
            power(sym("a"), integer(-2)),
        ]));
    }

    #[test]
    fn sums_in_exponents_split() {
        let expr = power(sym("x"), sum(vec![sym("a"), sym("b")]));
        let expanded = expand(&expr);
        assert_eq!(expanded, product(vec![
            power(sym("x"), sym("a")),
            power(sym("x"), sym("b")),
        ]));
    }

    #[test]
    fn power_towers_fold() {
        // ((2a)^-1)^2 -> 2^-2 * a^-2
        let expr = power(reciprocal(product(vec![integer(2), sym("a")])), integer(2));
        let expanded = expand(&expr);
        assert_eq!(expanded, product(vec![
            power(integer(2), integer(-2)),
            power(sym("a"), integer(-2)),
        ]));
    }

    #[test]
    fn shallow_expansion_stops_at_the_surface() {
        let inner = product(vec![sym("a"), sum(vec![sym("b"), sym("c")])]);
        let expr = sum(vec![sym("x"), inner.clone()]);

        let options = ExpandOptions { deep: Some(false), ..Default::default() };
        assert_eq!(expand_with(&expr, &options).unwrap(), expr);

        let deep = expand(&expr);
        assert_eq!(deep, sum(vec![
            sym("x"),
            Expr::Mul(vec![sym("a"), sym("b")]),
            Expr::Mul(vec![sym("a"), sym("c")]),
        ]));
    }

    #[test]
    fn disabled_mul_leaves_products_alone() {
        let expr = product(vec![sym("a"), sum(vec![sym("b"), sym("c")])]);
        let options = ExpandOptions { mul: Some(false), ..Default::default() };
        assert_eq!(expand_with(&expr, &options).unwrap(), expr);
    }

    #[test]
    fn modulus_reduces_collected_coefficients() {
        // (x + 1)^2 mod 2 = x^2 + 1
        let expr = power(sum(vec![sym("x"), integer(1)]), integer(2));
        let options = ExpandOptions { modulus: Some(int(2)), ..Default::default() };
        let expanded = expand_with(&expr, &options).unwrap();
        assert_eq!(expanded, sum(vec![
            Expr::Mul(vec![sym("x"), sym("x")]),
            integer(1),
        ]));
    }

    #[test]
    fn modulus_rejects_fractional_coefficients() {
        let expr = product(vec![sym("x"), reciprocal(integer(2))]);
        let options = ExpandOptions { modulus: Some(int(3)), ..Default::default() };
        assert_eq!(expand_with(&expr, &options), Err(EngineError::NonIntegerModulus));
    }
}
