//! Deterministic LaTeX rendering of expressions and equalities.
//!
//! Rendering is a read-only walk over the tree: the output for a given expression is always the
//! same string, and producing it never reduces anything. Negative powers are typeset as
//! fractions, so the canonical `c * a^-1` shape of a quotient comes out as `\frac{c}{a}`.

use crate::equation::Equality;
use crate::expr::{Expr, Primary};
use crate::simplify::fraction::as_rational;
use rug::Integer;

/// Renders an equality as LaTeX.
pub fn latex(equality: &Equality) -> String {
    format!("{} = {}", latex_expr(&equality.lhs), latex_expr(&equality.rhs))
}

/// Renders an expression as LaTeX.
pub fn latex_expr(expr: &Expr) -> String {
    render(expr)
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Primary(primary) => render_primary(primary),
        Expr::Add(terms) => {
            if terms.is_empty() {
                return "0".to_owned();
            }

            let mut out = String::new();
            for (i, term) in terms.iter().enumerate() {
                let rendered = render(term);
                if i == 0 {
                    out.push_str(&rendered);
                } else if let Some(rest) = rendered.strip_prefix('-') {
                    out.push_str(" - ");
                    out.push_str(rest);
                } else {
                    out.push_str(" + ");
                    out.push_str(&rendered);
                }
            }
            out
        },
        Expr::Mul(factors) => render_product(factors),
        Expr::Exp(base, exp) => render_power(base, exp),
    }
}

fn render_primary(primary: &Primary) -> String {
    match primary {
        Primary::Integer(num) => num.to_string(),
        Primary::Float(num) => format!("{}", num.to_f64()),
        Primary::Symbol(sym) => sym.name().to_owned(),
    }
}

/// A rendered factor, remembering whether it must be parenthesized when written next to others.
/// A lone factor in a `\frac` numerator or denominator never needs the parentheses, since the
/// fraction bar already groups it.
struct Factor {
    text: String,
    needs_group: bool,
}

impl Factor {
    fn of(expr: &Expr) -> Self {
        Self {
            text: render(expr),
            needs_group: matches!(expr, Expr::Add(_)),
        }
    }

    fn plain(text: String) -> Self {
        Self { text, needs_group: false }
    }
}

fn join_factors(factors: Vec<Factor>) -> String {
    if factors.len() == 1 {
        return factors.into_iter().next().unwrap().text;
    }

    factors.into_iter()
        .map(|factor| {
            if factor.needs_group {
                format!("\\left({}\\right)", factor.text)
            } else {
                factor.text
            }
        })
        .collect::<Vec<_>>()
        .join(" \\cdot ")
}

/// Splits the factors of a product into a sign, a numerator, and a denominator, and typesets the
/// result as a `\frac` when the denominator is non-empty.
fn render_product(factors: &[Expr]) -> String {
    if factors.is_empty() {
        return "1".to_owned();
    }

    let mut negative = false;
    let mut numerator: Vec<Factor> = Vec::new();
    let mut denominator: Vec<Factor> = Vec::new();

    for factor in factors {
        if let Expr::Exp(base, exp) = factor {
            if let Some(n) = exp.as_integer() {
                if *n < 0 {
                    denominator.push(render_with_magnitude(base, &-n.clone()));
                    continue;
                }
            }
        }

        if let Some(n) = factor.as_integer() {
            if *n < 0 {
                negative = !negative;
                let magnitude = -n.clone();
                if magnitude != 1 {
                    numerator.push(Factor::plain(magnitude.to_string()));
                }
                continue;
            }
        }

        numerator.push(Factor::of(factor));
    }

    let has_denominator = !denominator.is_empty();
    let numerator = if numerator.is_empty() {
        "1".to_owned()
    } else if has_denominator {
        join_factors(numerator)
    } else {
        // no fraction bar to group a lone sum, so parenthesization stays per-factor
        numerator.into_iter()
            .map(|factor| {
                if factor.needs_group && factors.len() > 1 {
                    format!("\\left({}\\right)", factor.text)
                } else {
                    factor.text
                }
            })
            .collect::<Vec<_>>()
            .join(" \\cdot ")
    };

    let body = if has_denominator {
        format!("\\frac{{{}}}{{{}}}", numerator, join_factors(denominator))
    } else {
        numerator
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Renders `base^magnitude` for a positive magnitude, eliding the exponent when it is 1. Used for
/// denominators, where the sign of the exponent has already been consumed.
fn render_with_magnitude(base: &Expr, magnitude: &Integer) -> Factor {
    if *magnitude == 1 {
        Factor::of(base)
    } else {
        Factor::plain(format!("{}^{{{}}}", render_base(base), magnitude))
    }
}

fn render_power(base: &Expr, exp: &Expr) -> String {
    if let Some(n) = exp.as_integer() {
        if *n < 0 {
            let magnitude = -n.clone();
            return format!("\\frac{{1}}{{{}}}", render_with_magnitude(base, &magnitude).text);
        }
    }

    if let Some(rational) = as_rational(exp) {
        if *rational.numer() == 1 && *rational.denom() == 2 {
            return format!("\\sqrt{{{}}}", render(base));
        }
    }

    format!("{}^{{{}}}", render_base(base), render(exp))
}

/// Renders the base of a power; anything compound or negative gets parentheses.
fn render_base(expr: &Expr) -> String {
    let atomic = match expr {
        Expr::Primary(Primary::Integer(n)) => *n >= 0,
        Expr::Primary(Primary::Float(f)) => f.cmp0() != Some(std::cmp::Ordering::Less),
        Expr::Primary(Primary::Symbol(_)) => true,
        _ => false,
    };

    if atomic {
        render(expr)
    } else {
        format!("\\left({}\\right)", render(expr))
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{fraction, integer, negated, power, product, reciprocal, sum, Expr};
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn fractions_use_frac() {
        assert_eq!(latex_expr(&fraction(sym("c"), sym("a"))), "\\frac{c}{a}");
        assert_eq!(latex_expr(&reciprocal(sym("a"))), "\\frac{1}{a}");
        assert_eq!(
            latex_expr(&product(vec![integer(6), reciprocal(integer(2))])),
            "\\frac{6}{2}",
        );
    }

    #[test]
    fn negative_terms_fold_into_subtraction() {
        let expr = sum(vec![sym("x"), negated(sym("y"))]);
        assert_eq!(latex_expr(&expr), "x - y");

        let expr = sum(vec![sym("x"), integer(-3)]);
        assert_eq!(latex_expr(&expr), "x - 3");
    }

    #[test]
    fn powers_brace_their_exponents() {
        let expr = power(sum(vec![sym("x"), integer(1)]), integer(2));
        assert_eq!(latex_expr(&expr), "\\left(x + 1\\right)^{2}");

        let expr = product(vec![sym("a"), power(sym("x"), integer(2))]);
        assert_eq!(latex_expr(&expr), "a \\cdot x^{2}");
    }

    #[test]
    fn negative_powers_become_denominators() {
        let expr = power(sym("x"), integer(-2));
        assert_eq!(latex_expr(&expr), "\\frac{1}{x^{2}}");
    }

    #[test]
    fn square_roots() {
        let half = product(vec![integer(1), reciprocal(integer(2))]);
        assert_eq!(latex_expr(&power(sym("x"), half)), "\\sqrt{x}");
    }

    #[test]
    fn equalities_join_with_equals() {
        let eq = Equality::new(sum(vec![integer(2), integer(2)]), integer(4));
        assert_eq!(latex(&eq), "2 + 2 = 4");
    }
}
