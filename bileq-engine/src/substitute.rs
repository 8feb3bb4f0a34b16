//! Structural substitution.

use crate::expr::Expr;

/// Replaces occurrences of target expressions throughout `expr`.
///
/// Matching is structural (strict equality) against whole nodes, from the root down: if a node
/// matches a target, it is replaced and its interior is not searched further. All pairs are
/// applied **simultaneously**: a replacement is never itself re-scanned, so swapping `x -> y`
/// and `y -> x` in one call exchanges the two symbols instead of collapsing them.
///
/// The shape of everything that does not match is preserved exactly; substitution never flattens
/// or reduces.
pub fn substitute(expr: &Expr, replacements: &[(Expr, Expr)]) -> Expr {
    for (target, replacement) in replacements {
        if expr == target {
            return replacement.clone();
        }
    }

    match expr {
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(
            terms.iter().map(|term| substitute(term, replacements)).collect(),
        ),
        Expr::Mul(factors) => Expr::Mul(
            factors.iter().map(|factor| substitute(factor, replacements)).collect(),
        ),
        Expr::Exp(base, exp) => Expr::Exp(
            Box::new(substitute(base, replacements)),
            Box::new(substitute(exp, replacements)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{integer, power, product, sum, Expr};
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn replaces_symbols_everywhere() {
        // x^2 + x
        let expr = sum(vec![power(sym("x"), integer(2)), sym("x")]);
        let result = substitute(&expr, &[(sym("x"), integer(3))]);
        assert_eq!(result, sum(vec![power(integer(3), integer(2)), integer(3)]));
    }

    #[test]
    fn matches_whole_subtrees() {
        // (x + 1) * y, replacing the entire sum
        let target = sum(vec![sym("x"), integer(1)]);
        let expr = product(vec![target.clone(), sym("y")]);
        let result = substitute(&expr, &[(target, sym("u"))]);
        assert_eq!(result, product(vec![sym("u"), sym("y")]));
    }

    #[test]
    fn substitution_is_simultaneous() {
        let expr = sum(vec![sym("x"), sym("y")]);
        let result = substitute(&expr, &[(sym("x"), sym("y")), (sym("y"), sym("x"))]);
        assert_eq!(result, sum(vec![sym("y"), sym("x")]));
    }

    #[test]
    fn preserves_unmatched_structure() {
        let written = sum(vec![sum(vec![integer(2), integer(3)]), sym("x")]);
        let result = substitute(&written, &[(sym("x"), sym("z"))]);
        assert_eq!(result.to_string(), "2 + 3 + z");
        assert!(matches!(result, Expr::Add(ref terms) if terms.len() == 2));
    }
}
