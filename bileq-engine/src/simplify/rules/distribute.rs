//! Simplification rules related to the distributive property.

use crate::expr::Expr;
use crate::simplify::{
    rules::{do_multiply, do_power},
    step::{Step, StepCollector},
};

/// `a*(b+c) = a*b + a*c`
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        // find the first sum among the factors, and distribute every other factor over it
        let sum_idx = factors.iter().position(|factor| matches!(factor, Expr::Add(_)))?;

        let mut others = factors.to_vec();
        let terms = match others.swap_remove(sum_idx) {
            Expr::Add(terms) => terms,
            _ => unreachable!(),
        };

        let new_terms = terms.into_iter()
            .map(|term| Expr::Mul(others.clone()) * term)
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// `(a*b)^c = a^c * b^c`
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        if let Expr::Mul(factors) = base {
            let new_factors = factors.iter()
                .map(|factor| Expr::Exp(
                    Box::new(factor.clone()),
                    Box::new(exp.clone()),
                ))
                .collect::<Vec<_>>();

            return Some(Expr::Mul(new_factors));
        }

        None
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Applies all distribution rules.
///
/// Distribution may or may not reduce the complexity of the expression, since it can introduce
/// additional operations. However, it moves the expression toward the canonical sum-of-products
/// arrangement the other rules work on, and the overall complexity guard discards the result if
/// it was not worth it.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
        .or_else(|| distribute_power(expr, step_collector))
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
    fn products_distribute_over_sums() {
        // a * (b + c) -> a*b + a*c
        let expr = product(vec![sym("a"), sum(vec![sym("b"), sym("c")])]);
        let distributed = distributive_property(&expr, &mut ()).unwrap();
        assert_eq!(distributed, sum(vec![
            Expr::Mul(vec![sym("a"), sym("b")]),
            Expr::Mul(vec![sym("a"), sym("c")]),
        ]));
    }

    #[test]
    fn powers_distribute_over_products() {
        // (a*b)^2 -> a^2 * b^2
        let expr = power(product(vec![sym("a"), sym("b")]), integer(2));
        let distributed = distribute_power(&expr, &mut ()).unwrap();
        assert_eq!(distributed, product(vec![
            power(sym("a"), integer(2)),
            power(sym("b"), integer(2)),
        ]));
    }

    #[test]
    fn plain_products_are_left_alone() {
        let expr = product(vec![sym("a"), sym("b")]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
