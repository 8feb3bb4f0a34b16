//! Simplification rules for sums, including combining like terms.

use crate::expr::Expr;
use crate::simplify::{
    fraction::split_coefficient,
    rules::do_add,
    step::{Step, StepCollector},
};

/// `a + (b + c) = a + b + c`
///
/// Splices the terms of nested sums into the outer sum. Unevaluated construction nests freely, so
/// this usually fires first and lets every other addition rule see all terms at one level.
pub fn flatten_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        let mut flat = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                Expr::Add(inner) => flat.extend(inner.iter().cloned()),
                other => flat.push(other.clone()),
            }
        }
        Some(Expr::Add(flat).downgrade())
    })?;

    step_collector.push(Step::FlattenTerms);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| {
                // keep all non-zero terms
                term.as_integer()
                    .map(|n| !n.is_zero())
                    .unwrap_or(true)
            })
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `a/4 + 3a/4 = a`
/// etc.
///
/// Terms are alike when their coefficient-free factor parts are strictly equal; their numeric
/// coefficients are then summed exactly. Terms whose coefficients cancel to zero disappear.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        // buckets of (coefficient, factor part), in first-seen order
        let mut buckets: Vec<(crate::simplify::fraction::Coefficient, Expr)> = Vec::new();

        for term in terms {
            let (coefficient, rest) = split_coefficient(term);
            // O(n^2) worst case from the scan, like the combining rules elsewhere
            match buckets.iter().position(|(_, existing)| *existing == rest) {
                Some(idx) => buckets[idx].0.add(coefficient),
                None => buckets.push((coefficient, rest)),
            }
        }

        let mut new_terms = Vec::with_capacity(buckets.len());
        for (coefficient, rest) in buckets {
            if coefficient.is_zero() {
                continue;
            }

            let rest_is_one = rest.as_integer().map(|n| n == &1).unwrap_or(false);
            if rest_is_one {
                new_terms.push(coefficient.into_expr());
            } else if coefficient.is_one() {
                new_terms.push(rest);
            } else {
                new_terms.push(coefficient.into_expr() * rest);
            }
        }

        let combined = Expr::Add(new_terms).downgrade();
        if combined == *expr {
            None
        } else {
            Some(combined)
        }
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_terms(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}
