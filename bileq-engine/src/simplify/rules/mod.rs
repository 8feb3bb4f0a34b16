//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes the expression to simplify, and returns `Some(expr)` with
//! the rewritten expression if the rule applies, or `None` if it does not. Rules only look at the
//! node they are handed (recursing into children is the driver's job), and every rule reports
//! what it did to the given [`StepCollector`].

pub mod add;
pub mod distribute;
pub mod multiply;
pub mod power;

use crate::expr::Expr;
use crate::simplify::step::{Step, StepCollector};

/// Facts the rules are allowed to assume beyond what the expression itself proves. Derived from
/// the caller's simplification options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext {
    /// Permit cancellations like `x * x^-1 = 1` even when the base is not provably nonzero.
    pub inverse: bool,
}

/// If the expression is an addition node, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(terms) = expr {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a multiplication node, calls the given transformation function with the
/// factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// If the expression is a power node, calls the given transformation function with the base and
/// exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Exp(base, exp) = expr {
        f(base, exp)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(
    expr: &Expr,
    context: &RuleContext,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, context, step_collector))
        .or_else(|| distribute::all(expr, step_collector))
}
