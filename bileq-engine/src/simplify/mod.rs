//! Reduction of expressions to a canonical form.
//!
//! Simplification is the one operation in the engine that is allowed to rewrite what a caller
//! wrote, and it only ever runs because a caller asked. It works by applying a set of rewrite
//! rules to the expression, bottom-up, until none of them fires anymore, and then arranging the
//! children of every sum and product into one canonical order so the result always renders the
//! same way.
//!
//! Each rule is a function from an expression to `Option<Expr>`: `Some` with the rewritten
//! expression if the rule applies, `None` otherwise. The rule set lives in [`rules`] and covers
//! flattening, dropping identity elements, combining like terms and factors with exact rational
//! coefficient arithmetic, power laws, and distribution. Rules report what they did through a
//! [`StepCollector`], so a caller can ask for the list of algebraic facts used
//! ([`simplify_with_steps`]).
//!
//! # Options
//!
//! [`SimplifyOptions`] carries per-call configuration. Every field is an `Option` that defaults
//! to `None`, meaning "let the engine decide"; the engine's own defaults are applied at the point
//! of use and are not observable as sentinel values. See each field for what `Some` does.

pub(crate) mod fraction;
pub mod rules;
pub mod step;

use crate::approx::approximate_rational;
use crate::expr::{Expr, Primary};
use fraction::{as_rational, rational_to_expr};
use rules::RuleContext;

pub use step::{Step, StepCollector};

/// The default tie-break ratio: a reduction is kept only if the result measures no more than this
/// multiple of the input.
pub const DEFAULT_RATIO: f64 = 1.7;

/// An upper bound on rewrite applications, in case a future rule pair manages to oscillate.
const MAX_REWRITES: usize = 10_000;

/// Per-call configuration for [`simplify_with`].
///
/// A field left as `None` is **absent**: the engine applies its own default, which is not the
/// same thing as passing any particular explicit value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifyOptions {
    /// Keep the reduced expression only if `measure(reduced) <= ratio * measure(input)`.
    /// Engine default: [`DEFAULT_RATIO`].
    pub ratio: Option<f64>,

    /// The complexity measure the ratio test uses. Engine default: [`complexity`].
    pub measure: Option<fn(&Expr) -> usize>,

    /// Convert floats to exact rationals (via continued fractions) before reducing.
    pub rational: Option<bool>,

    /// Permit inverse cancellations like `x * x^-1 = 1` without proof that `x` is nonzero.
    pub inverse: Option<bool>,

    /// Fold fully numeric subtrees to constants before the rule passes run.
    pub doit: Option<bool>,
}

/// The default complexity measure: the number of nodes in the expression tree.
pub fn complexity(expr: &Expr) -> usize {
    expr.post_order_iter().count()
}

/// Simplifies an expression with the engine's defaults.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &SimplifyOptions::default())
}

/// Simplifies an expression with the given options.
pub fn simplify_with(expr: &Expr, options: &SimplifyOptions) -> Expr {
    simplify_impl(expr, options, &mut ())
}

/// Simplifies an expression with the engine's defaults, reporting each rewrite to the given
/// collector.
pub fn simplify_with_steps(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    simplify_impl(expr, &SimplifyOptions::default(), step_collector)
}

fn simplify_impl(
    expr: &Expr,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let measure = options.measure.unwrap_or(complexity);
    let ratio = options.ratio.unwrap_or(DEFAULT_RATIO);
    let context = RuleContext {
        inverse: options.inverse.unwrap_or(false),
    };

    let mut current = expr.clone();
    if options.doit.unwrap_or(false) {
        current = fold_numeric(&current);
    }
    if options.rational.unwrap_or(false) {
        current = rationalize_floats(&current);
    }

    for _ in 0..MAX_REWRITES {
        match rewrite_once(&current, &context, step_collector) {
            Some(next) => current = next,
            None => break,
        }
    }
    let reduced = order(current);

    if (measure(&reduced) as f64) > ratio * (measure(expr) as f64) {
        expr.clone()
    } else {
        reduced
    }
}

/// Applies the first rule that fires anywhere in the tree, children before parents, and returns
/// the rewritten tree. `None` means the expression is fully reduced.
fn rewrite_once(
    expr: &Expr,
    context: &RuleContext,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let rewritten_child = match expr {
        Expr::Primary(_) => None,
        Expr::Add(terms) => {
            rewrite_first_child(terms, context, step_collector).map(Expr::Add)
        },
        Expr::Mul(factors) => {
            rewrite_first_child(factors, context, step_collector).map(Expr::Mul)
        },
        Expr::Exp(base, exp) => rewrite_once(base, context, step_collector)
            .map(|new_base| Expr::Exp(Box::new(new_base), exp.clone()))
            .or_else(|| {
                rewrite_once(exp, context, step_collector)
                    .map(|new_exp| Expr::Exp(base.clone(), Box::new(new_exp)))
            }),
    };

    rewritten_child.or_else(|| rules::all(expr, context, step_collector))
}

fn rewrite_first_child(
    children: &[Expr],
    context: &RuleContext,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Vec<Expr>> {
    for (idx, child) in children.iter().enumerate() {
        if let Some(rewritten) = rewrite_once(child, context, step_collector) {
            let mut new_children = children.to_vec();
            new_children[idx] = rewritten;
            return Some(new_children);
        }
    }

    None
}

/// Recursively sorts the children of sums and products into the canonical arrangement.
fn order(expr: Expr) -> Expr {
    match expr {
        Expr::Primary(_) => expr,
        Expr::Add(terms) => {
            let mut terms = terms.into_iter().map(order).collect::<Vec<_>>();
            terms.sort_by(|a, b| a.canonical_cmp(b));
            Expr::Add(terms)
        },
        Expr::Mul(factors) => {
            let mut factors = factors.into_iter().map(order).collect::<Vec<_>>();
            factors.sort_by(|a, b| a.canonical_cmp(b));
            Expr::Mul(factors)
        },
        Expr::Exp(base, exp) => Expr::Exp(
            Box::new(order(*base)),
            Box::new(order(*exp)),
        ),
    }
}

/// Collapses fully numeric subtrees to constants, leaving everything touching a symbol alone.
fn fold_numeric(expr: &Expr) -> Expr {
    let rebuilt = match expr {
        Expr::Primary(_) => return expr.clone(),
        Expr::Add(terms) => Expr::Add(terms.iter().map(fold_numeric).collect()),
        Expr::Mul(factors) => Expr::Mul(factors.iter().map(fold_numeric).collect()),
        Expr::Exp(base, exp) => Expr::Exp(
            Box::new(fold_numeric(base)),
            Box::new(fold_numeric(exp)),
        ),
    };

    match as_rational(&rebuilt) {
        Some(value) => rational_to_expr(value),
        None => rebuilt,
    }
}

/// Replaces every float with its continued-fraction rational approximation.
fn rationalize_floats(expr: &Expr) -> Expr {
    match expr {
        Expr::Primary(Primary::Float(float)) => rational_to_expr(approximate_rational(float)),
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(terms.iter().map(rationalize_floats).collect()),
        Expr::Mul(factors) => Expr::Mul(factors.iter().map(rationalize_floats).collect()),
        Expr::Exp(base, exp) => Expr::Exp(
            Box::new(rationalize_floats(base)),
            Box::new(rationalize_floats(exp)),
        ),
    }
}
