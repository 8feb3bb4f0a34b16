//! Simplification rules for powers.

use crate::expr::{Expr, Primary};
use crate::primitive::int;
use crate::simplify::{
    rules::{do_power, RuleContext},
    step::{Step, StepCollector},
};
use rug::ops::Pow;

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        if exp.as_integer().map(|n| n == &1).unwrap_or(false) {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
///
/// Only fires when the base is provably nonzero, or when the caller opted into inverse
/// cancellation; `0^0` always stays symbolic.
pub fn power_zero(
    expr: &Expr,
    context: &RuleContext,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let exp_is_zero = exp.as_integer().map(|n| n.is_zero()).unwrap_or(false);
        let base_is_zero = base.as_integer().map(|n| n.is_zero()).unwrap_or(false)
            || base.as_float().map(|f| f.is_zero()).unwrap_or(false);
        if exp_is_zero && !base_is_zero && (context.inverse || base.is_known_nonzero()) {
            Some(Expr::Primary(Primary::Integer(int(1))))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`, for integer `b` and `c`.
pub fn power_of_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let outer = exp.as_integer()?;
        if let Expr::Exp(inner_base, inner_exp) = base {
            let inner = inner_exp.as_integer()?;
            return Some(Expr::Exp(
                inner_base.clone(),
                Box::new(Expr::Primary(Primary::Integer(int(inner * outer)))),
            ));
        }

        None
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// Evaluates integer powers of numbers.
///
/// `2^3 = 8`
/// `2^-3 = 8^-1` (the canonical denominator shape)
/// `0^0` and `0^-n` are left symbolic.
pub fn evaluate_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let base = base.as_integer()?;
        let exp = exp.as_integer()?;

        // exponents 0 and 1 belong to the rules above; keeping them out of this one also keeps
        // the canonical b^-1 shape from being rewritten forever
        if *exp == 0 || *exp == 1 || *exp == -1 && *base != 1 && *base != -1 {
            return None;
        }

        if *exp > 0 {
            let magnitude = exp.to_u32()?;
            Some(Expr::Primary(Primary::Integer(base.pow(magnitude).into())))
        } else if base.is_zero() {
            // 0^0 and division by zero stay symbolic
            None
        } else {
            let magnitude = exp.clone().abs().to_u32()?;
            let power = Expr::Primary(Primary::Integer(base.pow(magnitude).into()));
            if *base == 1 || *base == -1 {
                Some(power)
            } else {
                Some(Expr::Exp(
                    Box::new(power),
                    Box::new(Expr::Primary(Primary::Integer(int(-1)))),
                ))
            }
        }
    })?;

    step_collector.push(Step::EvaluatePower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(
    expr: &Expr,
    context: &RuleContext,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    power_one(expr, step_collector)
        .or_else(|| power_zero(expr, context, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
        .or_else(|| evaluate_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::expr::{integer, power, reciprocal, Expr};
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn first_power_unwraps() {
        let expr = power(sym("x"), integer(1));
        assert_eq!(power_one(&expr, &mut ()), Some(sym("x")));
    }

    #[test]
    fn zeroth_power_needs_a_nonzero_base() {
        let context = RuleContext::default();

        let unknown = power(sym("x"), integer(0));
        assert_eq!(power_zero(&unknown, &context, &mut ()), None);

        let nonzero = power(Symbol::new("k").unwrap().nonzero().into(), integer(0));
        assert_eq!(power_zero(&nonzero, &context, &mut ()), Some(integer(1)));

        // the inverse option waives the proof obligation
        let inverse = RuleContext { inverse: true };
        assert_eq!(power_zero(&unknown, &inverse, &mut ()), Some(integer(1)));
    }

    #[test]
    fn zero_to_the_zero_stays_symbolic() {
        let expr = power(integer(0), integer(0));

        // not even the inverse option evaluates 0^0
        let context = RuleContext { inverse: true };
        assert_eq!(power_zero(&expr, &context, &mut ()), None);

        let context = RuleContext::default();
        assert_eq!(all(&expr, &context, &mut ()), None);
    }

    #[test]
    fn integer_powers_evaluate() {
        let expr = power(integer(2), integer(10));
        assert_eq!(evaluate_power(&expr, &mut ()), Some(integer(1024)));
    }

    #[test]
    fn negative_powers_normalize_to_reciprocals() {
        let expr = power(integer(2), integer(-2));
        assert_eq!(evaluate_power(&expr, &mut ()), Some(reciprocal(integer(4))));

        // already canonical
        let expr = reciprocal(integer(4));
        assert_eq!(evaluate_power(&expr, &mut ()), None);

        // 0^-1 stays symbolic
        let expr = reciprocal(integer(0));
        assert_eq!(evaluate_power(&expr, &mut ()), None);
    }

    #[test]
    fn power_towers_fold_integer_exponents() {
        let expr = power(power(sym("a"), integer(2)), integer(-1));
        assert_eq!(
            power_of_power(&expr, &mut ()),
            Some(power(sym("a"), integer(-2))),
        );
    }
}
