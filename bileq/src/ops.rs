//! `std::ops` sugar over the named methods.
//!
//! The named methods on [`BilateralEq`] are the real interface: they are what the "identical
//! operation on both sides" contract is stated and tested against. The operators here are a thin
//! convenience layer for operand types whose interpretation cannot fail (expressions and machine
//! integers), so `eq / a` and `k - eq` read the way a derivation is written. Anything fallible
//! (floats, symbol names) goes through the named methods and their `Result`.

use crate::equation::BilateralEq;
use bileq_engine::expr::{integer, Expr};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $delegate:ident) => {
        impl $trait<Expr> for BilateralEq {
            type Output = BilateralEq;

            fn $method(self, operand: Expr) -> BilateralEq {
                self.$delegate(&operand)
            }
        }

        impl $trait<&Expr> for BilateralEq {
            type Output = BilateralEq;

            fn $method(self, operand: &Expr) -> BilateralEq {
                self.$delegate(operand)
            }
        }

        impl $trait<i64> for BilateralEq {
            type Output = BilateralEq;

            fn $method(self, operand: i64) -> BilateralEq {
                self.$delegate(&integer(operand))
            }
        }
    };
}

forward_binop!(Add, add, add_expr);
forward_binop!(Sub, sub, sub_expr);
forward_binop!(Mul, mul, mul_expr);
forward_binop!(Div, div, div_expr);

/// Reversed placements: the equation on the right-hand side of the operator.
macro_rules! forward_reversed_binop {
    ($trait:ident, $method:ident, $delegate:ident) => {
        impl $trait<BilateralEq> for Expr {
            type Output = BilateralEq;

            fn $method(self, eq: BilateralEq) -> BilateralEq {
                eq.$delegate(&self)
            }
        }

        impl $trait<BilateralEq> for i64 {
            type Output = BilateralEq;

            fn $method(self, eq: BilateralEq) -> BilateralEq {
                eq.$delegate(&integer(self))
            }
        }
    };
}

forward_reversed_binop!(Add, add, radd_expr);
forward_reversed_binop!(Sub, sub, rsub_expr);
forward_reversed_binop!(Mul, mul, rmul_expr);
forward_reversed_binop!(Div, div, rdiv_expr);

impl Neg for BilateralEq {
    type Output = BilateralEq;

    fn neg(self) -> BilateralEq {
        BilateralEq::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use bileq_engine::expr::{integer, product, reciprocal, sum, Expr};
    use bileq_engine::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::BilateralEq;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn operators_match_the_named_methods() {
        let eq = BilateralEq::new(sym("x"), 0).unwrap();

        assert_eq!(eq.clone() + sym("k"), eq.add(sym("k")).unwrap());
        assert_eq!(eq.clone() - sym("k"), eq.sub(sym("k")).unwrap());
        assert_eq!(eq.clone() * sym("k"), eq.mul(sym("k")).unwrap());
        assert_eq!(eq.clone() / sym("k"), eq.div(sym("k")).unwrap());
        assert_eq!(-eq.clone(), eq.neg());
    }

    #[test]
    fn reversed_operators_take_the_other_placement() {
        let eq = BilateralEq::new(sym("x"), 0).unwrap();

        assert_eq!(sym("k") + eq.clone(), eq.radd(sym("k")).unwrap());
        assert_eq!(sym("k") - eq.clone(), eq.rsub(sym("k")).unwrap());
        assert_eq!(5 - eq.clone(), eq.rsub(5).unwrap());
        assert_eq!(sym("k") / eq.clone(), eq.rdiv(sym("k")).unwrap());
    }

    #[test]
    fn integer_operands_interpret_directly() {
        let eq = BilateralEq::new(sym("x"), 0).unwrap() + 3;
        assert_eq!(eq.lhs(), &sum(vec![sym("x"), integer(3)]));
    }

    #[test]
    fn division_sugar_builds_the_reciprocal() {
        let eq = BilateralEq::new(sym("x"), 1).unwrap() / sym("a");
        assert_eq!(eq.lhs(), &product(vec![sym("x"), reciprocal(sym("a"))]));
    }
}
