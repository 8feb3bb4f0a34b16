//! The completing-the-square derivation, end to end.

use bileq::engine::expr::{fraction, integer, power, product, sum, Expr};
use bileq::engine::Symbol;
use bileq::BilateralEq;
use pretty_assertions::assert_eq;

fn nonzero(name: &str) -> Expr {
    Expr::from(Symbol::new(name).unwrap().nonzero())
}

/// `b / (2a)`
fn half_b_over_a(a: &Expr, b: &Expr) -> Expr {
    fraction(b.clone(), product(vec![integer(2), a.clone()]))
}

#[test]
fn quadratic_derivation_completes_the_square() {
    let x = nonzero("x");
    let a = nonzero("a");
    let b = nonzero("b");
    let c = nonzero("c");

    // a*x^2 + b*x + c = 0
    let poly = sum(vec![
        product(vec![a.clone(), power(x.clone(), integer(2))]),
        product(vec![b.clone(), x.clone()]),
        c.clone(),
    ]);
    let eq = BilateralEq::equate_zero(poly).unwrap()
        .div(a.clone()).unwrap()
        .sub(fraction(c.clone(), a.clone())).unwrap()
        .add(power(half_b_over_a(&a, &b), integer(2))).unwrap();

    let snapshot = eq.expand().simplify();

    // (x + b/(2a))^2 = (b^2 - 4ac) / (4a^2)
    let target = BilateralEq::new(
        power(
            sum(vec![x.clone(), half_b_over_a(&a, &b)]),
            integer(2),
        ),
        fraction(
            sum(vec![
                power(b.clone(), integer(2)),
                product(vec![integer(-4), a.clone(), c.clone()]),
            ]),
            product(vec![integer(4), power(a.clone(), integer(2))]),
        ),
    ).unwrap().expand().simplify();

    assert_eq!(snapshot, target);
    // both went through the same canonical ordering, so even the rendered text agrees
    assert_eq!(snapshot.latex(), target.latex());
}

#[test]
fn intermediate_steps_stay_legible() {
    let x = nonzero("x");
    let a = nonzero("a");
    let b = nonzero("b");
    let c = nonzero("c");

    let poly = sum(vec![
        product(vec![a.clone(), power(x.clone(), integer(2))]),
        product(vec![b, x]),
        c,
    ]);
    let eq = BilateralEq::equate_zero(poly).unwrap().div(a).unwrap();

    // the division reads "the whole polynomial over a", not a reduced polynomial
    assert_eq!(
        eq.latex(),
        "\\frac{a \\cdot x^{2} + b \\cdot x + c}{a} = \\frac{0}{a}",
    );

    // and the chain state is untouched by rendering or by taking a snapshot
    let before = eq.clone();
    let _ = eq.simplify();
    assert_eq!(eq, before);
}

#[test]
fn derivation_steps_survive_substitution() {
    let x = nonzero("x");
    let a = nonzero("a");

    // x^2 = a, then a -> 9
    let eq = BilateralEq::new(power(x.clone(), integer(2)), a.clone()).unwrap()
        .subs(&[(a, integer(9))]);
    assert_eq!(eq.latex(), "x^{2} = 9");
}
