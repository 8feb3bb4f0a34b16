//! Walks the completing-the-square derivation of the quadratic formula, printing each step.

use bileq::engine::expr::{fraction, integer, power, product, sum, Expr};
use bileq::engine::Symbol;
use bileq::{BilateralEq, ConversionError};

fn main() -> Result<(), ConversionError> {
    let x = Expr::from(Symbol::new("x")?.nonzero());
    let a = Expr::from(Symbol::new("a")?.nonzero());
    let b = Expr::from(Symbol::new("b")?.nonzero());
    let c = Expr::from(Symbol::new("c")?.nonzero());

    // a*x^2 + b*x + c = 0
    let poly = sum(vec![
        product(vec![a.clone(), power(x.clone(), integer(2))]),
        product(vec![b.clone(), x.clone()]),
        c.clone(),
    ]);
    let eq0 = BilateralEq::equate_zero(poly)?;
    println!("{:?}", eq0);

    // divide both sides by a
    let eq1 = eq0.div(a.clone())?;
    println!("{:?}", eq1);

    // subtract c/a from both sides
    let eq2 = eq1.sub(fraction(c, a.clone()))?;
    println!("{:?}", eq2);

    // add (b/(2a))^2 to both sides, completing the square
    let half_b_over_a = fraction(b, product(vec![integer(2), a]));
    let eq3 = eq2.add(power(half_b_over_a, integer(2)))?;
    println!("{}", eq3.equality());
    println!("{}", eq3.latex());

    // a simplified snapshot, leaving eq3 itself untouched
    let snapshot = eq3.expand().simplify();
    println!("{}", snapshot.latex());

    Ok(())
}
