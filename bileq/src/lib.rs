//! Apply algebraic operations to both sides of an equation, without simplifying.
//!
//! A [`BilateralEq`] holds the two sides of an equation and moves them together: adding,
//! subtracting, multiplying, dividing, raising to a power, negating, or substituting applies the
//! identical operation with the identical operand to both sides and yields a new equation. Every
//! step is built from unevaluated expression nodes, so the chain reads like a derivation on
//! paper, with each intermediate form keeping the structure you gave it until you ask for a
//! [`simplify`](BilateralEq::simplify) or [`expand`](BilateralEq::expand) snapshot.
//!
//! The expression machinery (interpretation, substitution, LaTeX rendering, reduction) lives in
//! [`bileq_engine`], re-exported here as [`engine`].
//!
//! ```
//! use bileq::BilateralEq;
//! use bileq::engine::expr::{integer, power, product, Expr};
//! use bileq::engine::Symbol;
//!
//! let a = Expr::from(Symbol::new("a")?.nonzero());
//! let x = Expr::from(Symbol::new("x")?);
//!
//! // a*x^2 = 9, divided by a on both sides
//! let poly = product(vec![a.clone(), power(x.clone(), integer(2))]);
//! let eq = BilateralEq::new(poly, 9)?.div(a)?;
//! assert_eq!(eq.latex(), "\\frac{a \\cdot x^{2}}{a} = \\frac{9}{a}");
//! # Ok::<(), bileq::ConversionError>(())
//! ```

pub mod equation;
pub mod ops;

pub use bileq_engine as engine;
pub use bileq_engine::error::{ConversionError, EngineError};
pub use bileq_engine::expand::ExpandOptions;
pub use bileq_engine::simplify::SimplifyOptions;
pub use equation::BilateralEq;
