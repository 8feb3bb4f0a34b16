//! Symbolic expression engine for step-by-step equation rewriting.
//!
//! This crate provides the expression machinery that [`bileq`] builds its both-sides equation
//! type on: expression trees, interpretation of raw values, substitution, LaTeX rendering, and
//! the two explicit reduction passes (simplification and expansion).
//!
//! The engine's one organizing idea is that **nothing reduces unless asked**. The unevaluated
//! constructors in [`expr`] ([`sum`](expr::sum), [`product`](expr::product),
//! [`power`](expr::power), ...) preserve exactly the structure they are given: `2 + 2` stays a
//! two-term sum, `x * a^-1` stays a product, and only an explicit call to
//! [`simplify`](simplify::simplify()) or [`expand`](expand::expand()) is allowed to collapse
//! anything. This is what lets a caller chain transformations and still render every
//! intermediate step the way a person would write it on paper.
//!
//! ```
//! use bileq_engine::expr::{integer, sum};
//! use bileq_engine::simplify::simplify;
//!
//! let written = sum(vec![integer(2), integer(2)]);
//! assert_eq!(written.to_string(), "2 + 2");
//! assert_eq!(simplify(&written), integer(4));
//! ```
//!
//! [`bileq`]: https://docs.rs/bileq

pub mod approx;
pub mod equation;
pub mod error;
pub mod expand;
pub mod expr;
pub mod interpret;
pub mod primitive;
pub mod render;
pub mod simplify;
pub mod substitute;
pub mod symbol;

pub use equation::Equality;
pub use error::{ConversionError, EngineError};
pub use expand::{expand, expand_with, ExpandOptions};
pub use expr::Expr;
pub use interpret::{interpret, Raw};
pub use render::{latex, latex_expr};
pub use simplify::{
    simplify, simplify_with, simplify_with_steps, SimplifyOptions, Step, StepCollector,
};
pub use substitute::substitute;
pub use symbol::Symbol;
