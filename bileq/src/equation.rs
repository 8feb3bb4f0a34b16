//! The both-sides equation type.

use bileq_engine::equation::Equality;
use bileq_engine::error::{ConversionError, EngineError};
use bileq_engine::expand::{self, ExpandOptions};
use bileq_engine::expr::{self, Expr};
use bileq_engine::interpret::{interpret, Raw};
use bileq_engine::render;
use bileq_engine::simplify::{self, SimplifyOptions};
use bileq_engine::substitute::substitute;

/// An equation whose two sides move together.
///
/// Every operation on a `BilateralEq` applies the **same** operation, with the **same** operand
/// in the **same** position, to the left-hand side and the right-hand side independently, and
/// returns a new equation; the original is never touched. Operands are built into the sides with
/// the engine's unevaluated constructors, so the growing trees keep the exact structure of each
/// step; dividing `a*x^2 + b*x + c = 0` by `a` really reads "the polynomial over `a`", not some
/// silently reduced form. Only [`simplify`](Self::simplify) and [`expand`](Self::expand) reduce,
/// and each returns the reduced snapshot as another new equation.
///
/// ```
/// use bileq::BilateralEq;
///
/// let eq = BilateralEq::new(2, 2)?.add(3)?.add(4)?;
/// assert_eq!(eq.latex(), "2 + 3 + 4 = 2 + 3 + 4");
/// assert_eq!(eq.simplify().latex(), "9 = 9");
/// # Ok::<(), bileq::ConversionError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BilateralEq {
    lhs: Expr,
    rhs: Expr,
}

impl BilateralEq {
    /// Creates an equation from two raw values, interpreting each as an expression.
    pub fn new(
        lhs: impl Into<Raw>,
        rhs: impl Into<Raw>,
    ) -> Result<Self, ConversionError> {
        Ok(Self {
            lhs: interpret(lhs)?,
            rhs: interpret(rhs)?,
        })
    }

    /// Creates an equation whose right-hand side is 0.
    pub fn equate_zero(lhs: impl Into<Raw>) -> Result<Self, ConversionError> {
        Self::new(lhs, 0)
    }

    /// Creates an equation directly from two expressions.
    pub fn from_sides(lhs: Expr, rhs: Expr) -> Self {
        Self { lhs, rhs }
    }

    /// The left-hand side.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    /// Builds the next equation by applying `f` to each side in turn. Every transformation in
    /// this type bottoms out here, which is what makes "identical operation on both sides" a
    /// structural guarantee rather than a convention.
    fn map_sides(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self {
            lhs: f(&self.lhs),
            rhs: f(&self.rhs),
        }
    }

    /// The unevaluated `lhs = rhs` view of the equation. Building it never reduces either side.
    pub fn equality(&self) -> Equality {
        Equality::new(self.lhs.clone(), self.rhs.clone())
    }

    /// Renders the equation as LaTeX. Deterministic for a given pair of sides, and independent
    /// of the `Debug` form.
    pub fn latex(&self) -> String {
        render::latex(&self.equality())
    }

    // ---- both-sides operators ----

    /// `self + operand`: appends the operand to each side as an unevaluated sum.
    pub fn add(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.add_expr(&interpret(operand)?))
    }

    /// `operand + self`: prepends the operand to each side as an unevaluated sum.
    pub fn radd(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.radd_expr(&interpret(operand)?))
    }

    /// `self - operand`: adds the negated operand (`-1 * operand`) to each side.
    pub fn sub(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.sub_expr(&interpret(operand)?))
    }

    /// `operand - self`: adds each negated side (`-1 * side`) to the operand.
    pub fn rsub(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.rsub_expr(&interpret(operand)?))
    }

    /// `self * operand`: appends the operand to each side as an unevaluated product.
    pub fn mul(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.mul_expr(&interpret(operand)?))
    }

    /// `operand * self`: prepends the operand to each side as an unevaluated product.
    pub fn rmul(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.rmul_expr(&interpret(operand)?))
    }

    /// `self / operand`: multiplies each side by the unevaluated reciprocal `operand^-1`.
    ///
    /// Nothing checks the operand against zero, symbolically or otherwise; whether `x / 0` means
    /// anything is the reduction stage's question, and it may well leave it symbolic.
    pub fn div(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.div_expr(&interpret(operand)?))
    }

    /// `operand / self`: multiplies the operand by each side's unevaluated reciprocal, yielding
    /// the equation `operand/lhs = operand/rhs`, **not** the reciprocal of the equation.
    pub fn rdiv(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.rdiv_expr(&interpret(operand)?))
    }

    /// `self ^ operand`: raises each side to the operand.
    ///
    /// Degenerate exponents (`0^0` and friends) are deliberately not screened here either; the
    /// engine leaves them symbolic.
    pub fn pow(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.pow_expr(&interpret(operand)?))
    }

    /// `operand ^ self`: raises the operand to each side, so the sides become exponents.
    pub fn rpow(&self, operand: impl Into<Raw>) -> Result<Self, ConversionError> {
        Ok(self.rpow_expr(&interpret(operand)?))
    }

    /// `-self`: multiplies each side by -1, unevaluated.
    pub fn neg(&self) -> Self {
        self.map_sides(|side| expr::negated(side.clone()))
    }

    /// `+self`: the identity, as a fresh equation with the same sides.
    pub fn pos(&self) -> Self {
        self.map_sides(Clone::clone)
    }

    pub(crate) fn add_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::sum(vec![side.clone(), operand.clone()]))
    }

    pub(crate) fn radd_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::sum(vec![operand.clone(), side.clone()]))
    }

    pub(crate) fn sub_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::sum(vec![side.clone(), expr::negated(operand.clone())]))
    }

    pub(crate) fn rsub_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::sum(vec![operand.clone(), expr::negated(side.clone())]))
    }

    pub(crate) fn mul_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::product(vec![side.clone(), operand.clone()]))
    }

    pub(crate) fn rmul_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::product(vec![operand.clone(), side.clone()]))
    }

    pub(crate) fn div_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| {
            expr::product(vec![side.clone(), expr::reciprocal(operand.clone())])
        })
    }

    pub(crate) fn rdiv_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| {
            expr::product(vec![operand.clone(), expr::reciprocal(side.clone())])
        })
    }

    pub(crate) fn pow_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::power(side.clone(), operand.clone()))
    }

    pub(crate) fn rpow_expr(&self, operand: &Expr) -> Self {
        self.map_sides(|side| expr::power(operand.clone(), side.clone()))
    }

    // ---- engine-delegated transforms ----

    /// Applies the engine's simultaneous structural substitution to each side.
    pub fn subs(&self, replacements: &[(Expr, Expr)]) -> Self {
        self.map_sides(|side| substitute(side, replacements))
    }

    /// Applies an arbitrary expression transform to each side.
    ///
    /// This is the extension point for transforms the operator set does not cover. No reduction
    /// guarantee in either direction: whatever `f` returns is the new side.
    pub fn map_both(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        self.map_sides(f)
    }

    /// Simplifies each side with the engine's defaults. The one transform (with
    /// [`expand`](Self::expand)) whose result is intentionally reduced.
    pub fn simplify(&self) -> Self {
        self.map_sides(|side| simplify::simplify(side))
    }

    /// Simplifies each side with the given options. Options left `None` are absent from the
    /// engine call, not passed as explicit sentinels.
    pub fn simplify_with(&self, options: &SimplifyOptions) -> Self {
        self.map_sides(|side| simplify::simplify_with(side, options))
    }

    /// Expands each side with the engine's defaults.
    pub fn expand(&self) -> Self {
        self.map_sides(|side| expand::expand(side))
    }

    /// Expands each side with the given options. Engine failures (a bad modulus, say) propagate
    /// unchanged; this equation stays valid and reusable when they do.
    pub fn expand_with(&self, options: &ExpandOptions) -> Result<Self, EngineError> {
        Ok(Self {
            lhs: expand::expand_with(&self.lhs, options)?,
            rhs: expand::expand_with(&self.rhs, options)?,
        })
    }
}

/// The diagnostic form `Eq(<lhs>, <rhs>)`, using the engine's plain display rather than the
/// LaTeX renderer.
impl std::fmt::Debug for BilateralEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Eq({}, {})", self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use bileq_engine::expr::{integer, power, product, reciprocal, sum};
    use bileq_engine::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::from(Symbol::new(name).unwrap())
    }

    #[test]
    fn rhs_defaults_to_zero() {
        let eq = BilateralEq::equate_zero(sym("x")).unwrap();
        assert_eq!(eq.rhs(), &integer(0));
    }

    #[test]
    fn from_sides_skips_interpretation() {
        let eq = BilateralEq::from_sides(sym("x"), integer(2));
        assert_eq!(eq, BilateralEq::new(sym("x"), 2).unwrap());
    }

    #[test]
    fn operators_build_unevaluated_nodes() {
        let eq = BilateralEq::new(2, 2).unwrap().add(3).unwrap();
        assert_eq!(eq.lhs(), &sum(vec![integer(2), integer(3)]));
        assert_eq!(eq.rhs(), &sum(vec![integer(2), integer(3)]));
    }

    #[test]
    fn sub_negates_the_operand() {
        let eq = BilateralEq::new(sym("x"), 0).unwrap().sub(sym("y")).unwrap();
        assert_eq!(eq.lhs(), &sum(vec![
            sym("x"),
            product(vec![integer(-1), sym("y")]),
        ]));
    }

    #[test]
    fn div_multiplies_by_the_reciprocal() {
        let eq = BilateralEq::new(sym("x"), 1).unwrap().div(sym("a")).unwrap();
        assert_eq!(eq.lhs(), &product(vec![sym("x"), reciprocal(sym("a"))]));
        assert_eq!(eq.rhs(), &product(vec![integer(1), reciprocal(sym("a"))]));
    }

    #[test]
    fn rdiv_keeps_the_documented_orientation() {
        // 6 / Eq(x, 2) is Eq(6/x, 6/2), not Eq(x/6, 2/6) or an inverted equation
        let eq = BilateralEq::new(sym("x"), 2).unwrap().rdiv(6).unwrap();
        assert_eq!(eq.lhs(), &product(vec![integer(6), reciprocal(sym("x"))]));
        assert_eq!(eq.rhs(), &product(vec![integer(6), reciprocal(integer(2))]));
        assert_eq!(eq.latex(), "\\frac{6}{x} = \\frac{6}{2}");
    }

    #[test]
    fn rpow_puts_the_sides_in_the_exponent() {
        let eq = BilateralEq::new(sym("x"), sym("y")).unwrap().rpow(2).unwrap();
        assert_eq!(eq.lhs(), &power(integer(2), sym("x")));
        assert_eq!(eq.rhs(), &power(integer(2), sym("y")));
    }

    #[test]
    fn pos_is_a_fresh_identity() {
        let eq = BilateralEq::new(sym("x"), 3).unwrap();
        let same = eq.pos();
        assert_eq!(same, eq);
        assert_eq!(same.latex(), eq.latex());
    }

    #[test]
    fn debug_shows_both_sides() {
        let eq = BilateralEq::new(sym("x"), 0).unwrap().add(1).unwrap();
        assert_eq!(format!("{:?}", eq), "Eq(x + 1, 0 + 1)");
    }

    #[test]
    fn conversion_failures_surface_from_construction() {
        assert!(BilateralEq::new(f64::NAN, 0).is_err());
        assert!(BilateralEq::equate_zero("not a name").is_err());
    }

    #[test]
    fn failed_operations_leave_the_equation_usable() {
        let eq = BilateralEq::new(sym("x"), 2).unwrap();
        assert!(eq.add(f64::INFINITY).is_err());
        // the original is untouched and still works
        assert_eq!(eq.add(1).unwrap().latex(), "x + 1 = 2 + 1");
    }
}
