//! Reporting of the individual rewrites performed during simplification.

/// A single rewrite applied by a simplification rule.
///
/// The variants name the algebraic fact that was used, not the location it was used at; a full
/// trace of locations would require threading paths through every rule for little benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a + (b + c) = a + b + c`
    FlattenTerms,

    /// `a + 0 = a`
    AddZero,

    /// `n*a + m*a = (n + m)*a`
    CombineLikeTerms,

    /// `a * (b * c) = a * b * c`
    FlattenFactors,

    /// `a * 0 = 0`
    MultiplyZero,

    /// `a * 1 = a`
    MultiplyOne,

    /// `2 * 6^-1 = 3^-1`, and numeric coefficient folding in general
    FoldCoefficient,

    /// `a^b * a^c = a^(b + c)`
    CombineLikeFactors,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`, for provably nonzero `a`
    PowerZero,

    /// `2^3 = 8`
    EvaluatePower,

    /// `(a^b)^c = a^(b*c)`, for integer `b` and `c`
    PowerOfPower,

    /// `a*(b + c) = a*b + a*c`
    DistributiveProperty,

    /// `(a*b)^c = a^c * b^c`
    DistributePower,
}

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step; pass it
/// when the result is all that matters. `Vec<Step>` keeps the full trace.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
