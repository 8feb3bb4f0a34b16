//! Error types shared by the engine's fallible entry points.

use thiserror::Error;

/// A raw value could not be interpreted as an expression.
///
/// Interpretation accepts a closed set of inputs (see [`crate::interpret::Raw`]); anything inside
/// that set that still cannot become a finite, well-formed expression node fails with one of these
/// variants. The error is propagated to the caller unchanged; nothing in the engine catches or
/// retries it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A float input was NaN or infinite. Expression trees only hold finite numbers.
    #[error("non-finite float cannot be interpreted as an expression")]
    NonFiniteFloat,

    /// A symbol name was empty or contained characters outside the accepted alphabet.
    #[error("`{0}` is not a valid symbol name")]
    InvalidSymbolName(String),
}

/// Any error the engine can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw value could not be interpreted as an expression.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Modular expansion was requested for an expression whose coefficients are not all integers.
    #[error("expansion modulus requires integer coefficients")]
    NonIntegerModulus,

    /// Modular expansion was requested with a modulus of zero.
    #[error("expansion modulus must be nonzero")]
    ZeroModulus,
}

/// Convenience alias for results produced by the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
