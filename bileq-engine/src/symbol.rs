//! Named symbols and their assumptions.

use crate::error::ConversionError;

/// A named symbol, such as `x` or `theta`, together with the assumptions attached to it.
///
/// Assumptions are facts the engine is allowed to rely on during simplification. The engine never
/// guesses them: a cancellation such as `x * x^-1 = 1` only fires when the base is known to be
/// nonzero, either through its value or through an assumption declared here.
///
/// Two symbols are equal only if both their names and their assumptions match. Mixing `x` declared
/// nonzero with a plain `x` in one expression therefore produces two distinct symbols; declare a
/// symbol once and clone it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: String,
    nonzero: bool,
    positive: bool,
}

impl Symbol {
    /// Creates a symbol with no assumptions.
    ///
    /// The name must be non-empty, start with an alphabetic character, and contain only
    /// alphanumeric characters, `_`, or `'` after that. Anything else fails with
    /// [`ConversionError::InvalidSymbolName`].
    pub fn new(name: impl Into<String>) -> Result<Self, ConversionError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_alphabetic()
                    && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'')
            },
            None => false,
        };

        if valid {
            Ok(Self { name, nonzero: false, positive: false })
        } else {
            Err(ConversionError::InvalidSymbolName(name))
        }
    }

    /// Declares the symbol nonzero.
    pub fn nonzero(mut self) -> Self {
        self.nonzero = true;
        self
    }

    /// Declares the symbol positive (and thus also nonzero).
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// The symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the symbol is known to be nonzero.
    pub fn is_nonzero(&self) -> bool {
        self.nonzero || self.positive
    }

    /// Whether the symbol is known to be positive.
    pub fn is_positive(&self) -> bool {
        self.positive
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
