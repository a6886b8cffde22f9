//! Error types for numkern

use std::fmt;
use thiserror::Error;

/// Result type alias using numkern's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of arithmetic failure detected for a single element pair
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticErrorKind {
    /// Result does not fit the element type
    Overflow,
    /// Result is not defined for the element type (fractional integer power,
    /// zero to a negative power, negative float base to a fractional power)
    DomainError,
    /// Result is not finite because an input already was
    NonFinite,
}

impl ArithmeticErrorKind {
    /// Short name for display (e.g., "overflow")
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::DomainError => "domain error",
            Self::NonFinite => "non-finite result",
        }
    }
}

impl fmt::Display for ArithmeticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur in numkern operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand or output dtype disagreement, or an incompatible scalar
    #[error("Type mismatch: {detail}")]
    TypeMismatch {
        /// What disagreed
        detail: String,
    },

    /// Operand or output length disagreement
    #[error("Length mismatch: {detail}")]
    LengthMismatch {
        /// What disagreed
        detail: String,
    },

    /// Invalid call shape or configuration
    #[error("Usage error: {detail}")]
    UsageError {
        /// What was wrong with the call
        detail: String,
    },

    /// Arithmetic failure at one element under the strict policy
    #[error("Arithmetic failure at index {index}: {kind}")]
    ArithmeticFailure {
        /// Index of the failing element
        index: usize,
        /// Classified failure
        kind: ArithmeticErrorKind,
    },
}

impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch(detail: impl Into<String>) -> Self {
        Self::TypeMismatch {
            detail: detail.into(),
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(detail: impl Into<String>) -> Self {
        Self::LengthMismatch {
            detail: detail.into(),
        }
    }

    /// Create a usage error
    pub fn usage(detail: impl Into<String>) -> Self {
        Self::UsageError {
            detail: detail.into(),
        }
    }

    /// Create an arithmetic failure error
    pub fn arithmetic(index: usize, kind: ArithmeticErrorKind) -> Self {
        Self::ArithmeticFailure { index, kind }
    }

    /// Returns true if the math failed for an element, as opposed to the
    /// inputs being invalid
    #[inline]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::ArithmeticFailure { .. })
    }

    /// Failing index and kind for arithmetic failures
    pub fn arithmetic_kind(&self) -> Option<(usize, ArithmeticErrorKind)> {
        match self {
            Self::ArithmeticFailure { index, kind } => Some((*index, *kind)),
            _ => None,
        }
    }
}
