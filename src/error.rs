//! Error types
//!
//! Validation failures are ordinary outcomes and are reported as
//! [`ValidationError`]; [`DocumentError`] covers contract violations by the
//! caller and a failing randomness source.

use thiserror::Error;

use crate::core::models::DocumentKind;

/// Why a value is not a valid document number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No digits at all
    #[error("empty value")]
    Empty,

    /// Wrong number of digits after stripping separators
    #[error("expected {expected} digits, found {found}")]
    Length {
        /// Digits the document requires
        expected: usize,
        /// Digits the value has
        found: usize,
    },

    /// Every digit is the same
    #[error("all digits are the same")]
    RepeatedDigits,

    /// A fixed fragment (prefix, category) does not match
    #[error("digits at position {position} must be one of {allowed}")]
    Constraint {
        /// Zero-based start of the fragment
        position: usize,
        /// Allowed fragments, `|`-separated
        allowed: String,
    },

    /// No check-digit scheme applies to the digits
    #[error("no check-digit rule applies to these digits")]
    NoScheme,

    /// A check digit does not match the computed one
    #[error("check digit at position {position} should be {expected}, found {found}")]
    CheckDigit {
        /// Zero-based position of the check digit
        position: usize,
        /// Computed digit
        expected: u8,
        /// Digit in the value
        found: u8,
    },
}

/// Errors from masking and generation
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The value is not a canonical number of the required length
    #[error("invalid format for {kind}: expected {expected} digits, got {found:?}")]
    InvalidFormat {
        /// Document being formatted
        kind: DocumentKind,
        /// Digits the document requires
        expected: usize,
        /// The rejected input
        found: String,
    },

    /// The strategy has no check-digit scheme for the drawn digits
    #[error("no check-digit rule of {kind} applies to the generated digits")]
    NoScheme {
        /// Document being generated
        kind: DocumentKind,
    },

    /// The randomness source failed
    #[error("randomness source failed: {0}")]
    Randomness(#[from] rand::Error),

    /// A document tag or UF code that names no strategy
    #[error("{0}")]
    UnknownKind(String),
}
