//! Document strategies
//!
//! A [`Strategy`] is the complete, static description of one document:
//! its length, check digits, mask and the fixed fragments its numbers must
//! carry. Strategies are plain data; the operations live in
//! [`crate::core::services`] behind the [`crate::core::ports::Document`] trait.

use super::{CheckDigitSpec, DocumentKind, MaskSpec};

/// Fragments allowed at a fixed position
///
/// Used for state prefixes (`"01"` for AC), company-type digits (AL) and
/// category codes (TO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// Zero-based start of the fragment
    pub position: usize,
    /// Allowed fragments, all of the same length
    pub options: &'static [&'static str],
}

impl Constraint {
    /// Whether `digits` carries one of the allowed fragments
    #[must_use]
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.options.iter().any(|option| {
            option.len() + self.position <= digits.len()
                && option
                    .bytes()
                    .zip(&digits[self.position..])
                    .all(|(c, &d)| c == b'0' + d)
        })
    }

    /// Description for error messages, e.g. `"01"` or `"10|11|15"`
    #[must_use]
    pub fn describe(&self) -> String {
        self.options.join("|")
    }
}

/// Static description of one document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    /// Which document this is
    pub kind: DocumentKind,
    /// Length of the canonical form
    pub digits: usize,
    /// How the check digits are computed
    pub check_digits: CheckDigitSpec,
    /// Separator layout of the masked form
    pub mask: MaskSpec,
    /// Fixed fragments every valid number carries
    pub constraints: &'static [Constraint],
    /// Reject numbers made of a single repeated digit
    pub reject_repeated: bool,
}

impl Strategy {
    /// Which document this is
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Length of the canonical form
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digits
    }

    /// Number of check digits
    #[must_use]
    pub fn check_digit_count(&self) -> usize {
        self.check_digits.count()
    }
}
