//! Check-digit specifications
//!
//! Every document computes its check digits the same way: a weighted sum of
//! some of its digits, reduced by a modulus and mapped to a single digit.
//! What differs between documents is data, captured here:
//!
//! - [`CheckDigitRule`] - one check digit: where it sits, which weights
//!   produce it and how the remainder becomes a digit
//! - [`Scheme`] - an ordered list of rules, optionally selected by a digit
//! - [`CheckDigitSpec`] - the schemes of one document
//!
//! Rules are evaluated in order and each check digit is written back into
//! the number before the next rule runs, so a weight vector that covers an
//! earlier check digit chains the two (as CPF does).

/// How a weighted sum becomes a check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    /// `11 - (sum % 11)`, with remainders 0 and 1 (which would give 11 and
    /// 10) mapped to `on_zero` and `on_one`
    Complement11 {
        /// Digit used when the sum is a multiple of 11
        on_zero: u8,
        /// Digit used when the remainder is 1
        on_one: u8,
    },
    /// `(10 - sum % 10) % 10`
    Complement10 {
        /// Reduce each product to the sum of its decimal digits before adding
        fold: bool,
    },
    /// `sum % modulus`, two-digit results become 0
    Direct {
        /// Divisor of the weighted sum
        modulus: u32,
        /// Subtracted (mod 11) when the preceding check digit overflowed
        penalty: u32,
    },
}

impl Remainder {
    /// The usual mod-11 rule: `11 - r`, or 0 when that is 10 or 11
    pub const STANDARD: Self = Self::Complement11 {
        on_zero: 0,
        on_one: 0,
    };

    /// Whether products are folded to their digit sum
    #[must_use]
    pub const fn folds(self) -> bool {
        matches!(self, Self::Complement10 { fold: true })
    }

    /// Map a weighted sum to a digit.
    ///
    /// Returns the digit and whether the raw result had two digits, which
    /// a following [`Remainder::Direct`] rule may penalize.
    #[must_use]
    pub const fn digit(self, sum: u32, previous_overflowed: bool) -> (u8, bool) {
        match self {
            Self::Complement11 { on_zero, on_one } => match sum % 11 {
                0 => (on_zero, true),
                1 => (on_one, true),
                r => (as_digit(11 - r), false),
            },
            Self::Complement10 { .. } => (as_digit((10 - sum % 10) % 10), false),
            Self::Direct { modulus, penalty } => {
                let mut r = sum % modulus;
                if previous_overflowed && penalty > 0 {
                    r = (r + 11 - penalty % 11) % 11;
                }
                if r >= 10 { (0, true) } else { (as_digit(r), false) }
            },
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn as_digit(value: u32) -> u8 {
    value as u8
}

/// A range of base numbers with its own adjustments.
///
/// The base number is the integer value of every digit before the rule's
/// check digit. Inside the range `offset` is added to the weighted sum and,
/// for [`Remainder::Complement11`], `on_zero`/`on_one` replace the rule's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First base number in the band
    pub first: u64,
    /// Last base number in the band
    pub last: u64,
    /// Added to the weighted sum
    pub offset: u32,
    /// Digit for remainder 0
    pub on_zero: u8,
    /// Digit for remainder 1
    pub on_one: u8,
}

impl Band {
    /// Whether `base` falls inside the band
    #[must_use]
    pub const fn contains(&self, base: u64) -> bool {
        base >= self.first && base <= self.last
    }
}

/// One check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigitRule {
    /// Zero-based index of the check digit in the full number
    pub position: usize,
    /// `weights[i]` multiplies digit `i`; zero skips the digit
    pub weights: &'static [u32],
    /// Remainder-to-digit mapping
    pub remainder: Remainder,
    /// Base-number ranges with special handling
    pub bands: &'static [Band],
}

impl CheckDigitRule {
    /// A rule with no bands
    #[must_use]
    pub const fn new(position: usize, weights: &'static [u32], remainder: Remainder) -> Self {
        Self {
            position,
            weights,
            remainder,
            bands: &[],
        }
    }

    /// A standard mod-11 rule
    #[must_use]
    pub const fn standard(position: usize, weights: &'static [u32]) -> Self {
        Self::new(position, weights, Remainder::STANDARD)
    }

    /// Attach base-number bands
    #[must_use]
    pub const fn with_bands(mut self, bands: &'static [Band]) -> Self {
        self.bands = bands;
        self
    }
}

/// A digit position whose value chooses a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    /// Zero-based index of the selecting digit
    pub position: usize,
    /// Digits (as ASCII characters) that select the scheme
    pub digits: &'static str,
}

impl Selector {
    /// Whether `digits` selects this scheme
    #[must_use]
    pub fn matches(&self, digits: &[u8]) -> bool {
        digits
            .get(self.position)
            .is_some_and(|&d| self.digits.bytes().any(|c| c == b'0' + d))
    }
}

/// An ordered set of rules, applied when its selector matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    /// `None` applies unconditionally
    pub selector: Option<Selector>,
    /// Rules in evaluation order
    pub rules: &'static [CheckDigitRule],
}

/// All check-digit schemes of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigitSpec {
    /// Tried in order; the first matching scheme wins
    pub schemes: &'static [Scheme],
}

impl CheckDigitSpec {
    /// The scheme that applies to `digits`
    #[must_use]
    pub fn scheme_for(&self, digits: &[u8]) -> Option<&'static Scheme> {
        self.schemes
            .iter()
            .find(|s| s.selector.is_none_or(|sel| sel.matches(digits)))
    }

    /// Positions of the check digits, in evaluation order of the first scheme
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.schemes
            .first()
            .map(|s| s.rules.iter().map(|r| r.position).collect())
            .unwrap_or_default()
    }

    /// Number of check digits
    #[must_use]
    pub fn count(&self) -> usize {
        self.schemes.first().map_or(0, |s| s.rules.len())
    }
}
