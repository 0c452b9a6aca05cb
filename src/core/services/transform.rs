//! Mask and unmask transforms
//!
//! `unmask(mask(x)) == x` for every canonical `x`, and
//! `mask(unmask(y)) == y` for every `y` already in masked form.

use crate::core::models::{DIGIT, MaskSpec};

/// Keep only ASCII digits, in order
#[must_use]
pub fn unmask(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Digits of `value` as numbers, ignoring everything else
#[must_use]
pub fn digits_of(value: &str) -> Vec<u8> {
    value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Render digits back to a string
#[must_use]
pub fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Whether `value` is exactly `len` ASCII digits
#[must_use]
pub fn is_canonical(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Splice the mask's separators into a canonical value.
///
/// Returns `None` unless `value` is exactly as many ASCII digits as the
/// mask has slots.
#[must_use]
pub fn mask(value: &str, spec: &MaskSpec) -> Option<String> {
    if !is_canonical(value, spec.digit_count()) {
        return None;
    }

    let mut digits = value.chars();
    let mut out = String::with_capacity(spec.pattern().len());
    for c in spec.pattern().chars() {
        if c == DIGIT {
            out.push(digits.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}
