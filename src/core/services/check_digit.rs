//! Check-digit engine
//!
//! Weighted sums and remainder mapping shared by every document. Inputs are
//! already canonical (one `u8` per digit, each in `0..=9`); nothing here
//! fails.

use crate::core::models::{CheckDigitRule, Remainder};

/// Sum of `digits[i] * weights[i]`.
///
/// With `fold`, each product is replaced by the sum of its decimal digits
/// first. Extra weights past the end of `digits` are ignored.
#[must_use]
pub fn weighted_sum(digits: &[u8], weights: &[u32], fold: bool) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| {
            let product = u32::from(d) * w;
            if fold { digit_sum(product) } else { product }
        })
        .sum()
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Integer value of a digit slice, saturating on overflow
#[must_use]
pub fn base_number(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Compute one check digit over `digits`.
///
/// `previous_overflowed` is the overflow flag of the rule evaluated just
/// before this one. Returns the digit and this rule's own overflow flag.
#[must_use]
pub fn rule_digit(rule: &CheckDigitRule, digits: &[u8], previous_overflowed: bool) -> (u8, bool) {
    let mut remainder = rule.remainder;
    let mut sum = weighted_sum(digits, rule.weights, remainder.folds());

    if !rule.bands.is_empty() {
        let base = base_number(&digits[..rule.position.min(digits.len())]);
        if let Some(band) = rule.bands.iter().find(|b| b.contains(base)) {
            sum += band.offset;
            if let Remainder::Complement11 { .. } = remainder {
                remainder = Remainder::Complement11 {
                    on_zero: band.on_zero,
                    on_one: band.on_one,
                };
            }
        }
    }

    remainder.digit(sum, previous_overflowed)
}

/// Evaluate `rules` in order, writing each check digit at its position.
///
/// Later rules see the digits written by earlier ones. Positions outside
/// `digits` are skipped.
pub fn fill(digits: &mut [u8], rules: &[CheckDigitRule]) {
    let mut overflowed = false;
    for rule in rules {
        let (digit, flag) = rule_digit(rule, digits, overflowed);
        if let Some(slot) = digits.get_mut(rule.position) {
            *slot = digit;
        }
        overflowed = flag;
    }
}

/// The check digits `rules` produce for `digits`, in rule order.
///
/// `digits` is left untouched; the values currently at the check positions
/// are ignored.
#[must_use]
pub fn compute(digits: &[u8], rules: &[CheckDigitRule]) -> Vec<u8> {
    let mut work = digits.to_vec();
    fill(&mut work, rules);
    rules
        .iter()
        .filter_map(|rule| work.get(rule.position).copied())
        .collect()
}
