//! Random canonical-value generator
//!
//! Draws the non-check digits of a strategy uniformly, applies its fixed
//! fragments and appends the check digits. The randomness source is always
//! supplied by the caller.

use rand::RngCore;

use super::check_digit;
use crate::core::models::Strategy;
use crate::error::DocumentError;

/// A uniform value in `0..bound`, by rejection sampling on random bytes.
///
/// `bound` must be in `1..=255`.
pub fn uniform_below(rng: &mut dyn RngCore, bound: u8) -> Result<u8, rand::Error> {
    debug_assert!(bound > 0);
    let bound = u16::from(bound);
    // Largest multiple of `bound` that fits in a byte's range
    let zone = 256 - 256 % bound;
    let mut byte = [0u8; 1];
    loop {
        rng.try_fill_bytes(&mut byte)?;
        let v = u16::from(byte[0]);
        if v < zone {
            return Ok(u8::try_from(v % bound).unwrap_or(0));
        }
    }
}

/// A uniform decimal digit
pub fn random_digit(rng: &mut dyn RngCore) -> Result<u8, rand::Error> {
    uniform_below(rng, 10)
}

/// Generate the digits of a valid number for `strategy`.
///
/// Fails with [`DocumentError::NoScheme`] when no check-digit scheme covers
/// the drawn digits.
pub fn generate_digits(
    strategy: &Strategy,
    rng: &mut dyn RngCore,
) -> Result<Vec<u8>, DocumentError> {
    let checks = strategy.check_digits.positions();
    let mut digits = vec![0u8; strategy.digits];

    loop {
        for (i, slot) in digits.iter_mut().enumerate() {
            if !checks.contains(&i) {
                *slot = random_digit(rng)?;
            }
        }

        for constraint in strategy.constraints {
            if constraint.options.is_empty() {
                continue;
            }
            let bound = u8::try_from(constraint.options.len()).unwrap_or(u8::MAX);
            let pick = uniform_below(rng, bound)?;
            let fragment = constraint.options[usize::from(pick)];
            for (slot, c) in digits[constraint.position..].iter_mut().zip(fragment.bytes()) {
                *slot = c - b'0';
            }
        }

        if !(strategy.reject_repeated && base_is_repeated(&digits, &checks)) {
            break;
        }
    }

    let scheme = strategy
        .check_digits
        .scheme_for(&digits)
        .ok_or(DocumentError::NoScheme {
            kind: strategy.kind,
        })?;
    check_digit::fill(&mut digits, scheme.rules);
    Ok(digits)
}

fn base_is_repeated(digits: &[u8], checks: &[usize]) -> bool {
    let mut base = digits
        .iter()
        .enumerate()
        .filter(|(i, _)| !checks.contains(i))
        .map(|(_, &d)| d);
    base.next()
        .is_none_or(|first| base.all(|d| d == first))
}
