//! The [`Document`] implementation shared by every strategy

use rand::RngCore;

use super::{check_digit, generator, transform};
use crate::core::models::Strategy;
use crate::core::ports::Document;
use crate::error::{DocumentError, ValidationError};

impl Strategy {
    /// Validate already-extracted digits
    pub fn validate_digits(&self, digits: &[u8]) -> Result<(), ValidationError> {
        if digits.is_empty() {
            return Err(ValidationError::Empty);
        }

        if digits.len() != self.digits {
            return Err(ValidationError::Length {
                expected: self.digits,
                found: digits.len(),
            });
        }

        if self.reject_repeated && digits.iter().all(|&d| d == digits[0]) {
            return Err(ValidationError::RepeatedDigits);
        }

        if let Some(constraint) = self.constraints.iter().find(|c| !c.matches(digits)) {
            return Err(ValidationError::Constraint {
                position: constraint.position,
                allowed: constraint.describe(),
            });
        }

        let scheme = self
            .check_digits
            .scheme_for(digits)
            .ok_or(ValidationError::NoScheme)?;

        let expected = check_digit::compute(digits, scheme.rules);
        for (rule, expected) in scheme.rules.iter().zip(expected) {
            let found = digits[rule.position];
            if found != expected {
                return Err(ValidationError::CheckDigit {
                    position: rule.position,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    fn invalid_format(&self, value: &str) -> DocumentError {
        DocumentError::InvalidFormat {
            kind: self.kind,
            expected: self.digits,
            found: value.to_string(),
        }
    }
}

impl Document for Strategy {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self.validate_digits(&transform::digits_of(value))
    }

    fn mask(&self, value: &str) -> Result<String, DocumentError> {
        if self.mask.digit_count() != self.digits {
            return Err(self.invalid_format(value));
        }
        transform::mask(value, &self.mask).ok_or_else(|| self.invalid_format(value))
    }

    fn unmask(&self, value: &str) -> String {
        transform::unmask(value)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, DocumentError> {
        let digits = generator::generate_digits(self, rng)?;
        Ok(transform::render(&digits))
    }
}
