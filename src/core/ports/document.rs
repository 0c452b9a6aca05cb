//! Document capability port
//!
//! Every document kind offers the same five operations. Callers pick a
//! strategy from [`crate::documents`] and talk to it only through this trait.

use rand::RngCore;

use crate::error::{DocumentError, ValidationError};

/// Validate, format and generate numbers of one document kind
pub trait Document {
    /// Check a value, reporting why it is rejected.
    ///
    /// Separators and any other non-digit characters are ignored, so both
    /// canonical and masked forms are accepted.
    fn validate(&self, value: &str) -> Result<(), ValidationError>;

    /// Whether a value is a valid number. Never panics.
    fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }

    /// [`Document::is_valid`] for values that may be absent
    fn is_valid_opt(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| self.is_valid(v))
    }

    /// Insert separators into a canonical value.
    ///
    /// The value must consist of exactly the document's number of digits.
    fn mask(&self, value: &str) -> Result<String, DocumentError>;

    /// Strip every non-digit character
    fn unmask(&self, value: &str) -> String;

    /// A random valid number in canonical form
    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, DocumentError>;

    /// A random valid number in masked form
    fn generate_masked(&self, rng: &mut dyn RngCore) -> Result<String, DocumentError> {
        let value = self.generate(rng)?;
        self.mask(&value)
    }
}
