//! Display masks
//!
//! A mask is a pattern where `#` stands for one digit and every other
//! character is a literal separator, e.g. `###.###.###-##` for CPF.

/// Placeholder for a digit in a mask pattern
pub const DIGIT: char = '#';

/// Separator layout of a document's masked form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSpec {
    pattern: &'static str,
}

impl MaskSpec {
    /// Create a mask from its pattern
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// The pattern string
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digit slots in the pattern
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.pattern.chars().filter(|&c| c == DIGIT).count()
    }

    /// `(index, literal)` pairs, where `index` is the offset of the literal
    /// in the masked output, left to right
    pub fn separators(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.pattern
            .chars()
            .enumerate()
            .filter(|&(_, c)| c != DIGIT)
    }
}

impl std::fmt::Display for MaskSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern)
    }
}
