//! Business logic services
//!
//! Pure functions over the models. No I/O; the only side effect is drawing
//! from a caller-supplied randomness source.
//!
//! - [`check_digit`] - Weighted sums and remainder mapping
//! - [`transform`] - Mask and unmask
//! - [`generator`] - Random valid numbers
//! - [`document`] - The [`crate::core::ports::Document`] implementation

pub mod check_digit;
pub mod document;
pub mod generator;
pub mod transform;

pub use check_digit::{compute, fill, weighted_sum};
pub use generator::generate_digits;
pub use transform::{mask, unmask};
