//! Domain models for brdoc
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Uf`] - A federative unit
//! - [`DocumentKind`] - Which document a strategy handles
//! - [`CheckDigitSpec`] - How check digits are derived
//! - [`MaskSpec`] - Where separators go in the masked form
//! - [`Strategy`] - Everything above, for one document

mod check_digit;
mod kind;
mod mask;
mod strategy;
mod uf;

pub use check_digit::{Band, CheckDigitRule, CheckDigitSpec, Remainder, Scheme, Selector};
pub use kind::DocumentKind;
pub use mask::{DIGIT, MaskSpec};
pub use strategy::{Constraint, Strategy};
pub use uf::Uf;
