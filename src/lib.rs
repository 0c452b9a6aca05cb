//! brdoc - Validate, generate and format Brazilian document numbers
//!
//! This library implements the check-digit rules, masks and generators for
//! CNH, CPF, CNPJ and the state tax registration (IE) of every federative
//! unit. Strategies are static data behind a single
//! [`core::ports::Document`] trait.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod documents;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::core::models::{DocumentKind, Strategy, Uf};
pub use crate::core::ports::Document;
pub use crate::error::{DocumentError, ValidationError};
