//! Strategy registry
//!
//! Static, read-only lookup from a [`DocumentKind`] (or its textual tag) to
//! the strategy that handles it.
//!
//! # Examples
//!
//! ```
//! use brdoc::core::models::{DocumentKind, Uf};
//! use brdoc::core::ports::Document;
//! use brdoc::documents;
//!
//! let mg = documents::strategy(DocumentKind::Ie(Uf::Mg));
//! assert_eq!(mg.mask("0623079040081").unwrap(), "062.307.904/0081");
//! assert!(mg.is_valid("062.307.904/0081"));
//!
//! let cnh = documents::lookup("cnh").unwrap();
//! assert!(cnh.is_valid("76035184470"));
//! ```

mod national;
mod state;

pub use national::{CNH, CNPJ, CPF};
pub use state::IE;

use crate::core::models::{DocumentKind, Strategy, Uf};
use crate::error::DocumentError;

/// The strategy for `kind`
#[must_use]
pub fn strategy(kind: DocumentKind) -> &'static Strategy {
    match kind {
        DocumentKind::Cnh => &CNH,
        DocumentKind::Cpf => &CPF,
        DocumentKind::Cnpj => &CNPJ,
        DocumentKind::Ie(uf) => &IE[uf.index()],
    }
}

/// The strategy for a tag such as `cpf`, `IE-SP` or `mg`
#[must_use]
pub fn lookup(tag: &str) -> Option<&'static Strategy> {
    tag.parse::<DocumentKind>().ok().map(strategy)
}

/// Like [`lookup`], reporting unknown tags as [`DocumentError::UnknownKind`]
pub fn resolve(tag: &str) -> Result<&'static Strategy, DocumentError> {
    tag.parse::<DocumentKind>()
        .map(strategy)
        .map_err(DocumentError::UnknownKind)
}

/// Every strategy: the national documents, then one IE per UF
pub fn all() -> impl Iterator<Item = &'static Strategy> {
    [&CNH, &CPF, &CNPJ]
        .into_iter()
        .chain(Uf::ALL.into_iter().map(|uf| &IE[uf.index()]))
}
