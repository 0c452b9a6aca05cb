//! Port traits (interfaces)
//!
//! The capability contract shared by every document kind. Strategies are
//! data; the single implementation of [`Document`] lives in
//! [`crate::core::services`].

mod document;

pub use document::Document;
