//! Core domain logic for brdoc
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Strategy, CheckDigitSpec, MaskSpec, Uf)
//! - `services/` - Check-digit engine, transforms, generator
//! - `ports/` - The [`ports::Document`] capability trait

pub mod models;
pub mod ports;
pub mod services;
