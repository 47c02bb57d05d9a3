//! Core applicability engine
//!
//! This module contains pure logic with no I/O dependencies.
//! The document tree is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`AttributeContext`, `Statement`, `StatementGroup`)
//! - `services/` - Evaluation, filtering and simplification
//! - `ports/` - Trait definitions for the content tree

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ApplicError;
