//! applic - S1000D applicability filtering
//!
//! Filters data modules and publication modules down to the content that
//! applies to a declared product configuration:
//!
//! - [`core`] - Statements, declared properties, evaluation, strip/clean and
//!   simplification, independent of any document format
//! - [`document`] - A small XML tree that round-trips untouched markup
//! - [`adapters`] - S1000D markup and product cross-reference tables
//! - [`config`] - Configuration file loading
//! - [`output`] - Human and JSON reports

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

pub mod adapters;
pub mod config;
pub mod core;
pub mod document;
pub mod output;
pub mod paths;
