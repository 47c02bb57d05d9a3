//! applic - Filter S1000D data modules and publication modules by applicability
//!
//! Creates instances of modules for one product configuration: content that
//! cannot apply is removed, and the applicability markup can be cleaned and
//! simplified.

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

mod cli;
mod commands;

use std::process::ExitCode;

use applic_filter::adapters::pct::PctError;
use applic_filter::adapters::s1000d::InstanceError;
use applic_filter::config::ConfigError;
use applic_filter::core::ApplicError;
use applic_filter::core::models::DefinitionError;
use applic_filter::document::DocumentError;

use commands::CliError;

/// Main entry point for the applic CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("applic: ERROR: {err:#}");
            ExitCode::from(exit_code(&err))
        },
    }
}

/// Exit code for the first recognised error in the chain
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(pct) = cause.downcast_ref::<PctError>() {
            return if pct.is_missing_file() { 2 } else { 4 };
        }
        if cause.is::<DefinitionError>() {
            return 4;
        }
        if cause.is::<ConfigError>() {
            return 7;
        }
        if cause.is::<InstanceError>() || cause.is::<ApplicError>() || cause.is::<DocumentError>() {
            return 6;
        }
    }
    1
}
