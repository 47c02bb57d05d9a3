//! Errors raised by the applicability engine

use thiserror::Error;

/// Structural faults in logical statements
///
/// These abort processing of the current document. An unresolved reference is
/// not an error: it simply places no constraint on the content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicError {
    /// A combination lacks its operator or names an unknown one
    #[error("malformed statement: {0}")]
    MalformedStatement(String),
}
