//! Errors raised while instantiating a module

use thiserror::Error;

use crate::core::ApplicError;

/// Structural problems with a data module or publication module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// A required element is absent
    #[error("element {parent} missing child element {child}")]
    MissingElement {
        /// Element that should contain the child
        parent: String,
        /// Name of the missing element
        child: String,
    },

    /// An applicability statement cannot be evaluated
    #[error(transparent)]
    Applic(#[from] ApplicError),
}

impl InstanceError {
    pub(crate) fn missing(parent: &str, child: &str) -> Self {
        Self::MissingElement {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }
}
