//! S1000D data modules and publication modules
//!
//! - [`applic`] - `applic`/`assert`/`evaluate` markup to and from statements
//! - [`content`] - The document as a content tree keyed by `applicRefId`
//! - [`instance`] - The filtering pipeline for one module

pub mod applic;
pub mod content;
mod error;
pub mod instance;

pub use applic::ApplicOrigin;
pub use content::ApplicContent;
pub use error::InstanceError;
pub use instance::{FilterOptions, FilterStats, Instance, ModuleKind};
