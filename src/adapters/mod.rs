//! Adapters between the applicability core and concrete documents
//!
//! - `s1000d/` - Data modules and publication modules: statement lifting,
//!   content filtering and instance rewriting
//! - `pct` - Product cross-reference tables as a source of declarations

pub mod pct;
pub mod s1000d;
