//! Port traits for the content being filtered
//!
//! The filter walks and edits content only through [`ContentTree`], so it
//! never sees XML. The S1000D implementation is
//! `adapters::s1000d::ApplicContent`; unit tests use an in-memory tree.

mod content_tree;

pub use content_tree::ContentTree;
