//! XML documents
//!
//! A small arena DOM that keeps everything needed to write a document back
//! out unchanged apart from the edits made to it:
//!
//! - [`tree`] - Nodes, elements and tree surgery
//! - [`reader`] - Parsing with `quick-xml`
//! - [`writer`] - Serialization with `quick-xml`

mod error;
pub mod reader;
pub mod tree;
pub mod writer;

pub use error::DocumentError;
pub use tree::{Declaration, Document, Element, NodeId, NodeKind};
