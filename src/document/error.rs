//! Errors raised while loading or saving documents

use std::path::PathBuf;

use thiserror::Error;

/// Document I/O and well-formedness errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The XML is not well-formed
    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute is malformed
    #[error("invalid XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Names and text must be UTF-8
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// An element was still open at end of input
    #[error("element <{0}> is never closed")]
    Unclosed(String),

    /// A closing tag without a matching start tag
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    /// The input has no root element
    #[error("document has no root element")]
    NoRootElement,

    /// IO error reading or writing a document
    #[error("{path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// IO error while serializing
    #[error("io error: {0}")]
    Write(#[from] std::io::Error),
}
