//! Product cross-reference tables
//!
//! A PCT lists products, each as a set of `assign` elements giving a value
//! for one property. Loading a product yields the definitions to declare.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Definition;
use crate::document::{Document, DocumentError, NodeId};

const PRODUCT: &str = "product";
const ASSIGN: &str = "assign";
const IDENT: &str = "applicPropertyIdent";
const TYPE: &str = "applicPropertyType";
const VALUE: &str = "applicPropertyValue";

/// Errors reading a PCT
#[derive(Debug, Error)]
pub enum PctError {
    /// The PCT could not be read or parsed
    #[error("PCT {path}: {source}")]
    Document {
        /// PCT file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: DocumentError,
    },

    /// No product with the id, or the product assigns nothing
    #[error("no product '{product}' in PCT {path}")]
    ProductNotFound {
        /// Product id looked up
        product: String,
        /// PCT file
        path: PathBuf,
    },

    /// An `assign` lacks one of its attributes
    #[error("product '{product}' has an assign without {attribute}")]
    IncompleteAssign {
        /// Product id
        product: String,
        /// Missing attribute
        attribute: &'static str,
    },
}

impl PctError {
    /// Whether the PCT file itself does not exist
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            Self::Document {
                source: DocumentError::Io { source, .. },
                ..
            } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Read the definitions of one product from a PCT file
///
/// # Errors
///
/// See [`PctError`].
pub fn load_product(path: &Path, product: &str) -> Result<Vec<Definition>, PctError> {
    let doc = Document::load(path).map_err(|source| PctError::Document {
        path: path.to_path_buf(),
        source,
    })?;

    let definitions = product_definitions(&doc, product)?;
    if definitions.is_empty() {
        return Err(PctError::ProductNotFound {
            product: product.to_string(),
            path: path.to_path_buf(),
        });
    }

    log::info!("loaded {} assignments for product {product}", definitions.len());
    Ok(definitions)
}

/// Definitions of one product in a parsed PCT, empty if the product is absent
///
/// # Errors
///
/// Returns [`PctError::IncompleteAssign`] for an `assign` missing an attribute.
pub fn product_definitions(doc: &Document, product: &str) -> Result<Vec<Definition>, PctError> {
    let Some(node) = doc.find_descendant(doc.document_node(), |el| {
        el.name == PRODUCT && el.value("id").as_deref() == Some(product)
    }) else {
        return Ok(Vec::new());
    };

    doc.element_children(node)
        .filter(|&c| doc.is_element(c, ASSIGN))
        .map(|assign| read_assign(doc, assign, product))
        .collect()
}

fn read_assign(doc: &Document, assign: NodeId, product: &str) -> Result<Definition, PctError> {
    let attribute = |name: &'static str| {
        doc.value(assign, name).ok_or_else(|| PctError::IncompleteAssign {
            product: product.to_string(),
            attribute: name,
        })
    };
    Ok(Definition::new(attribute(IDENT)?, attribute(TYPE)?, attribute(VALUE)?))
}
