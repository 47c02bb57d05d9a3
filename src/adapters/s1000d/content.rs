//! Content tree view over a document
//!
//! Elements reference applicability statements through `applicRefId`.

use crate::core::ports::ContentTree;
use crate::document::{Document, NodeId};

use super::applic::REFERENCE;

/// A [`Document`] seen as a [`ContentTree`]
#[derive(Debug)]
pub struct ApplicContent<'d> {
    doc: &'d mut Document,
}

impl<'d> ApplicContent<'d> {
    /// Wrap a document
    pub const fn new(doc: &'d mut Document) -> Self {
        Self { doc }
    }
}

impl ContentTree for ApplicContent<'_> {
    type NodeId = NodeId;

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc.element_children(node).collect()
    }

    fn reference(&self, node: NodeId) -> Option<&str> {
        self.doc.attribute(node, REFERENCE).filter(|id| !id.is_empty())
    }

    fn remove(&mut self, node: NodeId) {
        self.doc.detach(node);
    }

    fn clear_reference(&mut self, node: NodeId) {
        self.doc.remove_attribute(node, REFERENCE);
    }
}
