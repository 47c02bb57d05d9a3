//! Content tree port
//!
//! Defines what the content filter needs from a document tree.

/// A mutable tree of content nodes that may reference statements
///
/// Implementations must keep node handles valid after [`remove`] and
/// [`clear_reference`]; the filter keeps handles to siblings of removed nodes.
///
/// [`remove`]: ContentTree::remove
/// [`clear_reference`]: ContentTree::clear_reference
pub trait ContentTree {
    /// Handle to a node
    type NodeId: Copy;

    /// Children of a node, in document order
    ///
    /// Returned as an owned snapshot so the caller can mutate while iterating.
    fn children(&self, node: Self::NodeId) -> Vec<Self::NodeId>;

    /// The statement identifier a node references, if any
    fn reference(&self, node: Self::NodeId) -> Option<&str>;

    /// Detach a node and its subtree from the tree
    fn remove(&mut self, node: Self::NodeId);

    /// Drop a node's statement reference, keeping the node
    fn clear_reference(&mut self, node: Self::NodeId);
}
