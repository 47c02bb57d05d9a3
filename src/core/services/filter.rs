//! Content filter - removes or unmarks content by applicability
//!
//! - [`strip`] deletes content whose statement is unambiguously false.
//! - [`clean`] drops references whose statement is unambiguously true.

use crate::core::models::AttributeContext;
use crate::core::ports::ContentTree;

use super::evaluator::evaluate_root;
use super::resolver::StatementIndex;

/// Delete every fragment under `node` (inclusive) that cannot apply
///
/// Pre-order: a removed node's subtree is not visited. Unresolved references
/// place no constraint. Returns the number of fragments removed.
pub fn strip<T, P>(
    index: &StatementIndex<'_, P>,
    ctx: &AttributeContext,
    tree: &mut T,
    node: T::NodeId,
) -> usize
where
    T: ContentTree,
{
    if let Some(reference) = tree.reference(node) {
        if let Some(statement) = index.resolve(reference) {
            if !evaluate_root(statement.root.as_ref(), ctx, true) {
                log::debug!("removing content not applicable under {}", statement.id);
                tree.remove(node);
                return 1;
            }
        }
    }

    tree.children(node).into_iter().map(|child| strip(index, ctx, tree, child)).sum()
}

/// Drop references under `node` (inclusive) that always hold
///
/// Nothing is deleted. Returns the number of references removed.
pub fn clean<T, P>(
    index: &StatementIndex<'_, P>,
    ctx: &AttributeContext,
    tree: &mut T,
    node: T::NodeId,
) -> usize
where
    T: ContentTree,
{
    let mut cleaned = 0;

    if let Some(reference) = tree.reference(node) {
        if let Some(statement) = index.resolve(reference) {
            if evaluate_root(statement.root.as_ref(), ctx, false) {
                log::debug!("dropping reference to {}, always applicable", statement.id);
                tree.clear_reference(node);
                cleaned += 1;
            }
        }
    }

    cleaned
        + tree.children(node).into_iter().map(|child| clean(index, ctx, tree, child)).sum::<usize>()
}
