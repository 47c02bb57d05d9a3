//! Statement simplifier
//!
//! Removes the parts of a statement group that no longer say anything once
//! the declared properties are known: statements that always hold, statements
//! that can never hold, and AND/OR nodes left with fewer than two operands.

use serde::Serialize;

use crate::core::models::{AttributeContext, Statement, StatementGroup};

use super::evaluator::{is_unambiguously_false, is_unambiguously_true};

/// What a simplification pass removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimplifyReport {
    /// Named statements deleted from the group
    pub statements_removed: usize,
    /// Assertions and combinations deleted inside surviving statements
    pub nodes_removed: usize,
    /// Combinations replaced by their only remaining child
    pub combinations_collapsed: usize,
    /// Whether the group is empty afterwards and its container should go
    pub group_empty: bool,
}

/// True when a statement carries no information: it is either always
/// satisfied or never satisfiable under the declared properties
fn is_decided(statement: &Statement, ctx: &AttributeContext) -> bool {
    is_unambiguously_true(statement, ctx) || is_unambiguously_false(statement, ctx)
}

/// Simplify every statement of a group in place
///
/// Named statements whose whole statement is decided are deleted; a named
/// statement without a root is kept since it never decides anything.
pub fn simplify<P>(group: &mut StatementGroup<P>, ctx: &AttributeContext) -> SimplifyReport {
    let mut report = SimplifyReport::default();

    group.statements.retain_mut(|named| {
        let Some(root) = named.root.take() else {
            return true;
        };

        if is_decided(&root, ctx) {
            log::debug!("removing statement {}: decided by declared properties", named.id);
            report.statements_removed += 1;
            return false;
        }

        named.root = simplify_node(root, ctx, &mut report);
        true
    });

    report.group_empty = group.is_empty();
    report
}

/// Simplify a group and report whether its container should be deleted
pub fn simplify_clean<P>(group: &mut StatementGroup<P>, ctx: &AttributeContext) -> SimplifyReport {
    let report = simplify(group, ctx);
    if report.group_empty {
        log::debug!("statement group is empty after simplification");
    }
    report
}

/// Post-order simplification of one statement node
///
/// Returns `None` when the node is deleted.
fn simplify_node(
    statement: Statement,
    ctx: &AttributeContext,
    report: &mut SimplifyReport,
) -> Option<Statement> {
    if is_decided(&statement, ctx) {
        report.nodes_removed += 1;
        return None;
    }

    match statement {
        Statement::Assertion(assertion) => Some(Statement::Assertion(assertion)),
        Statement::Combination(mut combination) => {
            let children = std::mem::take(&mut combination.children);
            combination.children = children
                .into_iter()
                .filter_map(|child| simplify_node(child, ctx, report))
                .collect();

            match combination.children.len() {
                0 => {
                    report.nodes_removed += 1;
                    None
                },
                1 => {
                    report.combinations_collapsed += 1;
                    combination.children.pop()
                },
                _ => Some(Statement::Combination(combination)),
            }
        },
    }
}
