//! Statement evaluator
//!
//! Evaluates a logical statement against the declared properties. Properties
//! that were never declared are *undefined*; what they evaluate to is chosen
//! by the caller through `assume`:
//!
//! - `assume = true` (optimistic): "could this statement hold?" A `false`
//!   result means the statement is unambiguously false.
//! - `assume = false` (pessimistic): "does this statement hold no matter what
//!   the undefined properties are?" A `true` result means the statement is
//!   unambiguously true.
//!
//! The flag is applied independently at each leaf.

use crate::core::models::{Assertion, AttributeContext, Combination, Operator, Statement};

/// Evaluate a statement
#[must_use]
pub fn evaluate(statement: &Statement, ctx: &AttributeContext, assume: bool) -> bool {
    match statement {
        Statement::Assertion(assertion) => evaluate_assertion(assertion, ctx, assume),
        Statement::Combination(combination) => evaluate_combination(combination, ctx, assume),
    }
}

/// Evaluate an optional statement; no statement is itself an undefined case
#[must_use]
pub fn evaluate_root(root: Option<&Statement>, ctx: &AttributeContext, assume: bool) -> bool {
    root.map_or(assume, |statement| evaluate(statement, ctx, assume))
}

/// Whether a document is applicable at all
///
/// Evaluates the document-level statement optimistically. A document without
/// one is applicable.
#[must_use]
pub fn whole_document_applicable(root: Option<&Statement>, ctx: &AttributeContext) -> bool {
    evaluate_root(root, ctx, true)
}

/// Whether a statement holds regardless of anything left undefined
#[must_use]
pub fn is_unambiguously_true(statement: &Statement, ctx: &AttributeContext) -> bool {
    evaluate(statement, ctx, false)
}

/// Whether a statement cannot hold whatever the undefined properties are
#[must_use]
pub fn is_unambiguously_false(statement: &Statement, ctx: &AttributeContext) -> bool {
    !evaluate(statement, ctx, true)
}

/// Evaluate a single assertion
///
/// A property declared with several values can satisfy the pattern but never
/// unambiguously, so it only matches in optimistic mode.
#[must_use]
pub fn evaluate_assertion(assertion: &Assertion, ctx: &AttributeContext, assume: bool) -> bool {
    if assertion.is_empty() {
        return assume;
    }

    let (Some(ident), Some(kind)) = (assertion.ident.as_deref(), assertion.kind.as_deref()) else {
        return assume;
    };

    let pattern = assertion.values.as_deref().unwrap_or_default();

    match ctx.get(ident, kind) {
        None => assume,
        Some(assignment) if assignment.is_multi_valued() => assume && assignment.matches(pattern),
        Some(assignment) => assignment.matches(pattern),
    }
}

fn evaluate_combination(combination: &Combination, ctx: &AttributeContext, assume: bool) -> bool {
    let mut children = combination.children.iter();
    match combination.operator {
        Operator::And => children.all(|child| evaluate(child, ctx, assume)),
        Operator::Or => children.any(|child| evaluate(child, ctx, assume)),
    }
}
