//! Property-based tests for matching and evaluation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use applic_filter::core::models::{AttributeContext, NamedStatement, Statement, StatementGroup};
use applic_filter::core::services::matcher::{is_in_range, is_in_set};
use applic_filter::core::services::{evaluate, simplify};
use proptest::prelude::*;

const IDENTS: [&str; 3] = ["model", "serial", "version"];

fn value() -> impl Strategy<Value = String> {
    "[A-E0-9]{1,2}"
}

fn assertion() -> impl Strategy<Value = Statement> {
    (prop::sample::select(IDENTS.to_vec()), value(), prop::option::of(value())).prop_map(
        |(ident, lo, hi)| {
            let pattern = match hi {
                Some(hi) => format!("{lo}~{hi}"),
                None => lo,
            };
            Statement::assert(ident, "prodattr", &pattern)
        },
    )
}

fn statement() -> impl Strategy<Value = Statement> {
    assertion().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Statement::and),
            prop::collection::vec(inner, 1..4).prop_map(Statement::or),
        ]
    })
}

fn context() -> impl Strategy<Value = AttributeContext> {
    prop::collection::vec((prop::sample::select(IDENTS.to_vec()), value()), 0..4).prop_map(|defs| {
        let mut ctx = AttributeContext::new();
        for (ident, value) in defs {
            ctx.define(ident, "prodattr", &value);
        }
        ctx
    })
}

proptest! {
    /// A value always matches itself
    #[test]
    fn value_matches_itself(value in value()) {
        prop_assert!(is_in_set(&value, &value));
    }

    /// Both bounds of a well-ordered range are inside it
    #[test]
    fn range_bounds_are_inclusive(a in value(), b in value()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let range = format!("{lo}~{hi}");
        prop_assert!(is_in_range(&lo, &range));
        prop_assert!(is_in_range(&hi, &range));
    }

    /// Adding an alternative never loses a match
    #[test]
    fn set_is_union_of_alternatives(value in value(), a in value(), b in value()) {
        let set = format!("{a}|{b}");
        prop_assert_eq!(is_in_set(&value, &set), is_in_set(&value, &a) || is_in_set(&value, &b));
    }

    /// Evaluation is deterministic
    #[test]
    fn evaluation_is_deterministic(statement in statement(), ctx in context(), assume in any::<bool>()) {
        prop_assert_eq!(evaluate(&statement, &ctx, assume), evaluate(&statement, &ctx, assume));
    }

    /// Whatever holds pessimistically also holds optimistically
    #[test]
    fn pessimistic_implies_optimistic(statement in statement(), ctx in context()) {
        prop_assert!(!evaluate(&statement, &ctx, false) || evaluate(&statement, &ctx, true));
    }

    /// With nothing declared a statement is never decided
    #[test]
    fn empty_context_decides_nothing(statement in statement()) {
        let ctx = AttributeContext::new();
        prop_assert!(evaluate(&statement, &ctx, true));
        prop_assert!(!evaluate(&statement, &ctx, false));
    }

    /// Simplified statements keep their optimistic and pessimistic answers
    /// under the same declarations, and a second pass changes nothing
    #[test]
    fn simplify_is_idempotent(
        statements in prop::collection::vec(statement(), 1..5),
        ctx in context(),
    ) {
        let mut group = StatementGroup::new(
            statements
                .into_iter()
                .enumerate()
                .map(|(i, root)| NamedStatement::new(format!("app-{i}"), Some(root), ()))
                .collect(),
        );

        simplify(&mut group, &ctx);
        let once = group.clone();
        let report = simplify(&mut group, &ctx);

        prop_assert_eq!(report.statements_removed, 0);
        prop_assert_eq!(report.nodes_removed, 0);
        prop_assert_eq!(report.combinations_collapsed, 0);
        prop_assert_eq!(group, once);
    }
}
