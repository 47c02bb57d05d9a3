//! Evaluation semantics against declared properties

use applic_filter::core::models::{AttributeContext, Statement};
use applic_filter::core::services::evaluator::{is_unambiguously_false, is_unambiguously_true};
use applic_filter::core::services::{evaluate, evaluate_root, whole_document_applicable};

use crate::common::prodattr;

fn declared(value: &str) -> AttributeContext {
    let mut ctx = AttributeContext::new();
    ctx.define("v", "", value);
    ctx
}

#[test]
fn test_range_and_set_matching() {
    assert!(declared("B").matches("v", "", "A~C"));
    assert!(!declared("D").matches("v", "", "A~C"));
    assert!(declared("x").matches("v", "", "x|y|z"));
    assert!(!declared("w").matches("v", "", "x|y|z"));
}

#[test]
fn test_undefined_follows_mode() {
    let ctx = AttributeContext::new();
    let statement = Statement::assert("model", "prodattr", "X");

    assert!(evaluate(&statement, &ctx, true));
    assert!(!evaluate(&statement, &ctx, false));
}

#[test]
fn test_defined_ignores_mode() {
    let ctx = prodattr(&[("model", "A")]);

    for assume in [true, false] {
        assert!(evaluate(&Statement::assert("model", "prodattr", "A"), &ctx, assume));
        assert!(!evaluate(&Statement::assert("model", "prodattr", "B"), &ctx, assume));
    }
}

#[test]
fn test_type_is_part_of_the_key() {
    let ctx = prodattr(&[("model", "A")]);
    let condition = Statement::assert("model", "condition", "B");

    assert!(evaluate(&condition, &ctx, true));
    assert!(!evaluate(&condition, &ctx, false));
}

#[test]
fn test_and_of_two_values_of_multi_valued_property() {
    let mut ctx = AttributeContext::new();
    ctx.define("config", "option", "A");
    ctx.define("config", "option", "B");

    let statement = Statement::and(vec![
        Statement::assert("config", "option", "A"),
        Statement::assert("config", "option", "B"),
    ]);

    assert!(!evaluate(&statement, &ctx, false));
    assert!(evaluate(&Statement::assert("config", "option", "A"), &ctx, true));
    assert!(evaluate(&Statement::assert("config", "option", "B"), &ctx, true));
}

#[test]
fn test_mixed_combination() {
    let ctx = prodattr(&[("model", "A")]);
    let statement = Statement::or(vec![
        Statement::assert("model", "prodattr", "B"),
        Statement::and(vec![
            Statement::assert("model", "prodattr", "A"),
            Statement::assert("serial", "prodattr", "1~9"),
        ]),
    ]);

    assert!(evaluate(&statement, &ctx, true));
    assert!(!evaluate(&statement, &ctx, false));
    assert!(!is_unambiguously_true(&statement, &ctx));
    assert!(!is_unambiguously_false(&statement, &ctx));
}

#[test]
fn test_empty_combinations() {
    let ctx = AttributeContext::new();
    for assume in [true, false] {
        assert!(evaluate(&Statement::and(vec![]), &ctx, assume));
        assert!(!evaluate(&Statement::or(vec![]), &ctx, assume));
    }
}

#[test]
fn test_missing_statement_is_undefined() {
    let ctx = prodattr(&[("model", "A")]);
    assert!(evaluate_root(None, &ctx, true));
    assert!(!evaluate_root(None, &ctx, false));
    assert!(whole_document_applicable(None, &ctx));
}

#[test]
fn test_whole_document_applicable() {
    let root = Statement::assert("model", "prodattr", "A|B");
    assert!(whole_document_applicable(Some(&root), &prodattr(&[("model", "B")])));
    assert!(!whole_document_applicable(Some(&root), &prodattr(&[("model", "C")])));
    assert!(whole_document_applicable(Some(&root), &AttributeContext::new()));
}
