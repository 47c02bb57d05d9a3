//! Simplifying the statement group of a module

use applic_filter::adapters::s1000d::applic::{lift_group, lower_group};
use applic_filter::core::models::Statement;
use applic_filter::core::services::{simplify, simplify_clean};
use applic_filter::document::Document;

use crate::common::{DATA_MODULE, prodattr};

fn group_of(doc: &Document) -> applic_filter::document::NodeId {
    let root = doc.root_element().unwrap();
    doc.find_descendant(root, |el| el.name == "referencedApplicGroup").unwrap()
}

#[test]
fn test_simplify_lifted_group() {
    let doc = Document::parse(DATA_MODULE).unwrap();
    let mut group = lift_group(&doc, group_of(&doc)).unwrap();
    assert_eq!(group.len(), 5);

    let report = simplify(&mut group, &prodattr(&[("model", "A")]));

    assert_eq!(report.statements_removed, 3);
    let ids: Vec<&str> = group.statements.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["app-A-S", "app-range"]);
    assert_eq!(group.statements[0].root, Some(Statement::assert("serial", "prodattr", "1~9")));
}

#[test]
fn test_unchanged_statements_keep_their_markup() {
    let mut doc = Document::parse(DATA_MODULE).unwrap();
    let node = group_of(&doc);
    let before = lift_group(&doc, node).unwrap();
    let mut after = before.clone();

    simplify_clean(&mut after, &prodattr(&[("version", "2")]));
    assert_eq!(after, before);

    assert!(!lower_group(&mut doc, node, &before, &after));
    assert_eq!(doc.to_xml_string().unwrap(), DATA_MODULE);
}

#[test]
fn test_lower_group_removes_empty_group() {
    let mut doc = Document::parse(DATA_MODULE).unwrap();
    let node = group_of(&doc);
    let before = lift_group(&doc, node).unwrap();
    let mut after = before.clone();

    let report = simplify_clean(&mut after, &prodattr(&[("model", "B"), ("serial", "12")]));
    assert!(report.group_empty);

    assert!(lower_group(&mut doc, node, &before, &after));
    assert!(!doc.is_attached(node));
    assert!(!doc.to_xml_string().unwrap().contains("<applic id="));
}
