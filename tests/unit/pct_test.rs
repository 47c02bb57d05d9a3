//! Loading product declarations from a PCT

use applic_filter::adapters::pct::{self, PctError};
use applic_filter::core::models::{AttributeContext, Definition};

use crate::common::{PCT, TestDir};

#[test]
fn test_load_product() {
    let dir = TestDir::new();
    let path = dir.add_file("PCT.xml", PCT);

    let definitions = pct::load_product(&path, "prodA").unwrap();
    assert_eq!(
        definitions,
        vec![
            Definition::new("model", "prodattr", "A"),
            Definition::new("serial", "prodattr", "5"),
        ]
    );

    let mut ctx = AttributeContext::new();
    ctx.define_all(&definitions);
    assert!(ctx.matches("serial", "prodattr", "1~9"));
}

#[test]
fn test_unknown_product() {
    let dir = TestDir::new();
    let path = dir.add_file("PCT.xml", PCT);

    let err = pct::load_product(&path, "prodZ").unwrap_err();
    assert!(matches!(err, PctError::ProductNotFound { .. }));
    assert!(!err.is_missing_file());
}

#[test]
fn test_missing_pct() {
    let dir = TestDir::new();
    let err = pct::load_product(&dir.path().join("absent.xml"), "prodA").unwrap_err();
    assert!(err.is_missing_file());
}

#[test]
fn test_malformed_pct() {
    let dir = TestDir::new();
    let path = dir.add_file("PCT.xml", "<pct><product id=\"p\">");

    let err = pct::load_product(&path, "p").unwrap_err();
    assert!(matches!(err, PctError::Document { .. }));
    assert!(!err.is_missing_file());
}
