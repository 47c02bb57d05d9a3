//! XML tree round trips and edits

use applic_filter::document::{Document, Element, NodeKind};

use crate::common::{DATA_MODULE, PCT, PUBLICATION_MODULE, TestDir};

#[test]
fn test_fixtures_round_trip() {
    for xml in [DATA_MODULE, PUBLICATION_MODULE, PCT] {
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.to_xml_string().unwrap(), xml);
    }
}

#[test]
fn test_text_is_kept_escaped() {
    let doc = Document::parse(DATA_MODULE).unwrap();
    let root = doc.root_element().unwrap();
    let para = doc
        .find_descendant(root, |el| el.name == "para" && el.attributes.is_empty())
        .unwrap();
    assert_eq!(doc.text_content(para), "Common &amp; shared");
}

#[test]
fn test_replace_and_insert() {
    let mut doc = Document::parse("<a><b/><c/></a>").unwrap();
    let root = doc.root_element().unwrap();
    let b = doc.child_element(root, "b").unwrap();
    let c = doc.child_element(root, "c").unwrap();

    let x = doc.create(NodeKind::Element(Element::new("x")));
    doc.replace(b, x);
    let y = doc.create(NodeKind::Element(Element::new("y").with_attribute("k", "v")));
    doc.insert_before(c, y);

    assert!(!doc.is_attached(b));
    assert_eq!(doc.parent(y), Some(root));
    assert_eq!(doc.to_xml_string().unwrap(), "<a><x/><y k=\"v\"/><c/></a>\n");
}

#[test]
fn test_save_and_load() {
    let dir = TestDir::new();
    let path = dir.path().join("out.xml");

    Document::parse(PUBLICATION_MODULE).unwrap().save(&path).unwrap();
    assert_eq!(dir.read("out.xml"), PUBLICATION_MODULE);

    let loaded = Document::load(&path).unwrap();
    let root = loaded.root_element().unwrap();
    assert_eq!(loaded.name(root), Some("pm"));
}

#[test]
fn test_load_missing_file() {
    let dir = TestDir::new();
    assert!(Document::load(&dir.path().join("absent.xml")).is_err());
}
