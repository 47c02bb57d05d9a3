//! Filtering whole modules

use applic_filter::adapters::s1000d::{FilterOptions, Instance, InstanceError, ModuleKind};
use applic_filter::core::ApplicError;
use applic_filter::core::models::{AttributeContext, Statement};
use applic_filter::document::Document;

use crate::common::{DATA_MODULE, PUBLICATION_MODULE, prodattr};

fn load(xml: &str) -> Instance {
    Instance::new(Document::parse(xml).unwrap()).unwrap()
}

fn filtered(ctx: &AttributeContext, options: FilterOptions) -> String {
    let mut instance = load(DATA_MODULE);
    instance.filter(ctx, options).unwrap();
    instance.document().to_xml_string().unwrap()
}

const CLEAN: FilterOptions = FilterOptions {
    clean: true,
    simplify: false,
};

const SIMPLIFY: FilterOptions = FilterOptions {
    clean: false,
    simplify: true,
};

#[test]
fn test_no_filtering_round_trips() {
    let instance = load(DATA_MODULE);
    assert_eq!(instance.kind(), ModuleKind::DataModule);
    assert_eq!(instance.document().to_xml_string().unwrap(), DATA_MODULE);
}

#[test]
fn test_strip_model_a() {
    let mut instance = load(DATA_MODULE);
    let stats = instance.filter(&prodattr(&[("model", "A")]), FilterOptions::default()).unwrap();

    assert_eq!(stats.stripped, 2);
    assert_eq!(stats.cleaned, 0);
    assert!(stats.simplified.is_none());

    let xml = instance.document().to_xml_string().unwrap();
    assert!(xml.contains(r#"<para applicRefId="app-A">Model A only</para>"#));
    assert!(!xml.contains("Model B only"));
    assert!(!xml.contains("Nested under B"));
    assert!(xml.contains("Serials 10 to 19"));
    assert!(xml.contains("Common &amp; shared"));
    assert!(xml.contains("<!-- reviewed -->"));
}

#[test]
fn test_nothing_declared_strips_nothing() {
    let xml = filtered(&AttributeContext::new(), CLEAN);
    assert_eq!(xml, DATA_MODULE);
}

#[test]
fn test_clean_with_serial() {
    let mut instance = load(DATA_MODULE);
    let ctx = prodattr(&[("model", "A"), ("serial", "5")]);
    let stats = instance.filter(&ctx, CLEAN).unwrap();

    // "5" sorts after "19", so the 10~19 range does not hold
    assert_eq!(stats.stripped, 3);
    assert_eq!(stats.cleaned, 3);

    let xml = instance.document().to_xml_string().unwrap();
    assert!(xml.contains("<para>Model A only</para>"));
    assert!(xml.contains("<para>Models A and B</para>"));
    assert!(xml.contains("<para>Model A, early serials</para>"));
    assert!(!xml.contains("Serials 10 to 19"));
    assert!(xml.contains(r#"<applic id="app-A-S">"#));
}

#[test]
fn test_simplify_model_a() {
    let mut instance = load(DATA_MODULE);
    let stats = instance.filter(&prodattr(&[("model", "A")]), SIMPLIFY).unwrap();

    let report = stats.simplified.unwrap();
    assert_eq!(report.statements_removed, 3);
    assert_eq!(report.combinations_collapsed, 1);
    assert_eq!(report.nodes_removed, 1);
    assert!(!report.group_empty);
    assert_eq!(stats.cleaned, 2);

    let xml = instance.document().to_xml_string().unwrap();
    assert!(!xml.contains(r#"id="app-A""#));
    assert!(!xml.contains(r#"id="app-AB""#));
    assert!(xml.contains(
        r#"<applic id="app-A-S"><assert applicPropertyIdent="serial" applicPropertyType="prodattr" applicPropertyValues="1~9"/></applic>"#
    ));
    assert!(xml.contains(
        r#"<applic id="app-range"><assert applicPropertyIdent="serial" applicPropertyType="prodattr" applicPropertyValues="10~19"/></applic>"#
    ));
}

#[test]
fn test_simplify_everything_decided() {
    let mut instance = load(DATA_MODULE);
    let ctx = prodattr(&[("model", "B"), ("serial", "12")]);
    let stats = instance.filter(&ctx, SIMPLIFY).unwrap();

    assert!(stats.simplified.unwrap().group_empty);
    let xml = instance.document().to_xml_string().unwrap();
    assert!(!xml.contains("referencedApplicGroup"));
    assert!(!xml.contains("applicRefId"));
    assert!(!xml.contains("Nested under B"));
    assert!(xml.contains("<levelledPara/>"));
}

#[test]
fn test_strip_is_idempotent() {
    let ctx = prodattr(&[("model", "A"), ("serial", "5")]);
    let once = filtered(&ctx, FilterOptions::default());

    let mut again = load(&once);
    let stats = again.filter(&ctx, FilterOptions::default()).unwrap();
    assert_eq!(stats.stripped, 0);
    assert_eq!(again.document().to_xml_string().unwrap(), once);
}

#[test]
fn test_simplify_is_idempotent() {
    let ctx = prodattr(&[("model", "A")]);
    let once = filtered(&ctx, SIMPLIFY);

    let mut again = load(&once);
    let stats = again.filter(&ctx, SIMPLIFY).unwrap();
    let report = stats.simplified.unwrap();
    assert_eq!(report.statements_removed, 0);
    assert_eq!(report.nodes_removed, 0);
    assert_eq!(again.document().to_xml_string().unwrap(), once);
}

#[test]
fn test_malformed_statement_leaves_document_untouched() {
    let xml = DATA_MODULE.replace(r#"<evaluate andOr="and">"#, r#"<evaluate andOr="xor">"#);
    let mut instance = load(&xml);

    let err = instance.filter(&prodattr(&[("model", "A")]), CLEAN).unwrap_err();
    assert!(matches!(err, InstanceError::Applic(ApplicError::MalformedStatement(_))));
    assert_eq!(instance.document().to_xml_string().unwrap(), xml);
}

#[test]
fn test_missing_content_is_an_error() {
    let doc = Document::parse("<dmodule><identAndStatusSection/></dmodule>").unwrap();
    let err = Instance::new(doc).unwrap_err();
    assert!(matches!(err, InstanceError::MissingElement { .. }));
}

#[test]
fn test_whole_document_applicability() {
    let instance = load(DATA_MODULE);
    assert!(instance.is_applicable(&prodattr(&[("model", "B")])).unwrap());
    assert!(!instance.is_applicable(&prodattr(&[("model", "C")])).unwrap());
    assert!(instance.is_applicable(&prodattr(&[("serial", "3")])).unwrap());
}

#[test]
fn test_set_applic_single_property() {
    let mut instance = load(DATA_MODULE);
    let ctx = prodattr(&[("model", "A")]);

    assert!(instance.set_applic(&ctx, None).unwrap());
    assert_eq!(
        instance.top_level_statement().unwrap(),
        Some(Statement::assert("model", "prodattr", "A"))
    );

    let xml = instance.document().to_xml_string().unwrap();
    assert!(!xml.contains("Models A and B</simplePara>"));
}

#[test]
fn test_publication_module() {
    let mut instance = load(PUBLICATION_MODULE);
    assert_eq!(instance.kind(), ModuleKind::Publication);

    let stats = instance.filter(&prodattr(&[("model", "A")]), FilterOptions::default()).unwrap();
    assert_eq!(stats.stripped, 1);
    assert_eq!(stats.pm_entries_removed, 1);

    let xml = instance.document().to_xml_string().unwrap();
    assert!(xml.contains("General"));
    assert!(!xml.contains("<pmEntryTitle>Model B</pmEntryTitle>"));
}

#[test]
fn test_option_scenario() {
    let xml = r#"<dmodule><content>
<referencedApplicGroup>
<applic id="opt-A"><assert applicPropertyIdent="config" applicPropertyType="option" applicPropertyValues="A"/></applic>
<applic id="opt-B"><assert applicPropertyIdent="config" applicPropertyType="option" applicPropertyValues="B"/></applic>
</referencedApplicGroup>
<para applicRefId="opt-A">first</para><para applicRefId="opt-B">second</para><para applicRefId="unknown">third</para>
</content></dmodule>"#;

    let mut ctx = AttributeContext::new();
    ctx.define("config", "option", "A");

    let mut instance = load(xml);
    let stats = instance.filter(&ctx, FilterOptions::default()).unwrap();

    assert_eq!(stats.stripped, 1);
    let out = instance.document().to_xml_string().unwrap();
    assert!(out.contains("first"));
    assert!(!out.contains("second"));
    assert!(out.contains(r#"<para applicRefId="unknown">third</para>"#));
}

#[test]
fn test_dtd_entities_in_attributes_survive_filtering() {
    let xml = DATA_MODULE.replace(
        r#"<para applicRefId="app-A">Model A only</para>"#,
        r#"<para applicRefId="app-A" title="A &ndash; only">Model A only</para>"#,
    );
    let mut instance = load(&xml);
    instance.filter(&prodattr(&[("model", "A")]), CLEAN).unwrap();

    let out = instance.document().to_xml_string().unwrap();
    assert!(out.contains(r#"<para title="A &ndash; only">Model A only</para>"#));
}
