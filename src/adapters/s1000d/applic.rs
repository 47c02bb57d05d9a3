//! Applicability markup
//!
//! Converts between `applic`/`assert`/`evaluate` elements and the typed
//! statement model. Lifting only reads the document; [`lower_group`] writes a
//! simplified group back.

use std::borrow::Cow;

use crate::core::ApplicError;
use crate::core::models::{
    Annotations, Assertion, Combination, NamedStatement, Operator, Statement, StatementGroup,
};
use crate::document::{Document, Element, NodeId, NodeKind};

pub(crate) const APPLIC: &str = "applic";
pub(crate) const ASSERT: &str = "assert";
pub(crate) const EVALUATE: &str = "evaluate";
pub(crate) const GROUP: &str = "referencedApplicGroup";
pub(crate) const REFERENCE: &str = "applicRefId";

const ID: &str = "id";
const AND_OR: &str = "andOr";
const IDENT: &str = "applicPropertyIdent";
const TYPE: &str = "applicPropertyType";
const VALUES: &str = "applicPropertyValues";

/// Where a named statement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicOrigin {
    /// The `applic` element
    pub applic: NodeId,
    /// Its `assert`/`evaluate` child, if any
    pub statement: Option<NodeId>,
}

/// The statement element of an `applic`: its first `assert`, else its first
/// `evaluate`
pub(crate) fn statement_element(doc: &Document, applic: NodeId) -> Option<NodeId> {
    doc.child_element(applic, ASSERT).or_else(|| doc.child_element(applic, EVALUATE))
}

/// Read the statement of an `applic` element
///
/// # Errors
///
/// Returns [`ApplicError::MalformedStatement`] if an `evaluate` has no usable
/// `andOr`.
pub fn lift_applic(doc: &Document, applic: NodeId) -> Result<Option<Statement>, ApplicError> {
    statement_element(doc, applic).map(|node| lift_statement(doc, node)).transpose()
}

/// Read an `assert` or `evaluate` element
///
/// # Errors
///
/// Returns [`ApplicError::MalformedStatement`] if an `evaluate` has no usable
/// `andOr`, or if `node` is neither element.
pub fn lift_statement(doc: &Document, node: NodeId) -> Result<Statement, ApplicError> {
    let Some(element) = doc.element(node) else {
        return Err(ApplicError::MalformedStatement("statement is not an element".to_string()));
    };

    match element.name.as_str() {
        ASSERT => Ok(Statement::Assertion(lift_assertion(doc, node, element))),
        EVALUATE => {
            let operator = Operator::parse(element.attribute(AND_OR))?;
            let children = doc
                .element_children(node)
                .filter(|&child| doc.is_element(child, ASSERT) || doc.is_element(child, EVALUATE))
                .map(|child| lift_statement(doc, child))
                .collect::<Result<Vec<_>, _>>()?;

            let mut combination = Combination::new(operator, children);
            combination.annotations.attributes = extra_attributes(element, &[AND_OR]);
            Ok(Statement::Combination(combination))
        },
        other => Err(ApplicError::MalformedStatement(format!("unexpected element <{other}>"))),
    }
}

fn lift_assertion(doc: &Document, node: NodeId, element: &Element) -> Assertion {
    let text = doc.text_content(node);
    Assertion {
        ident: element.value(IDENT).map(Cow::into_owned),
        kind: element.value(TYPE).map(Cow::into_owned),
        values: element.value(VALUES).map(Cow::into_owned),
        annotations: Annotations {
            attributes: extra_attributes(element, &[IDENT, TYPE, VALUES]),
            text: (!text.is_empty()).then_some(text),
        },
    }
}

fn extra_attributes(element: &Element, known: &[&str]) -> Vec<(String, String)> {
    element.attributes.iter().filter(|(key, _)| !known.contains(&key.as_str())).cloned().collect()
}

/// Read every `applic` child of a `referencedApplicGroup`
///
/// # Errors
///
/// Fails on the first malformed statement.
pub fn lift_group(
    doc: &Document,
    group: NodeId,
) -> Result<StatementGroup<ApplicOrigin>, ApplicError> {
    let mut statements = StatementGroup::default();

    for applic in doc.element_children(group).filter(|&c| doc.is_element(c, APPLIC)) {
        let id = doc.attribute(applic, ID).unwrap_or_default();
        let origin = ApplicOrigin {
            applic,
            statement: statement_element(doc, applic),
        };
        let root = lift_applic(doc, applic)?;
        statements.push(NamedStatement::new(id, root, origin));
    }

    log::debug!("lifted {} applicability statements", statements.len());
    Ok(statements)
}

/// Build the element for a statement, detached
pub fn lower_statement(doc: &mut Document, statement: &Statement) -> NodeId {
    match statement {
        Statement::Assertion(assertion) => {
            let mut element = Element::new(ASSERT);
            let known = [
                (IDENT, &assertion.ident),
                (TYPE, &assertion.kind),
                (VALUES, &assertion.values),
            ];
            for (name, value) in known {
                if let Some(value) = value {
                    element.set_attribute(name, value);
                }
            }
            element.attributes.extend(assertion.annotations.attributes.iter().cloned());

            let node = doc.create(NodeKind::Element(element));
            if let Some(text) = &assertion.annotations.text {
                doc.append(node, NodeKind::Text(text.clone()));
            }
            node
        },
        Statement::Combination(combination) => {
            let mut element =
                Element::new(EVALUATE).with_attribute(AND_OR, combination.operator.as_str());
            element.attributes.extend(combination.annotations.attributes.iter().cloned());

            let node = doc.create(NodeKind::Element(element));
            for child in &combination.children {
                let child = lower_statement(doc, child);
                doc.append_child(node, child);
            }
            node
        },
    }
}

/// Write a simplified group back into the document
///
/// `before` is the group as it was lifted. Removed statements lose their
/// `applic` element; statements that changed get a freshly built statement
/// element in place of the old one; untouched statements keep their markup.
/// The group element itself is removed once it holds no `applic`.
///
/// Returns whether the group element was removed.
pub fn lower_group(
    doc: &mut Document,
    group: NodeId,
    before: &StatementGroup<ApplicOrigin>,
    after: &StatementGroup<ApplicOrigin>,
) -> bool {
    for old in &before.statements {
        let new = after.statements.iter().find(|s| s.origin.applic == old.origin.applic);
        let Some(new) = new else {
            doc.detach(old.origin.applic);
            continue;
        };

        if new.root == old.root {
            continue;
        }

        let replacement = new.root.as_ref().map(|root| lower_statement(doc, root));
        match (old.origin.statement, replacement) {
            (Some(previous), Some(replacement)) => doc.replace(previous, replacement),
            (Some(previous), None) => doc.detach(previous),
            (None, Some(replacement)) => doc.append_child(old.origin.applic, replacement),
            (None, None) => {},
        }
    }

    if doc.child_element(group, APPLIC).is_none() {
        log::debug!("removing empty {GROUP}");
        doc.detach(group);
        return true;
    }
    false
}
