//! Module instances
//!
//! An [`Instance`] is a data module or publication module being filtered for
//! one set of declared properties.

use serde::Serialize;

use crate::core::models::{AttributeContext, Statement};
use crate::core::services::{
    SimplifyReport, StatementIndex, clean, simplify_clean, strip, whole_document_applicable,
};
use crate::document::{Document, Element, NodeId, NodeKind};

use super::InstanceError;
use super::applic::{self, APPLIC, GROUP};
use super::content::ApplicContent;

const CONTENT: &str = "content";
const PM: &str = "pm";
const PM_ENTRY: &str = "pmEntry";
const PM_ENTRY_TARGETS: [&str; 4] = ["dmRef", "pmRef", "externalPubRef", PM_ENTRY];
const STATUS: [&str; 2] = ["dmStatus", "pmStatus"];

/// Kind of module, decided by the root element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// `dmodule` and anything that is not a publication module
    DataModule,
    /// `pm`
    Publication,
}

/// Which passes [`Instance::filter`] runs after stripping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Drop references that always hold
    pub clean: bool,
    /// Clean, then simplify the statement group
    pub simplify: bool,
}

/// What filtering changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Content fragments removed
    pub stripped: usize,
    /// References dropped
    pub cleaned: usize,
    /// Simplification outcome, when it ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified: Option<SimplifyReport>,
    /// Publication module entries left empty and removed
    pub pm_entries_removed: usize,
}

/// A module being filtered
#[derive(Debug, Clone)]
pub struct Instance {
    document: Document,
    root: NodeId,
    content: NodeId,
    kind: ModuleKind,
}

impl Instance {
    /// Wrap a parsed module
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::MissingElement`] when the root element has no
    /// `content` child.
    pub fn new(document: Document) -> Result<Self, InstanceError> {
        let Some(root) = document.root_element() else {
            return Err(InstanceError::missing("document", "root element"));
        };
        let root_name = document.name(root).unwrap_or_default();
        let Some(content) = document.child_element(root, CONTENT) else {
            return Err(InstanceError::missing(root_name, CONTENT));
        };
        let kind = if root_name == PM {
            ModuleKind::Publication
        } else {
            ModuleKind::DataModule
        };

        Ok(Self {
            document,
            root,
            content,
            kind,
        })
    }

    /// The underlying document
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Data module or publication module
    #[must_use]
    pub const fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// The `applic` element of `dmStatus`/`pmStatus`
    fn status_applic(&self) -> Option<NodeId> {
        let doc = &self.document;
        let status = doc.find_descendant(self.root, |el| STATUS.contains(&el.name.as_str()))?;
        doc.child_element(status, APPLIC)
    }

    fn group(&self) -> Option<NodeId> {
        self.document.child_element(self.content, GROUP)
    }

    /// Statement applying to the whole module
    ///
    /// # Errors
    ///
    /// Fails if the statement is malformed.
    pub fn top_level_statement(&self) -> Result<Option<Statement>, InstanceError> {
        match self.status_applic() {
            Some(applic) => Ok(applic::lift_applic(&self.document, applic)?),
            None => Ok(None),
        }
    }

    /// Whether the module as a whole can apply under `ctx`
    ///
    /// # Errors
    ///
    /// Fails if the top-level statement is malformed.
    pub fn is_applicable(&self, ctx: &AttributeContext) -> Result<bool, InstanceError> {
        let root = self.top_level_statement()?;
        Ok(whole_document_applicable(root.as_ref(), ctx))
    }

    /// Strip inapplicable content, then optionally clean and simplify
    ///
    /// Publication modules also lose entries that no longer reference
    /// anything.
    ///
    /// # Errors
    ///
    /// Fails on a malformed statement in the group; the document is left
    /// untouched in that case.
    pub fn filter(
        &mut self,
        ctx: &AttributeContext,
        options: FilterOptions,
    ) -> Result<FilterStats, InstanceError> {
        let mut stats = FilterStats::default();

        if let Some(group_node) = self.group() {
            let lifted = applic::lift_group(&self.document, group_node)?;

            {
                let index = StatementIndex::build(&lifted);
                let mut tree = ApplicContent::new(&mut self.document);
                stats.stripped = strip(&index, ctx, &mut tree, self.root);
                if options.clean || options.simplify {
                    stats.cleaned = clean(&index, ctx, &mut tree, self.root);
                }
            }

            if options.simplify {
                let mut simplified = lifted.clone();
                let report = simplify_clean(&mut simplified, ctx);
                applic::lower_group(&mut self.document, group_node, &lifted, &simplified);
                stats.simplified = Some(report);
            }
        }

        if self.kind == ModuleKind::Publication {
            stats.pm_entries_removed = self.remove_empty_pm_entries();
        }

        log::debug!(
            "filtered: {} stripped, {} cleaned, {} pm entries removed",
            stats.stripped,
            stats.cleaned,
            stats.pm_entries_removed
        );
        Ok(stats)
    }

    /// Replace the top-level applicability with one describing `ctx`
    ///
    /// `text` becomes the display text when non-empty. Nothing happens when
    /// no property is declared; returns whether the statement was replaced.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::MissingElement`] when the module has no
    /// status `applic` to replace.
    pub fn set_applic(
        &mut self,
        ctx: &AttributeContext,
        text: Option<&str>,
    ) -> Result<bool, InstanceError> {
        let Some(statement) = ctx.to_statement() else {
            return Ok(false);
        };
        let Some(old) = self.status_applic() else {
            let status = if self.kind == ModuleKind::Publication { STATUS[1] } else { STATUS[0] };
            return Err(InstanceError::missing(status, APPLIC));
        };

        let doc = &mut self.document;
        let new = doc.create(NodeKind::Element(Element::new(APPLIC)));

        if let Some(text) = text.filter(|t| !t.is_empty()) {
            let display = doc.append(new, NodeKind::Element(Element::new("displayText")));
            let para = doc.append(display, NodeKind::Element(Element::new("simplePara")));
            doc.append(para, NodeKind::Text(quick_xml::escape::escape(text).into_owned()));
        }

        let node = applic::lower_statement(doc, &statement);
        doc.append_child(new, node);
        doc.replace(old, new);

        log::debug!("replaced top-level applicability");
        Ok(true)
    }

    /// Remove `pmEntry` elements left without any reference or sub-entry
    ///
    /// Post-order, so an entry whose sub-entries were all removed goes too.
    pub fn remove_empty_pm_entries(&mut self) -> usize {
        remove_empty_entries(&mut self.document, self.content)
    }
}

fn remove_empty_entries(doc: &mut Document, node: NodeId) -> usize {
    let children: Vec<NodeId> = doc.element_children(node).collect();
    let mut removed = children.into_iter().map(|child| remove_empty_entries(doc, child)).sum();

    if doc.is_element(node, PM_ENTRY)
        && !doc
            .element_children(node)
            .any(|c| PM_ENTRY_TARGETS.iter().any(|&t| doc.is_element(c, t)))
    {
        doc.detach(node);
        removed += 1;
    }
    removed
}
