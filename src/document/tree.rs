//! Arena-backed XML tree
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. Removing a
//! node only unlinks it from its parent, so handles stay valid while a tree is
//! being rewritten.

use std::borrow::Cow;

use quick_xml::escape::{escape, resolve_predefined_entity, unescape};

/// Handle to a node of a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An element: name plus attributes in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name, including any prefix
    pub name: String,
    /// Attributes with values kept escaped as read, like text
    pub attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element without attributes
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Raw (escaped) value of an attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Unescaped value of an attribute
    ///
    /// A value referencing entities only a DTD declares is returned raw.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attribute(name).map(|raw| unescape(raw).unwrap_or(Cow::Borrowed(raw)))
    }

    /// Set an attribute from an unescaped value, replacing any existing
    /// value in place
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let value = escape_value(value);
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Remove an attribute, returning its raw value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(k, _)| k == name)?;
        Some(self.attributes.remove(pos).1)
    }
}

/// Escape a value for an attribute
///
/// References to entities that are not predefined (`&ndash;`) are left as
/// they are, so a value read raw can be written back unchanged.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&escape(&rest[..pos]));
        let tail = &rest[pos..];
        let kept = declared_reference_len(tail);
        out.push_str(if kept > 0 { &tail[..kept] } else { "&amp;" });
        rest = &tail[kept.max(1)..];
    }
    out.push_str(&escape(rest));
    out
}

/// Length of a leading `&name;` that only a DTD could resolve, else 0
fn declared_reference_len(text: &str) -> usize {
    let Some(end) = text.find(';') else {
        return 0;
    };
    let name = &text[1..end];
    let is_name = name.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if is_name && resolve_predefined_entity(name).is_none() { end + 1 } else { 0 }
}

/// What a node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document node that owns the prolog and the root element
    Document,
    /// `<!DOCTYPE ...>` content
    DocType(String),
    /// An element
    Element(Element),
    /// Character data, kept escaped exactly as read
    Text(String),
    /// `<![CDATA[...]]>` content
    CData(String),
    /// `<!-- ... -->` content
    Comment(String),
    /// `<? ... ?>` content
    ProcessingInstruction(String),
}

/// The `<?xml ...?>` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// XML version
    pub version: String,
    /// Declared encoding
    pub encoding: Option<String>,
    /// Standalone flag
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An XML document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    /// The XML declaration, if the source had one
    pub declaration: Option<Declaration>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// A document with no content at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            declaration: None,
        }
    }

    /// A document holding one empty root element
    #[must_use]
    pub fn new(root: &str) -> Self {
        let mut doc = Self::empty();
        doc.declaration = Some(Declaration::default());
        let document = doc.document_node();
        doc.append(document, NodeKind::Element(Element::new(root)));
        doc
    }

    /// The document node
    #[must_use]
    pub const fn document_node(&self) -> NodeId {
        NodeId(0)
    }

    /// The root element
    #[must_use]
    pub fn root_element(&self) -> Option<NodeId> {
        self.element_children(self.document_node()).next()
    }

    /// What a node is
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// The element behind a node, if it is one
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutable access to the element behind a node
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Element name, `None` for other node kinds
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name.as_str())
    }

    /// Whether a node is an element with the given name
    #[must_use]
    pub fn is_element(&self, id: NodeId, name: &str) -> bool {
        self.name(id) == Some(name)
    }

    /// Raw attribute value of an element node
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attribute(name))
    }

    /// Unescaped attribute value of an element node
    #[must_use]
    pub fn value(&self, id: NodeId, name: &str) -> Option<Cow<'_, str>> {
        self.element(id).and_then(|el| el.value(name))
    }

    /// Set an attribute on an element node; ignored for other kinds
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attribute(name, value);
        }
    }

    /// Remove an attribute from an element node
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id).and_then(|el| el.remove_attribute(name))
    }

    /// Parent of an attached node
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children in document order
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Element children in document order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|&c| self.element(c).is_some())
    }

    /// First child element with the given name
    #[must_use]
    pub fn child_element(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.element_children(id).find(|&c| self.is_element(c, name))
    }

    /// First descendant element (pre-order, excluding `id`) matching `pred`
    pub fn find_descendant(&self, id: NodeId, pred: impl Fn(&Element) -> bool) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.element(node).is_some_and(&pred) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev().copied());
        }
        None
    }

    /// Concatenated text of a node and its descendants, as stored
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(text) | NodeKind::CData(text) => out.push_str(text),
            NodeKind::Element(_) | NodeKind::Document => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            },
            _ => {},
        }
    }

    /// Create a detached node
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a node and append it to `parent`
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.create(kind);
        self.append_child(parent, id);
        id
    }

    /// Move `child` to the end of `parent`'s children
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Move `node` directly before `sibling`
    ///
    /// Does nothing when `sibling` is detached.
    pub fn insert_before(&mut self, sibling: NodeId, node: NodeId) {
        let Some(parent) = self.parent(sibling) else {
            return;
        };
        self.detach(node);
        let pos = self.position(parent, sibling).unwrap_or(0);
        self.nodes[parent.0].children.insert(pos, node);
        self.nodes[node.0].parent = Some(parent);
    }

    /// Put `new` where `old` is and detach `old`
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        self.insert_before(old, new);
        self.detach(old);
    }

    /// Unlink a node (and so its subtree) from its parent
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Whether a node is still reachable from the document node
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.document_node() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn position(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.nodes[parent.0].children.iter().position(|&c| c == child)
    }
}
