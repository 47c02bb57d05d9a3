//! Logical statements
//!
//! A statement is either an [`Assertion`] about one property or a
//! [`Combination`] of statements joined with AND/OR. Statements that content
//! can reference live in a [`StatementGroup`], keyed by identifier.

use serde::Serialize;

use crate::core::error::ApplicError;

/// How a [`Combination`] joins its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// All children must hold
    And,
    /// At least one child must hold
    Or,
}

impl Operator {
    /// Parse the operator of a combination
    ///
    /// A missing or unrecognised operator makes the statement unusable.
    pub fn parse(value: Option<&str>) -> Result<Self, ApplicError> {
        match value {
            Some("and") => Ok(Self::And),
            Some("or") => Ok(Self::Or),
            Some(other) => Err(ApplicError::MalformedStatement(format!(
                "unrecognised operator \"{other}\""
            ))),
            None => Err(ApplicError::MalformedStatement(
                "combination without operator".to_string(),
            )),
        }
    }

    /// The textual form used in documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque data carried alongside a statement node
///
/// Never read by the evaluator; preserved so the statement can be written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// Extra attributes, in source order
    pub attributes: Vec<(String, String)>,
    /// Raw text content (assertions stated in prose)
    pub text: Option<String>,
}

/// A leaf statement comparing one property against a set/range pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assertion {
    /// Property identifier
    pub ident: Option<String>,
    /// Property type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Set/range pattern the property value must satisfy
    pub values: Option<String>,
    /// Opaque extras
    #[serde(skip)]
    pub annotations: Annotations,
}

impl Assertion {
    /// Create an assertion `ident:kind` in `values`
    #[must_use]
    pub fn new(ident: &str, kind: &str, values: &str) -> Self {
        Self {
            ident: Some(ident.to_string()),
            kind: Some(kind.to_string()),
            values: Some(values.to_string()),
            annotations: Annotations::default(),
        }
    }

    /// Whether the assertion states nothing computable
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ident.is_none() && self.kind.is_none() && self.values.is_none()
    }
}

/// An AND/OR of child statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    /// How the children are joined
    pub operator: Operator,
    /// Child statements, in order
    pub children: Vec<Statement>,
    /// Opaque extras
    #[serde(skip)]
    pub annotations: Annotations,
}

impl Combination {
    /// Create a combination
    #[must_use]
    pub fn new(operator: Operator, children: Vec<Statement>) -> Self {
        Self {
            operator,
            children,
            annotations: Annotations::default(),
        }
    }
}

/// A logical statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Statement {
    /// Leaf assertion
    Assertion(Assertion),
    /// AND/OR of statements
    Combination(Combination),
}

impl Statement {
    /// Shorthand for an assertion statement
    #[must_use]
    pub fn assert(ident: &str, kind: &str, values: &str) -> Self {
        Self::Assertion(Assertion::new(ident, kind, values))
    }

    /// Shorthand for an AND combination
    #[must_use]
    pub fn and(children: Vec<Self>) -> Self {
        Self::Combination(Combination::new(Operator::And, children))
    }

    /// Shorthand for an OR combination
    #[must_use]
    pub fn or(children: Vec<Self>) -> Self {
        Self::Combination(Combination::new(Operator::Or, children))
    }
}

/// A statement that content can reference by identifier
///
/// `origin` is whatever the document layer needs to write the statement back
/// (display text, source element handles); the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStatement<P> {
    /// Identifier referenced by content
    pub id: String,
    /// The statement; `None` when nothing computable was stated
    pub root: Option<Statement>,
    /// Opaque payload
    pub origin: P,
}

impl<P> NamedStatement<P> {
    /// Create a named statement
    pub fn new(id: impl Into<String>, root: Option<Statement>, origin: P) -> Self {
        Self {
            id: id.into(),
            root,
            origin,
        }
    }
}

/// The statements of one document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGroup<P> {
    /// Named statements
    pub statements: Vec<NamedStatement<P>>,
}

impl<P> Default for StatementGroup<P> {
    fn default() -> Self {
        Self {
            statements: Vec::new(),
        }
    }
}

impl<P> StatementGroup<P> {
    /// Create a group from statements
    #[must_use]
    pub const fn new(statements: Vec<NamedStatement<P>>) -> Self {
        Self { statements }
    }

    /// Add a statement
    pub fn push(&mut self, statement: NamedStatement<P>) {
        self.statements.push(statement);
    }

    /// Number of named statements
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the group holds no statements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
