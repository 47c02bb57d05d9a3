//! Property declarations
//!
//! A [`PropertyAssignment`] records what the user declared about one product
//! attribute or condition. The [`AttributeContext`] collects assignments for a
//! run and answers pattern queries against them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::statement::{Assertion, Combination, Operator, Statement};
use crate::core::services::matcher;

/// Errors produced when parsing an `ident:type=value` definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The definition lacks the `:` or `=` separator
    #[error("malformed applicability definition: {0}")]
    Malformed(String),
}

/// A single `(identifier, type, value)` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Property identifier (e.g. `model`)
    pub ident: String,
    /// Property type (e.g. `prodattr`, `condition`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Declared value
    pub value: String,
}

impl Definition {
    /// Create a new definition
    #[must_use]
    pub fn new(
        ident: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            ident: ident.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Definition {
    type Err = DefinitionError;

    /// Parse `ident:type=value`. The value may contain further `:` or `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DefinitionError::Malformed(s.to_string());

        if !s.contains(':') || !s.contains('=') {
            return Err(malformed());
        }

        let (ident, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (kind, value) = rest.split_once('=').ok_or_else(malformed)?;

        if ident.is_empty() || kind.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(ident, kind, value))
    }
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}={}", self.ident, self.kind, self.value)
    }
}

/// What the user declared for one `(identifier, type)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyAssignment {
    /// Property identifier
    pub ident: String,
    /// Property type
    #[serde(rename = "type")]
    pub kind: String,
    /// Declared values, in declaration order (never empty)
    pub values: Vec<String>,
}

impl PropertyAssignment {
    /// Whether more than one value was declared for this property
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        self.values.len() > 1
    }

    /// True iff any declared value satisfies the set/range `pattern`
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        self.values.iter().any(|value| matcher::is_in_set(value, pattern))
    }

    fn is_for(&self, ident: &str, kind: &str) -> bool {
        self.ident == ident && self.kind == kind
    }
}

/// The set of property assignments declared for one run
///
/// Built once (from configuration, a PCT and CLI definitions) and then only
/// read while documents are filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeContext {
    assignments: Vec<PropertyAssignment>,
}

impl AttributeContext {
    /// Create an empty context
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Declare a value for a property
    ///
    /// A second declaration for the same `(ident, kind)` adds a value to the
    /// existing assignment, making it multi-valued.
    pub fn define(&mut self, ident: &str, kind: &str, value: &str) {
        if let Some(existing) = self.assignments.iter_mut().find(|a| a.is_for(ident, kind)) {
            log::debug!("adding value {value} to {ident}:{kind}");
            existing.values.push(value.to_string());
            return;
        }

        log::debug!("defining {ident}:{kind}={value}");
        self.assignments.push(PropertyAssignment {
            ident: ident.to_string(),
            kind: kind.to_string(),
            values: vec![value.to_string()],
        });
    }

    /// Declare every definition in order
    pub fn define_all<'a>(&mut self, definitions: impl IntoIterator<Item = &'a Definition>) {
        for def in definitions {
            self.define(&def.ident, &def.kind, &def.value);
        }
    }

    /// Look up the assignment for a property, `None` when undefined
    #[must_use]
    pub fn get(&self, ident: &str, kind: &str) -> Option<&PropertyAssignment> {
        self.assignments.iter().find(|a| a.is_for(ident, kind))
    }

    /// True iff the property is defined and any of its values satisfies `pattern`
    #[must_use]
    pub fn matches(&self, ident: &str, kind: &str, pattern: &str) -> bool {
        self.get(ident, kind).is_some_and(|a| a.matches(pattern))
    }

    /// Number of distinct properties declared
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether nothing was declared
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Build the statement asserting exactly what was declared
    ///
    /// Single-valued properties become assertions, multi-valued ones an OR of
    /// assertions. Several properties are joined with AND. Returns `None` for
    /// an empty context.
    #[must_use]
    pub fn to_statement(&self) -> Option<Statement> {
        let mut parts: Vec<Statement> = self
            .assignments
            .iter()
            .map(|a| {
                if a.is_multi_valued() {
                    let children = a
                        .values
                        .iter()
                        .map(|v| Statement::Assertion(Assertion::new(&a.ident, &a.kind, v)))
                        .collect();
                    Statement::Combination(Combination::new(Operator::Or, children))
                } else {
                    Statement::Assertion(Assertion::new(&a.ident, &a.kind, &a.values[0]))
                }
            })
            .collect();

        match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(Statement::Combination(Combination::new(Operator::And, parts))),
        }
    }
}
