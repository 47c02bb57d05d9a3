//! Reference resolver - maps content references to named statements

use std::collections::HashMap;

use crate::core::models::{NamedStatement, StatementGroup};

/// Identifier index over a [`StatementGroup`]
///
/// When an identifier occurs more than once the first statement in document
/// order wins.
#[derive(Debug)]
pub struct StatementIndex<'g, P> {
    group: &'g StatementGroup<P>,
    by_id: HashMap<&'g str, usize>,
}

impl<'g, P> StatementIndex<'g, P> {
    /// Index a group
    #[must_use]
    pub fn build(group: &'g StatementGroup<P>) -> Self {
        let mut by_id = HashMap::with_capacity(group.len());
        for (pos, statement) in group.statements.iter().enumerate() {
            by_id.entry(statement.id.as_str()).or_insert(pos);
        }
        Self { group, by_id }
    }

    /// Find the statement a reference points to, `None` when unresolved
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<&'g NamedStatement<P>> {
        self.by_id.get(reference).map(|&pos| &self.group.statements[pos])
    }

    /// Number of distinct identifiers indexed
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether nothing is indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
