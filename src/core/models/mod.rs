//! Domain models for applicability
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AttributeContext`] - "The product I am building has these properties"
//! - [`Statement`] - "This content applies when these properties hold"
//! - [`StatementGroup`] - Statements content can reference by identifier

mod property;
mod statement;

pub use property::{AttributeContext, Definition, DefinitionError, PropertyAssignment};
pub use statement::{
    Annotations, Assertion, Combination, NamedStatement, Operator, Statement, StatementGroup,
};
