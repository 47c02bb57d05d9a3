//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Match declared values against set/range patterns
//! - [`evaluator`] - Evaluate statements under optimistic/pessimistic assumptions
//! - [`resolver`] - Resolve content references to named statements
//! - [`filter`] - Strip inapplicable content, clean redundant references
//! - [`simplifier`] - Reduce statements to what is still undecided

pub mod evaluator;
pub mod filter;
pub mod matcher;
pub mod resolver;
pub mod simplifier;

pub use evaluator::{evaluate, evaluate_root, whole_document_applicable};
pub use filter::{clean, strip};
pub use resolver::StatementIndex;
pub use simplifier::{SimplifyReport, simplify, simplify_clean};
