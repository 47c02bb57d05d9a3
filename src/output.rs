//! Output formatting for human and JSON modes
//!
//! Filter reports go to stderr, since the filtered document itself may be
//! written to stdout. Check reports go to stdout.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::s1000d::{FilterStats, ModuleKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// What happened to one source document
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    /// Filtered and written
    Written {
        /// Kind of module
        kind: ModuleKind,
        /// Where it was written, `None` for stdout
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
        /// What filtering changed
        stats: FilterStats,
        /// Whether the top-level applicability was replaced
        applic_replaced: bool,
    },
    /// Not applicable as a whole, so not written
    Skipped,
}

/// Result for one source document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Source path, or `-` for stdin
    pub source: String,
    /// Outcome
    #[serde(flatten)]
    pub outcome: DocumentOutcome,
}

/// Result of a filter run
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterReport {
    /// Per-document results, in processing order
    pub documents: Vec<DocumentReport>,
}

/// Whole-document applicability of one source
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// Source path, or `-` for stdin
    pub source: String,
    /// Whether the document can apply under the declarations
    pub applicable: bool,
}

/// Result of a check run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Per-document results
    pub documents: Vec<CheckEntry>,
}

/// Version information
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionInfo {
    /// Crate version
    pub version: &'static str,
}

impl FilterReport {
    /// Number of documents written
    #[must_use]
    pub fn written(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, DocumentOutcome::Written { .. }))
            .count()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                eprintln!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        for doc in &self.documents {
            match &doc.outcome {
                DocumentOutcome::Written {
                    output,
                    stats,
                    applic_replaced,
                    ..
                } => {
                    let target = output.as_deref().unwrap_or("stdout");
                    eprintln!("{} {} -> {}", "filtered".green(), doc.source, target);
                    eprintln!(
                        "  {} stripped, {} references cleaned",
                        stats.stripped, stats.cleaned
                    );
                    if let Some(report) = stats.simplified {
                        eprintln!(
                            "  {} statements removed, {} nodes removed, \
                             {} combinations collapsed{}",
                            report.statements_removed,
                            report.nodes_removed,
                            report.combinations_collapsed,
                            if report.group_empty { ", group removed" } else { "" }
                        );
                    }
                    if stats.pm_entries_removed > 0 {
                        eprintln!("  {} empty pm entries removed", stats.pm_entries_removed);
                    }
                    if *applic_replaced {
                        eprintln!("  top-level applicability replaced");
                    }
                },
                DocumentOutcome::Skipped => {
                    eprintln!("{} {} (not applicable)", "skipped".yellow(), doc.source);
                },
            }
        }
    }
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for entry in &self.documents {
                    if entry.applicable {
                        println!("{} {}", "applicable".green(), entry.source);
                    } else {
                        println!("{} {}", "not applicable".red(), entry.source);
                    }
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl VersionInfo {
    /// Current version
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: crate::VERSION,
        }
    }

    /// Render based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("applic v{}", self.version),
            OutputMode::Json => println!("{}", serde_json::json!({ "version": self.version })),
        }
    }
}
