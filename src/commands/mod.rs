//! Command implementations

mod check;
mod filter;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;
use walkdir::WalkDir;

use applic_filter::adapters::pct;
use applic_filter::config::Config;
use applic_filter::core::models::{AttributeContext, Definition};
use applic_filter::document::Document;

use crate::cli::{DeclarationArgs, SourceArgs};

pub use check::check;
pub use filter::filter;

/// Usage errors detected after argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// A source, list or PCT does not exist
    #[error("could not read {}: no such file", .0.display())]
    MissingFile(PathBuf),

    /// An output file exists and --force was not given
    #[error("{} already exists, use --force to overwrite", .0.display())]
    NoOverwrite(PathBuf),

    /// A required companion argument is missing
    #[error("{0}")]
    MissingArgument(String),

    /// Arguments that cannot be combined
    #[error("{0}")]
    BadArgument(String),
}

impl CliError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument(_) => 1,
            Self::MissingFile(_) => 2,
            Self::NoOverwrite(_) => 5,
            Self::BadArgument(_) => 7,
        }
    }
}

/// A document to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A file
    File(PathBuf),
}

impl Source {
    /// Display name: the path, or `-` for stdin
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// The file path, `None` for stdin
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }

    /// Read and parse the document
    pub fn load(&self) -> anyhow::Result<Document> {
        match self {
            Self::Stdin => {
                let mut xml = String::new();
                io::stdin().read_to_string(&mut xml).context("reading stdin")?;
                Document::parse(&xml).context("parsing stdin")
            },
            Self::File(path) => {
                Document::load(path).with_context(|| format!("parsing {}", path.display()))
            },
        }
    }
}

/// Expand source arguments into the documents to process
///
/// No arguments means stdin: the document itself, or with `--list` the list.
pub fn collect_sources(args: &SourceArgs) -> anyhow::Result<Vec<Source>> {
    if args.list {
        let mut sources = Vec::new();
        if args.sources.is_empty() {
            let mut list = String::new();
            io::stdin().read_to_string(&mut list).context("reading list from stdin")?;
            sources.extend(parse_list(&list));
        }
        for list_path in &args.sources {
            if !list_path.is_file() {
                return Err(CliError::MissingFile(list_path.clone()).into());
            }
            let list = fs::read_to_string(list_path)
                .with_context(|| format!("reading list {}", list_path.display()))?;
            sources.extend(parse_list(&list));
        }
        return expand(&sources);
    }

    if args.sources.is_empty() {
        return Ok(vec![Source::Stdin]);
    }
    expand(&args.sources)
}

fn parse_list(list: &str) -> Vec<PathBuf> {
    list.lines()
        .map(|line| line.split('\t').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn expand(paths: &[PathBuf]) -> anyhow::Result<Vec<Source>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.with_context(|| format!("walking {}", path.display()))?;
                let is_xml =
                    entry.path().extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
                if entry.file_type().is_file() && is_xml {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            log::debug!("found {} modules under {}", found.len(), path.display());
            sources.extend(found.into_iter().map(Source::File));
        } else if path.is_file() {
            sources.push(Source::File(path.clone()));
        } else {
            return Err(CliError::MissingFile(path.clone()).into());
        }
    }

    Ok(sources)
}

/// Build the declared properties
///
/// Order: config `[[assign]]`, then the PCT product, then `--set`.
pub fn build_context(config: &Config, args: &DeclarationArgs) -> anyhow::Result<AttributeContext> {
    let mut ctx = AttributeContext::new();
    ctx.define_all(&config.assignments);

    let pct_path = args.pct.clone().or_else(|| config.pct.as_ref().map(|p| p.path.clone()));
    let product = args.product.clone().or_else(|| config.pct.as_ref().map(|p| p.product.clone()));

    match (pct_path, product) {
        (Some(path), Some(product)) => {
            let definitions = pct::load_product(&path, &product)?;
            ctx.define_all(&definitions);
        },
        (None, Some(_)) => {
            return Err(CliError::MissingArgument("--product requires --pct".to_string()).into());
        },
        (Some(_), None) => {
            return Err(CliError::MissingArgument("--pct requires --product".to_string()).into());
        },
        (None, None) => {},
    }

    for text in &args.definitions {
        let definition: Definition = text.parse()?;
        ctx.define(&definition.ident, &definition.kind, &definition.value);
    }

    log::debug!("{} properties declared", ctx.len());
    Ok(ctx)
}
