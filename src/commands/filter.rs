//! Filter modules for the declared properties

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use applic_filter::adapters::s1000d::{FilterOptions, Instance};
use applic_filter::config::Config;
use applic_filter::core::models::AttributeContext;
use applic_filter::output::{DocumentOutcome, DocumentReport, FilterReport, OutputMode};
use applic_filter::paths;

use super::{CliError, Source, build_context, collect_sources};
use crate::cli::FilterArgs;

/// Settings for one run, after merging config defaults and flags
#[derive(Debug)]
struct Plan<'a> {
    options: FilterOptions,
    whole_document: bool,
    set_applic: bool,
    applic_text: Option<&'a str>,
}

impl<'a> Plan<'a> {
    fn new(args: &'a FilterArgs, config: &'a Config) -> Self {
        let defaults = &config.defaults;
        Self {
            options: FilterOptions {
                clean: args.clean || defaults.clean,
                simplify: args.simplify || defaults.simplify,
            },
            whole_document: args.whole_document || defaults.whole_document,
            set_applic: args.set_applic || args.applic_text.is_some() || defaults.set_applic,
            applic_text: args.applic_text.as_deref().or(defaults.applic_text.as_deref()),
        }
    }
}

/// Filter every source and write the results
pub fn filter(args: &FilterArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::discover(args.declarations.config.as_deref(), Path::new("."))?;
    let ctx = build_context(&config, &args.declarations)?;
    let plan = Plan::new(args, &config);

    if plan.set_applic && ctx.is_empty() {
        log::warn!("--set-applic ignored: no properties declared");
    }

    let sources = collect_sources(&args.source)?;
    if args.output.is_some() && sources.len() > 1 {
        let message = "--output needs a single source, use --out-dir".to_string();
        return Err(CliError::BadArgument(message).into());
    }
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut report = FilterReport::default();
    for source in &sources {
        let outcome = filter_one(source, args, &ctx, &plan)
            .with_context(|| format!("filtering {}", source.name()))?;
        report.documents.push(DocumentReport {
            source: source.name(),
            outcome,
        });
    }

    log::info!("{} of {} modules written", report.written(), report.documents.len());
    report.render(mode);
    Ok(())
}

fn filter_one(
    source: &Source,
    args: &FilterArgs,
    ctx: &AttributeContext,
    plan: &Plan<'_>,
) -> anyhow::Result<DocumentOutcome> {
    let mut instance = Instance::new(source.load()?)?;

    if plan.whole_document && !instance.is_applicable(ctx)? {
        log::info!("{} does not apply, skipped", source.name());
        return Ok(DocumentOutcome::Skipped);
    }

    let stats = instance.filter(ctx, plan.options)?;
    let applic_replaced = plan.set_applic && instance.set_applic(ctx, plan.applic_text)?;
    let xml = instance.document().to_xml()?;

    let target = output_path(source, args);
    match &target {
        Some(path) => write_file(path, &xml, args.force)?,
        None => io::stdout().write_all(&xml).context("writing stdout")?,
    }

    Ok(DocumentOutcome::Written {
        kind: instance.kind(),
        output: target.map(|p| p.display().to_string()),
        stats,
        applic_replaced,
    })
}

fn output_path(source: &Source, args: &FilterArgs) -> Option<PathBuf> {
    match (&args.output, &args.out_dir) {
        (Some(path), _) if path.as_path() != Path::new("-") => Some(path.clone()),
        (None, Some(dir)) => Some(paths::output_in(dir, source.path())),
        _ => None,
    }
}

fn write_file(path: &Path, xml: &[u8], force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(CliError::NoOverwrite(path.to_path_buf()).into());
    }
    fs::write(path, xml).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
