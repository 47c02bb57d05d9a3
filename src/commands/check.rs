//! Report whole-module applicability

use std::path::Path;

use anyhow::Context;

use applic_filter::adapters::s1000d::Instance;
use applic_filter::config::Config;
use applic_filter::output::{CheckEntry, CheckReport, OutputMode};

use super::{build_context, collect_sources};
use crate::cli::CheckArgs;

/// Check whether each source applies as a whole
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::discover(args.declarations.config.as_deref(), Path::new("."))?;
    let ctx = build_context(&config, &args.declarations)?;

    let mut report = CheckReport::default();
    for source in collect_sources(&args.source)? {
        let instance = Instance::new(source.load()?)
            .with_context(|| format!("checking {}", source.name()))?;
        let applicable = instance
            .is_applicable(&ctx)
            .with_context(|| format!("checking {}", source.name()))?;

        log::debug!("{}: applicable = {applicable}", source.name());
        report.documents.push(CheckEntry {
            source: source.name(),
            applicable,
        });
    }

    report.render(mode);
    Ok(())
}
