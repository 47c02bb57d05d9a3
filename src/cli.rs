//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use applic_filter::output::{OutputMode, VersionInfo};

/// applic - Filter S1000D modules by applicability
#[derive(Parser, Debug)]
#[command(
    name = "applic",
    version,
    about = "Filter S1000D modules by applicability",
    long_about = "Create instances of data modules and publication modules for one product \
                  configuration.\n\n\
                  Declared properties decide which content applies: fragments that can never \
                  apply are removed, references that always hold can be dropped and the \
                  applicability statements themselves can be simplified."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output reports in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter modules for the declared properties
    Filter(FilterArgs),

    /// Report whether modules apply as a whole
    Check(CheckArgs),

    /// Show version
    Version,
}

/// Where documents come from
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Modules to read: files, directories (searched for *.xml) or, with
    /// --list, files listing module paths. Reads stdin when omitted.
    pub sources: Vec<PathBuf>,

    /// Treat sources as lists of module paths, one per line
    #[arg(short = 'L', long)]
    pub list: bool,
}

/// How properties are declared
#[derive(Args, Debug, Default)]
pub struct DeclarationArgs {
    /// Declare a property value, as IDENT:TYPE=VALUE (repeatable)
    #[arg(short = 's', long = "set", value_name = "IDENT:TYPE=VALUE")]
    pub definitions: Vec<String>,

    /// PCT to read product declarations from
    #[arg(short = 'P', long, value_name = "PCT")]
    pub pct: Option<PathBuf>,

    /// Product id in the PCT
    #[arg(short = 'p', long, value_name = "ID")]
    pub product: Option<String>,

    /// Configuration file (default: ./.applic.toml, then the user config)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments of `filter`
#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub declarations: DeclarationArgs,

    /// Also drop references that always hold
    #[arg(short = 'a', long)]
    pub clean: bool,

    /// Clean, then simplify the applicability statements
    #[arg(short = 'A', long)]
    pub simplify: bool,

    /// Skip modules that do not apply as a whole
    #[arg(short, long)]
    pub whole_document: bool,

    /// Replace the module's own applicability with the declarations
    #[arg(short = 'y', long)]
    pub set_applic: bool,

    /// Display text for the replaced applicability (implies --set-applic)
    #[arg(short = 'Y', long, value_name = "TEXT")]
    pub applic_text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write each module into this directory under its source name
    #[arg(short = 'O', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments of `check`
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub declarations: DeclarationArgs,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Filter(args) => commands::filter(&args, output_mode),
        Command::Check(args) => commands::check(&args, output_mode),
        Command::Version => {
            VersionInfo::current().render(output_mode);
            Ok(())
        },
    }
}
