use std::env::var;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use recap::cli::{self, RecapArgs};
use recap::config;
use recap::ui::{self, OutputFormat};
use recap::{SemanticVersion, VersionChange};

#[derive(clap::Parser)]
#[command(
    name = "recap",
    version,
    about = "Parse Markdown release notes into releases and features"
)]
struct Args {
    #[arg(help = "Release notes resource name (default from config: Releases)")]
    resource: Option<String>,

    #[arg(short, long, help = "Read release notes from this file", conflicts_with = "resource")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'd', long = "dir", help = "Directory containing <resource>.md")]
    resource_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Only show releases newer than this version")]
    since: Option<String>,

    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = VersionChange::Patch,
        help = "Only show releases with at least this change"
    )]
    minimum_change: VersionChange,

    #[arg(long, help = "Report parse warnings and exit non-zero if any")]
    check: bool,
}

impl From<Args> for RecapArgs {
    fn from(args: Args) -> Self {
        RecapArgs {
            resource: args.resource,
            file: args.file,
            resource_dir: args.resource_dir,
            format: args.format,
            since: args.since.as_deref().map(SemanticVersion::parse),
            minimum_change: args.minimum_change,
            check: args.check,
        }
    }
}

fn main() -> Result<()> {
    if var("RUST_LOG").is_ok() {
        env_logger::init();
    }

    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let outcome = match cli::run(&args.into(), &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    std::process::exit(outcome.exit_code());
}
