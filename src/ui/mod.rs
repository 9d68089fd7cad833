//! User interface module - output formats for parsed release notes.
//!
//! Separates concerns:
//! - `formatter` - Human-readable text
//! - This module - Output format selection and machine-readable output

use std::io::Write;

use serde::Serialize;

use crate::domain::{Release, Rgba};
use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_releases, display_status, display_success, display_warning,
    format_feature, format_release, format_release_heading,
};

/// How releases are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A release as written in JSON output, with feature colors resolved.
#[derive(Debug, Serialize)]
pub struct ReleaseOutput<'a> {
    #[serde(flatten)]
    pub release: &'a Release,
    pub resolved_colors: Vec<Rgba>,
}

/// Serialize releases as pretty JSON followed by a newline.
///
/// # Arguments
/// * `out` - Destination, usually stdout
/// * `releases` - Releases paired with their resolved feature colors
pub fn write_json<W: Write>(mut out: W, releases: &[ReleaseOutput<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, releases)?;
    writeln!(out)?;
    Ok(())
}
