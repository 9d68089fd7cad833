//! Formatting functions for CLI output.
//!
//! `format_*` functions are pure and return plain text; `display_*`
//! functions print, adding color through `console` when the terminal
//! supports it.

use console::style;

use crate::diagnostics::ParseWarning;
use crate::domain::{ColorFallbacks, Feature, Release};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a parse warning to the user.
pub fn display_warning(warning: &ParseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Heading line of a release: label, title and change kind.
pub fn format_release_heading(release: &Release) -> String {
    if release.title.is_empty() {
        format!("{} ({})", release.id(), release.version.change)
    } else {
        format!(
            "{} - {} ({})",
            release.id(),
            release.title,
            release.version.change
        )
    }
}

/// One feature as a bullet line, with its description indented below.
///
/// Multi-line descriptions keep their indentation on every line.
pub fn format_feature(feature: &Feature, fallbacks: &ColorFallbacks) -> String {
    let mut out = format!(
        "  • {} [{}, {}]",
        feature.title,
        feature.symbol,
        feature.rgba(fallbacks)
    );
    for line in feature.description.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// Full plain-text rendering of a release
pub fn format_release(release: &Release, fallbacks: &ColorFallbacks) -> String {
    let mut out = format_release_heading(release);
    for feature in &release.features {
        out.push('\n');
        out.push_str(&format_feature(feature, fallbacks));
    }
    out
}

/// Display releases in the order given, separated by blank lines.
pub fn display_releases(releases: &[&Release], fallbacks: &ColorFallbacks) {
    for (i, release) in releases.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", style(format_release_heading(release)).bold());
        for feature in &release.features {
            println!("{}", format_feature(feature, fallbacks));
        }
    }
}
