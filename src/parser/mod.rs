//! Markdown release-notes parser
//!
//! Release notes are written in a small line-oriented Markdown dialect:
//!
//! ```markdown
//! # 1.0.0
//! ## Initial Release
//! ### major
//!
//! - title: New Feature
//! - description: This is a new feature
//! - symbol: star
//! - color: #FF0000
//! ```
//!
//! Each line is trimmed and matched on its prefix. Lines that match nothing
//! are ignored, fields that arrive out of order are dropped, and a release
//! with no features is skipped. Parsing never fails.
//!
//! The returned releases are in the reverse of their order in the text:
//! the last `# ` block comes first.

pub mod escape;

use log::{debug, warn};

use crate::diagnostics::ParseWarning;
use crate::domain::{AppVersion, Feature, Release, VersionChange, DEFAULT_COLOR, DEFAULT_SYMBOL};
use crate::resource::ResourceLoader;

pub const VERSION_TOKEN: &str = "# ";
pub const RELEASE_TITLE_TOKEN: &str = "## ";
pub const CHANGE_TOKEN: &str = "### ";
pub const FEATURE_TITLE_TOKEN: &str = "- title: ";
pub const DESCRIPTION_TOKEN: &str = "- description: ";
pub const SYMBOL_TOKEN: &str = "- symbol: ";
pub const COLOR_TOKEN: &str = "- color: ";

/// Releases together with everything the parser skipped or defaulted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub releases: Vec<Release>,
    pub warnings: Vec<ParseWarning>,
}

/// Parses release notes held in memory or loaded from a resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleasesParser {
    markdown: String,
}

impl ReleasesParser {
    pub fn new(markdown: impl Into<String>) -> Self {
        ReleasesParser {
            markdown: markdown.into(),
        }
    }

    /// Load the markdown for `name` from `loader`.
    ///
    /// A resource that cannot be read is logged and treated as empty.
    pub fn from_resource<L: ResourceLoader + ?Sized>(loader: &L, name: &str) -> Self {
        let markdown = loader.load(name).unwrap_or_else(|e| {
            warn!("Could not load release notes '{}': {}", name, e);
            String::new()
        });
        ReleasesParser { markdown }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Releases, most recently written block first
    pub fn releases(&self) -> Vec<Release> {
        parse(&self.markdown)
    }

    pub fn report(&self) -> ParseReport {
        parse_with_report(&self.markdown)
    }
}

/// Parse release notes. See the [module docs](self) for the format.
pub fn parse(markdown: &str) -> Vec<Release> {
    parse_with_report(markdown).releases
}

/// Parse release notes, keeping the warnings
pub fn parse_with_report(markdown: &str) -> ParseReport {
    split_lines(markdown)
        .enumerate()
        .fold(Accumulator::default(), |acc, (index, line)| {
            acc.consume(index + 1, line.trim())
        })
        .finish()
}

/// Characters other than CRLF that end a line
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Split on any newline, counting `\r\n` as a single break
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(LINE_BREAKS))
}

/// A trimmed line, classified by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Version(&'a str),
    ReleaseTitle(&'a str),
    Change(&'a str),
    FeatureTitle(&'a str),
    Description(&'a str),
    Symbol(&'a str),
    Color(&'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        let tokens: [(&str, fn(&'a str) -> Line<'a>); 7] = [
            (VERSION_TOKEN, Line::Version),
            (RELEASE_TITLE_TOKEN, Line::ReleaseTitle),
            (CHANGE_TOKEN, Line::Change),
            (FEATURE_TITLE_TOKEN, Line::FeatureTitle),
            (DESCRIPTION_TOKEN, Line::Description),
            (SYMBOL_TOKEN, Line::Symbol),
            (COLOR_TOKEN, Line::Color),
        ];

        tokens
            .into_iter()
            .find_map(|(token, kind)| line.strip_prefix(token).map(kind))
            .unwrap_or(Line::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRelease {
    version: String,
    title: String,
    change: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFeature {
    title: String,
    description: String,
    symbol: Option<String>,
    color: Option<String>,
}

impl PendingFeature {
    fn into_feature(self) -> Feature {
        Feature::new(
            self.title,
            self.description,
            self.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        )
    }
}

/// State threaded through the scan.
///
/// `features` belong to whichever release is finalized next.
#[derive(Debug, Default)]
struct Accumulator {
    releases: Vec<Release>,
    features: Vec<Feature>,
    release: Option<PendingRelease>,
    feature: Option<PendingFeature>,
    warnings: Vec<ParseWarning>,
}

impl Accumulator {
    fn consume(mut self, line_number: usize, line: &str) -> Self {
        match Line::classify(line) {
            Line::Version(version) => {
                self.finalize_feature();
                self.finalize_release();
                self.release = Some(PendingRelease {
                    version: version.to_string(),
                    title: String::new(),
                    change: String::new(),
                });
            }
            Line::ReleaseTitle(title) => {
                self.replace_release(line_number, RELEASE_TITLE_TOKEN, |release| PendingRelease {
                    title: title.to_string(),
                    ..release
                });
            }
            Line::Change(change) => {
                self.replace_release(line_number, CHANGE_TOKEN, |release| PendingRelease {
                    change: change.to_string(),
                    ..release
                });
            }
            Line::FeatureTitle(title) => {
                self.finalize_feature();
                self.feature = Some(PendingFeature {
                    title: escape::decode(title),
                    description: String::new(),
                    symbol: None,
                    color: None,
                });
            }
            Line::Description(description) => {
                self.replace_feature(line_number, DESCRIPTION_TOKEN, |feature| PendingFeature {
                    description: escape::decode(description),
                    ..feature
                });
            }
            Line::Symbol(symbol) => {
                self.replace_feature(line_number, SYMBOL_TOKEN, |feature| PendingFeature {
                    symbol: Some(symbol.to_string()),
                    ..feature
                });
            }
            Line::Color(color) => {
                self.replace_feature(line_number, COLOR_TOKEN, |feature| PendingFeature {
                    color: Some(color.to_string()),
                    ..feature
                });
            }
            Line::Other => {}
        }
        self
    }

    fn replace_release(
        &mut self,
        line: usize,
        field: &'static str,
        update: impl FnOnce(PendingRelease) -> PendingRelease,
    ) {
        match self.release.take() {
            Some(release) => self.release = Some(update(release)),
            None => {
                debug!("Ignoring '{}' on line {}: no open release", field.trim(), line);
                self.warnings
                    .push(ParseWarning::FieldWithoutRelease { line, field });
            }
        }
    }

    fn replace_feature(
        &mut self,
        line: usize,
        field: &'static str,
        update: impl FnOnce(PendingFeature) -> PendingFeature,
    ) {
        match self.feature.take() {
            Some(feature) => self.feature = Some(update(feature)),
            None => {
                debug!("Ignoring '{}' on line {}: no open feature", field.trim(), line);
                self.warnings
                    .push(ParseWarning::FieldWithoutFeature { line, field });
            }
        }
    }

    fn finalize_feature(&mut self) {
        if let Some(feature) = self.feature.take() {
            self.features.push(feature.into_feature());
        }
    }

    fn finalize_release(&mut self) {
        let Some(release) = self.release.take() else {
            return;
        };

        if self.features.is_empty() {
            warn!(
                "Skipping release finalization for {} due to no features",
                release.version
            );
            self.warnings.push(ParseWarning::ReleaseWithoutFeatures {
                version: release.version,
            });
            return;
        }

        if !release.change.is_empty() && VersionChange::recognize(&release.change).is_none() {
            self.warnings.push(ParseWarning::UnrecognizedChange {
                version: release.version.clone(),
                label: release.change.clone(),
            });
        }

        let version = AppVersion::new(release.version, VersionChange::from_label(&release.change));
        let features = std::mem::take(&mut self.features);
        self.releases.push(Release::new(version, release.title, features));
    }

    fn finish(mut self) -> ParseReport {
        self.finalize_feature();
        self.finalize_release();
        self.releases.reverse();

        ParseReport {
            releases: self.releases,
            warnings: self.warnings,
        }
    }
}
