//! Data-only helpers for whatever presents the releases.
//!
//! Nothing here draws anything; it answers the questions a release screen
//! asks about the parsed model: which page to open on, whether paging chrome
//! is needed, and which releases a user has not seen yet.

use serde::{Deserialize, Serialize};

use crate::domain::{Release, SemanticVersion, VersionChange};

/// How feature icons are filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFillMode {
    #[default]
    Solid,
    Gradient,
}

/// Page shown first. Pages are: an optional leading page, one page per
/// release, an optional trailing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartIndex {
    #[default]
    Leading,
    Trailing,
    Release(usize),
}

/// Page arithmetic for a given number of releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    release_count: usize,
}

impl PageLayout {
    pub fn new(release_count: usize) -> Self {
        PageLayout { release_count }
    }

    pub fn for_releases(releases: &[Release]) -> Self {
        PageLayout::new(releases.len())
    }

    /// Index of the page `start` refers to
    pub fn tab_index(&self, start: StartIndex) -> usize {
        match start {
            StartIndex::Leading => 0,
            StartIndex::Trailing => self.release_count + 1,
            StartIndex::Release(index) => index + 1,
        }
    }

    /// Total pages including the leading and trailing ones
    pub fn page_count(&self) -> usize {
        self.release_count + 2
    }

    pub fn shows_page_indicator(&self) -> bool {
        self.release_count > 1
    }
}

/// Releases newer than `last_seen` whose change is at least `minimum`.
///
/// Order is preserved. Use `VersionChange::Patch` to keep every newer release.
pub fn unseen_releases<'a>(
    releases: &'a [Release],
    last_seen: &SemanticVersion,
    minimum: VersionChange,
) -> Vec<&'a Release> {
    releases
        .iter()
        .filter(|release| is_unseen(release, last_seen, minimum))
        .collect()
}

/// Whether `release` is newer than `last_seen` and at least `minimum`
pub fn is_unseen(release: &Release, last_seen: &SemanticVersion, minimum: VersionChange) -> bool {
    release.version.semantic_version() > *last_seen && release.version.change.is_at_least(minimum)
}
