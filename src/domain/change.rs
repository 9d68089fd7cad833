use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::version::SemanticVersion;

/// Coarse classification of how significant a release is.
///
/// Independent of the numeric version: a `1.0.1` label may still be
/// announced as a `major` change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionChange {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionChange {
    /// Parse a change label case-insensitively. Anything unrecognized is a patch.
    pub fn from_label(label: &str) -> Self {
        Self::recognize(label).unwrap_or_default()
    }

    /// Like [`VersionChange::from_label`] but reports unknown labels as `None`.
    pub fn recognize(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "major" => Some(VersionChange::Major),
            "minor" => Some(VersionChange::Minor),
            "patch" => Some(VersionChange::Patch),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            VersionChange::Patch => 0,
            VersionChange::Minor => 1,
            VersionChange::Major => 2,
        }
    }

    /// Whether this change is at least as significant as `other`
    pub fn is_at_least(self, other: VersionChange) -> bool {
        self.rank() >= other.rank()
    }
}

impl FromStr for VersionChange {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VersionChange::from_label(s))
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionChange::Major => write!(f, "major"),
            VersionChange::Minor => write!(f, "minor"),
            VersionChange::Patch => write!(f, "patch"),
        }
    }
}

/// A version of the app as shown to the user.
///
/// `label` is the release's identity, so a release is only ever shown once
/// per label. `change` is metadata, e.g. for only presenting notes on major
/// or minor updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AppVersion {
    pub label: String,
    pub change: VersionChange,
}

impl AppVersion {
    pub fn new(label: impl Into<String>, change: VersionChange) -> Self {
        AppVersion {
            label: label.into(),
            change,
        }
    }

    /// Numeric reading of the label, see [`SemanticVersion::parse`]
    pub fn semantic_version(&self) -> SemanticVersion {
        SemanticVersion::parse(&self.label)
    }
}
