use serde::Serialize;

use super::change::AppVersion;
use super::feature::Feature;

/// One versioned set of release notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: AppVersion,
    pub title: String,
    pub features: Vec<Feature>,
}

impl Release {
    pub fn new(version: AppVersion, title: impl Into<String>, features: Vec<Feature>) -> Self {
        Release {
            version,
            title: title.into(),
            features,
        }
    }

    /// Identity of the release: its version label
    pub fn id(&self) -> &str {
        &self.version.label
    }
}
