use serde::Serialize;
use std::fmt;

/// Three-part numeric version used to order releases.
///
/// Parsing is lenient: the label is split on `.`, the first three
/// components become major, minor and patch, and any component that is
/// missing or not a non-negative integer becomes 0. Pre-release and build
/// suffixes are not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version label (e.g., "1.2.3" -> SemanticVersion(1,2,3))
    ///
    /// Never fails: `"3"` is `3.0.0`, `"1.A.3"` is `1.0.3` and `""` is `0.0.0`.
    pub fn parse(version: &str) -> Self {
        let mut parts = version.split('.').map(|part| part.parse::<u64>().unwrap_or(0));

        SemanticVersion {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }
}

impl From<&str> for SemanticVersion {
    fn from(version: &str) -> Self {
        SemanticVersion::parse(version)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
