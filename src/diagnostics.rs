use std::fmt;

/// Non-fatal problems noticed while parsing release notes.
/// Parsing always completes; these only explain what was skipped or defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A `# ` block ended before any `- title: ` entry, so it was dropped
    ReleaseWithoutFeatures { version: String },
    /// A release field (`## `, `### `) appeared before any `# ` line
    FieldWithoutRelease { line: usize, field: &'static str },
    /// A feature field appeared before any `- title: ` line of its release
    FieldWithoutFeature { line: usize, field: &'static str },
    /// The `### ` label is not major, minor or patch; the release is a patch
    UnrecognizedChange { version: String, label: String },
}

impl ParseWarning {
    /// Source line the warning points at, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseWarning::FieldWithoutRelease { line, .. }
            | ParseWarning::FieldWithoutFeature { line, .. } => Some(*line),
            ParseWarning::ReleaseWithoutFeatures { .. }
            | ParseWarning::UnrecognizedChange { .. } => None,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::ReleaseWithoutFeatures { version } => {
                write!(f, "Skipping release '{}': it has no features", version)
            }
            ParseWarning::FieldWithoutRelease { line, field } => {
                write!(f, "Line {}: '{}' outside of a release block", line, field)
            }
            ParseWarning::FieldWithoutFeature { line, field } => {
                write!(f, "Line {}: '{}' before any feature title", line, field)
            }
            ParseWarning::UnrecognizedChange { version, label } => {
                write!(
                    f,
                    "Release '{}': unknown change type '{}', using patch",
                    version, label
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_reported_for_field_warnings() {
        let warning = ParseWarning::FieldWithoutFeature {
            line: 7,
            field: "- symbol: ",
        };
        assert_eq!(warning.line(), Some(7));

        let warning = ParseWarning::ReleaseWithoutFeatures {
            version: "1.0.0".to_string(),
        };
        assert_eq!(warning.line(), None);
    }
}
