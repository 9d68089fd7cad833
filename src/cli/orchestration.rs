//! Main workflow orchestration logic
//!
//! Loads release notes, parses them and writes the selected releases. Kept
//! apart from `main.rs` so the workflow can be driven without `clap`.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;

use crate::config::Config;
use crate::diagnostics::ParseWarning;
use crate::domain::{Release, SemanticVersion, VersionChange};
use crate::error::{RecapError, Result};
use crate::parser::{ParseReport, ReleasesParser};
use crate::presentation::is_unseen;
use crate::resource::{DirectoryResources, ResourceLoader};
use crate::ui::{self, OutputFormat, ReleaseOutput};

/// Arguments for the recap workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecapArgs {
    /// Logical resource name; the configured default when `None`
    pub resource: Option<String>,

    /// Read this file instead of a resource
    pub file: Option<PathBuf>,

    /// Overrides the configured resource directory
    pub resource_dir: Option<PathBuf>,

    pub format: OutputFormat,

    /// Only show releases newer than this version
    pub since: Option<SemanticVersion>,

    /// Only show releases with at least this change kind
    pub minimum_change: VersionChange,

    /// Report parse warnings and fail when there are any
    pub check: bool,
}

/// Result of a workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Every release in the document, most recent block first
    pub releases: Vec<Release>,

    /// Indices into `releases` of the ones that passed the filters
    pub selected: Vec<usize>,

    pub warnings: Vec<ParseWarning>,

    pub check: bool,
}

impl RunOutcome {
    /// Releases that passed the filters, in output order
    pub fn selected_releases(&self) -> Vec<&Release> {
        self.selected.iter().map(|&index| &self.releases[index]).collect()
    }

    /// Version labels of [`RunOutcome::selected_releases`]
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected.iter().map(|&index| self.releases[index].id()).collect()
    }

    /// Process exit code: 1 when checking found warnings, 0 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.check && !self.warnings.is_empty() {
            1
        } else {
            0
        }
    }
}

/// Read the markdown named by `args`.
///
/// An explicit `--file` must exist. A resource that does not exist reads
/// as empty text.
pub fn load_markdown(args: &RecapArgs, config: &Config) -> Result<String> {
    if let Some(path) = &args.file {
        debug!("Reading release notes from {}", path.display());
        return fs::read_to_string(path).map_err(|e| {
            RecapError::resource(path.display().to_string(), path.clone(), e)
        });
    }

    let directory = args
        .resource_dir
        .clone()
        .unwrap_or_else(|| config.resources.directory.clone());
    let name = args
        .resource
        .as_deref()
        .unwrap_or(&config.resources.default_name);

    let resources = DirectoryResources::new(directory);
    debug!("Loading resource '{}' from {}", name, resources.root().display());
    resources.load(name)
}

/// Apply the `since` and `minimum_change` filters, keeping order
pub fn select_releases<'a>(
    releases: &'a [Release],
    since: Option<&SemanticVersion>,
    minimum: VersionChange,
) -> Vec<&'a Release> {
    select_indices(releases, since, minimum)
        .into_iter()
        .map(|index| &releases[index])
        .collect()
}

/// Positions of the releases [`select_releases`] keeps.
///
/// Labels are not unique, so callers that need to find the selection again
/// hold on to these instead.
pub fn select_indices(
    releases: &[Release],
    since: Option<&SemanticVersion>,
    minimum: VersionChange,
) -> Vec<usize> {
    releases
        .iter()
        .enumerate()
        .filter(|(_, release)| match since {
            Some(last_seen) => is_unseen(release, last_seen, minimum),
            None => release.version.change.is_at_least(minimum),
        })
        .map(|(index, _)| index)
        .collect()
}

/// Load, parse and filter without printing anything
pub fn evaluate(args: &RecapArgs, config: &Config) -> Result<RunOutcome> {
    let markdown = load_markdown(args, config)?;
    let ParseReport { releases, warnings } = ReleasesParser::new(markdown).report();

    let selected = select_indices(&releases, args.since.as_ref(), args.minimum_change);

    Ok(RunOutcome {
        releases,
        selected,
        warnings,
        check: args.check,
    })
}

/// Main recap workflow
///
/// 1. Load the markdown (file or resource)
/// 2. Parse it into releases
/// 3. Filter by version and change kind
/// 4. Print warnings when checking
/// 5. Print the releases as text or JSON
pub fn run(args: &RecapArgs, config: &Config) -> Result<RunOutcome> {
    let outcome = evaluate(args, config)?;

    if args.check {
        for warning in &outcome.warnings {
            ui::display_warning(warning);
        }
    }

    let shown = outcome.selected_releases();

    match args.format {
        OutputFormat::Json => {
            let output: Vec<ReleaseOutput<'_>> = shown
                .iter()
                .map(|&release| ReleaseOutput {
                    release,
                    resolved_colors: release
                        .features
                        .iter()
                        .map(|feature| feature.rgba(&config.colors))
                        .collect(),
                })
                .collect();
            ui::write_json(io::stdout().lock(), &output)?;
        }
        OutputFormat::Text if shown.is_empty() => ui::display_status("No releases to show"),
        OutputFormat::Text => ui::display_releases(&shown, &config.colors),
    }

    if args.check && outcome.warnings.is_empty() {
        ui::display_success("No problems found");
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppVersion;
    use crate::domain::Feature;
    use tempfile::TempDir;

    const NOTES: &str = "# 1.0.0\n### major\n- title: A\n\n# 1.1.0\n### patch\n- title: B\n";

    #[test]
    fn test_select_without_since_filters_by_change() {
        let releases = vec![
            Release::new(AppVersion::new("1.1.0", VersionChange::Patch), "", vec![Feature::new("B", "", "heart", "red")]),
            Release::new(AppVersion::new("1.0.0", VersionChange::Major), "", vec![Feature::new("A", "", "heart", "red")]),
        ];
        let ids: Vec<&str> = select_releases(&releases, None, VersionChange::Minor)
            .into_iter()
            .map(Release::id)
            .collect();
        assert_eq!(ids, vec!["1.0.0"]);
    }

    #[test]
    fn test_evaluate_resource_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Notes.md"), NOTES).unwrap();

        let args = RecapArgs {
            resource: Some("Notes".to_string()),
            resource_dir: Some(dir.path().to_path_buf()),
            ..RecapArgs::default()
        };
        let outcome = evaluate(&args, &Config::default()).unwrap();
        assert_eq!(outcome.selected_labels(), vec!["1.1.0", "1.0.0"]);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_evaluate_missing_resource_is_empty() {
        let dir = TempDir::new().unwrap();
        let args = RecapArgs {
            resource_dir: Some(dir.path().to_path_buf()),
            ..RecapArgs::default()
        };
        let outcome = evaluate(&args, &Config::default()).unwrap();
        assert!(outcome.releases.is_empty());
        assert!(outcome.selected.is_empty());
    }

    #[test]
    fn test_evaluate_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = RecapArgs {
            file: Some(dir.path().join("absent.md")),
            ..RecapArgs::default()
        };
        assert!(evaluate(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_duplicate_labels_select_by_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# 1.0.0\n### major\n- title: A\n# 1.0.0\n### patch\n- title: B\n").unwrap();

        let args = RecapArgs {
            file: Some(path),
            minimum_change: VersionChange::Minor,
            ..RecapArgs::default()
        };
        let outcome = evaluate(&args, &Config::default()).unwrap();
        assert_eq!(outcome.selected, vec![1]);
        let shown = outcome.selected_releases();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].features[0].title, "A");
    }

    #[test]
    fn test_check_fails_on_warnings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# 0.1.0\n## Empty\n").unwrap();

        let args = RecapArgs {
            file: Some(path),
            check: true,
            ..RecapArgs::default()
        };
        let outcome = evaluate(&args, &Config::default()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.exit_code(), 1);
    }
}
