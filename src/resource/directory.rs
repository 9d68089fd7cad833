use crate::error::{RecapError, Result};
use crate::resource::{file_name, ResourceLoader};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Loads resources from a directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryResources { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the resource `name` would be read from
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(file_name(name))
    }
}

impl ResourceLoader for DirectoryResources {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No resource at {}, using empty release notes", path.display());
                Ok(String::new())
            }
            Err(e) => Err(RecapError::resource(name, path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_resource() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Releases.md"), "# 1.0.0\n").unwrap();

        let resources = DirectoryResources::new(dir.path());
        assert_eq!(resources.load("Releases").unwrap(), "# 1.0.0\n");
        assert_eq!(resources.load("Releases.md").unwrap(), "# 1.0.0\n");
    }

    #[test]
    fn test_missing_resource_is_empty() {
        let dir = TempDir::new().unwrap();
        let resources = DirectoryResources::new(dir.path());
        assert_eq!(resources.load("Nothing").unwrap(), "");
    }

    #[test]
    fn test_unreadable_resource_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text.
        std::fs::create_dir(dir.path().join("Releases.md")).unwrap();

        let resources = DirectoryResources::new(dir.path());
        let err = resources.load("Releases").unwrap_err();
        assert!(matches!(err, RecapError::Resource { .. }));
    }
}
