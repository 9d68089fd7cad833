//! Resource loading abstraction layer
//!
//! Release notes are usually shipped as a Markdown file next to the
//! application. This module locates such a file by logical name
//! (`"Releases"` -> `Releases.md`) and hands back its text.
//!
//! # Overview
//!
//! The primary abstraction is the [ResourceLoader] trait. The concrete
//! implementations are:
//!
//! - [directory::DirectoryResources]: reads `<name>.md` from a directory on disk
//! - [memory::InMemoryResources]: a map of names to text, for tests and embedding
//!
//! A resource that does not exist is not an error: loaders return an empty
//! string, which the parser turns into an empty release list.
//!
//! ```rust
//! # use recap::resource::{InMemoryResources, ResourceLoader};
//! let mut resources = InMemoryResources::new();
//! resources.insert("Releases", "# 1.0.0");
//! assert_eq!(resources.load("Releases").unwrap(), "# 1.0.0");
//! assert_eq!(resources.load("Missing").unwrap(), "");
//! ```

pub mod directory;
pub mod memory;

pub use directory::DirectoryResources;
pub use memory::InMemoryResources;

use crate::error::Result;

/// Extension given to resource names
pub const RESOURCE_EXTENSION: &str = "md";

/// Source of release-notes text
///
/// ## Error Handling
///
/// A missing resource yields `Ok(String::new())`. Errors are reserved for
/// resources that exist but cannot be read.
pub trait ResourceLoader: Send + Sync {
    /// Load the full text of the resource called `name`
    ///
    /// # Arguments
    /// * `name` - Logical resource name, with or without the `.md` extension
    ///
    /// # Returns
    /// * `Ok(String)` - The resource text, or an empty string if it does not exist
    /// * `Err` - If the resource exists but could not be read
    fn load(&self, name: &str) -> Result<String>;
}

/// File name for a logical resource name (`Releases` -> `Releases.md`)
pub fn file_name(name: &str) -> String {
    let suffix = format!(".{}", RESOURCE_EXTENSION);
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}
