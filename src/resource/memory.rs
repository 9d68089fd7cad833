use crate::error::Result;
use crate::resource::{file_name, ResourceLoader};
use std::collections::HashMap;

/// Map-backed resources, keyed by file name
#[derive(Debug, Clone, Default)]
pub struct InMemoryResources {
    files: HashMap<String, String>,
}

impl InMemoryResources {
    /// Create an empty set of resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the resource `name`
    pub fn insert(&mut self, name: &str, contents: impl Into<String>) {
        self.files.insert(file_name(name), contents.into());
    }

    pub fn with(mut self, name: &str, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }
}

impl ResourceLoader for InMemoryResources {
    fn load(&self, name: &str) -> Result<String> {
        Ok(self.files.get(&file_name(name)).cloned().unwrap_or_default())
    }
}
