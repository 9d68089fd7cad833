pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod parser;
pub mod presentation;
pub mod resource;
pub mod ui;

pub use domain::{AppVersion, Feature, Release, SemanticVersion, VersionChange};
pub use error::{RecapError, Result};
pub use parser::{parse, ReleasesParser};
