//! Release-notes model - immutable values produced by the parser

pub mod change;
pub mod color;
pub mod feature;
pub mod release;
pub mod version;

pub use change::{AppVersion, VersionChange};
pub use color::{ColorFallbacks, ColorName, Rgba};
pub use feature::{Alignment, Feature, DEFAULT_COLOR, DEFAULT_SYMBOL};
pub use release::Release;
pub use version::SemanticVersion;
