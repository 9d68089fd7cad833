use serde::Serialize;
use uuid::Uuid;

use super::color::{self, ColorFallbacks, Rgba};

/// Icon used when a feature does not name one
pub const DEFAULT_SYMBOL: &str = "heart";

/// Color specification used when a feature does not name one
pub const DEFAULT_COLOR: &str = "#000000";

/// Horizontal placement hint for a feature row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Leading,
    Center,
    Trailing,
}

/// A single item of a release, shown as one row.
///
/// Every feature gets a fresh `id` when it is created. The id is for list
/// identity only and is ignored by `==`.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub symbol: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Feature {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        symbol: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Feature {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            symbol: symbol.into(),
            color: color.into(),
            alignment: None,
        }
    }

    pub fn with_alignment(self, alignment: Alignment) -> Self {
        Feature {
            alignment: Some(alignment),
            ..self
        }
    }

    /// Resolve the color specification, see [`color::resolve`]
    pub fn rgba(&self, fallbacks: &ColorFallbacks) -> Rgba {
        color::resolve(&self.color, fallbacks)
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.symbol == other.symbol
            && self.color == other.color
            && self.alignment == other.alignment
    }
}

impl Eq for Feature {}
