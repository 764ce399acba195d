use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// A single recipe as surfaced to callers.
///
/// Immutable once constructed: searches and recommendations always hand out
/// new values, never edit a list in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Total preparation time in minutes; 0 means unspecified.
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Debug,
    PartialEq,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchMode {
    /// Bidirectional case-insensitive containment: "Pepper" matches both
    /// "Bell Pepper" and "Black Pepper", and "Chick" matches "Chicken".
    /// Deliberately loose; over-matching is accepted behavior.
    #[default]
    Substring,
    /// Whole-token overlap: "Pepper" still matches "Bell Pepper", but a
    /// partial word like "Chick" no longer matches "Chicken".
    Token,
}
