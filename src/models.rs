//! Frontend Models
//!
//! Data structures for the static function catalog.

use serde::{Deserialize, Serialize};

/// One private equity function: menu label plus long-form description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionEntry {
    /// URL-safe token used in `/function/:id`
    pub id: String,
    pub name: String,
    /// Paragraphs separated by a blank line
    #[serde(default)]
    pub description: Option<String>,
}

/// Result of resolving a path id against the catalog.
/// Always populated; unknown ids carry placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFunction {
    pub name: String,
    pub description: String,
}
