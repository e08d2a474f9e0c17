//! Function Catalog
//!
//! Immutable id -> (name, description) lookup built once from the
//! embedded `content/functions.json` document.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::models::{FunctionEntry, ResolvedFunction};

/// Label shown for ids that are not in the catalog
pub const UNKNOWN_FUNCTION_NAME: &str = "Unknown Function";

/// Text shown when an id has no description
pub const DESCRIPTION_UNAVAILABLE: &str = "Description not available.";

const BUILTIN_JSON: &str = include_str!("../content/functions.json");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Malformed catalog document: {0}")]
    Parse(String),

    #[error("Duplicate function id: {0}")]
    DuplicateId(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FunctionEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from entries in menu order. Ids must be unique.
    pub fn new(entries: Vec<FunctionEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<FunctionEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The catalog shipped with the app, parsed on first use
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| match Catalog::from_json(BUILTIN_JSON) {
            Ok(catalog) => {
                log::debug!("[CATALOG] Loaded {} functions", catalog.entries().len());
                catalog
            }
            Err(e) => {
                log::error!("[CATALOG] {}", e);
                Catalog::default()
            }
        })
    }

    /// Menu entries in display order
    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&FunctionEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Resolve a path id. Name and description degrade independently
    /// to their placeholders; this never fails.
    pub fn resolve(&self, id: &str) -> ResolvedFunction {
        let entry = self.get(id);
        let name = entry
            .map(|e| e.name.clone())
            .unwrap_or_else(|| UNKNOWN_FUNCTION_NAME.to_string());
        let description = entry
            .and_then(|e| e.description.clone())
            .unwrap_or_else(|| DESCRIPTION_UNAVAILABLE.to_string());
        ResolvedFunction { name, description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, description: Option<&str>) -> FunctionEntry {
        FunctionEntry {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_builtin_catalog_order_and_integrity() {
        let catalog = Catalog::from_json(BUILTIN_JSON).unwrap();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "deal-sourcing",
                "due-diligence",
                "valuation",
                "deal-structuring",
                "portfolio-management",
                "exit-strategies",
                "investor-relations",
                "market-analysis",
                "risk-assessment",
            ]
        );
        for e in catalog.entries() {
            let desc = e.description.as_deref().unwrap_or("");
            assert!(!desc.is_empty(), "{} has no description", e.id);
            assert_eq!(desc.split("\n\n").count(), 2, "{} paragraphs", e.id);
        }
    }

    #[test]
    fn test_resolve_known_id() {
        let resolved = Catalog::builtin().resolve("valuation");
        assert_eq!(resolved.name, "Valuation and Financial Modeling");
        assert!(resolved
            .description
            .starts_with("Valuation and financial modeling are crucial components"));
    }

    #[test]
    fn test_resolve_unknown_id_uses_placeholders() {
        for id in ["", "nope", "VALUATION", "valuation/", "../etc"] {
            let resolved = Catalog::builtin().resolve(id);
            assert_eq!(resolved.name, UNKNOWN_FUNCTION_NAME);
            assert_eq!(resolved.description, DESCRIPTION_UNAVAILABLE);
        }
    }

    #[test]
    fn test_missing_description_degrades_independently() {
        let catalog = Catalog::new(vec![entry("lbo", "LBO Modeling", None)]).unwrap();
        let resolved = catalog.resolve("lbo");
        assert_eq!(resolved.name, "LBO Modeling");
        assert_eq!(resolved.description, DESCRIPTION_UNAVAILABLE);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![
            entry("a", "A", Some("x")),
            entry("a", "A again", Some("y")),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_description_field_is_optional_in_json() {
        let catalog = Catalog::from_json(r#"[{"id": "x", "name": "X"}]"#).unwrap();
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.get("x").unwrap().description, None);
    }
}
