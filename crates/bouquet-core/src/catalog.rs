//! Static catalog of selectable flower kinds.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Catalog contains no flowers")]
    Empty,

    #[error("Catalog entry at index {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate flower id: '{0}'")]
    DuplicateId(String),
}

/// One selectable flower kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowerKind {
    /// Catalog key, e.g. `"rose"`.
    pub id: String,
    /// Display name shown in the picker.
    pub name: String,
    /// Image path relative to the site root.
    pub src: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    flowers: Vec<FlowerKind>,
}

/// Read-only list of flower kinds, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    flowers: Vec<FlowerKind>,
}

impl Catalog {
    /// Builds a catalog from entries, validating ids.
    pub fn new(flowers: Vec<FlowerKind>) -> Result<Self, CatalogError> {
        if flowers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(flowers.len());
        for (index, flower) in flowers.iter().enumerate() {
            if flower.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !seen.insert(flower.id.as_str()) {
                return Err(CatalogError::DuplicateId(flower.id.clone()));
            }
        }

        Ok(Self { flowers })
    }

    /// Loads a catalog from a JSON document of the form `{ "flowers": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.flowers)
    }

    /// The built-in flower set.
    /// Loaded from catalog/flowers.json at compile time.
    pub fn default_garden() -> Self {
        const DEFAULT_CATALOG_JSON: &str = include_str!("../catalog/flowers.json");
        Self::from_json(DEFAULT_CATALOG_JSON).expect("Failed to parse default catalog JSON")
    }

    pub fn get(&self, id: &str) -> Option<&FlowerKind> {
        self.flowers.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[FlowerKind] {
        &self.flowers
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_garden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(id: &str) -> FlowerKind {
        FlowerKind {
            id: id.to_string(),
            name: id.to_uppercase(),
            src: format!("assets/{id}.png"),
        }
    }

    #[test]
    fn test_default_garden_loads() {
        let catalog = Catalog::default_garden();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.entries()[0].id, "rose");
        assert_eq!(catalog.get("tulip").unwrap().name, "Pink Tulip");
        assert!(catalog.contains("vibrant_flower"));
        assert!(!catalog.contains("cactus"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![kind("rose"), kind("lily"), kind("rose")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "rose"));
    }

    #[test]
    fn test_rejects_empty_catalog_and_ids() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::new(vec![kind("rose"), kind(" ")]),
            Err(CatalogError::EmptyId(1))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{ \"flowers\": 3 }"),
            Err(CatalogError::Json(_))
        ));
    }
}
