//! App Configuration
//!
//! Page title and the demo catalog the board starts with.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::Item;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../assets/seed.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub tagline: String,
    /// Initial items, newest first
    #[serde(default)]
    pub seed: Vec<Item>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "분실물 보관소".to_string(),
            tagline: String::new(),
            seed: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration bundled with the build
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Validated catalog holding the seed items
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::from_items(self.seed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::error::CatalogError;

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::embedded().unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        for category in Category::DISPLAY_ORDER {
            assert_eq!(catalog.tally().count(category), 1);
        }
        assert_eq!(catalog.items()[0].id, 1);
    }

    #[test]
    fn test_unknown_category_is_config_error() {
        let json = r#"{"title":"t","tagline":"","seed":[{"id":1,"category":"all","name":"n","location":"l","date":"2025-01-01","status":"lost"}]}"#;
        assert!(matches!(AppConfig::from_json(json), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_seed_at_max_id_is_rejected() {
        let json = r#"{"title":"t","tagline":"","seed":[{"id":4294967295,"category":"card","name":"n","location":"l","date":"2025-01-01","status":"found"}]}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert!(matches!(config.catalog(), Err(CatalogError::IdSpaceExhausted)));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"title":"t","tagline":"","seed":[{"id":4,"category":"card","name":"n","location":"l","date":"2025-01-01","status":"found"}]}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.seed[0].description, "");
        assert!(config.seed[0].image.is_none());
    }
}
