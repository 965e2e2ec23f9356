use serde::{Deserialize, Serialize};

use super::defaults;
use crate::catalog::TypeCatalog;
use crate::errors::CatalogError;
use crate::quiz::QuestionSetSize;

/// Catalog loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Reject type catalogs that do not cover all 27 codes.
    pub require_complete_types: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            require_complete_types: defaults::DEFAULT_REQUIRE_COMPLETE_TYPES,
        }
    }
}

impl CatalogConfig {
    /// Load a type catalog from JSON under this config's strictness.
    pub fn load_types(
        &self,
        size: QuestionSetSize,
        json: &str,
    ) -> Result<TypeCatalog, CatalogError> {
        let catalog = TypeCatalog::from_json_str(size, json)?;
        if self.require_complete_types {
            catalog.validate()?;
        }
        Ok(catalog)
    }
}
