use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Word list JSON file, bundled list is used when unset
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self {
            path: env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}
