// src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};

/// Settings shared by every index computed from one catalog.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Input value treated as no-data when no explicit mask is given.
    #[serde(default)]
    pub input_nodata: f32,
    /// Value written to masked pixels of an output raster.
    #[serde(default = "default_fill_value")]
    pub fill_value: f32,
}

fn default_fill_value() -> f32 {
    -999.0
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_nodata: 0.0,
            fill_value: default_fill_value(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IndexError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
