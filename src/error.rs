// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a catalog or looking up an index.
///
/// Per-pixel problems (zero divisors, no-data inputs) are never reported
/// here; they end up as masked pixels in the output raster.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("unknown index '{name}', expected one of: {available}")]
    UnknownIndex { name: String, available: String },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("index '{0}' is registered more than once")]
    DuplicateIndex(&'static str),

    #[error("failed to read config file {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
