// src/lib.rs
pub mod batch;
pub mod config;
pub mod error;
pub mod processing;
pub mod utils;

pub use config::CatalogConfig;
pub use error::{IndexError, Result};
pub use processing::indices::{IndexDefinition, IndexGroup};
pub use processing::{IndexCatalog, IndexRaster, IndexRegistry};

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
