// src/processing/mod.rs
pub mod catalog;
pub mod indices;
pub mod masked;
pub mod raster;
pub mod registry;

// Re-export main components
pub use catalog::IndexCatalog;
pub use masked::{MaskedImage, MaskedPlane};
pub use raster::IndexRaster;
pub use registry::IndexRegistry;
