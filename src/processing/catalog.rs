// src/processing/catalog.rs
use itertools::Itertools;
use log::{debug, warn};
use ndarray::{Array3, ArrayView3};

use crate::config::CatalogConfig;
use crate::error::{IndexError, Result};
use crate::processing::indices::IndexDefinition;
use crate::processing::masked::MaskedImage;
use crate::processing::raster::IndexRaster;
use crate::processing::registry::IndexRegistry;

/// Computes named spectral indices from a 9-band ASTER image on demand.
///
/// The image is borrowed for the lifetime of the catalog and never modified.
/// Nothing is cached: each [`compute`](Self::compute) call evaluates its
/// formula from scratch, so the catalog can be shared across threads.
///
/// ```
/// use aster_indices::IndexCatalog;
/// use ndarray::Array3;
///
/// let image = Array3::from_shape_fn((9, 2, 2), |(band, _, _)| band as f32 + 1.0);
/// let catalog = IndexCatalog::new(image.view(), None)?;
/// let ndvi = catalog.compute("NDVI")?;
/// assert_eq!(ndvi.dim(), (1, 2, 2));
/// # Ok::<(), aster_indices::IndexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexCatalog<'a> {
    image: MaskedImage<'a>,
    registry: IndexRegistry,
    config: CatalogConfig,
}

impl<'a> IndexCatalog<'a> {
    /// Build a catalog over `image` (band, row, col).
    ///
    /// Without a mask, pixels equal to `0.0` are masked.
    pub fn new(image: ArrayView3<'a, f32>, mask: Option<Array3<bool>>) -> Result<Self> {
        Self::with_config(image, mask, CatalogConfig::default())
    }

    pub fn with_config(
        image: ArrayView3<'a, f32>,
        mask: Option<Array3<bool>>,
        config: CatalogConfig,
    ) -> Result<Self> {
        let (_, rows, cols) = image.dim();
        let image = MaskedImage::new(image, mask, config.input_nodata)?;
        let registry = IndexRegistry::standard()?;

        debug!(
            "index catalog ready: {}x{} pixels, {} indices",
            cols,
            rows,
            registry.len()
        );

        Ok(Self {
            image,
            registry,
            config,
        })
    }

    /// Evaluate the index called `name`.
    pub fn compute(&self, name: &str) -> Result<IndexRaster> {
        let definition = self.definition(name)?;
        debug!("computing {} = {}", definition.name, definition.expression);

        let plane = (definition.formula)(&self.image);
        let raster = IndexRaster::from_plane(plane, self.config.fill_value);

        let masked = raster.masked_count();
        if masked > 0 && raster.valid_count() == 0 {
            warn!("{}: every pixel is masked", definition.name);
        } else if masked > 0 {
            debug!("{}: {} masked pixels", definition.name, masked);
        }

        Ok(raster)
    }

    pub fn definition(&self, name: &str) -> Result<&'static IndexDefinition> {
        self.registry
            .get(name)
            .ok_or_else(|| IndexError::UnknownIndex {
                name: name.to_string(),
                available: self.registry.names().join(", "),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.names()
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn image(&self) -> ArrayView3<'a, f32> {
        self.image.data()
    }

    /// Mask in effect for the source image, `true` = excluded.
    pub fn mask(&self) -> &Array3<bool> {
        self.image.mask()
    }
}
