// src/processing/indices/mod.rs
//! Band-ratio formulas for ASTER L1B/L2 imagery.
//!
//! Band constants follow the instrument's 1-based naming and hold the
//! 0-based array index of that band in a (band, row, col) image:
//!
//! | VNIR | SWIR |
//! |------|------|
//! | Band 1 = 0, Band 2 = 1, Band 3N = 2 | Band 4 = 3 … Band 9 = 8 |
use std::fmt;

use serde::Serialize;

use crate::processing::masked::{MaskedImage, MaskedPlane};

pub mod misc;
pub mod swir;
pub mod vnir;

pub const B1: usize = 0;
pub const B2: usize = 1;
pub const B3N: usize = 2;
pub const B4: usize = 3;
pub const B5: usize = 4;
pub const B6: usize = 5;
pub const B7: usize = 6;
pub const B8: usize = 7;
pub const B9: usize = 8;

/// Number of bands every formula may read from.
pub const REQUIRED_BANDS: usize = 9;

/// A pure per-pixel band combination.
pub type IndexFormula = fn(&MaskedImage<'_>) -> MaskedPlane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexGroup {
    Vnir,
    Swir,
    Misc,
}

impl fmt::Display for IndexGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IndexGroup::Vnir => "VNIR",
            IndexGroup::Swir => "SWIR",
            IndexGroup::Misc => "misc",
        };
        f.write_str(label)
    }
}

/// One named entry of the index catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndexDefinition {
    pub name: &'static str,
    pub group: IndexGroup,
    /// Band arithmetic in 1-based band names, e.g. `(B3N - B2) / (B3N + B2)`.
    pub expression: &'static str,
    pub reference: &'static str,
    #[serde(skip)]
    pub formula: IndexFormula,
}

/// Every standard definition, VNIR first, then SWIR, then miscellaneous.
pub fn standard_definitions() -> impl Iterator<Item = &'static IndexDefinition> {
    vnir::INDICES
        .iter()
        .chain(swir::INDICES.iter())
        .chain(misc::INDICES.iter())
}
