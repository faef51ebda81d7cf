// src/processing/raster.rs
use ndarray::{Array3, Axis};

use crate::processing::masked::MaskedPlane;
use crate::utils::fixed_point::to_fixed_point;

/// A computed index, shaped (1, rows, cols) like a single-band raster.
///
/// Masked pixels hold `fill_value` in [`data`](Self::data) and `true` in
/// [`mask`](Self::mask). Every unmasked value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRaster {
    data: Array3<f32>,
    mask: Array3<bool>,
    fill_value: f32,
}

impl IndexRaster {
    pub fn from_plane(plane: MaskedPlane, fill_value: f32) -> Self {
        let data = plane.filled(fill_value).insert_axis(Axis(0));
        let (_, mask) = plane.into_parts();

        Self {
            data,
            mask: mask.insert_axis(Axis(0)),
            fill_value,
        }
    }

    /// (1, rows, cols)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    pub fn mask(&self) -> &Array3<bool> {
        &self.mask
    }

    pub fn fill_value(&self) -> f32 {
        self.fill_value
    }

    /// Value at a pixel, `None` where masked or outside the raster.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        match self.mask.get([0, row, col]) {
            Some(false) => self.data.get([0, row, col]).copied(),
            _ => None,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|&&masked| !masked).count()
    }

    pub fn masked_count(&self) -> usize {
        self.mask.len() - self.valid_count()
    }

    pub fn to_fixed_point(&self, scale_factor: i32) -> Array3<i16> {
        to_fixed_point(&self.data, &self.mask, scale_factor)
    }

    pub fn into_parts(self) -> (Array3<f32>, Array3<bool>) {
        (self.data, self.mask)
    }
}
