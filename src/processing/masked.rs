// src/processing/masked.rs
use std::ops::{Add, Div, Mul, Sub};

use ndarray::{Array2, Array3, ArrayView3, Axis, Zip};

use crate::error::{IndexError, Result};
use crate::processing::indices::REQUIRED_BANDS;

/// Planes at least this large are traversed with rayon; smaller ones
/// (test images, thumbnails) stay on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 512 * 512;

/// A 2D plane of values paired with a mask, `true` marking invalid pixels.
///
/// Arithmetic between planes ORs the operand masks. A pixel whose result is
/// not finite (zero divisor, overflow, NaN input) is masked as well, so the
/// valid part of a plane only ever holds finite numbers. Masked pixels hold
/// `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedPlane {
    data: Array2<f32>,
    mask: Array2<bool>,
}

impl MaskedPlane {
    pub fn new(data: Array2<f32>, mask: Array2<bool>) -> Result<Self> {
        if data.dim() != mask.dim() {
            return Err(IndexError::ShapeMismatch(format!(
                "plane mask {:?} does not match data {:?}",
                mask.dim(),
                data.dim()
            )));
        }

        let mut plane = Self { data, mask };
        plane.sanitize();
        Ok(plane)
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.mask[[row, col]]
    }

    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|&&masked| !masked).count()
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Copy of the data with every masked pixel replaced by `fill`.
    pub fn filled(&self, fill: f32) -> Array2<f32> {
        Zip::from(&self.data)
            .and(&self.mask)
            .map_collect(|&value, &masked| if masked { fill } else { value })
    }

    pub fn into_parts(self) -> (Array2<f32>, Array2<bool>) {
        (self.data, self.mask)
    }

    fn sanitize(&mut self) {
        Zip::from(&mut self.data)
            .and(&mut self.mask)
            .for_each(|value, masked| {
                *masked |= !value.is_finite();
                if *masked {
                    *value = 0.0;
                }
            });
    }

    fn combine<F>(&self, rhs: &Self, op: F) -> Self
    where
        F: Fn(f32, f32) -> f32 + Sync + Send,
    {
        let mut data = Array2::zeros(self.data.raw_dim());
        let mut mask = Array2::from_elem(self.data.raw_dim(), false);

        let kernel = |out: &mut f32, invalid: &mut bool, &a: &f32, &a_masked: &bool, &b: &f32, &b_masked: &bool| {
            if a_masked || b_masked {
                *invalid = true;
                return;
            }
            let value = op(a, b);
            if value.is_finite() {
                *out = value;
            } else {
                *invalid = true;
            }
        };

        let zip = Zip::from(&mut data)
            .and(&mut mask)
            .and(&self.data)
            .and(&self.mask)
            .and(&rhs.data)
            .and(&rhs.mask);

        if self.data.len() >= PARALLEL_THRESHOLD {
            zip.par_for_each(kernel);
        } else {
            zip.for_each(kernel);
        }

        Self { data, mask }
    }
}

macro_rules! impl_masked_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<'a, 'b> $trait<&'b MaskedPlane> for &'a MaskedPlane {
            type Output = MaskedPlane;

            fn $method(self, rhs: &'b MaskedPlane) -> MaskedPlane {
                self.combine(rhs, $op)
            }
        }

        impl<'b> $trait<&'b MaskedPlane> for MaskedPlane {
            type Output = MaskedPlane;

            fn $method(self, rhs: &'b MaskedPlane) -> MaskedPlane {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<MaskedPlane> for &'a MaskedPlane {
            type Output = MaskedPlane;

            fn $method(self, rhs: MaskedPlane) -> MaskedPlane {
                self.$method(&rhs)
            }
        }

        impl $trait<MaskedPlane> for MaskedPlane {
            type Output = MaskedPlane;

            fn $method(self, rhs: MaskedPlane) -> MaskedPlane {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_masked_op!(Add, add, |a, b| a + b);
impl_masked_op!(Sub, sub, |a, b| a - b);
impl_masked_op!(Mul, mul, |a, b| a * b);
// A zero divisor is invalid even when the numerator is zero too.
impl_masked_op!(Div, div, |a: f32, b: f32| if b == 0.0 { f32::NAN } else { a / b });

/// Read-only view of a (band, row, col) image together with its no-data mask.
#[derive(Debug, Clone)]
pub struct MaskedImage<'a> {
    data: ArrayView3<'a, f32>,
    mask: Array3<bool>,
}

impl<'a> MaskedImage<'a> {
    /// Pairs `data` with `mask`, or with `data == nodata` when no mask is given.
    /// An explicit mask is used as is and never merged with the default one.
    ///
    /// `data` must hold exactly [`REQUIRED_BANDS`] bands so every formula can
    /// read its planes.
    pub fn new(data: ArrayView3<'a, f32>, mask: Option<Array3<bool>>, nodata: f32) -> Result<Self> {
        if data.len_of(Axis(0)) != REQUIRED_BANDS {
            return Err(IndexError::ShapeMismatch(format!(
                "image must have {} bands, got {} (shape {:?})",
                REQUIRED_BANDS,
                data.len_of(Axis(0)),
                data.dim()
            )));
        }

        let mask = match mask {
            Some(mask) => {
                if mask.dim() != data.dim() {
                    return Err(IndexError::ShapeMismatch(format!(
                        "mask shape {:?} does not match image shape {:?}",
                        mask.dim(),
                        data.dim()
                    )));
                }
                mask
            }
            None => data.mapv(|value| value == nodata),
        };

        Ok(Self { data, mask })
    }

    pub fn band_count(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// (bands, rows, cols)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn data(&self) -> ArrayView3<'a, f32> {
        self.data
    }

    pub fn mask(&self) -> &Array3<bool> {
        &self.mask
    }

    /// Masked copy of one band plane, by 0-based array index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`band_count`](Self::band_count).
    pub fn band(&self, index: usize) -> MaskedPlane {
        let mut plane = MaskedPlane {
            data: self.data.index_axis(Axis(0), index).to_owned(),
            mask: self.mask.index_axis(Axis(0), index).to_owned(),
        };
        plane.sanitize();
        plane
    }
}
