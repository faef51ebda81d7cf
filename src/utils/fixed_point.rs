// src/utils/fixed_point.rs
use ndarray::{Array3, Zip};

pub const NODATA_VALUE_INT: i16 = -10000;

/// Scale float index values into int16, writing `NODATA_VALUE_INT` where masked.
///
/// Valid values are clamped to `[-9999, i16::MAX]` so they can never collide
/// with the no-data value.
pub fn to_fixed_point(data: &Array3<f32>, mask: &Array3<bool>, scale_factor: i32) -> Array3<i16> {
    let scale = scale_factor as f32;
    Zip::from(data).and(mask).map_collect(|&value, &masked| {
        if masked {
            NODATA_VALUE_INT
        } else {
            (value * scale)
                .round()
                .clamp(NODATA_VALUE_INT as f32 + 1.0, i16::MAX as f32) as i16
        }
    })
}
