// Bounds Clamper - keeps user-supplied counts and dimensions inside what the grid allows

use crate::matrix::cell::{Dimensions, Grid};

/// Clamp a requested highlight count to `[0, cell_count]`.
/// An empty grid always yields 0.
pub fn clamp_nearest_count(count: i64, grid: &Grid) -> usize {
    let max = grid.cell_count();
    if max == 0 || count <= 0 {
        return 0;
    }
    usize::try_from(count).map_or(max, |count| count.min(max))
}

/// Round to the nearest integer, then clamp into `[0, Dimensions::MAX]`.
/// NaN maps to 0.
pub fn clamp_dimension(value: f64) -> usize {
    if value.is_nan() {
        return 0;
    }
    let rounded = value.round().clamp(0.0, Dimensions::MAX as f64);
    rounded as usize
}

/// Round a fractional count the same way dimensions are rounded, saturating
/// at the `i64` range.
pub fn round_count(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    value.round() as i64
}
