// Aggregator - row sums, column values and per-column percentiles

use crate::matrix::cell::{Cell, Grid};
use log::debug;

/// Percentile used when the caller does not pick one
pub const DEFAULT_PERCENTILE: f64 = 0.6;

/// Sum of amounts for every row, in row order.
///
/// Summed in `i128`: a row of up to `Dimensions::MAX` cells cannot overflow it
/// even when increments have pushed amounts to the `i64` limits.
pub fn row_sums(grid: &Grid) -> Vec<i128> {
    grid.rows().map(row_total).collect()
}

pub(crate) fn row_total(row: &[Cell]) -> i128 {
    row.iter().map(|cell| i128::from(cell.amount)).sum()
}

/// Amounts down each column, one vector per column index
pub fn column_values(grid: &Grid) -> Vec<Vec<i64>> {
    (0..grid.col_count())
        .map(|col| grid.rows().map(|row| row[col].amount).collect())
        .collect()
}

/// Linearly interpolated percentile of each column.
///
/// `percentile` is a fraction; values outside `[0, 1]` are clamped and NaN is
/// treated as 0. A column without values reports 0.
pub fn column_percentile(grid: &Grid, percentile: f64) -> Vec<f64> {
    let fraction = normalize_fraction(percentile);
    column_values(grid)
        .into_iter()
        .map(|mut values| {
            values.sort_unstable();
            percentile_of_sorted(&values, fraction).unwrap_or(0.0)
        })
        .collect()
}

/// Rank statistic at `p * (n - 1)` over ascending `sorted`, interpolating
/// between the neighbouring order statistics for a fractional rank.
pub fn percentile_of_sorted(sorted: &[i64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = normalize_fraction(p) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        return Some(sorted[lower] as f64);
    }

    let weight = rank - lower as f64;
    let low = sorted[lower] as f64;
    let high = sorted[upper] as f64;
    Some(low + (high - low) * weight)
}

fn normalize_fraction(p: f64) -> f64 {
    if p.is_nan() {
        debug!("percentile fraction is NaN, using 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&p) {
        debug!("percentile fraction {} clamped to [0, 1]", p);
    }
    p.clamp(0.0, 1.0)
}
