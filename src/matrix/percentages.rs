// Row Percentage Calculator - each cell's share of its row total and row maximum

use crate::matrix::aggregate::row_total;
use crate::matrix::cell::{CellId, Grid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowPercentage {
    pub cell_id: CellId,
    pub percent_of_total: f64,
    pub percent_of_max: f64,
}

/// Percentages for every cell in row `row_index`, empty when the row does not exist.
///
/// The row maximum starts from 0, so a row with no positive amount reports 0
/// for every `percent_of_max`.
pub fn row_percentages(grid: &Grid, row_index: usize) -> Vec<RowPercentage> {
    let Some(row) = grid.row(row_index) else {
        return Vec::new();
    };

    let total = row_total(row);
    let max = row.iter().map(|cell| cell.amount).fold(0, i64::max);

    row.iter()
        .map(|cell| RowPercentage {
            cell_id: cell.id,
            percent_of_total: percent(cell.amount, total),
            percent_of_max: percent(cell.amount, i128::from(max)),
        })
        .collect()
}

fn percent(part: i64, whole: i128) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
