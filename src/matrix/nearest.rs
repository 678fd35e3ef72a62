// Nearest Value Finder - ranks cells by how close their amount is to a target cell

use crate::matrix::cell::{Cell, CellId, Grid};
use std::collections::HashSet;

/// A cell paired with its absolute amount distance from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCell {
    pub cell: Cell,
    pub distance: u64,
}

/// Every cell of `grid` ordered by `(distance, id)` relative to `target_id`.
///
/// The target itself takes part in the ranking with distance 0. Returns an
/// empty ranking when the target is not in the grid.
pub fn ranked_by_distance(grid: &Grid, target_id: CellId) -> Vec<RankedCell> {
    let Some(target) = grid.find_cell(target_id).copied() else {
        return Vec::new();
    };

    let mut ranked: Vec<RankedCell> = grid
        .cells()
        .map(|cell| RankedCell {
            cell: *cell,
            distance: cell.amount.abs_diff(target.amount),
        })
        .collect();
    ranked.sort_unstable_by_key(|entry| (entry.distance, entry.cell.id));
    ranked
}

/// Ids of the `count` cells closest in amount to `target_id`, ties going to
/// the lower id. Empty when `count` is 0 or the target is missing.
pub fn nearest_cells(grid: &Grid, target_id: CellId, count: usize) -> HashSet<CellId> {
    if count == 0 {
        return HashSet::new();
    }

    ranked_by_distance(grid, target_id)
        .into_iter()
        .take(count)
        .map(|entry| entry.cell.id)
        .collect()
}
