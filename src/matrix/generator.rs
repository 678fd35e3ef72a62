// Grid Generator - builds, extends and edits grid snapshots
// Every operation returns a new Grid; rows that are not touched keep sharing storage

use crate::matrix::cell::{Cell, CellId, Grid, Row};
use crate::matrix::id_source::IdSource;
use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::sync::Arc;

/// Smallest amount a freshly generated cell can hold
pub const AMOUNT_MIN: i64 = 100;
/// Largest amount a freshly generated cell can hold
pub const AMOUNT_MAX: i64 = 999;

pub struct GridGenerator<R = ThreadRng> {
    rng: R,
}

impl GridGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for GridGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GridGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform draw from `[AMOUNT_MIN, AMOUNT_MAX]`
    pub fn random_amount(&mut self) -> i64 {
        self.rng.gen_range(AMOUNT_MIN..=AMOUNT_MAX)
    }

    fn random_cell<I: IdSource + ?Sized>(&mut self, ids: &I) -> Cell {
        Cell {
            id: ids.next_id(),
            amount: self.random_amount(),
        }
    }

    fn random_row<I: IdSource + ?Sized>(&mut self, cols: usize, ids: &I) -> Row {
        (0..cols).map(|_| self.random_cell(ids)).collect()
    }

    /// Build a `rows` x `cols` grid, minting one id per cell in row-major order.
    /// Zero rows or zero columns yields the empty grid.
    pub fn generate<I: IdSource + ?Sized>(&mut self, rows: usize, cols: usize, ids: &I) -> Grid {
        if rows == 0 || cols == 0 {
            return Grid::empty();
        }

        let rows: Vec<Row> = (0..rows).map(|_| self.random_row(cols, ids)).collect();
        debug!("Generated {}x{} grid", rows.len(), cols);
        Grid::from_shared_rows(rows)
    }

    /// Return `grid` with one freshly generated row appended at the end.
    ///
    /// `cols` sizes the row when `grid` is empty. A non-empty grid always
    /// receives a row as wide as its existing rows.
    pub fn append_row<I: IdSource + ?Sized>(&mut self, grid: &Grid, cols: usize, ids: &I) -> Grid {
        let width = if grid.is_empty() {
            cols
        } else {
            if cols != grid.col_count() {
                warn!(
                    "append_row asked for {} columns on a grid with {}, keeping the grid width",
                    cols,
                    grid.col_count()
                );
            }
            grid.col_count()
        };

        if width == 0 {
            debug!("append_row with zero columns leaves the grid unchanged");
            return grid.clone();
        }

        let mut rows = grid.shared_rows().to_vec();
        rows.push(self.random_row(width, ids));
        Grid::from_shared_rows(rows)
    }
}

/// Return `grid` without the row at `row_index`. An out-of-range index is a no-op.
pub fn remove_row(grid: &Grid, row_index: usize) -> Grid {
    if row_index >= grid.row_count() {
        debug!(
            "remove_row index {} out of range for {} rows",
            row_index,
            grid.row_count()
        );
        return grid.clone();
    }

    let rows = grid
        .shared_rows()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != row_index)
        .map(|(_, row)| Arc::clone(row))
        .collect();
    Grid::from_shared_rows(rows)
}

/// Return `grid` with `delta` added to the amount of the cell `cell_id`.
///
/// Amounts are not pulled back into the generation range afterwards. A missing
/// id returns a grid equal to the input.
pub fn increment_cell(grid: &Grid, cell_id: CellId, delta: i64) -> Grid {
    let rows = grid
        .shared_rows()
        .iter()
        .map(|row| {
            if row.iter().any(|cell| cell.id == cell_id) {
                row.iter()
                    .map(|cell| {
                        if cell.id == cell_id {
                            Cell {
                                amount: cell.amount.saturating_add(delta),
                                ..*cell
                            }
                        } else {
                            *cell
                        }
                    })
                    .collect()
            } else {
                Arc::clone(row)
            }
        })
        .collect();
    Grid::from_shared_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::id_source::CellIdCounter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> GridGenerator<StdRng> {
        GridGenerator::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_generate_mints_ids_in_row_major_order() {
        let ids = CellIdCounter::new();
        let grid = seeded().generate(3, 4, &ids);

        let minted: Vec<CellId> = grid.cells().map(|cell| cell.id).collect();
        assert_eq!(minted, (1..=12).collect::<Vec<_>>());
        assert_eq!(ids.peek(), 13);
        assert!(grid
            .cells()
            .all(|cell| (AMOUNT_MIN..=AMOUNT_MAX).contains(&cell.amount)));
    }

    #[test]
    fn test_generate_degenerate_dimensions() {
        let ids = CellIdCounter::new();
        let mut generator = seeded();
        assert!(generator.generate(0, 5, &ids).is_empty());
        assert!(generator.generate(5, 0, &ids).is_empty());
        // No ids consumed for an empty grid
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn test_append_row_shares_existing_rows() {
        let ids = CellIdCounter::new();
        let mut generator = seeded();
        let grid = generator.generate(2, 3, &ids);
        let grown = generator.append_row(&grid, 3, &ids);

        assert_eq!(grown.row_count(), 3);
        assert!(Arc::ptr_eq(&grid.shared_rows()[0], &grown.shared_rows()[0]));
        assert!(Arc::ptr_eq(&grid.shared_rows()[1], &grown.shared_rows()[1]));
        let new_ids: Vec<CellId> = grown.row(2).unwrap().iter().map(|cell| cell.id).collect();
        assert_eq!(new_ids, vec![7, 8, 9]);
    }

    #[test]
    fn test_append_row_keeps_grid_width() {
        let ids = CellIdCounter::new();
        let mut generator = seeded();
        let grid = generator.generate(2, 3, &ids);
        let grown = generator.append_row(&grid, 5, &ids);
        assert_eq!(grown.row(2).unwrap().len(), 3);
    }

    #[test]
    fn test_append_row_to_empty_grid() {
        let ids = CellIdCounter::new();
        let mut generator = seeded();
        let grown = generator.append_row(&Grid::empty(), 4, &ids);
        assert_eq!(grown.dimensions().rows, 1);
        assert_eq!(grown.dimensions().cols, 4);

        let unchanged = generator.append_row(&Grid::empty(), 0, &ids);
        assert!(unchanged.is_empty());
    }

    #[test]
    fn test_increment_only_copies_affected_row() {
        let grid = Grid::from_rows(vec![
            vec![Cell::new(1, 100), Cell::new(2, 200)],
            vec![Cell::new(3, 300), Cell::new(4, 400)],
        ])
        .unwrap();

        let bumped = increment_cell(&grid, 4, 5);
        assert_eq!(bumped.find_cell(4), Some(&Cell::new(4, 405)));
        assert_eq!(bumped.find_cell(3), Some(&Cell::new(3, 300)));
        assert!(Arc::ptr_eq(&grid.shared_rows()[0], &bumped.shared_rows()[0]));
        assert!(!Arc::ptr_eq(&grid.shared_rows()[1], &bumped.shared_rows()[1]));
        // Original snapshot untouched
        assert_eq!(grid.find_cell(4), Some(&Cell::new(4, 400)));
    }

    #[test]
    fn test_increment_is_not_clamped() {
        let grid = Grid::from_rows(vec![vec![Cell::new(1, AMOUNT_MAX)]]).unwrap();
        let bumped = increment_cell(&grid, 1, 50);
        assert_eq!(bumped.find_cell(1).unwrap().amount, AMOUNT_MAX + 50);
    }

    #[test]
    fn test_remove_row_out_of_range_is_noop() {
        let grid = Grid::from_rows(vec![vec![Cell::new(1, 100)], vec![Cell::new(2, 200)]]).unwrap();
        assert_eq!(remove_row(&grid, 2), grid);

        let trimmed = remove_row(&grid, 0);
        assert_eq!(trimmed.row_count(), 1);
        assert_eq!(trimmed.find_cell(2), Some(&Cell::new(2, 200)));
        assert!(remove_row(&trimmed, 0).is_empty());
    }
}
