// Cell, Grid and Dimensions - the value types every transform works on
// Rows are shared between snapshots, so cloning a Grid is cheap

use crate::matrix::bounds::clamp_dimension;
use crate::matrix_errors::{MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Identifier minted by an `IdSource`, unique within a grid lineage
pub type CellId = u64;

/// A row of cells, shared between snapshots until one of its cells changes
pub type Row = Arc<[Cell]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub amount: i64,
}

impl Cell {
    pub fn new(id: CellId, amount: i64) -> Self {
        Self { id, amount }
    }
}

/// Immutable, rectangular snapshot of the matrix.
///
/// A grid with zero rows or zero columns is always represented as having no
/// rows at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from caller-supplied rows, checking that the rows are
    /// rectangular and that no cell id repeats.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> MatrixResult<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return match rows.iter().position(|row| !row.is_empty()) {
                Some(row) => Err(MatrixError::RaggedRow {
                    row,
                    expected,
                    found: rows[row].len(),
                }),
                None => Ok(Self::empty()),
            };
        }

        let mut seen = HashSet::with_capacity(expected * rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(MatrixError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
            for cell in row {
                if !seen.insert(cell.id) {
                    return Err(MatrixError::DuplicateCellId(cell.id));
                }
            }
        }

        Ok(Self {
            rows: rows.into_iter().map(Row::from).collect(),
        })
    }

    /// Wrap rows produced by the transforms in this crate, which uphold the
    /// grid invariants themselves.
    pub(crate) fn from_shared_rows(rows: Vec<Row>) -> Self {
        if rows.iter().all(|row| row.is_empty()) {
            return Self::empty();
        }
        Self { rows }
    }

    pub(crate) fn shared_rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.row_count(),
            cols: self.col_count(),
        }
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|row| &row[..])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| &row[..])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn find_cell(&self, id: CellId) -> Option<&Cell> {
        self.cells().find(|cell| cell.id == id)
    }

    /// Amounts laid out as plain nested vectors, mostly useful for display
    pub fn amounts(&self) -> Vec<Vec<i64>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.amount).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Cell>>) -> MatrixResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Cell]>::to_vec).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Upper bound for both rows and columns
    pub const MAX: usize = 100;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Round user-typed values and clamp both into `[0, MAX]`
    pub fn sanitized(rows: f64, cols: f64) -> Self {
        Self {
            rows: clamp_dimension(rows),
            cols: clamp_dimension(cols),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(ids_and_amounts: &[(CellId, i64)]) -> Vec<Cell> {
        ids_and_amounts
            .iter()
            .map(|&(id, amount)| Cell::new(id, amount))
            .collect()
    }

    #[test]
    fn test_from_rows_accepts_rectangular_grid() {
        let grid = Grid::from_rows(vec![
            cells(&[(1, 100), (2, 200)]),
            cells(&[(3, 300), (4, 400)]),
        ])
        .unwrap();

        assert_eq!(grid.dimensions(), Dimensions::new(2, 2));
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(grid.find_cell(3), Some(&Cell::new(3, 300)));
        assert_eq!(grid.find_cell(9), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Grid::from_rows(vec![cells(&[(1, 100), (2, 200)]), cells(&[(3, 300)])]);
        assert_eq!(
            result,
            Err(MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_duplicate_ids() {
        let result = Grid::from_rows(vec![cells(&[(1, 100), (2, 200)]), cells(&[(2, 300), (4, 400)])]);
        assert_eq!(result, Err(MatrixError::DuplicateCellId(2)));
    }

    #[test]
    fn test_zero_width_rows_collapse_to_empty_grid() {
        let grid = Grid::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::from_rows(vec![
            cells(&[(10, 1), (11, 2)]),
            cells(&[(12, 3), (13, 4)]),
        ])
        .unwrap();
        let ids: Vec<CellId> = grid.cells().map(|cell| cell.id).collect();
        assert_eq!(ids, vec![10, 11, 12, 13]);
        assert_eq!(grid.amounts(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let grid: Grid = serde_json::from_str(r#"[[{"id":1,"amount":5}],[{"id":2,"amount":6}]]"#).unwrap();
        assert_eq!(grid.amounts(), vec![vec![5], vec![6]]);

        let ragged = serde_json::from_str::<Grid>(r#"[[{"id":1,"amount":5}],[]]"#);
        assert!(ragged.is_err());
    }

    #[test]
    fn test_sanitized_dimensions() {
        assert_eq!(Dimensions::sanitized(4.6, -3.0), Dimensions::new(5, 0));
        assert_eq!(Dimensions::sanitized(250.0, 100.4), Dimensions::new(100, 100));
        assert!(Dimensions::new(0, 7).is_degenerate());
    }
}
