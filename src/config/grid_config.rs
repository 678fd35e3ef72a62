// Grid Config - shape of the grid a new session starts with

use crate::matrix::Dimensions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 5, cols: 5 }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Starting dimensions, each side capped at `Dimensions::MAX`.
    /// A zero side gives a session that starts with the empty grid.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.rows.min(Dimensions::MAX),
            self.cols.min(Dimensions::MAX),
        )
    }
}
