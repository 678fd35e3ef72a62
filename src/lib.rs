// E-Matrix: random numeric grids and the statistics derived from them
// The core is a set of pure transforms over immutable grid snapshots

pub mod config;
pub mod matrix;
pub mod session;

pub mod matrix_errors;
pub use matrix_errors::{MatrixError, MatrixResult};

// Re-export main types for convenience
pub use config::{GridConfig, MatrixConfig};
pub use matrix::{
    clamp_dimension, clamp_nearest_count, column_percentile, column_values, increment_cell,
    nearest_cells, ranked_by_distance, remove_row, row_percentages, row_sums, Cell, CellId,
    CellIdCounter, Dimensions, Grid, GridGenerator, IdSource, RankedCell, RowPercentage,
    DEFAULT_PERCENTILE,
};
pub use session::MatrixSession;
