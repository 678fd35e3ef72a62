// Matrix module - the numeric core: cells, grids and the transforms over them
// Every transform takes a grid snapshot by reference and returns new data

pub mod aggregate;
pub mod bounds;
pub mod cell;
pub mod generator;
pub mod id_source;
pub mod nearest;
pub mod percentages;

// Re-export the main types for easy access
pub use aggregate::{column_percentile, column_values, row_sums, DEFAULT_PERCENTILE};
pub use bounds::{clamp_dimension, clamp_nearest_count};
pub use cell::{Cell, CellId, Dimensions, Grid};
pub use generator::{increment_cell, remove_row, GridGenerator, AMOUNT_MAX, AMOUNT_MIN};
pub use id_source::{CellIdCounter, IdSource};
pub use nearest::{nearest_cells, ranked_by_distance, RankedCell};
pub use percentages::{row_percentages, RowPercentage};
