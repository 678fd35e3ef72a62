// Matrix Session - owns the current grid snapshot and applies user actions to it
// The presentation layer calls these methods and renders whatever they return

use crate::config::MatrixConfig;
use crate::matrix::bounds::round_count;
use crate::matrix::{
    clamp_nearest_count, column_percentile, increment_cell, nearest_cells, remove_row,
    row_percentages, row_sums, CellId, CellIdCounter, Dimensions, Grid, GridGenerator,
    RowPercentage,
};
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::HashSet;

pub struct MatrixSession<R = ThreadRng> {
    config: MatrixConfig,
    ids: CellIdCounter,
    generator: GridGenerator<R>,
    dimensions: Dimensions,
    grid: Grid,
    nearest_count: usize,
}

impl MatrixSession<ThreadRng> {
    pub fn new(config: MatrixConfig) -> Self {
        Self::with_generator(config, GridGenerator::new())
    }
}

impl<R: Rng> MatrixSession<R> {
    pub fn with_rng(config: MatrixConfig, rng: R) -> Self {
        Self::with_generator(config, GridGenerator::with_rng(rng))
    }

    fn with_generator(config: MatrixConfig, mut generator: GridGenerator<R>) -> Self {
        let ids = CellIdCounter::new();
        let dimensions = config.grid.dimensions();
        let grid = generator.generate(dimensions.rows, dimensions.cols, &ids);
        let nearest_count = clamp_nearest_count(config.nearest_count, &grid);
        info!(
            "Matrix session started with a {}x{} grid, highlighting {} cells",
            dimensions.rows, dimensions.cols, nearest_count
        );

        Self {
            config,
            ids,
            generator,
            dimensions,
            grid,
            nearest_count,
        }
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current snapshot. Cloning it is cheap and later actions never change it.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn nearest_count(&self) -> usize {
        self.nearest_count
    }

    /// The id the next generated cell will receive
    pub fn next_cell_id(&self) -> CellId {
        self.ids.peek()
    }

    /// Replace the grid with a fresh one of the current dimensions
    pub fn regenerate(&mut self) {
        if self.dimensions.is_degenerate() {
            self.clear_grid();
            return;
        }

        self.grid = self
            .generator
            .generate(self.dimensions.rows, self.dimensions.cols, &self.ids);
        self.reclamp_nearest_count();
        debug!(
            "Regenerated {}x{} grid",
            self.dimensions.rows, self.dimensions.cols
        );
    }

    /// Apply user-typed dimensions. Unchanged dimensions keep the current grid.
    pub fn set_dimensions(&mut self, rows: f64, cols: f64) {
        let sanitized = Dimensions::sanitized(rows, cols);

        if sanitized.is_degenerate() {
            self.dimensions = sanitized;
            self.clear_grid();
            return;
        }

        if sanitized == self.dimensions {
            debug!("Dimensions unchanged at {}x{}", sanitized.rows, sanitized.cols);
            return;
        }

        self.dimensions = sanitized;
        self.regenerate();
    }

    pub fn increment_cell(&mut self, cell_id: CellId) {
        self.grid = increment_cell(&self.grid, cell_id, self.config.increment_step);
        debug!(
            "Incremented cell {} by {}",
            cell_id, self.config.increment_step
        );
    }

    /// Append one row. Ignored when there are no columns or the row limit is reached.
    pub fn add_row(&mut self) {
        if self.dimensions.cols == 0 || self.dimensions.rows >= Dimensions::MAX {
            debug!(
                "add_row ignored at {}x{}",
                self.dimensions.rows, self.dimensions.cols
            );
            return;
        }

        self.grid = self
            .generator
            .append_row(&self.grid, self.dimensions.cols, &self.ids);
        self.dimensions.rows = self.grid.row_count();
        self.reclamp_nearest_count();
    }

    /// Remove one row. An out-of-range index leaves everything unchanged.
    pub fn remove_row(&mut self, row_index: usize) {
        let before = self.grid.row_count();
        self.grid = remove_row(&self.grid, row_index);
        if self.grid.row_count() < before {
            self.dimensions.rows = self.dimensions.rows.saturating_sub(1);
            debug!("Removed row {}", row_index);
        }
        self.reclamp_nearest_count();
    }

    /// Apply a user-typed highlight count, rounded and clamped to the grid size
    pub fn set_nearest_count(&mut self, count: f64) {
        self.nearest_count = clamp_nearest_count(round_count(count), &self.grid);
    }

    pub fn row_sums(&self) -> Vec<i128> {
        row_sums(&self.grid)
    }

    /// Column percentiles at the configured fraction
    pub fn column_percentiles(&self) -> Vec<f64> {
        column_percentile(&self.grid, self.config.percentile)
    }

    /// Cells to highlight while `cell_id` is hovered
    pub fn highlighted_cells(&self, cell_id: CellId) -> HashSet<CellId> {
        nearest_cells(&self.grid, cell_id, self.nearest_count)
    }

    /// Percentages to show while row `row_index` is hovered
    pub fn row_percentages(&self, row_index: usize) -> Vec<RowPercentage> {
        row_percentages(&self.grid, row_index)
    }

    fn clear_grid(&mut self) {
        self.grid = Grid::empty();
        self.nearest_count = 0;
        debug!("Grid cleared");
    }

    fn reclamp_nearest_count(&mut self) {
        self.nearest_count = clamp_nearest_count(self.nearest_count as i64, &self.grid);
    }
}
