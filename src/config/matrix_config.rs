use crate::config::GridConfig;
use crate::matrix::{Dimensions, AMOUNT_MAX, DEFAULT_PERCENTILE};
use crate::matrix_errors::{MatrixError, MatrixResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub grid: GridConfig,
    /// How many cells to highlight around a hovered cell
    pub nearest_count: i64,
    /// Fraction used for the column percentile row
    pub percentile: f64,
    /// Amount added to a cell on each click, at most `MAX_INCREMENT_STEP` either way.
    /// Repeated clicks still let amounts drift past the generation range.
    pub increment_step: i64,
}

/// Largest step a single click may apply, the upper end of the generation range
pub const MAX_INCREMENT_STEP: i64 = AMOUNT_MAX;

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            nearest_count: 5,
            percentile: DEFAULT_PERCENTILE,
            increment_step: 1,
        }
    }
}

impl MatrixConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> MatrixResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: MatrixConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> MatrixResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rows) = parse_var(&lookup, "MATRIX_ROWS") {
            config.grid.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, "MATRIX_COLS") {
            config.grid.cols = cols;
        }
        if let Some(count) = parse_var(&lookup, "MATRIX_NEAREST_COUNT") {
            config.nearest_count = count;
        }
        if let Some(percentile) = parse_var(&lookup, "MATRIX_PERCENTILE") {
            config.percentile = percentile;
        }
        if let Some(step) = parse_var(&lookup, "MATRIX_INCREMENT_STEP") {
            config.increment_step = step;
        }

        config
    }

    /// Validate configuration values
    pub fn validate(&self) -> MatrixResult<()> {
        if self.grid.rows > Dimensions::MAX || self.grid.cols > Dimensions::MAX {
            return Err(MatrixError::ConfigError(format!(
                "Grid dimensions {}x{} exceed the {} limit",
                self.grid.rows,
                self.grid.cols,
                Dimensions::MAX
            )));
        }

        if !self.percentile.is_finite() || !(0.0..=1.0).contains(&self.percentile) {
            return Err(MatrixError::ConfigError(format!(
                "Percentile must be a fraction in [0, 1], got {}",
                self.percentile
            )));
        }

        if self.increment_step.unsigned_abs() > MAX_INCREMENT_STEP.unsigned_abs() {
            return Err(MatrixError::ConfigError(format!(
                "Increment step {} is outside [-{}, {}]",
                self.increment_step, MAX_INCREMENT_STEP, MAX_INCREMENT_STEP
            )));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("⚠️ Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
