// Configuration for grid shape and session behaviour
pub mod grid_config;
pub mod matrix_config;

pub use grid_config::GridConfig;
pub use matrix_config::{MatrixConfig, MAX_INCREMENT_STEP};
