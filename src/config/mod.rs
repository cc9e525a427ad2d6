//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    default_config_path, CliOverrides, DisplayConfig, OutputConfig, OutputFormat, Settings,
    SimulationConfig, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
