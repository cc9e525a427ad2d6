//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod simulator;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_ALIVE_PROBABILITY};
pub use patterns::{Pattern, SeedPattern, GLIDER, GOSPER_GLIDER_GUN};
pub use rules::GameOfLifeRules;
pub use simulator::Simulator;
