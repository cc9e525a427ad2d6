//! Conway's Game of Life on a toroidal grid
//!
//! The engine seeds an N x N grid (random fill, glider, or Gosper glider
//! gun) and advances it one generation at a time with wraparound neighbor
//! lookup. Drivers read each generation's grid for display.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, Grid, SeedPattern, Simulator};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed a grid from the simulation settings and wrap it in a simulator
pub fn build_simulator(settings: &Settings) -> Result<Simulator> {
    settings.validate()?;
    game_of_life::patterns::validate_builtin_patterns()
        .context("Built-in pattern table is inconsistent")?;

    let sim = &settings.simulation;
    let grid = match sim.seed {
        Some(seed) => Grid::create_with_rng(
            sim.grid_size,
            sim.pattern,
            sim.alive_probability,
            &mut ChaCha8Rng::seed_from_u64(seed),
        ),
        None => Grid::create_with_rng(
            sim.grid_size,
            sim.pattern,
            sim.alive_probability,
            &mut rand::thread_rng(),
        ),
    }
    .with_context(|| format!("Failed to seed {} grid", sim.pattern))?;

    Ok(Simulator::new(grid).with_parallel(sim.parallel))
}
