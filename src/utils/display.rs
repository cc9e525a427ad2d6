//! Display and output formatting utilities

use crate::config::{OutputFormat, Settings};
use crate::game_of_life::{Grid, SeedPattern, Simulator};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Format grids for terminal output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.size() * (grid.size() * 3 + 1));
        for row in grid.rows() {
            for cell in row {
                output.push(if cell.is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Header shown above each animation frame
    pub fn frame_header(generation: usize, grid: &Grid) -> String {
        format!(
            "Generation {} | Population {} | Density {:.1}%",
            generation,
            grid.living_count(),
            grid.density() * 100.0
        )
    }

    /// A complete animation frame, optionally prefixed with a clear-screen sequence
    pub fn format_frame(generation: usize, grid: &Grid, clear_screen: bool) -> String {
        let mut output = String::new();
        if clear_screen {
            output.push_str(CLEAR_SCREEN);
        }
        output.push_str(&Self::frame_header(generation, grid));
        output.push('\n');
        output.push_str(&Self::format_grid_compact(grid));
        output
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub grid_size: usize,
    pub pattern: SeedPattern,
    pub generations: usize,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    pub elapsed_ms: u64,
}

impl RunReport {
    pub fn from_simulator(settings: &Settings, simulator: &Simulator, elapsed_ms: u64) -> Self {
        Self {
            grid_size: simulator.grid().size(),
            pattern: settings.simulation.pattern,
            generations: simulator.generation(),
            initial_population: simulator.initial_population(),
            final_population: simulator.grid().living_count(),
            peak_population: simulator.peak_population(),
            elapsed_ms,
        }
    }

    /// Render the report in the configured format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize run report")
            }
        }
    }

    fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("Run Summary:\n");
        output.push_str(&format!("  Grid: {}x{}\n", self.grid_size, self.grid_size));
        output.push_str(&format!("  Pattern: {}\n", self.pattern));
        output.push_str(&format!("  Generations: {}\n", self.generations));
        output.push_str(&format!(
            "  Population: {} → {} (peak {})\n",
            self.initial_population, self.final_population, self.peak_population
        ));
        output.push_str(&format!("  Elapsed: {:.3}s\n", self.elapsed_ms as f64 / 1000.0));
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
