//! Built-in seed patterns
//!
//! Patterns are immutable tables of alive coordinates inside a fixed
//! bounding box. Stamping a pattern overwrites the whole box, so dead cells
//! inside it are cleared as well.

use crate::error::{LifeError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A fixed template stamped onto a grid at a top-left offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    /// (row, col) of every alive cell, relative to the top-left corner
    pub alive: &'static [(usize, usize)],
}

/// Glider: travels one cell down and right every 4 generations
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    rows: 3,
    cols: 3,
    alive: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
};

/// Gosper glider gun: emits a new glider every 30 generations
#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    rows: 11,
    cols: 38,
    alive: &[
        // left block
        (5, 1), (5, 2),
        (6, 1), (6, 2),
        // left queen bee
        (3, 13), (3, 14),
        (4, 12), (4, 16),
        (5, 11), (5, 17),
        (6, 11), (6, 15),
        (6, 17), (6, 18),
        (7, 11), (7, 17),
        (8, 12), (8, 16),
        (9, 13), (9, 14),
        // right queen bee
        (1, 25),
        (2, 23), (2, 25),
        (3, 21), (3, 22),
        (4, 21), (4, 22),
        (5, 21), (5, 22),
        (6, 23), (6, 25),
        (7, 25),
        // right block
        (3, 35), (3, 36),
        (4, 35), (4, 36),
    ],
};

/// Canonical top-left offset for the glider
pub const GLIDER_OFFSET: (usize, usize) = (1, 1);
/// Canonical top-left offset for the glider gun
pub const GOSPER_GUN_OFFSET: (usize, usize) = (10, 10);

/// Initial grid contents selected by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPattern {
    /// Each cell alive independently with the configured probability
    #[default]
    Random,
    /// A single glider at (1, 1) on an empty grid
    Glider,
    /// A Gosper glider gun at (10, 10) on an empty grid
    GosperGun,
}

impl SeedPattern {
    /// The pattern and offset stamped for this mode, if it is not random
    pub fn template(self) -> Option<(&'static Pattern, (usize, usize))> {
        match self {
            SeedPattern::Random => None,
            SeedPattern::Glider => Some((&GLIDER, GLIDER_OFFSET)),
            SeedPattern::GosperGun => Some((&GOSPER_GLIDER_GUN, GOSPER_GUN_OFFSET)),
        }
    }

    /// Smallest grid the mode can be seeded on
    pub fn min_grid_size(self) -> usize {
        match self.template() {
            Some((pattern, (row, col))) => (row + pattern.rows).max(col + pattern.cols),
            None => 1,
        }
    }
}

impl std::fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SeedPattern::Random => "random",
            SeedPattern::Glider => "glider",
            SeedPattern::GosperGun => "gosper-gun",
        };
        f.write_str(name)
    }
}

impl Pattern {
    /// Check the coordinate table against the declared bounding box
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidArgument(format!(
                "pattern '{}' has an empty bounding box",
                self.name
            )));
        }

        if let Some(&(row, col)) = self
            .alive
            .iter()
            .find(|&&(row, col)| row >= self.rows || col >= self.cols)
        {
            return Err(LifeError::InvalidArgument(format!(
                "pattern '{}' cell ({}, {}) lies outside its {}x{} box",
                self.name, row, col, self.rows, self.cols
            )));
        }

        if let Some(&(row, col)) = self.alive.iter().duplicates().next() {
            return Err(LifeError::InvalidArgument(format!(
                "pattern '{}' lists cell ({}, {}) more than once",
                self.name, row, col
            )));
        }

        Ok(())
    }
}

/// Validate every built-in pattern; called once at startup
pub fn validate_builtin_patterns() -> Result<()> {
    [&GLIDER, &GOSPER_GLIDER_GUN]
        .into_iter()
        .try_for_each(Pattern::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_valid() {
        assert!(validate_builtin_patterns().is_ok());
    }

    #[test]
    fn test_glider_shape() {
        assert_eq!(GLIDER.alive.len(), 5);
        assert!(GLIDER.alive.contains(&(0, 2)));
        assert!(GLIDER.alive.contains(&(2, 1)));
        assert!(!GLIDER.alive.contains(&(0, 0)));
        assert!(!GLIDER.alive.contains(&(1, 1)));
    }

    #[test]
    fn test_gun_has_36_cells() {
        assert_eq!(GOSPER_GLIDER_GUN.alive.len(), 36);
        assert_eq!((GOSPER_GLIDER_GUN.rows, GOSPER_GLIDER_GUN.cols), (11, 38));
    }

    #[test]
    fn test_invalid_pattern_detected() {
        let outside = Pattern { name: "bad", rows: 2, cols: 2, alive: &[(0, 0), (2, 1)] };
        assert!(matches!(outside.validate(), Err(LifeError::InvalidArgument(_))));

        let duplicated = Pattern { name: "dup", rows: 2, cols: 2, alive: &[(1, 1), (1, 1)] };
        assert!(duplicated.validate().is_err());

        let empty = Pattern { name: "empty", rows: 0, cols: 3, alive: &[] };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_seed_pattern_min_size() {
        assert_eq!(SeedPattern::Random.min_grid_size(), 1);
        assert_eq!(SeedPattern::Glider.min_grid_size(), 4);
        assert_eq!(SeedPattern::GosperGun.min_grid_size(), 48);
    }

    #[test]
    fn test_seed_pattern_serde_names() {
        let yaml = serde_yaml::to_string(&SeedPattern::GosperGun).unwrap();
        assert_eq!(yaml.trim(), "gosper-gun");
        let parsed: SeedPattern = serde_yaml::from_str("gosper-gun").unwrap();
        assert_eq!(parsed, SeedPattern::GosperGun);
        assert_eq!(SeedPattern::GosperGun.to_string(), "gosper-gun");
    }
}
