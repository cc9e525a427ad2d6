//! Cell state

use serde::{Deserialize, Serialize};

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Display intensity used when rendering an alive cell
    pub const ALIVE_INTENSITY: u8 = 255;
    /// Display intensity used when rendering a dead cell
    pub const DEAD_INTENSITY: u8 = 0;

    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Map the cell to a grayscale intensity (Alive=255, Dead=0)
    #[inline]
    pub const fn intensity(self) -> u8 {
        match self {
            Cell::Alive => Self::ALIVE_INTENSITY,
            Cell::Dead => Self::DEAD_INTENSITY,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_mapping() {
        assert_eq!(Cell::Alive.intensity(), 255);
        assert_eq!(Cell::Dead.intensity(), 0);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(bool::from(Cell::Alive));
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
