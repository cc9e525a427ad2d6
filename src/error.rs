//! Error types for the simulation engine

use thiserror::Error;

/// Errors raised while building or seeding a grid.
///
/// Stepping a well-formed grid never fails, so every variant here is a
/// construction-time precondition violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "pattern '{pattern}' ({pattern_rows}x{pattern_cols}) at ({top_row}, {top_col}) \
         does not fit in a {grid_size}x{grid_size} grid"
    )]
    OutOfBounds {
        pattern: &'static str,
        top_row: usize,
        top_col: usize,
        pattern_rows: usize,
        pattern_cols: usize,
        grid_size: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = LifeError::OutOfBounds {
            pattern: "Glider",
            top_row: 8,
            top_col: 1,
            pattern_rows: 3,
            pattern_cols: 3,
            grid_size: 10,
        };
        let message = err.to_string();
        assert!(message.contains("Glider"));
        assert!(message.contains("(8, 1)"));
        assert!(message.contains("10x10"));
    }
}
