use std::{error, fmt::Display};

#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    InvalidDimension { rows: usize, columns: usize },
    OutOfBounds { row: usize, column: usize },
    VisitedNotReset,
}

impl Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::InvalidDimension { rows, columns } => write!(
                f,
                "Invalid dimension {}x{}, expect at least one row and one column with a cell count that fits in memory.",
                rows, columns
            ),
            MazeError::OutOfBounds { row, column } => {
                write!(f, "Cell ({}, {}) is outside of the grid.", row, column)
            }
            MazeError::VisitedNotReset => write!(
                f,
                "Grid still carries visit marks from generation, reset them before solving."
            ),
        }
    }
}

impl error::Error for MazeError {}
