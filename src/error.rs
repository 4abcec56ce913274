//! Error type shared by the board, rules and interaction layers

use thiserror::Error;

use crate::board::Cell;
use crate::scene::VisualHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// A cell outside the grid; pick-derived cells should never produce this
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: isize, col: isize, size: usize },
    /// The destination filled up between highlighting and clicking
    #[error("destination {to} is no longer free")]
    StaleMoveAttempt { to: Cell },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown visual handle {0}")]
    UnknownVisual(VisualHandle),
}

impl CheckersError {
    pub fn out_of_bounds(cell: Cell, size: usize) -> Self {
        CheckersError::OutOfBounds {
            row: cell.row as isize,
            col: cell.col as isize,
            size,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckersError>;
