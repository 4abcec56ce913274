//! Board representation for checkers

#[allow(clippy::module_inception)]
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::BoardState;

/// Standard board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Number of rows each side fills in the starting position
pub const HOME_ROWS: usize = 3;

/// Piece owners
///
/// `Near` sits on the high rows, closest to the viewer; `Far` starts on rows 0..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Near,
    Far,
}

impl Side {
    /// Row delta of a forward step: toward the opponent's home rows
    #[inline]
    pub fn forward(self) -> isize {
        match self {
            Side::Near => -1,
            Side::Far => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Near => "Near",
            Side::Far => "Far",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(row: isize, col: isize, size: usize) -> bool {
        row >= 0 && row < size as isize && col >= 0 && col < size as isize
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Cell shifted by (dr, dc), or None if it would leave a `size`x`size` grid
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Cell> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if Cell::is_valid(row, col, size) {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Dark squares, the only ones used by the starting position
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
