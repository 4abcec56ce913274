//! Diagonal step generation and validation

use log::trace;

use crate::board::{BoardState, Cell, Side};

/// Row/column deltas of a forward diagonal step for `side`
///
/// Near moves toward row 0, Far toward the last row.
#[inline]
pub fn forward_offsets(side: Side) -> [(isize, isize); 2] {
    let dr = side.forward();
    [(dr, -1), (dr, 1)]
}

/// Whether a piece may move onto `cell`: in bounds and unoccupied
#[inline]
pub fn is_legal_destination(board: &BoardState, cell: Cell) -> bool {
    board.is_empty(cell)
}

/// Legal destinations for a `side` piece standing on `cell`
///
/// At most two cells, left diagonal first.
pub fn candidate_destinations(board: &BoardState, side: Side, cell: Cell) -> Vec<Cell> {
    forward_offsets(side)
        .iter()
        .filter_map(|&(dr, dc)| cell.offset(dr, dc, board.size()))
        .filter(|&to| is_legal_destination(board, to))
        .collect()
}

/// Whether `from -> to` is one of the forward diagonal steps onto a free cell
pub fn is_legal_step(board: &BoardState, side: Side, from: Cell, to: Cell) -> bool {
    trace!("checking {:?} step {} -> {}", side, from, to);
    forward_offsets(side)
        .iter()
        .any(|&(dr, dc)| from.offset(dr, dc, board.size()) == Some(to))
        && is_legal_destination(board, to)
}
