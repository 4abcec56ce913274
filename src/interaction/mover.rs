//! Committing a selected piece's move

use log::{debug, info};

use super::selection::Selection;
use crate::board::{BoardState, Cell};
use crate::error::{CheckersError, Result};
use crate::rules::is_legal_step;
use crate::scene::RenderBackend;

pub struct MoveExecutor;

impl MoveExecutor {
    /// Move the selected piece to `to`
    ///
    /// The step is re-validated against the current board first. If the board
    /// changed since the highlights were drawn nothing is mutated and
    /// [`CheckersError::StaleMoveAttempt`] is returned. The piece keeps its
    /// visual: it is repositioned in the backend first, and only once that
    /// succeeds is the handle lifted off the old cell and placed on the new one.
    pub fn try_move<B: RenderBackend + ?Sized>(
        board: &mut BoardState,
        backend: &mut B,
        selection: &Selection,
        to: Cell,
    ) -> Result<()> {
        let from = selection.cell;
        let still_there = board.occupant_at(from)? == Some(selection.side)
            && board.visual_at(from)? == Some(selection.handle);

        if !still_there || !is_legal_step(board, selection.side, from, to) {
            debug!("stale move {} -> {} rejected", from, to);
            return Err(CheckersError::StaleMoveAttempt { to });
        }

        backend.reposition_visual(selection.handle, to)?;
        board.lift(from)?;
        board.place(to, selection.side, selection.handle)?;

        info!("{:?} moved {} -> {}", selection.side, from, to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::scene::testing::RecordingBackend;

    fn select(board: &BoardState, cell: Cell) -> Selection {
        Selection {
            cell,
            side: board.occupant_at(cell).unwrap().unwrap(),
            handle: board.visual_at(cell).unwrap().unwrap(),
        }
    }

    #[test]
    fn test_commit_moves_piece_and_visual() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let selection = select(&board, Cell::new(2, 1));

        MoveExecutor::try_move(&mut board, &mut backend, &selection, Cell::new(3, 0)).unwrap();

        assert!(board.is_empty(Cell::new(2, 1)));
        assert_eq!(board.occupant_at(Cell::new(3, 0)), Ok(Some(Side::Far)));
        assert_eq!(board.visual_at(Cell::new(3, 0)), Ok(Some(selection.handle)));
        assert_eq!(backend.repositioned, vec![(selection.handle, Cell::new(3, 0))]);
        assert!(backend.destroyed.is_empty());
        assert_eq!(board.count(Side::Far), 12);
    }

    #[test]
    fn test_occupied_destination_is_stale() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let selection = select(&board, Cell::new(2, 1));
        let blocker = backend.create_piece_visual(Cell::new(3, 0), Side::Near);
        board.place(Cell::new(3, 0), Side::Near, blocker).unwrap();

        let result = MoveExecutor::try_move(&mut board, &mut backend, &selection, Cell::new(3, 0));

        assert_eq!(result, Err(CheckersError::StaleMoveAttempt { to: Cell::new(3, 0) }));
        assert_eq!(board.occupant_at(Cell::new(2, 1)), Ok(Some(Side::Far)));
        assert_eq!(board.occupant_at(Cell::new(3, 0)), Ok(Some(Side::Near)));
        assert!(backend.repositioned.is_empty());
    }

    #[test]
    fn test_moved_away_piece_is_stale() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let selection = select(&board, Cell::new(5, 2));
        board.vacate(Cell::new(5, 2), &mut backend).unwrap();

        let result = MoveExecutor::try_move(&mut board, &mut backend, &selection, Cell::new(4, 3));
        assert!(matches!(result, Err(CheckersError::StaleMoveAttempt { .. })));
        assert!(board.is_empty(Cell::new(4, 3)));
    }

    #[test]
    fn test_backend_failure_leaves_board_untouched() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let selection = select(&board, Cell::new(5, 2));
        backend.live.remove(&selection.handle);

        let result = MoveExecutor::try_move(&mut board, &mut backend, &selection, Cell::new(4, 3));

        assert_eq!(result, Err(CheckersError::UnknownVisual(selection.handle)));
        assert_eq!(board.occupant_at(Cell::new(5, 2)), Ok(Some(Side::Near)));
        assert_eq!(board.visual_at(Cell::new(5, 2)), Ok(Some(selection.handle)));
        assert!(board.is_empty(Cell::new(4, 3)));
    }

    #[test]
    fn test_non_adjacent_destination_rejected() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let selection = select(&board, Cell::new(5, 2));

        let result = MoveExecutor::try_move(&mut board, &mut backend, &selection, Cell::new(3, 4));
        assert!(result.is_err());
        assert_eq!(board.occupant_at(Cell::new(5, 2)), Ok(Some(Side::Near)));
    }
}
