//! Board structure with visual handle tracking

use log::{debug, trace};

use super::{Cell, Side, HOME_ROWS};
use crate::error::{CheckersError, Result};
use crate::scene::{RenderBackend, VisualHandle};

/// A piece on the board together with the visual that draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub side: Side,
    pub visual: VisualHandle,
}

/// Authoritative occupancy grid
///
/// Each cell holds either nothing or a side plus the handle of its visual,
/// so a cell can never have a piece without a handle or the reverse.
/// Handles are borrowed references into the render backend: releasing one is
/// always routed through [`RenderBackend::destroy_visual`].
#[derive(Debug, Clone)]
pub struct BoardState {
    size: usize,
    square_size: f32,
    cells: Vec<Option<Occupant>>,
}

impl BoardState {
    /// Empty board with no visuals
    pub fn new(size: usize, square_size: f32) -> Self {
        Self {
            size,
            square_size,
            cells: vec![None; size * size],
        }
    }

    /// Board in the standard opening position, with one visual per piece
    pub fn initialize<B: RenderBackend + ?Sized>(
        size: usize,
        square_size: f32,
        backend: &mut B,
    ) -> Self {
        let mut board = Self::new(size, square_size);

        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                if let Some(side) = Self::starting_side(cell, size) {
                    let visual = backend.create_piece_visual(cell, side);
                    trace!("adding {:?} piece at {} as {}", side, cell, visual);
                    board.cells[row * size + col] = Some(Occupant { side, visual });
                }
            }
        }

        debug!(
            "initialized {}x{} board: {} near, {} far",
            size,
            size,
            board.count(Side::Near),
            board.count(Side::Far)
        );
        board
    }

    /// Occupant of `cell` in the opening position
    pub fn starting_side(cell: Cell, size: usize) -> Option<Side> {
        if !cell.is_playable() {
            None
        } else if cell.row < HOME_ROWS {
            Some(Side::Far)
        } else if cell.row + HOME_ROWS >= size {
            Some(Side::Near)
        } else {
            None
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn square_size(&self) -> f32 {
        self.square_size
    }

    #[inline]
    fn index(&self, cell: Cell) -> Result<usize> {
        if cell.in_bounds(self.size) {
            Ok(cell.row * self.size + cell.col)
        } else {
            Err(CheckersError::out_of_bounds(cell, self.size))
        }
    }

    /// Side occupying `cell`
    pub fn occupant_at(&self, cell: Cell) -> Result<Option<Side>> {
        Ok(self.cells[self.index(cell)?].map(|o| o.side))
    }

    /// Visual handle of the piece on `cell`
    pub fn visual_at(&self, cell: Cell) -> Result<Option<VisualHandle>> {
        Ok(self.cells[self.index(cell)?].map(|o| o.visual))
    }

    /// In bounds and unoccupied; out-of-bounds cells are never empty
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.index(cell), Ok(idx) if self.cells[idx].is_none())
    }

    /// Put a piece on `cell`, overwriting whatever was there
    ///
    /// Callers vacate the cell first; the previous handle is not released.
    pub fn place(&mut self, cell: Cell, side: Side, visual: VisualHandle) -> Result<()> {
        let idx = self.index(cell)?;
        self.cells[idx] = Some(Occupant { side, visual });
        Ok(())
    }

    /// Remove the piece on `cell` and destroy its visual
    ///
    /// Empty cells are left alone.
    pub fn vacate<B: RenderBackend + ?Sized>(&mut self, cell: Cell, backend: &mut B) -> Result<()> {
        if let Some(occupant) = self.lift(cell)? {
            backend.destroy_visual(occupant.visual);
        }
        Ok(())
    }

    /// Remove the piece on `cell` without touching its visual, handing it to the caller
    pub fn lift(&mut self, cell: Cell) -> Result<Option<Occupant>> {
        let idx = self.index(cell)?;
        Ok(self.cells[idx].take())
    }

    /// Vacate every cell
    pub fn clear<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) {
        for slot in self.cells.iter_mut() {
            if let Some(occupant) = slot.take() {
                backend.destroy_visual(occupant.visual);
            }
        }
    }

    /// Number of pieces belonging to `side`
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|slot| matches!(slot, Some(o) if o.side == side))
            .count()
    }

    /// All pieces in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, slot)| slot.map(|o| (Cell::new(idx / size, idx % size), o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::testing::RecordingBackend;

    #[test]
    fn test_initial_position_counts() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);

        assert_eq!(board.count(Side::Near), 12);
        assert_eq!(board.count(Side::Far), 12);
        assert_eq!(backend.created, 24);
    }

    #[test]
    fn test_initial_position_layout() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);

        for (cell, occupant) in board.pieces() {
            assert!(cell.is_playable(), "piece on light square {}", cell);
            match occupant.side {
                Side::Far => assert!(cell.row <= 2),
                Side::Near => assert!(cell.row >= 5),
            }
        }
        assert_eq!(board.occupant_at(Cell::new(0, 1)), Ok(Some(Side::Far)));
        assert_eq!(board.occupant_at(Cell::new(7, 0)), Ok(Some(Side::Near)));
        assert_eq!(board.occupant_at(Cell::new(0, 0)), Ok(None));
        assert_eq!(board.occupant_at(Cell::new(4, 3)), Ok(None));
    }

    #[test]
    fn test_initial_position_larger_board() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(10, 1.0, &mut backend);

        // 3 rows of 5 dark squares each
        assert_eq!(board.count(Side::Near), 15);
        assert_eq!(board.count(Side::Far), 15);
        assert_eq!(board.occupant_at(Cell::new(7, 0)), Ok(Some(Side::Near)));
        assert_eq!(board.occupant_at(Cell::new(6, 1)), Ok(None));
    }

    #[test]
    fn test_every_piece_has_a_visual() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);

        for row in 0..8 {
            for col in 0..8 {
                let cell = Cell::new(row, col);
                let side = board.occupant_at(cell).unwrap();
                let visual = board.visual_at(cell).unwrap();
                assert_eq!(side.is_some(), visual.is_some());
            }
        }
    }

    #[test]
    fn test_occupant_out_of_bounds() {
        let board = BoardState::new(8, 1.0);
        assert_eq!(
            board.occupant_at(Cell::new(8, 0)),
            Err(CheckersError::OutOfBounds { row: 8, col: 0, size: 8 })
        );
    }

    #[test]
    fn test_is_empty_bounds_first() {
        let board = BoardState::new(8, 1.0);
        assert!(board.is_empty(Cell::new(3, 3)));
        assert!(!board.is_empty(Cell::new(3, 8)));
        assert!(!board.is_empty(Cell::new(8, 0)));
    }

    #[test]
    fn test_place_then_vacate() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::new(8, 1.0);
        let cell = Cell::new(4, 3);
        let visual = backend.create_piece_visual(cell, Side::Near);

        board.place(cell, Side::Near, visual).unwrap();
        assert!(!board.is_empty(cell));
        assert_eq!(board.visual_at(cell), Ok(Some(visual)));

        board.vacate(cell, &mut backend).unwrap();
        assert!(board.is_empty(cell));
        assert_eq!(board.visual_at(cell), Ok(None));
        assert_eq!(backend.destroyed, vec![visual]);
    }

    #[test]
    fn test_vacate_empty_is_noop() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::new(8, 1.0);

        board.vacate(Cell::new(2, 2), &mut backend).unwrap();
        assert!(backend.destroyed.is_empty());
    }

    #[test]
    fn test_lift_keeps_visual_alive() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);
        let cell = Cell::new(5, 0);
        let visual = board.visual_at(cell).unwrap().unwrap();

        let lifted = board.lift(cell).unwrap();
        assert_eq!(lifted, Some(Occupant { side: Side::Near, visual }));
        assert!(board.is_empty(cell));
        assert!(backend.destroyed.is_empty());
    }

    #[test]
    fn test_clear_destroys_all() {
        let mut backend = RecordingBackend::default();
        let mut board = BoardState::initialize(8, 1.0, &mut backend);

        board.clear(&mut backend);
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(backend.destroyed.len(), 24);
    }
}
