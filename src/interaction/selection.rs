//! Click-driven selection state machine

use log::{debug, warn};

use super::highlight::HighlightController;
use super::mover::MoveExecutor;
use crate::board::{BoardState, Cell, Side};
use crate::error::{CheckersError, Result};
use crate::scene::{PickHit, PickTag, RenderBackend, VisualHandle};

/// The piece the user is about to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub cell: Cell,
    pub side: Side,
    pub handle: VisualHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(Selection),
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(Cell),
    Deselected,
    Moved { from: Cell, to: Cell },
    /// The clicked marker no longer pointed at a legal destination
    MoveRejected(Cell),
    Ignored,
}

/// Owns the selection and its highlight markers
///
/// Only pieces of the controlling side can be selected. Clicking the selected
/// piece again, or anything that is neither an own piece nor a marker, drops
/// the selection. Clicking a marker commits the move and always returns to
/// idle.
#[derive(Debug)]
pub struct SelectionController {
    controlling_side: Side,
    state: SelectionState,
    highlights: HighlightController,
}

impl SelectionController {
    pub fn new(controlling_side: Side) -> Self {
        Self {
            controlling_side,
            state: SelectionState::Idle,
            highlights: HighlightController::new(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected(selection) => Some(selection),
        }
    }

    pub fn highlights(&self) -> &HighlightController {
        &self.highlights
    }

    /// Feed a resolved pick (None for background) into the state machine
    pub fn on_pick<B: RenderBackend + ?Sized>(
        &mut self,
        pick: Option<PickHit>,
        board: &mut BoardState,
        backend: &mut B,
    ) -> Result<PickOutcome> {
        let tag = pick.map(|hit| hit.tag);

        match (self.state, tag) {
            (state, Some(PickTag::Piece { side, cell })) if side == self.controlling_side => {
                if let SelectionState::Selected(current) = state {
                    if current.cell == cell {
                        self.clear(backend);
                        debug!("deselected {}", cell);
                        return Ok(PickOutcome::Deselected);
                    }
                }
                self.select(cell, board, backend)
            }
            (SelectionState::Selected(selection), Some(PickTag::Highlight(to)))
                if self.highlights.contains(to) =>
            {
                let result = MoveExecutor::try_move(board, backend, &selection, to);
                self.clear(backend);
                match result {
                    Ok(()) => Ok(PickOutcome::Moved {
                        from: selection.cell,
                        to,
                    }),
                    Err(CheckersError::StaleMoveAttempt { to }) => Ok(PickOutcome::MoveRejected(to)),
                    Err(e) => Err(e),
                }
            }
            (SelectionState::Selected(selection), _) => {
                self.clear(backend);
                debug!("selection at {} dropped", selection.cell);
                Ok(PickOutcome::Deselected)
            }
            (SelectionState::Idle, _) => Ok(PickOutcome::Ignored),
        }
    }

    /// Select the piece on `cell`, replacing any current selection
    fn select<B: RenderBackend + ?Sized>(
        &mut self,
        cell: Cell,
        board: &BoardState,
        backend: &mut B,
    ) -> Result<PickOutcome> {
        let lookup = board
            .occupant_at(cell)
            .and_then(|side| Ok((side, board.visual_at(cell)?)));
        let (side, handle) = match lookup {
            Ok((Some(side), Some(handle))) if side == self.controlling_side => (side, handle),
            Err(e) => {
                self.clear(backend);
                return Err(e);
            }
            Ok(_) => {
                warn!("picked piece at {} is not on the board", cell);
                self.clear(backend);
                return Ok(PickOutcome::Ignored);
            }
        };

        self.highlights.show(board, side, cell, backend);
        self.state = SelectionState::Selected(Selection { cell, side, handle });
        debug!("selected {:?} piece at {}", side, cell);
        Ok(PickOutcome::Selected(cell))
    }

    /// Drop the selection and its markers
    pub fn clear<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) {
        self.highlights.clear(backend);
        self.state = SelectionState::Idle;
    }
}
