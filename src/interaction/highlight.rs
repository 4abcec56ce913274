//! Destination markers for the selected piece

use log::debug;

use crate::board::{BoardState, Cell, Side};
use crate::rules::candidate_destinations;
use crate::scene::{RenderBackend, VisualHandle};

/// Tracks the highlight markers currently in the scene
#[derive(Debug, Default)]
pub struct HighlightController {
    markers: Vec<(Cell, VisualHandle)>,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current markers with one per legal destination of the piece on `cell`
    pub fn show<B: RenderBackend + ?Sized>(
        &mut self,
        board: &BoardState,
        side: Side,
        cell: Cell,
        backend: &mut B,
    ) {
        self.clear(backend);

        for to in candidate_destinations(board, side, cell) {
            let marker = backend.create_highlight_visual(to);
            self.markers.push((to, marker));
        }
        debug!("highlighting {} destination(s) from {}", self.markers.len(), cell);
    }

    /// Destroy every tracked marker
    pub fn clear<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) {
        for (_, marker) in self.markers.drain(..) {
            backend.destroy_visual(marker);
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.markers.iter().map(|(cell, _)| *cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.markers.iter().any(|(c, _)| *c == cell)
    }

    pub fn marker_at(&self, cell: Cell) -> Option<VisualHandle> {
        self.markers.iter().find(|(c, _)| *c == cell).map(|(_, h)| *h)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::testing::RecordingBackend;

    #[test]
    fn test_show_creates_markers() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);
        let mut highlights = HighlightController::new();

        highlights.show(&board, Side::Near, Cell::new(5, 2), &mut backend);
        assert_eq!(highlights.len(), 2);
        assert!(highlights.contains(Cell::new(4, 1)));
        assert!(highlights.contains(Cell::new(4, 3)));
        assert!(highlights.marker_at(Cell::new(4, 3)).is_some());
        assert_eq!(backend.highlights(), 2);
    }

    #[test]
    fn test_show_replaces_previous_markers() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);
        let mut highlights = HighlightController::new();

        highlights.show(&board, Side::Near, Cell::new(5, 2), &mut backend);
        highlights.show(&board, Side::Near, Cell::new(5, 0), &mut backend);

        assert_eq!(highlights.cells().collect::<Vec<_>>(), vec![Cell::new(4, 1)]);
        assert_eq!(backend.highlights(), 1);
        assert_eq!(backend.destroyed.len(), 2);
    }

    #[test]
    fn test_blocked_piece_shows_nothing() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);
        let mut highlights = HighlightController::new();

        highlights.show(&board, Side::Near, Cell::new(7, 0), &mut backend);
        assert!(highlights.is_empty());
        assert_eq!(backend.highlights(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut backend = RecordingBackend::default();
        let board = BoardState::initialize(8, 1.0, &mut backend);
        let mut highlights = HighlightController::new();
        highlights.show(&board, Side::Far, Cell::new(2, 3), &mut backend);

        highlights.clear(&mut backend);
        assert!(highlights.is_empty());
        assert_eq!(backend.destroyed.len(), 2);

        highlights.clear(&mut backend);
        assert!(highlights.is_empty());
        assert_eq!(backend.destroyed.len(), 2);
    }
}
