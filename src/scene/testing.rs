//! Backend that records calls instead of drawing

use std::collections::BTreeMap;

use super::{OrthoCamera, PickHit, RenderBackend, ScreenPoint, VisualHandle, VisualKind};
use crate::board::{Cell, Side};
use crate::error::{CheckersError, Result};

#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u64,
    pub live: BTreeMap<VisualHandle, (VisualKind, Cell)>,
    pub created: usize,
    pub destroyed: Vec<VisualHandle>,
    pub repositioned: Vec<(VisualHandle, Cell)>,
}

impl RecordingBackend {
    fn create(&mut self, kind: VisualKind, cell: Cell) -> VisualHandle {
        let handle = VisualHandle::new(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.live.insert(handle, (kind, cell));
        handle
    }

    pub fn highlights(&self) -> usize {
        self.live.values().filter(|(k, _)| *k == VisualKind::Highlight).count()
    }
}

impl RenderBackend for RecordingBackend {
    fn create_piece_visual(&mut self, cell: Cell, side: Side) -> VisualHandle {
        self.create(VisualKind::Piece(side), cell)
    }

    fn create_highlight_visual(&mut self, cell: Cell) -> VisualHandle {
        self.create(VisualKind::Highlight, cell)
    }

    fn destroy_visual(&mut self, handle: VisualHandle) {
        self.live.remove(&handle);
        self.destroyed.push(handle);
    }

    fn reposition_visual(&mut self, handle: VisualHandle, cell: Cell) -> Result<()> {
        let entry = self
            .live
            .get_mut(&handle)
            .ok_or(CheckersError::UnknownVisual(handle))?;
        entry.1 = cell;
        self.repositioned.push((handle, cell));
        Ok(())
    }

    fn pick_topmost(&self, _point: ScreenPoint, _camera: &OrthoCamera) -> Option<PickHit> {
        None
    }
}
