//! Pointer-over feedback for destination markers

use crate::scene::{PickHit, PickTag, VisualHandle};

/// Remembers which highlight marker the pointer is over
///
/// Purely cosmetic: the view tints the hovered marker, nothing else reads it.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<VisualHandle>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the pick under the pointer; returns true if the hovered marker changed
    pub fn update(&mut self, pick: Option<PickHit>) -> bool {
        let next = match pick {
            Some(PickHit {
                handle,
                tag: PickTag::Highlight(_),
            }) => Some(handle),
            _ => None,
        };
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<VisualHandle> {
        self.hovered
    }
}
