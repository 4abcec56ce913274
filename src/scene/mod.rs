//! Rendering backend contract and the built-in 3D scene
//!
//! The game core never draws anything itself. It asks a [`RenderBackend`] to
//! create, move and destroy visual objects, and to resolve a screen point to
//! the topmost object under it. [`Scene`] is the backend used by the GUI; it
//! keeps an explicit side table from handle to object kind and cell, so a pick
//! can be classified without reading fields off the render object.

pub mod camera;
#[allow(clippy::module_inception)]
pub mod scene;

#[cfg(test)]
pub(crate) mod testing;

pub use camera::{OrthoCamera, Ray, ScreenPoint, Vec3};
pub use scene::{Scene, SceneObject, Shape};

use crate::board::{Cell, Side};
use crate::error::Result;

/// Opaque reference to an object owned by the render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(u64);

impl VisualHandle {
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VisualHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a scene object represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Square,
    Piece(Side),
    Highlight,
}

/// Classification of a picked object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTag {
    Piece { side: Side, cell: Cell },
    Highlight(Cell),
    PlainSquare(Cell),
}

/// Topmost object under a screen point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickHit {
    pub handle: VisualHandle,
    pub tag: PickTag,
}

/// Operations the game core needs from a renderer
pub trait RenderBackend {
    fn create_piece_visual(&mut self, cell: Cell, side: Side) -> VisualHandle;

    fn create_highlight_visual(&mut self, cell: Cell) -> VisualHandle;

    /// Release a visual; unknown handles are ignored
    fn destroy_visual(&mut self, handle: VisualHandle);

    /// Move an existing visual so it renders on `cell`
    fn reposition_visual(&mut self, handle: VisualHandle, cell: Cell) -> Result<()>;

    /// Topmost object under a normalized screen point, if any
    fn pick_topmost(&self, point: ScreenPoint, camera: &OrthoCamera) -> Option<PickHit>;

    /// Number of squares per side the backend laid out, if it draws a board
    fn board_size(&self) -> Option<usize> {
        None
    }
}
