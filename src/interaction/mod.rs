//! Pointer interaction: selection, destination markers and move commits
//!
//! Everything here runs synchronously inside one pointer event. A click is
//! resolved to a [`PickHit`](crate::scene::PickHit) by the render backend and
//! handed to [`SelectionController::on_pick`], which may in turn ask
//! [`MoveExecutor`] to commit a move.

pub mod highlight;
pub mod hover;
pub mod mover;
pub mod selection;

pub use highlight::HighlightController;
pub use hover::HoverTracker;
pub use mover::MoveExecutor;
pub use selection::{PickOutcome, Selection, SelectionController, SelectionState};
