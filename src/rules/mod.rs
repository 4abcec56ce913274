//! Movement rules for checkers
//!
//! Only single diagonal steps toward the opponent's side onto a free square
//! are produced. There are no captures, no kings and no turn order.

pub mod movement;

// Re-exports for convenient access
pub use movement::{candidate_destinations, forward_offsets, is_legal_destination, is_legal_step};
