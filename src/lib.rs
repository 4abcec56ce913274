//! Interactive checkers board
//!
//! A checkers board drawn as a small 3D scene, where the user picks one of
//! their pieces and moves it onto a highlighted square:
//! - 8x8 board by default, any size from 6 to 26
//! - Pieces step one square diagonally toward the opponent onto a free square
//! - Only the controlling side's pieces can be selected
//!
//! There are deliberately no captures, kings, turns or game-over detection.
//!
//! # Architecture
//!
//! - [`board`]: Occupancy grid holding each piece's side and visual handle
//! - [`rules`]: Destination generation and validation
//! - [`scene`]: Render backend contract, orthographic camera and ray-cast picking
//! - [`interaction`]: Selection state machine, destination markers, move commits
//! - [`game`]: Session context that owns all of the above
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use checkers::{Cell, Game, GameConfig, PickOutcome};
//!
//! let mut game = Game::with_scene(GameConfig::default()).unwrap();
//!
//! // Click the piece on (5, 0), then the marker on (4, 1)
//! let at = |game: &Game, cell: Cell| {
//!     let world = game.backend().cell_position(cell, 0.0);
//!     game.camera().world_to_screen(world)
//! };
//! game.click(at(&game, Cell::new(5, 0)));
//! let outcome = game.click(at(&game, Cell::new(4, 1)));
//!
//! assert_eq!(outcome, PickOutcome::Moved { from: Cell::new(5, 0), to: Cell::new(4, 1) });
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod interaction;
pub mod rules;
pub mod scene;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{BoardState, Cell, Side, BOARD_SIZE};
pub use config::GameConfig;
pub use error::{CheckersError, Result};
pub use game::{Game, MoveRecord};
pub use interaction::{PickOutcome, Selection};
pub use scene::{RenderBackend, Scene, ScreenPoint, VisualHandle};
