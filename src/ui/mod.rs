//! GUI module for the checkers board
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::CheckersApp;
pub use board_view::{BoardInput, BoardView};
