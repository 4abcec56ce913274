//! Theme constants for the checkers GUI

use egui::Color32;

// Board squares
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(240, 217, 181);
pub const SQUARE_DARK: Color32 = Color32::from_rgb(181, 136, 99);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(100, 70, 45);

// Pieces
pub const FAR_PIECE: Color32 = Color32::from_rgb(20, 20, 20);
pub const NEAR_PIECE: Color32 = Color32::from_rgb(220, 30, 30);
pub const PIECE_RIM: Color32 = Color32::from_rgb(90, 90, 90);
pub const PIECE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);

// Selection feedback
pub const SELECTED: Color32 = Color32::from_rgb(255, 255, 0);
pub const HOVERED_MARKER: Color32 = Color32::from_rgb(255, 255, 0);

// Functions for colors that can't be const
pub fn destination_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 255, 0, 128)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const ACCENT: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const BORDER_WIDTH: f32 = 6.0;
pub const PIECE_RIM_WIDTH: f32 = 1.5;
pub const SHADOW_OFFSET: f32 = 2.0;
/// Number of recent moves listed in the side panel
pub const RECENT_MOVES: usize = 8;
