//! Session configuration

use crate::board::{Side, BOARD_SIZE, HOME_ROWS};
use crate::error::{CheckersError, Result};

/// Smallest board on which the two home zones do not overlap
pub const MIN_BOARD_SIZE: usize = HOME_ROWS * 2;
pub const MAX_BOARD_SIZE: usize = 26;

/// Parameters fixed for the lifetime of one game session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Edge length of one cell in world units
    pub square_size: f32,
    /// The only side whose pieces respond to clicks
    pub controlling_side: Side,
    /// Height of the orthographic camera above the board
    pub camera_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            square_size: 1.0,
            controlling_side: Side::Near,
            camera_height: 10.0,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    pub fn with_square_size(mut self, square_size: f32) -> Self {
        self.square_size = square_size;
        self
    }

    pub fn with_controlling_side(mut self, side: Side) -> Self {
        self.controlling_side = side;
        self
    }

    pub fn with_camera_height(mut self, height: f32) -> Self {
        self.camera_height = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(CheckersError::InvalidConfig(format!(
                "board size {} not in {}..={}",
                self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(CheckersError::InvalidConfig(format!(
                "square size must be positive, got {}",
                self.square_size
            )));
        }
        if !self.camera_height.is_finite() || self.camera_height <= 0.0 {
            return Err(CheckersError::InvalidConfig(format!(
                "camera height must be positive, got {}",
                self.camera_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.controlling_side, Side::Near);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_overlapping_home_rows() {
        assert!(GameConfig::new(5).validate().is_err());
        assert!(GameConfig::new(6).validate().is_ok());
        assert!(GameConfig::new(10).validate().is_ok());
        assert!(GameConfig::new(27).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = GameConfig::default().with_square_size(0.0);
        assert!(matches!(config.validate(), Err(CheckersError::InvalidConfig(_))));

        let config = GameConfig::default().with_camera_height(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(10)
            .with_square_size(2.0)
            .with_controlling_side(Side::Far)
            .with_camera_height(20.0);
        assert_eq!(config.board_size, 10);
        assert_eq!(config.square_size, 2.0);
        assert_eq!(config.controlling_side, Side::Far);
        assert_eq!(config.camera_height, 20.0);
    }
}
