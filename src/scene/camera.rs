//! Orthographic top-down camera and screen/world conversions

use std::ops::{Add, Mul, Sub};

use crate::config::GameConfig;

/// Distance from the camera to its near clipping plane
pub const NEAR_PLANE: f32 = 0.1;
/// Distance from the camera to its far clipping plane
pub const FAR_PLANE: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const DOWN: Vec3 = Vec3 { x: 0.0, y: -1.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Point in normalized device coordinates
///
/// `x` runs -1 (left) to 1 (right), `y` runs -1 (bottom) to 1 (top).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a pointer position inside a canvas rectangle
    ///
    /// Returns None for a degenerate rectangle.
    pub fn from_pointer(px: f32, py: f32, left: f32, top: f32, width: f32, height: f32) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x: ((px - left) / width) * 2.0 - 1.0,
            y: -((py - top) / height) * 2.0 + 1.0,
        })
    }

    /// Inverse of [`from_pointer`](Self::from_pointer)
    pub fn to_pointer(self, left: f32, top: f32, width: f32, height: f32) -> (f32, f32) {
        (
            left + (self.x + 1.0) * 0.5 * width,
            top + (1.0 - self.y) * 0.5 * height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Furthest distance along the ray that still counts as a hit
    pub max_distance: f32,
}

/// Camera looking straight down at the board centre
///
/// The frustum spans exactly the board, with screen-up pointing toward row 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    target: Vec3,
    height: f32,
    half_extent: f32,
}

impl OrthoCamera {
    pub fn new(board_size: usize, square_size: f32, height: f32) -> Self {
        let centre = (board_size as f32 / 2.0 - 0.5) * square_size;
        Self {
            target: Vec3::new(centre, 0.0, centre),
            height,
            half_extent: board_size as f32 * square_size / 2.0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, config.square_size, config.camera_height)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.target.x, self.height, self.target.z)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Half of the visible width in world units
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Ray through a screen point, starting on the near plane
    pub fn ray_from(&self, point: ScreenPoint) -> Ray {
        let (x, z) = self.screen_to_ground(point);
        Ray {
            origin: Vec3::new(x, self.height - NEAR_PLANE, z),
            direction: Vec3::DOWN,
            max_distance: FAR_PLANE - NEAR_PLANE,
        }
    }

    /// World (x, z) seen at a screen point
    pub fn screen_to_ground(&self, point: ScreenPoint) -> (f32, f32) {
        (
            self.target.x + point.x * self.half_extent,
            self.target.z - point.y * self.half_extent,
        )
    }

    pub fn world_to_screen(&self, p: Vec3) -> ScreenPoint {
        ScreenPoint::new(
            (p.x - self.target.x) / self.half_extent,
            (self.target.z - p.z) / self.half_extent,
        )
    }
}
