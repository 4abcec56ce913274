//! Board rendering for the checkers GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::Side;
use crate::scene::{OrthoCamera, Scene, SceneObject, ScreenPoint, Shape, VisualHandle, VisualKind};
use crate::Game;

use super::theme::*;

/// Pointer activity over the board, in normalized screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoardInput {
    /// Primary-button click
    pub clicked: Option<ScreenPoint>,
    /// Pointer position while over the board
    pub hovered: Option<ScreenPoint>,
}

/// Board view draws the scene through the camera and reports pointer input
pub struct BoardView {
    /// Drawing area of the last frame
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return pointer input, if any
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game) -> BoardInput {
        let available_size = ui.available_size();

        // Keep the board square so the camera frustum maps onto it without stretching
        let side = (available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN).max(0.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side + 2.0 * BOARD_MARGIN), Sense::click());
        self.board_rect = Rect::from_center_size(response.rect.center(), Vec2::splat(side));

        painter.rect_filled(
            self.board_rect.expand(BORDER_WIDTH),
            CornerRadius::same(4),
            BOARD_BORDER,
        );

        let selected = game.selection().map(|s| s.handle);
        self.draw_scene(&painter, game.backend(), game.camera(), selected, game.hovered());

        let mut input = BoardInput::default();
        if let Some(pointer) = response.hover_pos() {
            input.hovered = self.to_screen_point(pointer);
        }
        if response.clicked() {
            input.clicked = response
                .interact_pointer_pos()
                .and_then(|pointer| self.to_screen_point(pointer));
        }
        input
    }

    /// Paint every scene object, lowest first
    fn draw_scene(
        &self,
        painter: &Painter,
        scene: &Scene,
        camera: &OrthoCamera,
        selected: Option<VisualHandle>,
        hovered: Option<VisualHandle>,
    ) {
        let scale = self.board_rect.width() / (2.0 * camera.half_extent());

        for (handle, object) in scene.objects_back_to_front() {
            let centre = self.project(camera, object);
            match object.kind {
                VisualKind::Square => {
                    let color = if object.cell.is_playable() { SQUARE_DARK } else { SQUARE_LIGHT };
                    painter.rect_filled(self.footprint(object, centre, scale), CornerRadius::ZERO, color);
                }
                VisualKind::Highlight => {
                    let color = if hovered == Some(handle) {
                        HOVERED_MARKER
                    } else {
                        destination_marker()
                    };
                    painter.rect_filled(self.footprint(object, centre, scale), CornerRadius::ZERO, color);
                }
                VisualKind::Piece(side) => {
                    let Shape::Cylinder { radius, .. } = object.shape else {
                        continue;
                    };
                    let color = if selected == Some(handle) {
                        SELECTED
                    } else {
                        match side {
                            Side::Near => NEAR_PIECE,
                            Side::Far => FAR_PIECE,
                        }
                    };
                    self.draw_piece(painter, centre, radius * scale, color);
                }
            }
        }
    }

    /// Draw a single piece with a drop shadow and rim
    fn draw_piece(&self, painter: &Painter, centre: Pos2, radius: f32, color: egui::Color32) {
        painter.circle_filled(centre + Vec2::splat(SHADOW_OFFSET), radius, PIECE_SHADOW);
        painter.circle_filled(centre, radius, color);
        painter.circle_stroke(centre, radius, Stroke::new(PIECE_RIM_WIDTH, PIECE_RIM));
    }

    /// Screen rectangle covered by a box object seen from above
    fn footprint(&self, object: &SceneObject, centre: Pos2, scale: f32) -> Rect {
        let size = match object.shape {
            Shape::Box { half } => Vec2::new(half.x, half.z) * 2.0 * scale,
            Shape::Cylinder { radius, .. } => Vec2::splat(radius * 2.0 * scale),
        };
        Rect::from_center_size(centre, size)
    }

    /// Convert an object's centre to pixel coordinates
    fn project(&self, camera: &OrthoCamera, object: &SceneObject) -> Pos2 {
        let point = camera.world_to_screen(object.position);
        let rect = self.board_rect;
        let (x, y) = point.to_pointer(rect.min.x, rect.min.y, rect.width(), rect.height());
        Pos2::new(x, y)
    }

    /// Convert pixel coordinates to a normalized screen point
    pub fn to_screen_point(&self, pointer: Pos2) -> Option<ScreenPoint> {
        let rect = self.board_rect;
        ScreenPoint::from_pointer(pointer.x, pointer.y, rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}
