//! Retained scene with ray-cast picking

use std::collections::BTreeMap;

use log::{debug, trace};

use super::camera::{OrthoCamera, Ray, ScreenPoint, Vec3};
use super::{PickHit, PickTag, RenderBackend, VisualHandle, VisualKind};
use crate::board::{Cell, Side};
use crate::config::GameConfig;
use crate::error::{CheckersError, Result};

// Object geometry, in world units
const SQUARE_THICKNESS: f32 = 0.2;
const HIGHLIGHT_THICKNESS: f32 = 0.1;
const HIGHLIGHT_ELEVATION: f32 = 0.1;
const PIECE_THICKNESS: f32 = 0.2;
const PIECE_ELEVATION: f32 = 0.2;
const PIECE_INSET: f32 = 0.1;

const EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box given by its half extents
    Box { half: Vec3 },
    /// Cylinder standing on the y axis
    Cylinder { radius: f32, half_height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub kind: VisualKind,
    pub cell: Cell,
    /// Centre of the object
    pub position: Vec3,
    pub shape: Shape,
}

impl SceneObject {
    /// Height of the upper face
    pub fn top(&self) -> f32 {
        match self.shape {
            Shape::Box { half } => self.position.y + half.y,
            Shape::Cylinder { half_height, .. } => self.position.y + half_height,
        }
    }

    /// Distance along `ray` to the first intersection
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = match self.shape {
            Shape::Box { half } => ray_box(ray, self.position - half, self.position + half),
            Shape::Cylinder { radius, half_height } => {
                ray_cylinder(ray, self.position, radius, half_height)
            }
        }?;
        (t <= ray.max_distance).then_some(t)
    }
}

/// Slab test against an axis-aligned box
fn ray_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let origin = ray.origin.to_array();
    let direction = ray.direction.to_array();
    let min = min.to_array();
    let max = max.to_array();

    let mut t_near = 0.0f32;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        if d.abs() < EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    Some(t_near)
}

/// Intersection with a closed cylinder whose axis is parallel to y
fn ray_cylinder(ray: &Ray, centre: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let o = ray.origin - centre;
    let d = ray.direction;
    let within_radius = |p: Vec3| p.x * p.x + p.z * p.z <= radius * radius;
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    // Curved side
    let a = d.x * d.x + d.z * d.z;
    if a > EPSILON {
        let b = 2.0 * (o.x * d.x + o.z * d.z);
        let c = o.x * o.x + o.z * o.z - radius * radius;
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let root = disc.sqrt();
            for t in [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
                let y = o.y + d.y * t;
                if y.abs() <= half_height {
                    consider(t);
                }
            }
        }
    }

    // Caps
    if d.y.abs() > EPSILON {
        for cap in [half_height, -half_height] {
            let t = (cap - o.y) / d.y;
            if within_radius(o + d * t) {
                consider(t);
            }
        }
    }

    // Origin inside the solid
    if within_radius(o) && o.y.abs() <= half_height {
        consider(0.0);
    }

    best
}

/// Scene graph for one board
///
/// Board squares are created up front and live as long as the scene; pieces
/// and highlight markers come and go through [`RenderBackend`].
#[derive(Debug, Clone)]
pub struct Scene {
    board_size: usize,
    square_size: f32,
    next_id: u64,
    objects: BTreeMap<VisualHandle, SceneObject>,
}

impl Scene {
    /// Scene holding the board squares
    pub fn new(config: &GameConfig) -> Self {
        let mut scene = Self {
            board_size: config.board_size,
            square_size: config.square_size,
            next_id: 0,
            objects: BTreeMap::new(),
        };

        let half = Vec3::new(
            config.square_size / 2.0,
            SQUARE_THICKNESS / 2.0,
            config.square_size / 2.0,
        );
        for row in 0..config.board_size {
            for col in 0..config.board_size {
                let cell = Cell::new(row, col);
                scene.insert(SceneObject {
                    kind: VisualKind::Square,
                    cell,
                    position: scene.cell_position(cell, 0.0),
                    shape: Shape::Box { half },
                });
            }
        }

        debug!("scene created with {} squares", scene.objects.len());
        scene
    }

    /// World position of a cell centre at height `y`
    pub fn cell_position(&self, cell: Cell, y: f32) -> Vec3 {
        Vec3::new(
            cell.col as f32 * self.square_size,
            y,
            cell.row as f32 * self.square_size,
        )
    }

    pub fn piece_radius(&self) -> f32 {
        (self.square_size / 2.0 - PIECE_INSET).max(self.square_size * 0.1)
    }

    fn insert(&mut self, object: SceneObject) -> VisualHandle {
        let handle = VisualHandle::new(self.next_id);
        self.next_id += 1;
        self.objects.insert(handle, object);
        handle
    }

    pub fn get(&self, handle: VisualHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    pub fn contains(&self, handle: VisualHandle) -> bool {
        self.objects.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of live objects of the given kind
    pub fn count(&self, kind: VisualKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }

    /// Objects ordered so later ones cover earlier ones from above
    pub fn objects_back_to_front(&self) -> Vec<(VisualHandle, &SceneObject)> {
        let mut objects: Vec<_> = self.objects.iter().map(|(h, o)| (*h, o)).collect();
        objects.sort_by(|a, b| a.1.top().total_cmp(&b.1.top()));
        objects
    }

    /// Nearest object hit by `ray`
    pub fn raycast(&self, ray: &Ray) -> Option<(VisualHandle, &SceneObject, f32)> {
        let mut best: Option<(VisualHandle, &SceneObject, f32)> = None;
        for (handle, object) in &self.objects {
            if let Some(t) = object.intersect(ray) {
                if best.map_or(true, |(_, _, b)| t < b) {
                    best = Some((*handle, object, t));
                }
            }
        }
        best
    }
}

impl RenderBackend for Scene {
    fn create_piece_visual(&mut self, cell: Cell, side: Side) -> VisualHandle {
        let object = SceneObject {
            kind: VisualKind::Piece(side),
            cell,
            position: self.cell_position(cell, PIECE_ELEVATION),
            shape: Shape::Cylinder {
                radius: self.piece_radius(),
                half_height: PIECE_THICKNESS / 2.0,
            },
        };
        self.insert(object)
    }

    fn create_highlight_visual(&mut self, cell: Cell) -> VisualHandle {
        let object = SceneObject {
            kind: VisualKind::Highlight,
            cell,
            position: self.cell_position(cell, HIGHLIGHT_ELEVATION),
            shape: Shape::Box {
                half: Vec3::new(
                    self.square_size / 2.0,
                    HIGHLIGHT_THICKNESS / 2.0,
                    self.square_size / 2.0,
                ),
            },
        };
        self.insert(object)
    }

    fn destroy_visual(&mut self, handle: VisualHandle) {
        if self.objects.remove(&handle).is_none() {
            trace!("destroy of unknown visual {} ignored", handle);
        }
    }

    fn reposition_visual(&mut self, handle: VisualHandle, cell: Cell) -> Result<()> {
        let square_size = self.square_size;
        let object = self
            .objects
            .get_mut(&handle)
            .ok_or(CheckersError::UnknownVisual(handle))?;
        object.cell = cell;
        object.position.x = cell.col as f32 * square_size;
        object.position.z = cell.row as f32 * square_size;
        Ok(())
    }

    fn pick_topmost(&self, point: ScreenPoint, camera: &OrthoCamera) -> Option<PickHit> {
        let ray = camera.ray_from(point);
        let (handle, object, _) = self.raycast(&ray)?;
        let tag = match object.kind {
            VisualKind::Square => PickTag::PlainSquare(object.cell),
            VisualKind::Piece(side) => PickTag::Piece {
                side,
                cell: object.cell,
            },
            VisualKind::Highlight => PickTag::Highlight(object.cell),
        };
        Some(PickHit { handle, tag })
    }

    fn board_size(&self) -> Option<usize> {
        Some(self.board_size)
    }
}
