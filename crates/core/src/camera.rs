//! First-person camera: turns world points into view space.

use crate::types::{CameraAction, Point3};

/// Distance moved per movement action.
pub const MOVE_STEP: f64 = 0.25;
/// Radians turned per look action.
pub const TURN_STEP: f64 = 0.05;
/// Zoom multiplier per field-of-view action.
pub const ZOOM_STEP: f64 = 1.1;

const MAX_PITCH: f64 = 1.2;
const MIN_ZOOM: f64 = 0.25;
const MAX_ZOOM: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3,
    yaw: f64,
    pitch: f64,
    zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::default(),
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Horizontal unit vector the camera faces.
    pub fn forward(&self) -> Point3 {
        Point3::new(self.yaw.sin(), self.yaw.cos(), 0.0)
    }

    /// Horizontal unit vector to the camera's right.
    pub fn right(&self) -> Point3 {
        Point3::new(self.yaw.cos(), -self.yaw.sin(), 0.0)
    }

    pub fn apply(&mut self, action: CameraAction) {
        match action {
            CameraAction::MoveForward => {
                self.position = self.position.add(self.forward().scale(MOVE_STEP))
            }
            CameraAction::MoveBack => {
                self.position = self.position.sub(self.forward().scale(MOVE_STEP))
            }
            CameraAction::MoveRight => {
                self.position = self.position.add(self.right().scale(MOVE_STEP))
            }
            CameraAction::MoveLeft => {
                self.position = self.position.sub(self.right().scale(MOVE_STEP))
            }
            CameraAction::LookLeft => self.yaw -= TURN_STEP,
            CameraAction::LookRight => self.yaw += TURN_STEP,
            CameraAction::LookUp => {
                self.pitch = (self.pitch + TURN_STEP).min(MAX_PITCH);
            }
            CameraAction::LookDown => {
                self.pitch = (self.pitch - TURN_STEP).max(-MAX_PITCH);
            }
            CameraAction::WidenFov => {
                self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
            }
            CameraAction::NarrowFov => {
                self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
            }
        }
    }

    /// Transform a world point into view space (depth along `y`).
    pub fn to_view(&self, p: Point3) -> Point3 {
        let rel = p.sub(self.position);
        let x = rel.dot(self.right());
        let y = rel.dot(self.forward());
        let z = rel.z;

        // Pitch about the view x axis; rows grow downward so positive pitch looks up.
        let (sin_p, cos_p) = self.pitch.sin_cos();
        Point3::new(x, y * cos_p - z * sin_p, y * sin_p + z * cos_p)
    }
}
