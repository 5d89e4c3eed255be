//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are plain data with no external dependencies, so they can be
//! used by the pure rasterizer core, the terminal backend and the tests alike.
//!
//! # Coordinate Conventions
//!
//! - **x**: horizontal world axis, maps to terminal columns
//! - **y**: the *depth axis*, distance from the viewer along the view direction
//! - **z**: vertical world axis, maps to terminal rows (positive is down)
//!
//! # Frame Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HEADER_ROWS` | 2 | Terminal rows not covered by the cell buffer |
//! | `BORDER_MARGIN` | 1 | Cells reserved on each buffer edge |
//! | `CELL_RECORD_LEN` | 23 | Bytes emitted per cell |
//! | `CURSOR_HOME_LEN` | 6 | Bytes of the per-frame cursor-home prefix |
//! | `DEFAULT_MAX_RENDER` | 16.0 | Depth sentinel / furthest rendered geometry |
//! | `COLOR_LEVELS` | 6 | Levels per channel in the 6x6x6 color cube |
//!
//! # Examples
//!
//! ```
//! use tui_craft_types::{CameraAction, Color3, Glyph, Point3, Segment};
//!
//! let seg = Segment::new(
//!     Point3::new(-1.0, 2.0, -1.0),
//!     Point3::new(1.0, 2.0, -1.0),
//!     Color3::new(1.0, 0.0, 0.0),
//! );
//! assert_eq!(seg.start.y, 2.0);
//!
//! assert_eq!(Glyph::Horizontal.as_byte(), b'_');
//! assert_ne!(CameraAction::LookLeft, CameraAction::LookRight);
//! ```

/// Terminal rows not covered by the cell buffer (header banner plus one spare row).
pub const HEADER_ROWS: u16 = 2;

/// Cells reserved on each edge of the buffer; lines touching them are rejected.
pub const BORDER_MARGIN: i32 = 1;

/// Bytes in one composed cell record:
/// `ESC[48;5;` (7) + 3 digits + `m` + `ESC[38;5;` (7) + 3 digits + `m` + glyph.
pub const CELL_RECORD_LEN: usize = 23;

/// Bytes in the cursor-home prefix (`ESC[2;1H`) written before each frame.
pub const CURSOR_HOME_LEN: usize = 6;

/// Default max render distance, also the depth written by a buffer reset.
pub const DEFAULT_MAX_RENDER: f64 = 16.0;

/// Default fixed delay between frames in milliseconds (~30 FPS).
pub const DEFAULT_FRAME_MS: u64 = 33;

/// Levels per channel in the terminal's 6x6x6 color cube.
pub const COLOR_LEVELS: u8 = 6;

/// First palette index of the color cube.
pub const COLOR_CUBE_BASE: u8 = 16;

/// Last palette index of the color cube.
pub const COLOR_CUBE_MAX: u8 = 231;

/// A point in world or view space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    /// Depth axis.
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Point3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Point3) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn dot(self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

/// Linear RGB intensity, nominally in `[0, 1]` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const BLACK: Color3 = Color3::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn add(self, other: Color3) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    pub fn sub(self, other: Color3) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

/// A projected point: integer cell coordinates plus the depth it was projected from.
///
/// Coordinates are signed so that off-screen projections survive until the
/// rasterizer's bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub col: i32,
    pub row: i32,
    pub depth: f64,
}

impl ScreenPoint {
    pub const fn new(col: i32, row: i32, depth: f64) -> Self {
        Self { col, row, depth }
    }
}

/// A colored line segment in world space, the unit of scene geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
    pub color: Color3,
}

impl Segment {
    pub const fn new(start: Point3, end: Point3, color: Color3) -> Self {
        Self { start, end, color }
    }
}

/// Character drawn in a cell.
///
/// - **Blank**: `' '`, the reset state
/// - **Horizontal**: `'_'`, column-major line body
/// - **Vertical**: `'|'`, row-major line body
/// - **Falling**: `'\\'`, column and row advance together
/// - **Rising**: `'/'`, column and row advance in opposite directions
/// - **Point**: `'+'`, a degenerate single-cell line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Horizontal,
    Vertical,
    Falling,
    Rising,
    Point,
}

impl Glyph {
    pub const fn as_byte(self) -> u8 {
        match self {
            Glyph::Blank => b' ',
            Glyph::Horizontal => b'_',
            Glyph::Vertical => b'|',
            Glyph::Falling => b'\\',
            Glyph::Rising => b'/',
            Glyph::Point => b'+',
        }
    }

    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

/// Commands that steer the camera between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    /// Move along the view direction
    MoveForward,
    /// Move against the view direction
    MoveBack,
    /// Strafe left
    MoveLeft,
    /// Strafe right
    MoveRight,
    /// Turn left (yaw)
    LookLeft,
    /// Turn right (yaw)
    LookRight,
    /// Tilt up (pitch)
    LookUp,
    /// Tilt down (pitch)
    LookDown,
    /// Zoom out (wider field of view)
    WidenFov,
    /// Zoom in (narrower field of view)
    NarrowFov,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout_constants() {
        assert_eq!(CELL_RECORD_LEN, 7 + 3 + 1 + 7 + 3 + 1 + 1);
        assert_eq!(CURSOR_HOME_LEN, "\x1b[2;1H".len());
        assert_eq!(
            COLOR_CUBE_MAX as u32,
            COLOR_CUBE_BASE as u32 + (COLOR_LEVELS as u32).pow(3) - 1
        );
    }

    #[test]
    fn glyph_bytes_are_distinct() {
        let all = [
            Glyph::Blank,
            Glyph::Horizontal,
            Glyph::Vertical,
            Glyph::Falling,
            Glyph::Rising,
            Glyph::Point,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_byte(), b.as_byte());
            }
        }
        assert_eq!(Glyph::default(), Glyph::Blank);
        assert_eq!(Glyph::Falling.as_char(), '\\');
    }

    #[test]
    fn point_vector_helpers() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(a.sub(b), Point3::new(0.5, 1.5, 2.5));
        assert_eq!(a.add(b).scale(2.0), Point3::new(3.0, 5.0, 7.0));
        assert_eq!(a.dot(b), 3.0);
    }
}
