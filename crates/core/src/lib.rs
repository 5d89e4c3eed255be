//! Rasterizer core - pure, deterministic, and testable
//!
//! This crate turns world-space line segments into a depth-tested grid of
//! shaded character cells. It has **no terminal I/O**, so every stage can be
//! exercised headless:
//!
//! - [`camera`]: world space to view space (position, yaw, pitch, zoom)
//! - [`projector`]: perspective division onto cell coordinates
//! - [`raster`]: octant-classified Bresenham line scan-conversion
//! - [`cell_buffer`]: per-cell color, nearest depth and glyph (z-buffer)
//! - [`scene`]: per-frame segment sources, including the tunnel demo
//! - [`rng`]: seeded LCG for scene colors
//!
//! # Example
//!
//! ```
//! use tui_craft_core::{CellBuffer, LineRasterizer, Projector};
//! use tui_craft_core::types::{Color3, Glyph, Point3};
//!
//! let mut buf = CellBuffer::new(40, 20, 16.0).unwrap();
//! let proj = Projector::for_buffer(40, 20);
//! let raster = LineRasterizer::new();
//!
//! let a = proj.project(Point3::new(-1.0, 4.0, 0.0)).unwrap();
//! let b = proj.project(Point3::new(1.0, 4.0, 0.0)).unwrap();
//! raster.draw_line(&mut buf, a, b, Color3::new(1.0, 0.5, 0.0));
//!
//! assert_eq!(buf.get(19, 9).unwrap().glyph, Glyph::Horizontal);
//! ```

pub mod camera;
pub mod cell_buffer;
pub mod error;
pub mod projector;
pub mod raster;
pub mod rng;
pub mod scene;

pub use tui_craft_types as types;

pub use camera::Camera;
pub use cell_buffer::{Cell, CellBuffer};
pub use error::RenderError;
pub use projector::Projector;
pub use raster::{Axis, Direction, LineCase, LineRasterizer};
pub use rng::SimpleRng;
pub use scene::{Scene, TunnelScene, TUNNEL_PHASES};
