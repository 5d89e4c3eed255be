//! Frame engine.
//!
//! Glues the rasterizer core to an output sink: allocates the session's cell
//! buffer, runs the reset, draw, shade, present cycle once per frame, and
//! tracks the driver's `Init`/`Frame`/`Exit` state.
//!
//! # Example
//!
//! ```
//! use tui_craft_engine::{DriverState, FrameDriver, RenderConfig};
//! use tui_craft_engine::core::TunnelScene;
//!
//! let mut driver = FrameDriver::new(RenderConfig::default(), 80, 22).unwrap();
//! let mut scene = TunnelScene::new(16.0, 7);
//! let mut out: Vec<u8> = Vec::new();
//!
//! driver.frame(&mut scene, &mut out).unwrap();
//! assert_eq!(driver.state(), DriverState::Frame);
//! assert_eq!(out.len(), 6 + 80 * 22 * 23);
//! ```

pub mod config;
pub mod driver;

pub use tui_craft_core as core;
pub use tui_craft_term as term;
pub use tui_craft_types as types;

pub use config::RenderConfig;
pub use driver::{DriverState, FrameDriver, FrameStats};
