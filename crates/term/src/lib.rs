//! Terminal backend.
//!
//! Turns a shaded [`CellBuffer`](crate::core::CellBuffer) into a single
//! escape-coded byte buffer and writes it to the terminal in one go.
//!
//! Goals:
//! - Keep the rasterizer core free of I/O
//! - Emit each frame with exactly one write (no torn frames)
//! - Always hand the terminal back in cooked mode, on every exit path

pub mod header;
pub mod renderer;
pub mod shade;

pub use tui_craft_core as core;
pub use tui_craft_types as types;

pub use header::banner;
pub use renderer::{queue_restore, queue_setup, FrameOutput, TerminalRenderer, TerminalSize};
pub use shade::{
    channel_level, cube_index, encode_cell, frame_len, quantize, CubeColor, FrameEncoder,
};
