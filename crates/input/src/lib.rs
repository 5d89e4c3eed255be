//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::CameraAction`]s and
//! collects them between frames without blocking the render loop.

pub mod map;
pub mod queue;

pub use tui_craft_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{ActionQueue, MAX_PENDING_ACTIONS};
