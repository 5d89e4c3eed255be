//! TUI Craft (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benchmarks can use `tui_craft::{core,engine,input,term,types}`.

pub use tui_craft_core as core;
pub use tui_craft_engine as engine;
pub use tui_craft_input as input;
pub use tui_craft_term as term;
pub use tui_craft_types as types;
