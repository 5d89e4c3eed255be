//! Error type shared by the rasterizer core and the terminal backend.

use std::io;

use thiserror::Error;

/// Fatal rendering errors.
///
/// Out-of-bounds geometry is never an error; it is dropped silently.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Terminal mode or size could not be acquired.
    #[error("terminal setup failed ({what}): {source}")]
    ResourceAcquisition {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    /// The cell buffer (or the frame encoding buffer) could not be sized.
    #[error("could not allocate {what} for {cells} cells")]
    Allocation { what: &'static str, cells: usize },

    /// The composed frame could not be fully written.
    #[error("frame write failed: {0}")]
    OutputWrite(#[source] io::Error),
}

impl RenderError {
    pub fn acquisition(what: &'static str, source: io::Error) -> Self {
        RenderError::ResourceAcquisition { what, source }
    }
}
