//! Shader/quantizer: maps shaded cells onto the 216-color terminal cube and
//! composes the escape-coded frame buffer.
//!
//! Every cell becomes a fixed 23-byte record so the whole frame can be
//! emitted with one write:
//!
//! ```text
//! ESC[48;5;NNNm ESC[38;5;NNNm G
//! ```
//!
//! The foreground is always the per-channel complement of the background so
//! the glyph stays readable on its own shading.

use std::io;

use crossterm::{cursor, QueueableCommand};

use crate::core::{Cell, CellBuffer, RenderError};
use crate::types::{
    Color3, CELL_RECORD_LEN, COLOR_CUBE_BASE, COLOR_CUBE_MAX, COLOR_LEVELS, CURSOR_HOME_LEN,
    HEADER_ROWS,
};

const MAX_LEVEL: u8 = COLOR_LEVELS - 1;
const BG_PREFIX: &[u8; 7] = b"\x1b[48;5;";
const FG_PREFIX: &[u8; 7] = b"\x1b[38;5;";

/// Background and foreground palette indices for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeColor {
    pub background: u8,
    pub foreground: u8,
}

/// Quantize one channel to a cube level.
///
/// Channels can exceed 1.0 after inverse-depth shading of very near
/// geometry; the level is clamped to `0..=5` so the index always stays
/// inside the cube and fits three digits.
pub fn channel_level(v: f64) -> u8 {
    let level = (v * MAX_LEVEL as f64).round();
    if level.is_nan() || level <= 0.0 {
        0
    } else if level >= MAX_LEVEL as f64 {
        MAX_LEVEL
    } else {
        level as u8
    }
}

/// `36r + 6g + b + 16` for levels in `0..=5`, capped at the last cube entry.
pub fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r.min(MAX_LEVEL), g.min(MAX_LEVEL), b.min(MAX_LEVEL));
    (36 * r + 6 * g + b + COLOR_CUBE_BASE).min(COLOR_CUBE_MAX)
}

pub fn quantize(color: Color3) -> CubeColor {
    let r = channel_level(color.r);
    let g = channel_level(color.g);
    let b = channel_level(color.b);
    CubeColor {
        background: cube_index(r, g, b),
        foreground: cube_index(MAX_LEVEL - r, MAX_LEVEL - g, MAX_LEVEL - b),
    }
}

#[inline]
fn put_index(dst: &mut [u8], index: u8) {
    dst[0] = b'0' + index / 100;
    dst[1] = b'0' + (index / 10) % 10;
    dst[2] = b'0' + index % 10;
}

/// Compose the fixed-width record for one cell.
pub fn encode_cell(cell: &Cell) -> [u8; CELL_RECORD_LEN] {
    let cube = quantize(cell.color);
    let mut rec = [0u8; CELL_RECORD_LEN];
    rec[0..7].copy_from_slice(BG_PREFIX);
    put_index(&mut rec[7..10], cube.background);
    rec[10] = b'm';
    rec[11..18].copy_from_slice(FG_PREFIX);
    put_index(&mut rec[18..21], cube.foreground);
    rec[21] = b'm';
    rec[22] = cell.glyph.as_byte();
    rec
}

/// Bytes in one composed frame of `width` x `height` cells.
pub fn frame_len(width: u16, height: u16) -> usize {
    CURSOR_HOME_LEN + (width as usize) * (height as usize) * CELL_RECORD_LEN
}

/// Reusable output buffer for composed frames.
///
/// Encoding is allocation-free once the buffer has been sized for the cell
/// buffer's dimensions.
#[derive(Debug, Default)]
pub struct FrameEncoder {
    buf: Vec<u8>,
}

impl FrameEncoder {
    /// Encoder pre-sized for a `width` x `height` cell buffer.
    pub fn new(width: u16, height: u16) -> Result<Self, RenderError> {
        let len = frame_len(width, height);
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation {
                what: "frame buffer",
                cells: (width as usize) * (height as usize),
            })?;
        Ok(Self { buf })
    }

    /// Compose `cells` into a frame: cursor-home to the first buffer row,
    /// then one record per cell in row-major order.
    pub fn encode(&mut self, cells: &CellBuffer) -> Result<&[u8], RenderError> {
        self.buf.clear();
        queue_cursor_home(&mut self.buf).map_err(RenderError::OutputWrite)?;
        for cell in cells.cells() {
            self.buf.extend_from_slice(&encode_cell(cell));
        }
        Ok(&self.buf)
    }

    /// The most recently composed frame.
    pub fn frame(&self) -> &[u8] {
        &self.buf
    }
}

/// Cursor to row 2, column 1: the cell buffer starts under the header row.
fn queue_cursor_home(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, HEADER_ROWS - 1))?;
    Ok(())
}
