//! Depth-tested cell buffer covering the visible terminal area.

use log::debug;

use crate::error::RenderError;
use crate::types::{Color3, Glyph, DEFAULT_MAX_RENDER};

/// A single buffer cell: shaded color, nearest depth so far, glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub color: Color3,
    pub depth: f64,
    pub glyph: Glyph,
}

impl Cell {
    pub const fn blank(max_depth: f64) -> Self {
        Self {
            color: Color3::BLACK,
            depth: max_depth,
            glyph: Glyph::Blank,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_MAX_RENDER)
    }
}

/// 2D grid of [`Cell`]s with a z-buffer write path.
///
/// Allocated once per session; [`reset`](CellBuffer::reset) restores the
/// background state each frame without reallocating.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    max_depth: f64,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Allocate a `width` x `height` buffer whose reset depth is `max_depth`.
    pub fn new(width: u16, height: u16, max_depth: f64) -> Result<Self, RenderError> {
        let len = (width as usize) * (height as usize);
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation {
                what: "cell buffer",
                cells: len,
            })?;
        cells.resize(len, Cell::blank(max_depth));
        debug!("allocated {}x{} cell buffer (max depth {})", width, height, max_depth);
        Ok(Self {
            width,
            height,
            max_depth,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Restore every cell to black, max depth and a blank glyph.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::blank(self.max_depth));
    }

    /// Depth-tested write.
    ///
    /// The cell takes `color / depth`, `glyph` and `depth` only when `depth`
    /// is strictly nearer than what it holds. Returns whether the write landed.
    /// Out-of-range coordinates and non-positive or non-finite depths are
    /// ignored.
    pub fn test_and_write(
        &mut self,
        col: i32,
        row: i32,
        depth: f64,
        color: Color3,
        glyph: Glyph,
    ) -> bool {
        if !(depth > 0.0) || !depth.is_finite() {
            return false;
        }
        let Some(i) = self.idx(col, row) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if depth < cell.depth {
            *cell = Cell {
                color: color.scale(1.0 / depth),
                depth,
                glyph,
            };
            true
        } else {
            false
        }
    }
}
