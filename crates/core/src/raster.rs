//! Line rasterizer: scan-converts projected segments into the cell buffer.
//!
//! A line is classified once into a [`LineCase`] from the signs of its
//! column/row deltas and which delta dominates. Every case then runs through
//! the same stepping loop ([`Walk::run`]); the case only decides how the
//! minor axis advances and which glyphs are used:
//!
//! | case | minor axis | glyphs |
//! |------|------------|--------|
//! | `Point` | - | `+` |
//! | `Straight` | never | axis body glyph (`_` for columns, vertical bar for rows) |
//! | `Diagonal` | every step | `\` or `/` |
//! | `Octant` | decision variable | body glyph, diagonal glyph on minor steps |
//!
//! Depth and color are interpolated with fixed per-step deltas that are
//! accumulated, not recomputed. Lines with either endpoint inside the border
//! margin or outside the buffer are rejected whole.

use crate::cell_buffer::CellBuffer;
use crate::types::{Color3, Glyph, ScreenPoint, BORDER_MARGIN};

/// The axis a line advances along one cell per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    fn body_glyph(self) -> Glyph {
        match self {
            Axis::Column => Glyph::Horizontal,
            Axis::Row => Glyph::Vertical,
        }
    }
}

/// Unit step per iteration on each axis (`-1`, `0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub col: i32,
    pub row: i32,
}

impl Direction {
    /// Glyph for a cell where both axes advance.
    ///
    /// Rows grow downward, so advancing both the same way falls (`\`).
    pub fn diagonal_glyph(self) -> Glyph {
        if self.col == self.row {
            Glyph::Falling
        } else {
            Glyph::Rising
        }
    }
}

/// Directional classification of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCase {
    /// Both endpoints on the same cell.
    Point,
    /// Exactly one of the deltas is zero.
    Straight { axis: Axis, dir: Direction },
    /// `|dcol| == |drow|`.
    Diagonal { dir: Direction },
    /// General slope: one of eight octants (major axis x quadrant).
    Octant { major: Axis, dir: Direction },
}

impl LineCase {
    pub fn classify(dcol: i32, drow: i32) -> Self {
        let dir = Direction {
            col: dcol.signum(),
            row: drow.signum(),
        };
        let (adc, adr) = (dcol.unsigned_abs(), drow.unsigned_abs());

        match (adc, adr) {
            (0, 0) => LineCase::Point,
            (_, 0) => LineCase::Straight {
                axis: Axis::Column,
                dir,
            },
            (0, _) => LineCase::Straight {
                axis: Axis::Row,
                dir,
            },
            _ if adc == adr => LineCase::Diagonal { dir },
            _ if adc > adr => LineCase::Octant {
                major: Axis::Column,
                dir,
            },
            _ => LineCase::Octant {
                major: Axis::Row,
                dir,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MinorRule {
    Never,
    Always,
    Decision,
}

/// One parameterized scan: start cell, per-axis steps and interpolation deltas.
struct Walk {
    col: i32,
    row: i32,
    dir: Direction,
    major: Axis,
    major_len: i64,
    minor_len: i64,
    rule: MinorRule,
    body: Glyph,
    diagonal: Glyph,
    depth: f64,
    depth_step: f64,
    color: Color3,
    color_step: Color3,
}

impl Walk {
    fn run(mut self, buf: &mut CellBuffer) -> usize {
        let mut decision = 2 * self.minor_len - self.major_len;

        for i in 0..=self.major_len {
            // The last cell never steps past the endpoint.
            let minor_step = i < self.major_len
                && match self.rule {
                    MinorRule::Never => false,
                    MinorRule::Always => true,
                    MinorRule::Decision => decision > 0,
                };
            let glyph = if minor_step { self.diagonal } else { self.body };

            buf.test_and_write(self.col, self.row, self.depth, self.color, glyph);

            if minor_step {
                decision -= 2 * self.major_len;
                match self.major {
                    Axis::Column => self.row += self.dir.row,
                    Axis::Row => self.col += self.dir.col,
                }
            }
            decision += 2 * self.minor_len;

            match self.major {
                Axis::Column => self.col += self.dir.col,
                Axis::Row => self.row += self.dir.row,
            }
            self.depth += self.depth_step;
            self.color = self.color.add(self.color_step);
        }

        (self.major_len + 1) as usize
    }
}

/// Draws depth-tested lines into a [`CellBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRasterizer {
    margin: i32,
}

impl Default for LineRasterizer {
    fn default() -> Self {
        Self {
            margin: BORDER_MARGIN,
        }
    }
}

impl LineRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizer that rejects endpoints within `margin` cells of any edge.
    pub fn with_margin(margin: i32) -> Self {
        Self {
            margin: margin.max(0),
        }
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Whether `p` lies inside the drawable interior of `buf`.
    pub fn accepts(&self, buf: &CellBuffer, p: ScreenPoint) -> bool {
        let last_col = buf.width() as i32 - 1 - self.margin;
        let last_row = buf.height() as i32 - 1 - self.margin;
        p.col >= self.margin && p.row >= self.margin && p.col <= last_col && p.row <= last_row
    }

    /// Draw a single-color line. Returns the number of cells visited
    /// (0 when the line is rejected).
    pub fn draw_line(
        &self,
        buf: &mut CellBuffer,
        p0: ScreenPoint,
        p1: ScreenPoint,
        color: Color3,
    ) -> usize {
        self.draw_gradient_line(buf, p0, color, p1, color)
    }

    /// Draw a line whose color blends from `c0` at `p0` to `c1` at `p1`.
    pub fn draw_gradient_line(
        &self,
        buf: &mut CellBuffer,
        p0: ScreenPoint,
        c0: Color3,
        p1: ScreenPoint,
        c1: Color3,
    ) -> usize {
        if !self.accepts(buf, p0) || !self.accepts(buf, p1) {
            return 0;
        }

        let dcol = p1.col - p0.col;
        let drow = p1.row - p0.row;
        let adc = dcol.unsigned_abs() as i64;
        let adr = drow.unsigned_abs() as i64;

        let (major, dir, rule, body, diagonal) = match LineCase::classify(dcol, drow) {
            LineCase::Point => {
                buf.test_and_write(p0.col, p0.row, p0.depth, c0, Glyph::Point);
                return 1;
            }
            LineCase::Straight { axis, dir } => {
                (axis, dir, MinorRule::Never, axis.body_glyph(), axis.body_glyph())
            }
            LineCase::Diagonal { dir } => (
                Axis::Column,
                dir,
                MinorRule::Always,
                dir.diagonal_glyph(),
                dir.diagonal_glyph(),
            ),
            LineCase::Octant { major, dir } => (
                major,
                dir,
                MinorRule::Decision,
                major.body_glyph(),
                dir.diagonal_glyph(),
            ),
        };

        let (major_len, minor_len) = match major {
            Axis::Column => (adc, adr),
            Axis::Row => (adr, adc),
        };
        let inv_steps = 1.0 / major_len as f64;

        Walk {
            col: p0.col,
            row: p0.row,
            dir,
            major,
            major_len,
            minor_len,
            rule,
            body,
            diagonal,
            depth: p0.depth,
            depth_step: (p1.depth - p0.depth) * inv_steps,
            color: c0,
            color_step: c1.sub(c0).scale(inv_steps),
        }
        .run(buf)
    }
}
