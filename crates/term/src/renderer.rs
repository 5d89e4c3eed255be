//! TerminalRenderer: owns the real terminal for the lifetime of a session.
//!
//! Entering puts the terminal in raw (non-canonical, no-echo) mode, discovers
//! its size, and paints the header banner. Leaving restores the prior state.
//! The renderer doubles as the restore guard: if it is dropped while still
//! active (early return, `?`, or a panic unwinding through `main`) the
//! terminal is restored in `Drop`.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use log::{debug, info, warn};

use crate::core::RenderError;
use crate::header::banner;
use crate::types::HEADER_ROWS;

/// Sink for composed frames.
pub trait FrameOutput {
    /// Emit one complete frame. Any failure is fatal for the session.
    fn present(&mut self, frame: &[u8]) -> Result<(), RenderError>;
}

/// In-memory output, used by tests and benchmarks.
impl FrameOutput for Vec<u8> {
    fn present(&mut self, frame: &[u8]) -> Result<(), RenderError> {
        self.extend_from_slice(frame);
        Ok(())
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Cell buffer dimensions `(width, height)`: full width, minus the header rows.
    pub fn buffer_dims(&self) -> (u16, u16) {
        (self.cols, self.rows.saturating_sub(HEADER_ROWS))
    }
}

/// Queue the session setup: alternate screen and hidden cursor.
///
/// Autowrap stays on. Frames carry no row breaks, so each record past the
/// last column must wrap onto the next row.
pub fn queue_setup(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    Ok(())
}

/// Queue the inverse of [`queue_setup`] plus a color/attribute reset.
pub fn queue_restore(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enter raw mode, discover the terminal size and draw the header.
    pub fn enter(&mut self) -> Result<TerminalSize, RenderError> {
        terminal::enable_raw_mode().map_err(|e| RenderError::acquisition("raw mode", e))?;
        self.active = true;

        self.buf.clear();
        queue_setup(&mut self.buf).map_err(|e| RenderError::acquisition("screen setup", e))?;
        self.flush_buf()
            .map_err(|e| RenderError::acquisition("screen setup", e))?;

        let size = self.discover_size()?;
        info!("terminal is {}x{} cells", size.cols, size.rows);

        self.draw_header(size.cols)
            .map_err(|e| RenderError::acquisition("header", e))?;
        Ok(size)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<(), RenderError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        let restore = queue_restore(&mut self.buf).and_then(|_| self.flush_buf());

        // Cooked mode comes back even if the escape sequences could not be written.
        let raw = terminal::disable_raw_mode();
        info!("terminal restored");

        restore.map_err(RenderError::OutputWrite)?;
        raw.map_err(|e| RenderError::acquisition("raw mode", e))
    }

    /// Ask the terminal where the cursor lands after moving it to `999;999`.
    ///
    /// Falls back to the window-size ioctl when the cursor report cannot be read.
    fn discover_size(&mut self) -> Result<TerminalSize, RenderError> {
        self.buf.clear();
        self.buf
            .queue(cursor::MoveTo(998, 998))
            .map_err(|e| RenderError::acquisition("screen size", e))?;
        self.flush_buf()
            .map_err(|e| RenderError::acquisition("screen size", e))?;

        match cursor::position() {
            Ok((col, row)) => {
                debug!("cursor report: col={} row={}", col, row);
                Ok(TerminalSize::new(col.saturating_add(1), row.saturating_add(1)))
            }
            Err(report_err) => {
                warn!("cursor position report failed ({}), using window size", report_err);
                let (cols, rows) =
                    terminal::size().map_err(|e| RenderError::acquisition("screen size", e))?;
                Ok(TerminalSize::new(cols, rows))
            }
        }
    }

    fn draw_header(&mut self, cols: u16) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(SetAttribute(Attribute::Reverse))?;
        self.buf.queue(Print(banner(cols)))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameOutput for TerminalRenderer {
    /// `write_all` retries short writes, so a frame is either fully sent or
    /// the session fails; no bytes are silently dropped.
    fn present(&mut self, frame: &[u8]) -> Result<(), RenderError> {
        self.stdout
            .write_all(frame)
            .and_then(|_| self.stdout.flush())
            .map_err(RenderError::OutputWrite)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if self.active {
            let _ = self.exit();
        }
    }
}
