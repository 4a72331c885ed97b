//! The `Canvas` entry point: composes the stencil, kernel, and differ
//! layers with terminal lifecycle management.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, trace, warn};

use crate::core::{
    color::Color,
    error::{CanvasError, Result},
};
use crate::raster::{
    differ::{build_diff, SeqBuffer},
    kernel::{self, Vertex},
    stencil::StencilBuffer,
};
use crate::term::raw;

#[cfg(unix)]
use std::os::fd::{AsFd, AsRawFd};

const LOG_TARGET: &str = "vtr::canvas";

/// Bound satisfied by anything usable as a canvas's output sink.
///
/// On Unix this additionally requires `AsRawFd` so `reset`/`close` can
/// drive raw-mode `termios` calls directly on the sink; non-Unix targets
/// only need `Write` since raw-mode acquisition there is a no-op.
#[cfg(unix)]
pub trait Sink: Write + AsRawFd + AsFd {}
#[cfg(unix)]
impl<T: Write + AsRawFd + AsFd> Sink for T {}

#[cfg(not(unix))]
pub trait Sink: Write {}
#[cfg(not(unix))]
impl<T: Write> Sink for T {}

/// A process-level handle owning the terminal sink, the saved attribute
/// snapshot, the double-buffered stencil pair, and the pending sequence
/// stream.
pub struct Canvas<W: Sink> {
    sink: W,
    saved_attrs: Option<raw::SavedAttrs>,
    rows: u16,
    cols: u16,
    buffers: [StencilBuffer; 2],
    back_idx: usize,
    seq: SeqBuffer,
    resize_pending: AtomicBool,
}

impl<W: Sink> Canvas<W> {
    /// Query the terminal for its current size and allocate both stencil
    /// buffers. Does not touch terminal modes; call `reset` for that.
    pub fn create(sink: W) -> Result<Self> {
        let (rows, cols) = raw::query_size(&sink).ok_or_else(|| {
            CanvasError::Io(std::io::Error::other(
                "could not query terminal dimensions",
            ))
        })?;
        let back = StencilBuffer::new(rows, cols)?;
        let front = StencilBuffer::new(rows, cols)?;
        debug!(target: LOG_TARGET, "canvas created: {rows}x{cols} cells");
        Ok(Self {
            sink,
            saved_attrs: None,
            rows,
            cols,
            buffers: [back, front],
            back_idx: 0,
            seq: SeqBuffer::new(),
            resize_pending: AtomicBool::new(false),
        })
    }

    /// Acquire raw mode, snapshot the prior attributes, and switch the sink
    /// to the alternate screen with the cursor hidden and the screen
    /// cleared.
    pub fn reset(&mut self) -> Result<()> {
        #[cfg(unix)]
        {
            let fd = self.sink.as_raw_fd();
            self.saved_attrs = Some(raw::enter_raw_mode(fd)?);
        }
        self.sink.write_all(raw::ENTER_SEQUENCE)?;
        self.sink.flush()?;
        debug!(target: LOG_TARGET, "canvas reset: entered alternate screen");
        Ok(())
    }

    /// Restore the saved attribute snapshot and leave the alternate screen.
    /// Best-effort: failures here are swallowed, since restoration should
    /// never fail the caller.
    pub fn close(&mut self) {
        #[cfg(unix)]
        if let Some(saved) = &self.saved_attrs {
            let fd = self.sink.as_raw_fd();
            let _ = raw::restore(fd, saved);
        }
        let _ = self.sink.write_all(raw::LEAVE_SEQUENCE);
        let _ = self.sink.flush();
        debug!(target: LOG_TARGET, "canvas closed: left alternate screen");
    }

    /// Current canvas width in dots.
    #[must_use]
    pub fn xdots(&self) -> u16 {
        self.buffers[self.back_idx].xdots()
    }

    /// Current canvas height in dots.
    #[must_use]
    pub fn ydots(&self) -> u16 {
        self.buffers[self.back_idx].ydots()
    }

    /// Emit `CSI 2 J`.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.sink.write_all(raw::CLEAR_SEQUENCE)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Mark a resize as pending. Safe to call from an asynchronous
    /// notifier; no ordering is guaranteed beyond eventual consistency.
    pub fn set_resize_pending(&self, pending: bool) {
        self.resize_pending.store(pending, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_resize_pending(&self) -> bool {
        self.resize_pending.load(Ordering::Relaxed)
    }

    /// If a resize is pending, re-query terminal dimensions and reallocate
    /// both stencil buffers, discarding prior contents. Leaves the canvas
    /// at its prior dimensions with the flag still set on allocation
    /// failure.
    pub fn resize(&mut self) -> Result<()> {
        if !self.is_resize_pending() {
            return Ok(());
        }

        let (rows, cols) = raw::query_size(&self.sink).ok_or_else(|| {
            CanvasError::Io(std::io::Error::other(
                "could not query terminal dimensions",
            ))
        })?;

        self.resize_to(rows, cols)
    }

    /// Reallocate both stencil buffers for `rows x cols`, discarding prior
    /// contents. Split out of `resize` so the reallocation/failure logic is
    /// testable independent of a real terminal size query.
    fn resize_to(&mut self, rows: u16, cols: u16) -> Result<()> {
        match (StencilBuffer::new(rows, cols), StencilBuffer::new(rows, cols)) {
            (Ok(back), Ok(front)) => {
                self.buffers = [back, front];
                self.back_idx = 0;
                self.rows = rows;
                self.cols = cols;
                self.clear_screen()?;
                self.set_resize_pending(false);
                debug!(target: LOG_TARGET, "canvas resized to {rows}x{cols} cells");
                Ok(())
            }
            _ => {
                warn!(
                    target: LOG_TARGET,
                    "resize allocation failed; retaining {}x{} cells, resize still pending",
                    self.rows, self.cols,
                );
                Err(CanvasError::OutOfMemory)
            }
        }
    }

    /// Diff the back buffer against the last-presented front buffer, write
    /// the resulting sequence stream, and swap on success.
    pub fn swap_buffers(&mut self) -> Result<()> {
        let back = self.back_idx;
        let front = 1 - back;

        {
            let (lo, hi) = self.buffers.split_at(1);
            let (cur, prev) = if back == 0 {
                (&lo[0], &hi[0])
            } else {
                (&hi[0], &lo[0])
            };
            build_diff(cur, prev, &mut self.seq)?;
        }

        let bytes = self.seq.as_slice();
        match self.sink.write_all(bytes) {
            Ok(()) => trace!(target: LOG_TARGET, "swap_buffers wrote {} bytes", bytes.len()),
            Err(e) => {
                error!(target: LOG_TARGET, "swap_buffers write failed: {e}");
                return Err(CanvasError::Io(e));
            }
        }
        self.sink.flush()?;

        self.buffers[front].clear();
        self.back_idx = front;
        Ok(())
    }

    /// Plot one dot with the default foreground color.
    pub fn render_dot(&mut self, x: i32, y: i32) {
        kernel::render_dot(&mut self.buffers[self.back_idx], x, y, Color::Default);
    }

    /// Plot one dot with an explicit foreground color.
    pub fn render_dot_colored(&mut self, x: i32, y: i32, color: Color) {
        kernel::render_dot(&mut self.buffers[self.back_idx], x, y, color);
    }

    /// Clipped line scan with the default foreground color.
    pub fn scan_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        kernel::scan_line(&mut self.buffers[self.back_idx], x0, y0, x1, y1, Color::Default);
    }

    /// Clipped line scan with an explicit foreground color.
    pub fn scan_line_colored(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        kernel::scan_line(&mut self.buffers[self.back_idx], x0, y0, x1, y1, color);
    }

    /// Trace/fill a convex polygon with the default foreground color.
    pub fn trace_poly(&mut self, vertices: &[Vertex]) -> Result<()> {
        kernel::trace_poly(&mut self.buffers[self.back_idx], vertices, Color::Default)
    }

    /// Trace/fill a convex polygon with an explicit foreground color.
    pub fn trace_poly_colored(&mut self, vertices: &[Vertex], color: Color) -> Result<()> {
        kernel::trace_poly(&mut self.buffers[self.back_idx], vertices, color)
    }

    /// Print a raw ASCII text overlay starting at cell `(row, col)`.
    pub fn print_text(&mut self, row: u16, col: u16, text: &str) -> Result<()> {
        self.buffers[self.back_idx].print_text(row, col, text)
    }
}
