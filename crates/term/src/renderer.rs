//! Flushes framebuffers to the real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only repaint the spans whose glyphs changed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// Raw-mode terminal session with a retained previous frame.
pub struct Terminal {
    out: io::Stdout,
    previous: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Enable raw mode and switch to the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("query terminal size")
    }

    /// Forget the previous frame so the next `present` repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match &self.previous {
            Some(prev) if same_size(prev, frame) => encode_diff(prev, frame, &mut self.scratch)?,
            _ => encode_full(frame, &mut self.scratch)?,
        }
        self.flush()?;

        match &mut self.previous {
            Some(prev) => prev.clone_from(frame),
            None => self.previous = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode a complete redraw of `frame` as terminal escape sequences.
pub fn encode_full(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..frame.height() {
        write_span(frame, 0, y, frame.width(), &mut pen, out)?;
    }
    reset(out)
}

/// Encode only the spans that differ between `prev` and `next`.
///
/// Both buffers must be the same size.
pub fn encode_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for (x, y, len) in changed_spans(prev, next) {
        write_span(next, x, y, len, &mut pen, out)?;
    }
    reset(out)
}

/// Horizontal runs of changed glyphs as (x, y, len).
pub fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut spans = Vec::new();
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    spans.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            spans.push((s, y, next.width() - s));
        }
    }
    spans
}

fn write_span(
    frame: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    pen: &mut Option<GlyphStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for dx in 0..len {
        let glyph = frame.get(x + dx, y).unwrap_or_default();
        if *pen != Some(glyph.style) {
            set_style(out, glyph.style)?;
            *pen = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: GlyphStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
