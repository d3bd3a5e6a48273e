#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering backend that prints generations to a terminal stream.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result as AnyResult};
use life_core::TerminalSize;
use life_rendering::{compose, Frame, Glyphs, RenderingBackend};
use log::warn;

/// Queries the visible terminal dimensions.
///
/// Falls back to a zero size when the terminal cannot be queried, for example
/// when output is redirected; the simulation then runs on an empty grid.
#[must_use]
pub fn terminal_size() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((columns, rows)) => TerminalSize::new(u32::from(columns), u32::from(rows)),
        Err(error) => {
            warn!("could not query terminal size, falling back to 0x0: {error}");
            TerminalSize::default()
        }
    }
}

/// Backend writing composed frames to any byte sink.
#[derive(Debug)]
pub struct TerminalBackend<W> {
    out: W,
    glyphs: Glyphs,
    frames: u64,
}

impl TerminalBackend<Stdout> {
    /// Creates a backend that prints to standard output.
    #[must_use]
    pub fn stdout(glyphs: Glyphs) -> Self {
        Self::new(io::stdout(), glyphs)
    }
}

impl<W: Write> TerminalBackend<W> {
    /// Creates a backend over the provided writer.
    #[must_use]
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self {
            out,
            glyphs,
            frames: 0,
        }
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Consumes the backend, yielding the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderingBackend for TerminalBackend<W> {
    fn present(&mut self, frame: &Frame<'_>) -> AnyResult<()> {
        let text = compose(frame, &self.glyphs);
        self.out
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write generation {}", frame.generation))?;
        self.out.flush().context("failed to flush frame")?;
        self.frames = self.frames.saturating_add(1);
        Ok(())
    }

    fn present_text(&mut self, text: &str) -> AnyResult<()> {
        self.out
            .write_all(text.as_bytes())
            .context("failed to write text")?;
        self.out.flush().context("failed to flush text")?;
        Ok(())
    }
}
