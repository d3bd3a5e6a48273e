#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for terminal Life adapters.

use anyhow::Result as AnyResult;
use life_core::GridView;
use thiserror::Error;

/// Glyph drawn for a living cell unless configured otherwise.
pub const DEFAULT_ALIVE_GLYPH: char = '%';
/// Glyph drawn for a dead cell unless configured otherwise.
pub const DEFAULT_DEAD_GLYPH: char = '.';
/// Blank lines emitted ahead of every frame.
pub const FRAME_SEPARATOR: &str = "\n\n";

/// Characters used to draw cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    alive: char,
    dead: char,
}

impl Glyphs {
    /// Creates a glyph pair, rejecting characters that would break the row layout.
    pub fn new(alive: char, dead: char) -> Result<Self, RenderingError> {
        for glyph in [alive, dead] {
            if glyph.is_control() {
                return Err(RenderingError::UnprintableGlyph { glyph });
            }
        }
        if alive == dead {
            return Err(RenderingError::IndistinctGlyphs { glyph: alive });
        }
        Ok(Self { alive, dead })
    }

    /// Glyph drawn for a living cell.
    #[must_use]
    pub const fn alive(&self) -> char {
        self.alive
    }

    /// Glyph drawn for a dead cell.
    #[must_use]
    pub const fn dead(&self) -> char {
        self.dead
    }

    /// Selects the glyph for a cell state.
    #[must_use]
    pub const fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: DEFAULT_ALIVE_GLYPH,
            dead: DEFAULT_DEAD_GLYPH,
        }
    }
}

/// Snapshot of a single generation handed to a backend.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Index of the generation being shown.
    pub generation: u64,
    /// Read-only cell states of the generation.
    pub grid: GridView<'a>,
}

impl<'a> Frame<'a> {
    /// Creates a new frame descriptor.
    #[must_use]
    pub const fn new(generation: u64, grid: GridView<'a>) -> Self {
        Self { generation, grid }
    }
}

/// Composes the text for a frame: the separator, then one line per grid row.
#[must_use]
pub fn compose(frame: &Frame<'_>, glyphs: &Glyphs) -> String {
    let size = frame.grid.size();
    let capacity = FRAME_SEPARATOR.len()
        + size.cell_count() * glyphs.alive().len_utf8().max(glyphs.dead().len_utf8())
        + usize::try_from(size.height()).unwrap_or(0);
    let mut output = String::with_capacity(capacity);
    output.push_str(FRAME_SEPARATOR);
    for row in frame.grid.rows() {
        output.extend(row.iter().map(|alive| glyphs.glyph(*alive)));
        output.push('\n');
    }
    output
}

/// Rendering backend capable of presenting generations.
pub trait RenderingBackend {
    /// Draws a single frame and makes it visible before returning.
    fn present(&mut self, frame: &Frame<'_>) -> AnyResult<()>;

    /// Writes free-form text, such as the intro, and makes it visible.
    fn present_text(&mut self, text: &str) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderingError {
    /// Control characters, line breaks included, would corrupt the grid layout.
    #[error("glyph {glyph:?} is not printable")]
    UnprintableGlyph {
        /// Glyph that failed validation.
        glyph: char,
    },
    /// Living and dead cells would be indistinguishable.
    #[error("alive and dead glyphs must differ (both are {glyph:?})")]
    IndistinctGlyphs {
        /// Glyph supplied for both states.
        glyph: char,
    },
}
