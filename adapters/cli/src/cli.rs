use std::time::Duration;

use clap::Parser;
use life_rendering::{Glyphs, RenderingError, DEFAULT_ALIVE_GLYPH, DEFAULT_DEAD_GLYPH};

/// Conway's Game of Life rendered as text in the terminal.
#[derive(Debug, Parser)]
#[command(name = "gameolife", version)]
pub(crate) struct Cli {
    /// Number of generations to advance past the initial one.
    #[arg(short = 'i', long, default_value_t = 500)]
    iterations: u64,
    /// Pause between printed generations, in milliseconds.
    #[arg(short = 's', long = "speed", value_name = "MILLIS", default_value_t = 200)]
    speed: u64,
    /// Seed for the initial population; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the startup banner animation.
    #[arg(long)]
    no_intro: bool,
    /// Character drawn for a living cell.
    #[arg(long, default_value_t = DEFAULT_ALIVE_GLYPH)]
    alive_glyph: char,
    /// Character drawn for a dead cell.
    #[arg(long, default_value_t = DEFAULT_DEAD_GLYPH)]
    dead_glyph: char,
}

/// Validated settings for a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) iterations: u64,
    pub(crate) frame_delay: Duration,
    pub(crate) seed: Option<u64>,
    pub(crate) intro: bool,
    pub(crate) glyphs: Glyphs,
}

impl Cli {
    /// Validates the parsed flags.
    pub(crate) fn into_config(self) -> Result<Config, RenderingError> {
        Ok(Config {
            iterations: self.iterations,
            frame_delay: Duration::from_millis(self.speed),
            seed: self.seed,
            intro: !self.no_intro,
            glyphs: Glyphs::new(self.alive_glyph, self.dead_glyph)?,
        })
    }
}
