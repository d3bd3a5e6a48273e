#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeding system that scatters the initial population around the grid centre.
//!
//! Only a centred sub-rectangle of the grid is populated. Its inset is derived
//! from the terminal dimensions, and each cell inside it is decided by an
//! independent roll of an eight-sided die where six, seven and eight come up
//! alive.

use std::ops::RangeInclusive;

use life_core::{CellCoord, CellRect, Command, Event, GridSize, TerminalSize};
use rand::Rng;

/// Fraction of the terminal width left empty on the left and right.
pub const COLUMN_MARGIN_RATIO: f64 = 0.25;
/// Fraction of the terminal height left empty above and below.
pub const ROW_MARGIN_RATIO: f64 = 0.35;

const DIE_FACES: RangeInclusive<u8> = 1..=8;
const ALIVE_ABOVE: u8 = 5;

/// Inset applied on each side of the grid before seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Columns skipped on both the left and the right edge.
    pub columns: u32,
    /// Rows skipped on both the top and the bottom edge.
    pub rows: u32,
}

/// Computes the seeding inset from the terminal dimensions.
///
/// Halves are rounded away from zero, so a 10x10 terminal yields a column
/// margin of 3 and a row margin of 4.
#[must_use]
pub fn margins(terminal: TerminalSize) -> Margins {
    Margins {
        columns: scaled_margin(terminal.columns(), COLUMN_MARGIN_RATIO),
        rows: scaled_margin(terminal.rows(), ROW_MARGIN_RATIO),
    }
}

fn scaled_margin(extent: u32, ratio: f64) -> u32 {
    (f64::from(extent) * ratio).round() as u32
}

/// Sub-rectangle of the grid eligible for the initial population.
///
/// The rectangle is empty when the margins meet or exceed half of a grid
/// dimension; that is a legal outcome and seeds nothing.
#[must_use]
pub fn seed_region(grid: GridSize, terminal: TerminalSize) -> CellRect {
    let margins = margins(terminal);
    let width = grid
        .width()
        .saturating_sub(margins.columns)
        .saturating_sub(margins.columns);
    let height = grid
        .height()
        .saturating_sub(margins.rows)
        .saturating_sub(margins.rows);
    CellRect::from_origin_and_size(
        CellCoord::new(margins.columns, margins.rows),
        GridSize::new(width, height),
    )
}

/// Seeding system drawing from an injected random generator.
///
/// The generator is supplied once and never reseeded, so a seeded generator
/// reproduces the same population for the same dimensions.
#[derive(Debug)]
pub struct Seeding<R> {
    rng: R,
}

impl<R: Rng> Seeding<R> {
    /// Creates a seeding system that draws from the provided generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Rolls the die for a single cell; alive with probability 3/8.
    pub fn draw_alive(&mut self) -> bool {
        self.rng.gen_range(DIE_FACES) > ALIVE_ABOVE
    }

    /// Draws the initial population for a grid shown in the given terminal.
    ///
    /// Cells are visited row by row, so the draw sequence is stable for a
    /// given generator state.
    pub fn populate(&mut self, grid: GridSize, terminal: TerminalSize) -> Vec<CellCoord> {
        let region = seed_region(grid, terminal);
        let mut alive = Vec::new();
        for cell in region.cells() {
            if self.draw_alive() {
                alive.push(cell);
            }
        }
        alive
    }

    /// Emits a seeding command for every freshly configured grid.
    pub fn handle(&mut self, events: &[Event], terminal: TerminalSize, out: &mut Vec<Command>) {
        for event in events {
            if let Event::GridConfigured { size } = event {
                let cells = self.populate(*size, terminal);
                out.push(Command::SeedPopulation { cells });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_round_half_away_from_zero() {
        assert_eq!(
            margins(TerminalSize::new(10, 10)),
            Margins {
                columns: 3,
                rows: 4
            }
        );
        assert_eq!(
            margins(TerminalSize::new(80, 24)),
            Margins {
                columns: 20,
                rows: 8
            }
        );
    }

    #[test]
    fn zero_terminal_has_no_margin() {
        assert_eq!(
            margins(TerminalSize::default()),
            Margins {
                columns: 0,
                rows: 0
            }
        );
    }
}
