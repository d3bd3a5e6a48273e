#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure generation system that applies the Life rule to a whole grid.
//!
//! The next generation is always written into a freshly allocated grid. Every
//! cell is derived from the untouched current generation, so the order in
//! which cells are visited never influences the result.

use life_core::{Command, Grid, NEIGHBOR_OFFSETS};

/// Counts the living cells among the eight neighbours of a coordinate.
///
/// Neighbours outside the grid are dead.
#[must_use]
pub fn live_neighbors(grid: &Grid, column: i64, row: i64) -> u8 {
    let mut alive = 0;
    for (column_offset, row_offset) in NEIGHBOR_OFFSETS {
        let (Some(neighbor_column), Some(neighbor_row)) =
            (column.checked_add(column_offset), row.checked_add(row_offset))
        else {
            continue;
        };
        if grid.is_alive(neighbor_column, neighbor_row) {
            alive += 1;
        }
    }
    alive
}

/// Decides a cell's next state from its current state and live neighbour count.
///
/// A cell lives on with exactly three neighbours, or with exactly two when it
/// is already alive. Every other combination yields a dead cell.
#[must_use]
pub const fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (neighbors == 2 && alive)
}

/// Evaluates whether the cell at the coordinate is alive in the next generation.
#[must_use]
pub fn next_state(grid: &Grid, column: i64, row: i64) -> bool {
    next_cell_state(
        grid.is_alive(column, row),
        live_neighbors(grid, column, row),
    )
}

/// Overwrites every cell of `next` with the verdict computed from `current`.
///
/// `current` is only read and `next` is never read, so the two buffers must
/// be distinct grids of the same size.
pub fn apply_rules(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(
        current.size(),
        next.size(),
        "generations must share dimensions"
    );
    for cell in current.size().cells() {
        let verdict = next_state(current, i64::from(cell.column()), i64::from(cell.row()));
        next.set(cell, verdict);
    }
}

/// Produces the generation that follows `current` in a freshly zeroed grid.
#[must_use]
pub fn advance(current: &Grid) -> Grid {
    let mut next = Grid::new(current.size());
    apply_rules(current, &mut next);
    next
}

/// Generation system that proposes the successor of the current grid.
#[derive(Debug, Default)]
pub struct Generation {
    computed: u64,
}

impl Generation {
    /// Computes the next generation and requests its promotion.
    ///
    /// Ownership of the computed grid travels with the emitted command.
    pub fn handle(&mut self, current: &Grid, out: &mut Vec<Command>) {
        let next = advance(current);
        self.computed = self.computed.saturating_add(1);
        out.push(Command::PromoteGeneration { next });
    }

    /// Number of generations this system has computed.
    #[must_use]
    pub const fn computed(&self) -> u64 {
        self.computed
    }
}
