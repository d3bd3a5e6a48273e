#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for the terminal Life engine.

use life_core::{Command, Event, Grid, GridSize, WELCOME_BANNER};
use log::debug;

/// Represents the authoritative simulation state.
///
/// The world exclusively owns the current generation. Each promotion moves a
/// freshly computed grid in and releases the superseded one.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    current: Grid,
    generation: u64,
}

impl World {
    /// Creates a world holding an empty, zero-sized generation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            current: Grid::new(GridSize::default()),
            generation: 0,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureGrid { size } => {
            world.current = Grid::new(size);
            world.generation = 0;
            out_events.push(Event::GridConfigured { size });
        }
        Command::SeedPopulation { cells } => {
            for cell in cells {
                if world.current.contains(cell) {
                    world.current.set(cell, true);
                }
            }
            out_events.push(Event::PopulationSeeded {
                alive: world.current.population(),
            });
        }
        Command::PromoteGeneration { next } => {
            if next.size() != world.current.size() {
                out_events.push(Event::PromotionRejected {
                    expected: world.current.size(),
                    actual: next.size(),
                });
                return;
            }

            world.current = next;
            world.generation = world.generation.saturating_add(1);
            let population = world.current.population();
            debug!(
                "generation {} promoted with {} living cells",
                world.generation, population
            );
            out_events.push(Event::GenerationAdvanced {
                generation: world.generation,
                population,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use life_core::{Grid, GridSize, GridView};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the current generation.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.current
    }

    /// Captures a read-only row-major view of the current generation.
    #[must_use]
    pub fn grid_view(world: &World) -> GridView<'_> {
        world.current.view()
    }

    /// Dimensions shared by every generation of the run.
    #[must_use]
    pub fn grid_size(world: &World) -> GridSize {
        world.current.size()
    }

    /// Index of the current generation; the seeded grid is generation zero.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Number of living cells in the current generation.
    #[must_use]
    pub fn population(world: &World) -> usize {
        world.current.population()
    }
}
