#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Conway's Game of Life in the terminal.

mod cli;
mod simulation;

use anyhow::Result as AnyResult;
use clap::Parser;
use life_rendering_terminal::{terminal_size, TerminalBackend};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{cli::Cli, simulation::Simulation};

/// Entry point for the terminal Life command-line interface.
fn main() -> AnyResult<()> {
    env_logger::init();
    let config = Cli::parse().into_config()?;

    // The generator is created once for the whole process and never reseeded.
    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let backend = TerminalBackend::stdout(config.glyphs);
    let mut simulation = Simulation::new(config, backend, rng);

    if config.intro {
        simulation.play_intro()?;
    }

    let terminal = terminal_size();
    let summary = simulation.run(terminal)?;
    info!(
        "finished after {} frames at generation {} with {} living cells",
        summary.frames, summary.generation, summary.population
    );
    Ok(())
}
