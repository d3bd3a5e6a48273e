use std::{thread, time::Duration};

use anyhow::Result as AnyResult;
use life_core::{Command, Event, GridSize, TerminalSize};
use life_rendering::{Frame, RenderingBackend};
use life_system_bootstrap::Bootstrap;
use life_system_generation::Generation;
use life_system_seeding::Seeding;
use life_world::{self as world, query, World};
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::cli::Config;

/// Invariant violations that abort a run.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DriverError {
    /// The world refused a generation whose size differs from the current one.
    #[error("cannot promote a {actual:?} generation over a {expected:?} grid")]
    PromotionRejected { expected: GridSize, actual: GridSize },
}

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) frames: u64,
    pub(crate) generation: u64,
    pub(crate) population: usize,
}

/// Drives the render, compute and promote cycle for a fixed number of iterations.
pub(crate) struct Simulation<B, R> {
    config: Config,
    world: World,
    bootstrap: Bootstrap,
    seeding: Seeding<R>,
    generation: Generation,
    backend: B,
}

impl<B, R> Simulation<B, R>
where
    B: RenderingBackend,
    R: Rng,
{
    pub(crate) fn new(config: Config, backend: B, rng: R) -> Self {
        Self {
            config,
            world: World::new(),
            bootstrap: Bootstrap,
            seeding: Seeding::new(rng),
            generation: Generation::default(),
            backend,
        }
    }

    /// Plays the banner animation, pausing after every step.
    pub(crate) fn play_intro(&mut self) -> AnyResult<()> {
        self.play_intro_with(thread::sleep)
    }

    fn play_intro_with(&mut self, mut pause: impl FnMut(Duration)) -> AnyResult<()> {
        for step in self.bootstrap.intro(&self.world) {
            self.backend.present_text(step.text)?;
            pause(step.pause);
        }
        Ok(())
    }

    /// Seeds a grid sized to the terminal and runs every configured iteration.
    pub(crate) fn run(&mut self, terminal: TerminalSize) -> AnyResult<RunSummary> {
        self.start(terminal)?;
        info!(
            "running {} iterations on a {}x{} grid with {} living cells",
            self.config.iterations,
            query::grid_size(&self.world).width(),
            query::grid_size(&self.world).height(),
            query::population(&self.world)
        );

        self.render()?;
        let mut frames: u64 = 1;
        for _ in 0..self.config.iterations {
            self.step()?;
            thread::sleep(self.config.frame_delay);
            self.render()?;
            frames += 1;
        }

        Ok(RunSummary {
            frames,
            generation: query::generation(&self.world),
            population: query::population(&self.world),
        })
    }

    fn start(&mut self, terminal: TerminalSize) -> Result<(), DriverError> {
        let events = self.execute(vec![Command::ConfigureGrid {
            size: terminal.grid_size(),
        }])?;
        let mut commands = Vec::new();
        self.seeding.handle(&events, terminal, &mut commands);
        let _ = self.execute(commands)?;
        Ok(())
    }

    fn step(&mut self) -> Result<(), DriverError> {
        let mut commands = Vec::new();
        self.generation.handle(query::grid(&self.world), &mut commands);
        let _ = self.execute(commands)?;
        Ok(())
    }

    fn render(&mut self) -> AnyResult<()> {
        let generation = query::generation(&self.world);
        debug!("presenting generation {generation}");
        self.backend
            .present(&Frame::new(generation, query::grid_view(&self.world)))
    }

    fn execute(&mut self, commands: Vec<Command>) -> Result<Vec<Event>, DriverError> {
        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut self.world, command, &mut events);
        }
        for event in &events {
            if let Event::PromotionRejected { expected, actual } = event {
                return Err(DriverError::PromotionRejected {
                    expected: *expected,
                    actual: *actual,
                });
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{CellCoord, Grid, WELCOME_BANNER};
    use life_rendering::Glyphs;
    use life_system_generation::advance;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct RecordingBackend {
        frames: Vec<(u64, Grid)>,
        text: String,
    }

    impl RenderingBackend for RecordingBackend {
        fn present(&mut self, frame: &Frame<'_>) -> AnyResult<()> {
            let size = frame.grid.size();
            let mut alive = Vec::new();
            for (row, cells) in (0..).zip(frame.grid.rows()) {
                for (column, cell) in (0..).zip(cells) {
                    if *cell {
                        alive.push(CellCoord::new(column, row));
                    }
                }
            }
            self.frames
                .push((frame.generation, Grid::with_alive_cells(size, alive)));
            Ok(())
        }

        fn present_text(&mut self, text: &str) -> AnyResult<()> {
            self.text.push_str(text);
            Ok(())
        }
    }

    fn config(iterations: u64) -> Config {
        Config {
            iterations,
            frame_delay: Duration::ZERO,
            seed: Some(1),
            intro: false,
            glyphs: Glyphs::default(),
        }
    }

    fn simulation(iterations: u64, seed: u64) -> Simulation<RecordingBackend, ChaCha8Rng> {
        Simulation::new(
            config(iterations),
            RecordingBackend::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn renders_initial_generation_plus_one_frame_per_iteration() {
        let mut simulation = simulation(6, 17);
        let summary = simulation
            .run(TerminalSize::new(40, 20))
            .expect("run succeeds");

        assert_eq!(summary.frames, 7);
        assert_eq!(summary.generation, 6);
        let generations: Vec<u64> = simulation.backend.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn each_frame_is_the_successor_of_the_previous() {
        let mut simulation = simulation(10, 99);
        let summary = simulation
            .run(TerminalSize::new(30, 16))
            .expect("run succeeds");

        let frames = &simulation.backend.frames;
        assert!(frames[0].1.population() > 0, "seeded grid should not be empty");
        for pair in frames.windows(2) {
            assert_eq!(advance(&pair[0].1), pair[1].1);
        }
        assert_eq!(
            summary.population,
            frames.last().expect("frames rendered").1.population()
        );
    }

    #[test]
    fn grid_leaves_a_margin_inside_the_terminal() {
        let mut simulation = simulation(0, 3);
        let _ = simulation
            .run(TerminalSize::new(25, 12))
            .expect("run succeeds");
        assert_eq!(
            simulation.backend.frames[0].1.size(),
            GridSize::new(24, 11)
        );
    }

    #[test]
    fn zero_sized_terminal_runs_on_an_empty_grid() {
        let mut simulation = simulation(3, 5);
        let summary = simulation
            .run(TerminalSize::default())
            .expect("degenerate grids are valid");

        assert_eq!(summary.frames, 4);
        assert_eq!(summary.population, 0);
        assert!(simulation
            .backend
            .frames
            .iter()
            .all(|(_, grid)| grid.size() == GridSize::new(0, 0)));
    }

    #[test]
    fn identical_seeds_render_identical_runs() {
        let mut first = simulation(8, 0xfeed);
        let mut second = simulation(8, 0xfeed);
        let _ = first.run(TerminalSize::new(32, 18)).expect("run succeeds");
        let _ = second.run(TerminalSize::new(32, 18)).expect("run succeeds");
        assert_eq!(first.backend.frames, second.backend.frames);
    }

    #[test]
    fn intro_writes_banner_then_heart_with_pauses() {
        let mut simulation = simulation(0, 1);
        let mut pauses = Vec::new();
        simulation
            .play_intro_with(|pause| pauses.push(pause))
            .expect("intro succeeds");

        let text = &simulation.backend.text;
        assert!(text.starts_with(WELCOME_BANNER));
        assert!(text.ends_with("/ \\♥♥\n"));
        assert!(simulation.backend.frames.is_empty());

        assert_eq!(pauses.len(), 8);
        assert_eq!(pauses[0], Duration::from_secs(1));
        assert_eq!(pauses[7], Duration::from_secs(2));
        assert!(pauses[1..7]
            .iter()
            .all(|pause| *pause == Duration::from_millis(300)));
    }

    #[test]
    fn rejected_promotion_is_fatal() {
        let mut simulation = simulation(0, 1);
        let _ = simulation
            .run(TerminalSize::new(5, 5))
            .expect("run succeeds");

        let error = simulation
            .execute(vec![Command::PromoteGeneration {
                next: Grid::new(GridSize::new(2, 2)),
            }])
            .expect_err("mismatched sizes must fail");

        assert_eq!(
            error,
            DriverError::PromotionRejected {
                expected: GridSize::new(4, 4),
                actual: GridSize::new(2, 2),
            }
        );
    }
}
