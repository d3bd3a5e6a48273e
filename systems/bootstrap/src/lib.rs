#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the startup intro.

use std::time::Duration;

use life_world::{query, World};

const BANNER_PAUSE: Duration = Duration::from_secs(1);
const LINE_PAUSE: Duration = Duration::from_millis(300);
const FINAL_PAUSE: Duration = Duration::from_secs(2);

const HEART_LINES: [&str; 7] = [
    "..... (¯v¯)♥\n",
    ".......•.¸.•´\n",
    "....¸.•´\n",
    "... (\n",
    " ☻ /\n",
    "/▌♥♥\n",
    "/ \\♥♥\n",
];

/// Text printed during the intro followed by the pause that trails it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroStep {
    /// Text written verbatim to the output.
    pub text: &'static str,
    /// Pause observed after the text has been flushed.
    pub pause: Duration,
}

/// Produces data required to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self, world: &World) -> &'static str {
        query::welcome_banner(world)
    }

    /// Lays out the full intro: the banner followed by a short line animation.
    #[must_use]
    pub fn intro(&self, world: &World) -> Vec<IntroStep> {
        let mut steps = Vec::with_capacity(HEART_LINES.len() + 1);
        steps.push(IntroStep {
            text: self.welcome_banner(world),
            pause: BANNER_PAUSE,
        });
        let last = HEART_LINES.len() - 1;
        for (index, text) in HEART_LINES.into_iter().enumerate() {
            let pause = if index == last { FINAL_PAUSE } else { LINE_PAUSE };
            steps.push(IntroStep { text, pause });
        }
        steps
    }
}
