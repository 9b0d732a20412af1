//! Sources for the computer opponent's choice.

use crate::types::Choice;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the computer's next choice.
///
/// The session takes this as an injected trait object so tests can force
/// specific rounds with a [`ScriptedChooser`].
pub trait ChoiceSource {
    /// Draws the next choice. Each call is independent.
    fn next(&mut self) -> Choice;
}

/// Uniform random chooser backed by a small PRNG.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: SmallRng,
}

impl RandomChooser {
    /// Creates a chooser seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a chooser with a fixed seed for reproducible streams.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceSource for RandomChooser {
    fn next(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }
}

/// Chooser that replays a fixed script, cycling once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedChooser {
    /// Creates a chooser that yields the given choices in order.
    ///
    /// An empty script falls back to rock on every draw.
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl ChoiceSource for ScriptedChooser {
    fn next(&mut self) -> Choice {
        if self.script.is_empty() {
            return Choice::Rock;
        }
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        choice
    }
}
