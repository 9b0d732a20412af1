//! The rule table and round resolver.

use crate::types::{Choice, Outcome};

impl Choice {
    /// Returns the choice this one defeats.
    ///
    /// The mapping forms a single cycle over all three choices: rock beats
    /// scissors, scissors beat paper, paper beats rock. No choice beats
    /// itself; a matching pair is handled as a draw by [`resolve`].
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

/// Resolves one round from the player's perspective.
///
/// Equality is checked first, then the rule table. Exactly one outcome
/// holds for every pair of choices.
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}
