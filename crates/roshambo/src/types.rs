//! Core domain types for rock-paper-scissors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hand the player or computer can throw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Choice {
    /// Rock crushes scissors.
    Rock,
    /// Paper covers rock.
    Paper,
    /// Scissors cut paper.
    Scissors,
}

impl Choice {
    /// All three choices, in display order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(InvalidChoice {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a string does not name one of the three choices.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized choice: {value:?} (expected rock, paper, or scissors)")]
pub struct InvalidChoice {
    /// The rejected input.
    pub value: String,
}

/// The side that won a decisive round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides threw the same hand.
    Draw,
    /// The player's hand beat the computer's.
    PlayerWin,
    /// The computer's hand beat the player's.
    ComputerWin,
}

impl Outcome {
    /// Returns the result banner text shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Draw => "DRAW",
            Outcome::PlayerWin => "YOU WON",
            Outcome::ComputerWin => "YOU LOST",
        }
    }

    /// Returns the semantic tone used to colorize the result text.
    pub fn tone(self) -> Tone {
        match self {
            Outcome::Draw => Tone::Draw,
            Outcome::PlayerWin => Tone::Win,
            Outcome::ComputerWin => Tone::Lose,
        }
    }

    /// Returns the winning side, or `None` for a draw.
    pub fn winner(self) -> Option<Winner> {
        match self {
            Outcome::Draw => None,
            Outcome::PlayerWin => Some(Winner::Player),
            Outcome::ComputerWin => Some(Winner::Computer),
        }
    }
}

/// Semantic color tag for rendering a round result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The player won.
    Win,
    /// The player lost.
    Lose,
    /// Nobody won.
    Draw,
}
