//! Rock-paper-scissors game logic.
//!
//! This crate holds the full logic core of the game and nothing of its
//! presentation:
//!
//! - **Rules**: the 3-cycle rule table and the round resolver
//! - **Chooser**: the computer opponent's choice source
//! - **Score**: running win counters
//! - **Session**: the Idle/Animating round state machine
//! - **Settings**: the persisted theme preference and its store
//!
//! A front end supplies input, schedules the animation delay, and renders
//! [`RoundReport`]s; see the `roshambo_tui` crate for the terminal client.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chooser;
mod rules;
mod score;
mod session;
mod settings;
mod types;

pub use chooser::{ChoiceSource, RandomChooser, ScriptedChooser};
pub use rules::resolve;
pub use score::Score;
pub use session::{ANIMATION_DURATION, PendingRound, RoundPhase, RoundReport, Session};
pub use settings::{
    InvalidTheme, MemorySettingsStore, Preferences, SettingsError, SettingsStore, Theme,
    TomlSettingsStore,
};
pub use types::{Choice, InvalidChoice, Outcome, Tone, Winner};
