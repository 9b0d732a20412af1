//! Session controller: the round state machine.

use crate::chooser::ChoiceSource;
use crate::rules;
use crate::score::Score;
use crate::settings::{Preferences, SettingsStore, Theme};
use crate::types::{Choice, Outcome};
use derive_getters::Getters;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// How long the hand-shake animation runs before a round resolves.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Waiting for the player to pick a hand.
    #[default]
    Idle,
    /// A round is in flight; choice input is ignored until it resolves.
    Animating,
}

/// A captured choice pair waiting out the animation delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PendingRound {
    /// The player's captured hand.
    player: Choice,
    /// The computer's drawn hand.
    computer: Choice,
}

/// A resolved round, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RoundReport {
    /// The player's hand.
    player: Choice,
    /// The computer's hand.
    computer: Choice,
    /// Who won.
    outcome: Outcome,
    /// (player, computer) score after applying the outcome.
    score: (u32, u32),
}

/// Drives one player-versus-computer match.
///
/// The session is single-threaded and cooperative: [`Session::start_round`]
/// moves it to [`RoundPhase::Animating`] and hands the caller a
/// [`PendingRound`] to schedule; the caller invokes
/// [`Session::resolve_pending`] once the delay elapses. The `Animating`
/// phase is the only guard against re-entrant rounds, checked and set
/// synchronously before any delay is scheduled.
pub struct Session {
    chooser: Box<dyn ChoiceSource>,
    store: Box<dyn SettingsStore>,
    score: Score,
    phase: RoundPhase,
    pending: Option<PendingRound>,
    theme: Theme,
}

impl Session {
    /// Creates a session, loading the persisted theme from the store.
    ///
    /// An unreadable settings store falls back to the default theme.
    #[instrument(skip(chooser, store))]
    pub fn new(chooser: Box<dyn ChoiceSource>, store: Box<dyn SettingsStore>) -> Self {
        let theme = match store.load() {
            Ok(prefs) => *prefs.theme(),
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using default theme");
                Theme::default()
            }
        };
        info!(theme = %theme, "Creating session");
        Self {
            chooser,
            store,
            score: Score::new(),
            phase: RoundPhase::Idle,
            pending: None,
            theme,
        }
    }

    /// Creates a session with an explicit theme, bypassing the stored one.
    ///
    /// Used for a per-run theme override; the override is not persisted
    /// until the player toggles.
    #[instrument(skip(chooser, store))]
    pub fn with_theme(
        chooser: Box<dyn ChoiceSource>,
        store: Box<dyn SettingsStore>,
        theme: Theme,
    ) -> Self {
        info!(theme = %theme, "Creating session with theme override");
        Self {
            chooser,
            store,
            score: Score::new(),
            phase: RoundPhase::Idle,
            pending: None,
            theme,
        }
    }

    /// Starts a round with the player's choice.
    ///
    /// Draws the computer's choice, captures the pair, and moves to
    /// `Animating`. Returns `None` without any state change when a round
    /// is already in flight; repeated input during the animation is a
    /// deliberate no-op, not an error.
    #[instrument(skip(self))]
    pub fn start_round(&mut self, player: Choice) -> Option<PendingRound> {
        if self.phase == RoundPhase::Animating {
            debug!(choice = %player, "Round already in flight, ignoring input");
            return None;
        }

        let computer = self.chooser.next();
        let pending = PendingRound { player, computer };
        self.phase = RoundPhase::Animating;
        self.pending = Some(pending);

        info!(player = %player, computer = %computer, "Round started");
        Some(pending)
    }

    /// Resolves the in-flight round after the animation delay has elapsed.
    ///
    /// Applies a decisive outcome to the score, returns to `Idle`, and
    /// reports the result. Returns `None` when no round is pending.
    #[instrument(skip(self))]
    pub fn resolve_pending(&mut self) -> Option<RoundReport> {
        let pending = self.pending.take()?;
        self.phase = RoundPhase::Idle;

        let outcome = rules::resolve(pending.player, pending.computer);
        if let Some(winner) = outcome.winner() {
            self.score.record_win(winner);
        }

        let report = RoundReport {
            player: pending.player,
            computer: pending.computer,
            outcome,
            score: self.score.snapshot(),
        };
        info!(
            player = %pending.player,
            computer = %pending.computer,
            outcome = ?outcome,
            score = ?report.score,
            "Round resolved"
        );
        Some(report)
    }

    /// Resets the score to (0, 0). Available in either phase.
    ///
    /// An in-flight round is not cancelled: it still resolves after its
    /// delay and scores against the fresh counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.score.reset();
        info!("Score reset");
    }

    /// Flips the theme and persists it. Independent of the round phase.
    ///
    /// The in-memory theme always flips; a store failure is logged and
    /// otherwise ignored so the running session stays usable.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        if let Err(e) = self.store.save(&Preferences::new(self.theme)) {
            warn!(error = %e, "Failed to persist theme preference");
        }
        info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    /// Current phase of the round state machine.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True while a round is waiting out its animation delay.
    pub fn is_animating(&self) -> bool {
        self.phase == RoundPhase::Animating
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }
}
