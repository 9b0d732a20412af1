//! Application state and input handling.

use crossterm::event::KeyCode;
use roshambo::{Choice, RoundReport, Session};
use tokio::time::{Duration, Instant};
use tracing::debug;

/// Prompt shown while the player can pick a hand.
const PROMPT_CHOOSE: &str = "Choose an option";
/// Prompt shown while the hands are shaking.
const PROMPT_THINKING: &str = "...";

/// Main application state.
///
/// Sits between the [`Session`] and the renderer: owns the displayed hand
/// pair, the last resolved report, and the animation deadline the event
/// loop polls.
pub struct App {
    session: Session,
    delay: Duration,
    deadline: Option<Instant>,
    player_hand: Choice,
    computer_hand: Choice,
    last_report: Option<RoundReport>,
    frame: usize,
}

impl App {
    /// Creates the application around a session.
    pub fn new(session: Session, delay: Duration) -> Self {
        Self {
            session,
            delay,
            deadline: None,
            player_hand: Choice::Rock,
            computer_hand: Choice::Rock,
            last_report: None,
            frame: 0,
        }
    }

    /// The underlying game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hand currently displayed for the player.
    pub fn player_hand(&self) -> Choice {
        self.player_hand
    }

    /// Hand currently displayed for the computer.
    pub fn computer_hand(&self) -> Choice {
        self.computer_hand
    }

    /// The last resolved round, if any since the last reset or round start.
    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    /// Prompt line mirroring the round phase.
    pub fn prompt(&self) -> &'static str {
        if self.session.is_animating() {
            PROMPT_THINKING
        } else {
            PROMPT_CHOOSE
        }
    }

    /// Frame counter driving the shake animation.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances one loop iteration; resolves the round once its delay is up.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            self.deadline = None;
            if let Some(report) = self.session.resolve_pending() {
                debug!(outcome = ?report.outcome(), "Displaying resolved round");
                self.player_hand = *report.player();
                self.computer_hand = *report.computer();
                self.last_report = Some(report);
            }
        }
    }

    /// Handles a key press. Unknown keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') | KeyCode::Char('1') => self.select(Choice::Rock),
            KeyCode::Char('p') | KeyCode::Char('2') => self.select(Choice::Paper),
            KeyCode::Char('s') | KeyCode::Char('3') => self.select(Choice::Scissors),
            KeyCode::Char('n') => self.reset(),
            KeyCode::Char('t') => {
                self.session.toggle_theme();
            }
            _ => {}
        }
    }

    /// Starts a round; a no-op while one is already shaking.
    fn select(&mut self, choice: Choice) {
        if self.session.start_round(choice).is_some() {
            // Both hands show rock while they shake.
            self.player_hand = Choice::Rock;
            self.computer_hand = Choice::Rock;
            self.last_report = None;
            self.deadline = Some(Instant::now() + self.delay);
        }
    }

    /// Clears the score, result, and hands back to the idle state.
    fn reset(&mut self) {
        self.session.reset();
        self.player_hand = Choice::Rock;
        self.computer_hand = Choice::Rock;
        self.last_report = None;
    }
}
