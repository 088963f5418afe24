use std::time::{Duration, Instant};

use log::debug;

use super::layout::SPACE;
use super::practice::{self, PracticeMode};

/// Default pause after a correct key before the next target appears.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(500);
/// Default pause after a wrong key before the next target appears.
pub const ERROR_DELAY: Duration = Duration::from_millis(1000);

/// Result of scoring one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Keystrokes are ignored.
    Idle,
    /// A target is shown and no feedback is on screen.
    AwaitingInput,
    /// The last keystroke's feedback is on screen until its advance fires.
    Feedback(Outcome),
}

/// An `advance()` that a keystroke scheduled for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub due: Instant,
    pub outcome: Outcome,
}

/// Discrete inputs to the session, for callers that prefer the
/// state-in/state-out form of [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    Reset,
    ChangeMode,
    Submit(String),
    Tick,
}

/// Feedback delays applied by `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub success_delay: Duration,
    pub error_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            success_delay: SUCCESS_DELAY,
            error_delay: ERROR_DELAY,
        }
    }
}

/// The drill session. One per process; every transition goes through here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Index into the practice-mode table
    pub mode_index: usize,
    /// Number of targets drawn since the last start/reset/mode change
    pub key_cursor: usize,
    /// Key the user is expected to press
    pub current_target: Option<&'static str>,
    pub correct_count: u32,
    pub total_count: u32,
    /// Whether keystrokes are scored
    pub is_active: bool,
    /// Outcome shown until the next advance fires
    pub feedback: Option<Outcome>,
    /// Advances scheduled by keystrokes, not yet fired
    pub pending: Vec<ScheduledAdvance>,
    pub timing: Timing,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_timing(Timing::default())
    }

    pub fn with_timing(timing: Timing) -> Self {
        Self {
            mode_index: 0,
            key_cursor: 0,
            current_target: None,
            correct_count: 0,
            total_count: 0,
            is_active: false,
            feedback: None,
            pending: Vec::new(),
            timing,
        }
    }

    /// The active practice mode.
    pub fn mode(&self) -> &'static PracticeMode {
        &practice::PRACTICE_MODES[self.mode_index % practice::mode_count()]
    }

    pub fn phase(&self) -> Phase {
        match (self.is_active, self.feedback) {
            (false, _) => Phase::Idle,
            (true, Some(outcome)) => Phase::Feedback(outcome),
            (true, None) => Phase::AwaitingInput,
        }
    }

    /// Percentage of keystrokes that matched, rounded half up. Zero before any keystroke.
    pub fn accuracy(&self) -> u32 {
        accuracy(self.correct_count, self.total_count)
    }

    /// Select a mode directly. Behaves like `change_mode` with respect to the cursor.
    pub fn select_mode(&mut self, index: usize) {
        self.mode_index = index % practice::mode_count();
        self.restart_cycle();
    }

    pub fn start(&mut self) {
        debug!("session start, mode {}", self.mode().name);
        self.is_active = true;
        self.restart_cycle();
    }

    pub fn reset(&mut self) {
        debug!(
            "session reset after {}/{} correct",
            self.correct_count, self.total_count
        );
        self.is_active = false;
        self.correct_count = 0;
        self.total_count = 0;
        self.key_cursor = 0;
        self.current_target = None;
        self.feedback = None;
        self.pending.clear();
    }

    pub fn change_mode(&mut self) {
        self.mode_index = (self.mode_index + 1) % practice::mode_count();
        debug!("mode changed to {}", self.mode().name);
        self.restart_cycle();
    }

    /// Draw the next target from the active mode and move the cursor on.
    pub fn advance(&mut self) -> &'static str {
        let key = self.mode().key_at(self.key_cursor);
        self.key_cursor += 1;
        self.current_target = Some(key);
        self.feedback = None;
        key
    }

    /// Score a keystroke against the current target.
    ///
    /// Returns `None` when the session is not active. Otherwise the keystroke
    /// is counted, and an advance is scheduled after the success or error delay.
    pub fn submit(&mut self, input: &str, now: Instant) -> Option<Outcome> {
        if !self.is_active {
            return None;
        }

        self.total_count += 1;
        let outcome = match self.current_target {
            Some(target) if matches_target(input, target) => {
                self.correct_count += 1;
                Outcome::Correct
            }
            _ => Outcome::Wrong,
        };

        let delay = match outcome {
            Outcome::Correct => self.timing.success_delay,
            Outcome::Wrong => self.timing.error_delay,
        };
        self.pending.push(ScheduledAdvance {
            due: now + delay,
            outcome,
        });
        self.feedback = Some(outcome);

        debug!(
            "submit {:?} against {:?}: {:?}, accuracy {}%",
            input,
            self.current_target,
            outcome,
            self.accuracy()
        );
        Some(outcome)
    }

    /// Fire every scheduled advance that is due, earliest first.
    /// Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(idx) = self.next_due(now) {
            self.pending.remove(idx);
            self.advance();
            fired += 1;
        }
        fired
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Pure form of the transitions: consume a state and an event, return the next state.
    pub fn apply(mut self, event: SessionEvent, now: Instant) -> Self {
        match event {
            SessionEvent::Start => self.start(),
            SessionEvent::Reset => self.reset(),
            SessionEvent::ChangeMode => self.change_mode(),
            SessionEvent::Submit(input) => {
                self.submit(&input, now);
            }
            SessionEvent::Tick => {
                self.tick(now);
            }
        }
        self
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| p.due)
            .map(|(idx, _)| idx)
    }

    /// Rewind the key cycle; if practising, show the first key of the mode now.
    fn restart_cycle(&mut self) {
        self.key_cursor = 0;
        self.pending.clear();
        self.feedback = None;
        if self.is_active {
            self.advance();
        }
    }
}

/// Case-insensitive key match, plus a literal space for the `Space` target.
pub fn matches_target(input: &str, target: &str) -> bool {
    (input == " " && target == SPACE) || input.to_uppercase() == target.to_uppercase()
}

/// `round(correct / total * 100)`, rounding halves up; 0 when `total` is 0.
pub fn accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((correct * 200 + total) / (total * 2)) as u32
}
