//! Match clock, scores and run state

use serde::Serialize;

use super::Slot;

/// Global run state of the match as seen by the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum RunState {
    /// Not yet started (or reset and waiting for `startup`)
    #[default]
    Idle,
    /// Run pressed, clock advancing on the host
    Running,
    /// Pause pressed
    Paused,
    /// Host reported the end of the match
    Ended,
}

/// Scores, elapsed time and lifecycle flags for the current match.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchState {
    /// Score per slot
    pub scores: [i32; 2],
    /// Whole seconds elapsed on the host clock
    pub elapsed_secs: u32,
    /// Current run state
    pub run: RunState,
    /// Whether the host has sent `startup`
    pub started: bool,
    /// Latched once the winner screen has been shown
    pub winner_shown: bool,
}

impl MatchState {
    /// Apply an `update` from the host.
    ///
    /// Elapsed time is truncated to whole seconds; negative or NaN values
    /// count as zero.
    pub fn update(&mut self, scores: [i32; 2], elapsed: f64) {
        self.scores = scores;
        self.elapsed_secs = truncate_secs(elapsed);
    }

    /// Score for one slot.
    pub fn score(&self, slot: Slot) -> i32 {
        self.scores[slot.index()]
    }

    /// The leading slot, or `None` on a draw.
    pub fn leader(&self) -> Option<Slot> {
        let [a, b] = self.scores;
        if a > b {
            Some(Slot::Zero)
        } else if b > a {
            Some(Slot::One)
        } else {
            None
        }
    }

    /// Mark the match ended. Returns true the first time only.
    pub fn end(&mut self) -> bool {
        self.run = RunState::Ended;
        if self.winner_shown {
            return false;
        }
        self.winner_shown = true;
        true
    }
}

fn truncate_secs(elapsed: f64) -> u32 {
    if elapsed.is_nan() || elapsed <= 0.0 {
        0
    } else {
        elapsed.floor().min(u32::MAX as f64) as u32
    }
}
