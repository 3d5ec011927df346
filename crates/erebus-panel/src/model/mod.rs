//! Panel state model
//!
//! Everything the panel knows about the match, held by the controller and
//! handed to the render functions by reference.

mod buttons;
mod history;
mod match_state;
mod slot;

pub use buttons::{Button, ButtonSet};
pub use history::History;
pub use match_state::{MatchState, RunState};
pub use slot::{RobotSlot, Rgb, Slot};
