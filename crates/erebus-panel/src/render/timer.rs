//! Match clock display

use super::Patch;
use crate::bindings::Role;
use crate::config::PanelConfig;
use crate::model::MatchState;

/// `mm:ss` remaining, both parts zero-padded to two digits.
///
/// Remaining time bottoms out at `00:00`: the host keeps reporting elapsed
/// time past the end of the match.
pub fn format_time_remaining(duration_secs: u32, elapsed_secs: u32) -> String {
    let remaining = duration_secs.saturating_sub(elapsed_secs);
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}

/// Timer text for the current state.
pub fn timer(config: &PanelConfig, state: &MatchState) -> Patch {
    Patch::SetText {
        role: Role::Timer,
        text: format_time_remaining(config.match_duration_secs, state.elapsed_secs),
    }
}
