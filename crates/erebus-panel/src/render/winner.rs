//! End-of-match winner screen

use super::{Display, Patch};
use crate::bindings::Role;
use crate::config::PanelConfig;
use crate::model::{MatchState, RobotSlot, Slot};

/// Display name of a side: its controller name, else the configured label.
fn side_name<'a>(config: &'a PanelConfig, robots: &'a [RobotSlot; 2], slot: Slot) -> &'a str {
    robots[slot.index()]
        .name
        .as_deref()
        .unwrap_or_else(|| config.team_label(slot))
}

/// `Draw!` on equal scores, otherwise `<name> wins!`.
pub fn winner_text(config: &PanelConfig, state: &MatchState, robots: &[RobotSlot; 2]) -> String {
    match state.leader() {
        Some(slot) => format!("{} wins!", side_name(config, robots, slot)),
        None => "Draw!".to_string(),
    }
}

/// Show the winner screen with its text.
pub fn winner_screen(config: &PanelConfig, state: &MatchState, robots: &[RobotSlot; 2]) -> [Patch; 2] {
    [
        Patch::SetText {
            role: Role::WinnerText,
            text: winner_text(config, state, robots),
        },
        Patch::SetDisplay {
            role: Role::WinnerScreen,
            display: Display::Block,
        },
    ]
}

/// Hide the winner screen.
pub fn winner_hidden() -> Patch {
    Patch::SetDisplay {
        role: Role::WinnerScreen,
        display: Display::None,
    }
}
