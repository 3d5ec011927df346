//! Serializable view of the panel state

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bindings::Role;
use crate::controller::PanelController;
use crate::model::{History, MatchState, RobotSlot};
use crate::render::format_time_remaining;

/// Point-in-time copy of the controller state, for debugging from JS.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelSnapshot {
    #[serde(rename = "match")]
    pub match_state: MatchState,
    pub robots: [RobotSlot; 2],
    pub history: History,
    /// Enabled flag per button, keyed by role name
    pub buttons: BTreeMap<String, bool>,
    /// Timer text as currently rendered
    pub timer: String,
}

impl PanelSnapshot {
    pub(crate) fn capture(panel: &PanelController) -> Self {
        let state = panel.state().clone();
        let timer = format_time_remaining(panel.config().match_duration_secs, state.elapsed_secs);
        Self {
            robots: [
                panel.robot(crate::Slot::Zero).clone(),
                panel.robot(crate::Slot::One).clone(),
            ],
            history: panel.history().clone(),
            buttons: panel
                .buttons()
                .iter()
                .map(|(b, enabled)| (Role::Button(b).key(), enabled))
                .collect(),
            timer,
            match_state: state,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
