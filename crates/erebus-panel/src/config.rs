//! Panel configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bindings::BindingTable;
use crate::constants::{
    ACTIVITY_IDLE_COLOUR, DEFAULT_CONTROLLER_EXTENSION, DEFAULT_MATCH_DURATION_SECS,
    DEFAULT_WINDOW_TITLE, HUMAN_LOADED_COLOUR, HUMAN_UNLOADED_COLOUR,
};
use crate::error::{BindingError, ConfigError};
use crate::model::Slot;

/// Configuration for a panel instance.
///
/// Every field has a default matching the stock robot window, so an empty
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Match length in seconds
    pub match_duration_secs: u32,
    /// Required extension for uploaded controllers (without the dot)
    pub controller_extension: String,
    /// Robot window title
    pub window_title: String,
    /// Fallback side names for the winner screen when no controller name is known
    pub team_labels: [String; 2],
    pub human_loaded_colour: String,
    pub human_unloaded_colour: String,
    /// Activity indicator stroke with nothing loaded
    pub activity_idle_colour: String,
    /// DOM id overrides keyed by role name (e.g. `"timer" -> "clock"`)
    pub bindings: BTreeMap<String, String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            match_duration_secs: DEFAULT_MATCH_DURATION_SECS,
            controller_extension: DEFAULT_CONTROLLER_EXTENSION.to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            team_labels: ["Robot 0".to_string(), "Robot 1".to_string()],
            human_loaded_colour: HUMAN_LOADED_COLOUR.to_string(),
            human_unloaded_colour: HUMAN_UNLOADED_COLOUR.to_string(),
            activity_idle_colour: ACTIVITY_IDLE_COLOUR.to_string(),
            bindings: BTreeMap::new(),
        }
    }
}

impl PanelConfig {
    /// Parse from JSON, filling gaps with defaults.
    ///
    /// Binding overrides are checked here so a typo in a role name fails
    /// early rather than at attach time.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(json)?;
        config.binding_table()?;
        Ok(config)
    }

    /// Build the binding table with this config's overrides applied.
    pub fn binding_table(&self) -> Result<BindingTable, BindingError> {
        BindingTable::with_overrides(
            self.bindings
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Fallback label for a side.
    pub fn team_label(&self, slot: Slot) -> &str {
        &self.team_labels[slot.index()]
    }
}
