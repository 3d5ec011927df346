//! Human and activity indicators

use super::Patch;
use crate::bindings::Role;
use crate::config::PanelConfig;
use crate::model::{RobotSlot, Slot};

/// Fill and stroke for both parts of the human glyph.
pub fn human_indicator(config: &PanelConfig, slot: Slot, robot: &RobotSlot) -> Vec<Patch> {
    let colour = if robot.human_loaded {
        &config.human_loaded_colour
    } else {
        &config.human_unloaded_colour
    };
    [Role::HumanA(slot), Role::HumanB(slot)]
        .into_iter()
        .flat_map(|role| {
            [
                Patch::SetFill {
                    role,
                    colour: colour.clone(),
                },
                Patch::SetStroke {
                    role,
                    colour: colour.clone(),
                },
            ]
        })
        .collect()
}

/// Stroke of the activity glyph.
pub fn activity_indicator(config: &PanelConfig, slot: Slot, robot: &RobotSlot) -> Patch {
    let colour = match robot.activity {
        Some(rgb) => rgb.to_css(),
        None => config.activity_idle_colour.clone(),
    };
    Patch::SetStroke {
        role: Role::Activity(slot),
        colour,
    }
}
