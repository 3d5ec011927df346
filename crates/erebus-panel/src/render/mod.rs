//! Render layer
//!
//! Pure functions from panel state to [`Patch`] lists. A patch names an
//! element by [`Role`]; the driver resolves the role through the
//! [`BindingTable`](crate::BindingTable) and touches the DOM.
//!
//! Every function here is idempotent: rendering the same state twice yields
//! the same patches, so the controller is free to re-render a whole section.

mod history;
mod indicators;
mod timer;
mod winner;

pub use history::{escape_html, history_html, history_table};
pub use indicators::{activity_indicator, human_indicator};
pub use timer::{format_time_remaining, timer};
pub use winner::{winner_hidden, winner_screen, winner_text};

use serde::Serialize;

use crate::bindings::Role;
use crate::constants::NO_CONTROLLER_NAME;
use crate::model::{Button, ButtonSet, MatchState, RobotSlot, Slot};

/// CSS `display` values the panel uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Display {
    None,
    InlineBlock,
    Block,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::InlineBlock => "inline-block",
            Display::Block => "block",
        }
    }
}

/// One DOM mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Replace an element's text content
    SetText { role: Role, text: String },
    /// Replace an element's inner HTML
    SetHtml { role: Role, html: String },
    /// Set `style.display`
    SetDisplay { role: Role, display: Display },
    /// Set a button's `disabled` property
    SetDisabled { role: Role, disabled: bool },
    /// Set `style.fill`
    SetFill { role: Role, colour: String },
    /// Set `style.stroke`
    SetStroke { role: Role, colour: String },
    /// Reset a file input's value
    ClearValue { role: Role },
}

impl Patch {
    /// The element this patch touches.
    pub fn role(&self) -> Role {
        match self {
            Patch::SetText { role, .. }
            | Patch::SetHtml { role, .. }
            | Patch::SetDisplay { role, .. }
            | Patch::SetDisabled { role, .. }
            | Patch::SetFill { role, .. }
            | Patch::SetStroke { role, .. }
            | Patch::ClearValue { role } => *role,
        }
    }
}

/// Score text for one side.
pub fn score(state: &MatchState, slot: Slot) -> Patch {
    Patch::SetText {
        role: Role::Score(slot),
        text: state.score(slot).to_string(),
    }
}

/// Controller name label for one side.
pub fn name_label(slot: Slot, robot: &RobotSlot) -> Patch {
    Patch::SetText {
        role: Role::Name(slot),
        text: robot
            .name
            .clone()
            .unwrap_or_else(|| NO_CONTROLLER_NAME.to_string()),
    }
}

/// Load/unload visibility for one side. Exactly one of the two is shown.
pub fn slot_controls(slot: Slot, robot: &RobotSlot) -> [Patch; 2] {
    let (load, unload) = if robot.loaded {
        (Display::None, Display::InlineBlock)
    } else {
        (Display::InlineBlock, Display::None)
    };
    [
        Patch::SetDisplay {
            role: Role::Button(Button::Load(slot)),
            display: load,
        },
        Patch::SetDisplay {
            role: Role::Button(Button::Unload(slot)),
            display: unload,
        },
    ]
}

/// Reset the file input so re-selecting the same file fires `change` again.
pub fn clear_file_input(slot: Slot) -> Patch {
    Patch::ClearValue {
        role: Role::FileInput(slot),
    }
}

/// Disabled flag for one button.
pub fn button(button: Button, enabled: bool) -> Patch {
    Patch::SetDisabled {
        role: Role::Button(button),
        disabled: !enabled,
    }
}

/// Disabled flags for every button.
pub fn buttons(set: &ButtonSet) -> Vec<Patch> {
    set.iter().map(|(b, enabled)| button(b, enabled)).collect()
}
