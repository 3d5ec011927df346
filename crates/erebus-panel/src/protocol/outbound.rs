//! Panel → host commands

use crate::constants::{outbound as tags, FIELD_DELIMITER};
use crate::model::Slot;

/// A command the panel sends to the host supervisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    /// Start or resume the match
    Run,
    /// Pause the match
    Pause,
    /// Reset the world and restart the supervisor
    Reset,
    /// Remove the controller from a slot
    Unload { slot: Slot },
    /// Upload controller source for a slot
    LoadFile { slot: Slot, contents: String },
    /// Move a robot back to its last checkpoint
    Relocate { slot: Slot },
}

impl PanelCommand {
    /// Wire text for this command.
    ///
    /// File contents go out verbatim; the host only splits on the first `,`.
    pub fn encode(&self) -> String {
        match self {
            PanelCommand::Run => tags::RUN.to_string(),
            PanelCommand::Pause => tags::PAUSE.to_string(),
            PanelCommand::Reset => tags::RESET.to_string(),
            PanelCommand::Unload { slot } => format!("robot{}Unload", slot.suffix()),
            PanelCommand::LoadFile { slot, contents } => {
                format!("robot{}File{}{}", slot.suffix(), FIELD_DELIMITER, contents)
            }
            PanelCommand::Relocate { slot } => {
                format!("{}{}{}", tags::RELOCATE, FIELD_DELIMITER, slot.suffix())
            }
        }
    }

    /// Tag portion only, safe to log (never includes file contents).
    pub fn tag(&self) -> String {
        match self {
            PanelCommand::LoadFile { slot, .. } => format!("robot{}File", slot.suffix()),
            PanelCommand::Relocate { .. } => tags::RELOCATE.to_string(),
            other => other.encode(),
        }
    }
}
