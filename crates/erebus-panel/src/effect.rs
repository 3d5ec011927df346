//! Controller output

use crate::model::Slot;
use crate::protocol::PanelCommand;
use crate::render::Patch;

/// Something the driver must do on the controller's behalf, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Mutate the DOM
    Patch(Patch),
    /// Send a command to the host
    Send(PanelCommand),
    /// Show a blocking alert
    Alert(String),
    /// Open the file picker bound to a slot
    OpenFilePicker(Slot),
    /// Set the robot window title
    SetTitle(String),
}

impl From<Patch> for Effect {
    fn from(patch: Patch) -> Self {
        Effect::Patch(patch)
    }
}

impl From<PanelCommand> for Effect {
    fn from(cmd: PanelCommand) -> Self {
        Effect::Send(cmd)
    }
}
