//! Controller file intake
//!
//! A file picked for a slot is checked by name, then read asynchronously by
//! the driver. Each accepted selection gets a [`ReadTicket`]; only the most
//! recent ticket for a slot may complete, so a slower earlier read that
//! finishes after a newer selection is dropped.

use crate::error::IntakeError;
use crate::model::Slot;
use crate::protocol::PanelCommand;

/// Check that `file_name` ends in `.<extension>`.
///
/// The name must contain a dot; only the last component is compared.
pub fn validate_controller_file(file_name: &str, extension: &str) -> Result<(), IntakeError> {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if ext == extension => Ok(()),
        _ => Err(IntakeError::WrongExtension {
            file_name: file_name.to_string(),
            expected: extension.to_string(),
        }),
    }
}

/// Handle for one in-flight read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket {
    pub slot: Slot,
    generation: u64,
}

/// Tracks the latest selection per slot.
#[derive(Clone, Debug, Default)]
pub struct FileIntake {
    generations: [u64; 2],
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a read for `slot`, superseding any read already in flight.
    pub fn begin(&mut self, slot: Slot) -> ReadTicket {
        let generation = &mut self.generations[slot.index()];
        *generation += 1;
        ReadTicket {
            slot,
            generation: *generation,
        }
    }

    /// Invalidate any in-flight read for `slot` without starting a new one.
    pub fn cancel(&mut self, slot: Slot) {
        self.generations[slot.index()] += 1;
    }

    /// Whether `ticket` is still the latest for its slot.
    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.generations[ticket.slot.index()] == ticket.generation
    }

    /// Finish a read. Returns the upload command for a current ticket,
    /// `None` for a superseded one.
    ///
    /// A ticket completes at most once.
    pub fn complete(&mut self, ticket: ReadTicket, contents: String) -> Option<PanelCommand> {
        if !self.is_current(ticket) {
            return None;
        }
        self.cancel(ticket.slot);
        Some(PanelCommand::LoadFile {
            slot: ticket.slot,
            contents,
        })
    }
}
