//! Button enablement

use super::Slot;

/// A clickable control on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    Run,
    Pause,
    Reset,
    Load(Slot),
    Unload(Slot),
    Relocate(Slot),
}

impl Button {
    /// Every button, in a stable order.
    pub const ALL: [Button; 9] = [
        Button::Run,
        Button::Pause,
        Button::Reset,
        Button::Load(Slot::Zero),
        Button::Load(Slot::One),
        Button::Unload(Slot::Zero),
        Button::Unload(Slot::One),
        Button::Relocate(Slot::Zero),
        Button::Relocate(Slot::One),
    ];

    fn ordinal(self) -> usize {
        match self {
            Button::Run => 0,
            Button::Pause => 1,
            Button::Reset => 2,
            Button::Load(slot) => 3 + slot.index(),
            Button::Unload(slot) => 5 + slot.index(),
            Button::Relocate(slot) => 7 + slot.index(),
        }
    }
}

/// Enabled flag per button.
///
/// Initially only the load and unload buttons are enabled, so controllers
/// can be changed before the host has finished starting up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonSet {
    enabled: [bool; 9],
}

impl Default for ButtonSet {
    fn default() -> Self {
        let mut set = Self {
            enabled: [false; 9],
        };
        for slot in Slot::ALL {
            set.set(Button::Load(slot), true);
            set.set(Button::Unload(slot), true);
        }
        set
    }
}

impl ButtonSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_enabled(&self, button: Button) -> bool {
        self.enabled[button.ordinal()]
    }

    /// Set a button's flag. Returns true if it changed.
    pub fn set(&mut self, button: Button, enabled: bool) -> bool {
        let slot = &mut self.enabled[button.ordinal()];
        let changed = *slot != enabled;
        *slot = enabled;
        changed
    }

    /// All buttons with their flags.
    pub fn iter(&self) -> impl Iterator<Item = (Button, bool)> + '_ {
        Button::ALL.iter().map(move |&b| (b, self.is_enabled(b)))
    }
}
