//! Element role → DOM id binding table
//!
//! The markup is owned by the robot window's HTML page. Render functions
//! address elements by [`Role`]; this table is the only place that knows the
//! actual ids, and it is checked against the document when the panel attaches.

use std::collections::BTreeMap;

use crate::error::BindingError;
use crate::model::{Button, Slot};

/// What an element is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Score(Slot),
    Timer,
    Name(Slot),
    Button(Button),
    FileInput(Slot),
    /// First part of the human indicator glyph
    HumanA(Slot),
    /// Second part of the human indicator glyph
    HumanB(Slot),
    Activity(Slot),
    HistoryTable,
    WinnerScreen,
    WinnerText,
}

impl Role {
    /// Every role the panel renders into.
    pub fn all() -> Vec<Role> {
        let mut roles = vec![Role::Timer, Role::HistoryTable, Role::WinnerScreen, Role::WinnerText];
        for slot in Slot::ALL {
            roles.extend([
                Role::Score(slot),
                Role::Name(slot),
                Role::FileInput(slot),
                Role::HumanA(slot),
                Role::HumanB(slot),
                Role::Activity(slot),
            ]);
        }
        roles.extend(Button::ALL.iter().map(|&b| Role::Button(b)));
        roles
    }

    /// Stable name used for configuration overrides, e.g. `"score0"`.
    ///
    /// Coincides with the historical DOM id.
    pub fn key(self) -> String {
        match self {
            Role::Score(s) => format!("score{}", s.suffix()),
            Role::Timer => "timer".to_string(),
            Role::Name(s) => format!("robot{}Name", s.suffix()),
            Role::Button(Button::Run) => "runButton".to_string(),
            Role::Button(Button::Pause) => "pauseButton".to_string(),
            Role::Button(Button::Reset) => "resetButton".to_string(),
            Role::Button(Button::Load(s)) => format!("load{}", s.suffix()),
            Role::Button(Button::Unload(s)) => format!("unload{}", s.suffix()),
            Role::Button(Button::Relocate(s)) => format!("relocate{}", s.suffix()),
            Role::FileInput(s) => format!("robot{}File", s.suffix()),
            Role::HumanA(s) => format!("human{}a", s.suffix()),
            Role::HumanB(s) => format!("human{}b", s.suffix()),
            Role::Activity(s) => format!("activity{}", s.suffix()),
            Role::HistoryTable => "historyTable".to_string(),
            Role::WinnerScreen => "winnerScreen".to_string(),
            Role::WinnerText => "winnerText".to_string(),
        }
    }

    /// Look up a role by its [`key`](Role::key).
    pub fn from_key(key: &str) -> Option<Role> {
        Role::all().into_iter().find(|r| r.key() == key)
    }
}

/// Maps every [`Role`] to a DOM id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingTable {
    ids: BTreeMap<Role, String>,
}

impl Default for BindingTable {
    fn default() -> Self {
        let ids = Role::all().into_iter().map(|r| (r, r.key())).collect();
        Self { ids }
    }
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default table with some ids replaced, keyed by role name.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for (key, id) in overrides {
            let role = Role::from_key(key).ok_or_else(|| BindingError::UnknownRole(key.to_string()))?;
            table.ids.insert(role, id.to_string());
        }
        Ok(table)
    }

    /// DOM id for a role.
    pub fn id(&self, role: Role) -> &str {
        // Every role is inserted by Default and overrides only replace.
        self.ids.get(&role).map(String::as_str).unwrap_or_default()
    }

    /// Check that every bound id exists, using `exists` to probe the document.
    ///
    /// Reports all missing ids at once.
    pub fn validate<F>(&self, mut exists: F) -> Result<(), BindingError>
    where
        F: FnMut(&str) -> bool,
    {
        let missing: Vec<String> = self
            .ids
            .values()
            .filter(|id| !exists(id.as_str()))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BindingError::Missing(missing))
        }
    }

    /// All (role, id) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        self.ids.iter().map(|(r, id)| (*r, id.as_str()))
    }
}
