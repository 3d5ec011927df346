//! In-memory driver for testing
//!
//! Applies controller effects to a map of fake elements instead of a DOM,
//! and records everything sent to the host. Lets the whole panel be driven
//! natively, without a browser.

use std::collections::BTreeMap;

use crate::bindings::{BindingTable, Role};
use crate::effect::Effect;
use crate::model::Slot;
use crate::render::Patch;

/// Observable state of one fake element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: Option<String>,
    pub html: Option<String>,
    pub display: Option<&'static str>,
    pub disabled: Option<bool>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Times the value was cleared
    pub value_clears: usize,
}

/// Effect sink backed by plain maps.
#[derive(Clone, Debug, Default)]
pub struct RecordingDriver {
    bindings: BindingTable,
    elements: BTreeMap<String, ElementState>,
    sent: Vec<String>,
    alerts: Vec<String>,
    pickers_opened: Vec<Slot>,
    title: Option<String>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: BindingTable) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Apply effects in order.
    pub fn apply<I: IntoIterator<Item = Effect>>(&mut self, effects: I) {
        for effect in effects {
            match effect {
                Effect::Patch(patch) => self.apply_patch(patch),
                Effect::Send(cmd) => self.sent.push(cmd.encode()),
                Effect::Alert(text) => self.alerts.push(text),
                Effect::OpenFilePicker(slot) => self.pickers_opened.push(slot),
                Effect::SetTitle(title) => self.title = Some(title),
            }
        }
    }

    fn apply_patch(&mut self, patch: Patch) {
        let id = self.bindings.id(patch.role()).to_string();
        let el = self.elements.entry(id).or_default();
        match patch {
            Patch::SetText { text, .. } => el.text = Some(text),
            Patch::SetHtml { html, .. } => el.html = Some(html),
            Patch::SetDisplay { display, .. } => el.display = Some(display.as_css()),
            Patch::SetDisabled { disabled, .. } => el.disabled = Some(disabled),
            Patch::SetFill { colour, .. } => el.fill = Some(colour),
            Patch::SetStroke { colour, .. } => el.stroke = Some(colour),
            Patch::ClearValue { .. } => el.value_clears += 1,
        }
    }

    /// Element state by role (default if never touched).
    pub fn element(&self, role: Role) -> ElementState {
        self.elements
            .get(self.bindings.id(role))
            .cloned()
            .unwrap_or_default()
    }

    pub fn text(&self, role: Role) -> Option<String> {
        self.element(role).text
    }

    pub fn display(&self, role: Role) -> Option<&'static str> {
        self.element(role).display
    }

    pub fn is_disabled(&self, role: Role) -> bool {
        self.element(role).disabled.unwrap_or(false)
    }

    /// Commands sent to the host, wire-encoded.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn pickers_opened(&self) -> &[Slot] {
        &self.pickers_opened
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Snapshot of all touched elements, keyed by DOM id.
    pub fn elements(&self) -> &BTreeMap<String, ElementState> {
        &self.elements
    }

    /// Forget recorded sends and alerts, keeping element state.
    pub fn clear_log(&mut self) {
        self.sent.clear();
        self.alerts.clear();
        self.pickers_opened.clear();
    }
}
