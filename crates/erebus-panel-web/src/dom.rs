//! DOM effect driver
//!
//! Applies controller [`Effect`]s to the live page. Elements are looked up by
//! id through the [`BindingTable`] on every patch; the table is checked
//! against the document once, at attach time.

use erebus_panel::{BindingError, BindingTable, Effect, Patch, Role, Slot};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::bindings::robot_window::RobotWindow;
use crate::util::{describe, log};

pub(crate) struct DomDriver {
    document: Document,
    bindings: BindingTable,
}

impl DomDriver {
    pub(crate) fn new(document: Document, bindings: BindingTable) -> Self {
        Self { document, bindings }
    }

    /// Fail if any bound element is missing from the page.
    pub(crate) fn validate(&self) -> Result<(), BindingError> {
        self.bindings
            .validate(|id| self.document.get_element_by_id(id).is_some())
    }

    pub(crate) fn element(&self, role: Role) -> Option<Element> {
        let id = self.bindings.id(role);
        let el = self.document.get_element_by_id(id);
        if el.is_none() {
            log(&format!("[panel] No element #{} for {}", id, role.key()));
        }
        el
    }

    /// The file input bound to a slot.
    pub(crate) fn file_input(&self, slot: Slot) -> Option<HtmlInputElement> {
        self.element(Role::FileInput(slot))?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    /// Carry out effects in order.
    pub(crate) fn apply(&self, effects: Vec<Effect>, window: &RobotWindow) {
        for effect in effects {
            match effect {
                Effect::Patch(patch) => self.apply_patch(patch),
                Effect::Send(cmd) => {
                    log(&format!("[panel] -> {}", cmd.tag()));
                    window.send(&cmd.encode());
                }
                Effect::Alert(text) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&text);
                    }
                }
                Effect::OpenFilePicker(slot) => {
                    if let Some(input) = self.file_input(slot) {
                        input.click();
                    }
                }
                Effect::SetTitle(title) => window.set_title(&title),
            }
        }
    }

    fn apply_patch(&self, patch: Patch) {
        let Some(el) = self.element(patch.role()) else {
            return;
        };
        let result = match patch {
            Patch::SetText { text, .. } => {
                el.set_text_content(Some(&text));
                Ok(())
            }
            Patch::SetHtml { html, .. } => {
                el.set_inner_html(&html);
                Ok(())
            }
            Patch::SetDisplay { display, .. } => {
                set_style(&el, "display", display.as_css())
            }
            Patch::SetDisabled { disabled, .. } => {
                if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                    button.set_disabled(disabled);
                } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    input.set_disabled(disabled);
                }
                Ok(())
            }
            Patch::SetFill { colour, .. } => set_style(&el, "fill", &colour),
            Patch::SetStroke { colour, .. } => set_style(&el, "stroke", &colour),
            Patch::ClearValue { .. } => {
                if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    input.set_value("");
                }
                Ok(())
            }
        };
        if let Err(e) = result {
            log(&format!("[panel] Patch on #{} failed: {}", el.id(), describe(&e)));
        }
    }
}

/// Inline style of an HTML or SVG element.
fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<web_sys::SvgElement>().map(|svg| svg.style())
}

fn set_style(el: &Element, property: &str, value: &str) -> Result<(), wasm_bindgen::JsValue> {
    match style_of(el) {
        Some(style) => style.set_property(property, value),
        None => Ok(()),
    }
}
