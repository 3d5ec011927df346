//! WASM exports for the supervisor panel
//!
//! Wraps [`PanelController`] with a JS-facing API. The page constructs one
//! `SupervisorPanel`, calls `attach()` once the DOM is ready, and forwards
//! button clicks and file input changes to the matching methods. Host
//! messages arrive through the robot window's `receive` callback, which
//! `attach()` installs.
//!
//! The panel must stay alive for as long as the page is open, since the
//! installed callback is owned by it.

use std::cell::RefCell;
use std::rc::Rc;

use erebus_panel::{Effect, HostMessage, PanelConfig, PanelController, ReadTicket, Slot};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::bindings::robot_window::{self, RobotWindow};
use crate::dom::DomDriver;
use crate::util::{describe, log, set_panic_hook};

struct PanelInner {
    controller: PanelController,
    dom: Option<DomDriver>,
    window: Option<RobotWindow>,
}

/// Supervisor panel for WASM
#[wasm_bindgen]
pub struct SupervisorPanel {
    inner: Rc<RefCell<PanelInner>>,
    receive_handler: Option<Closure<dyn FnMut(String)>>,
}

#[wasm_bindgen]
impl SupervisorPanel {
    /// Create a panel, optionally from a JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SupervisorPanel, JsValue> {
        set_panic_hook();
        let config = match config_json {
            Some(json) => PanelConfig::from_json(&json).map_err(to_js)?,
            None => PanelConfig::default(),
        };
        Ok(Self {
            inner: Rc::new(RefCell::new(PanelInner {
                controller: PanelController::new(config),
                dom: None,
                window: None,
            })),
            receive_handler: None,
        })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Bind to the page and the simulator.
    ///
    /// Fails without touching the page if any bound element is missing.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
        let bindings = self
            .inner
            .borrow()
            .controller
            .config()
            .binding_table()
            .map_err(to_js)?;

        let dom = DomDriver::new(document, bindings);
        if let Err(e) = dom.validate() {
            log(&format!("[panel] Attach failed: {}", e));
            return Err(to_js(e));
        }

        let handle = robot_window::robot_window();
        robot_window::publish(&handle);

        let inner = Rc::clone(&self.inner);
        let handler = Closure::wrap(Box::new(move |message: String| {
            dispatch(&inner, &message);
        }) as Box<dyn FnMut(String)>);
        handle.set_receive(handler.as_ref().unchecked_ref());
        self.receive_handler = Some(handler);

        {
            let mut state = self.inner.borrow_mut();
            state.dom = Some(dom);
            state.window = Some(handle);
        }
        drive(&self.inner, |c| c.attach());
        log("[panel] Attached");
        Ok(())
    }

    /// Whether `attach()` has succeeded
    #[wasm_bindgen]
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().dom.is_some()
    }

    // =========================================================================
    // Host messages
    // =========================================================================

    /// Handle one raw host message
    #[wasm_bindgen]
    pub fn receive(&self, message: &str) {
        dispatch(&self.inner, message);
    }

    // =========================================================================
    // User actions
    // =========================================================================

    #[wasm_bindgen]
    pub fn run_pressed(&self) {
        drive(&self.inner, |c| c.run_pressed());
    }

    #[wasm_bindgen]
    pub fn pause_pressed(&self) {
        drive(&self.inner, |c| c.pause_pressed());
    }

    #[wasm_bindgen]
    pub fn reset_pressed(&self) {
        drive(&self.inner, |c| c.reset_pressed());
    }

    #[wasm_bindgen]
    pub fn load_pressed(&self, slot: u32) -> Result<(), JsValue> {
        let slot = slot_arg(slot)?;
        drive(&self.inner, |c| c.load_pressed(slot));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn unload_pressed(&self, slot: u32) -> Result<(), JsValue> {
        let slot = slot_arg(slot)?;
        drive(&self.inner, |c| c.unload_pressed(slot));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn relocate_pressed(&self, slot: u32) -> Result<(), JsValue> {
        let slot = slot_arg(slot)?;
        drive(&self.inner, |c| c.relocate_pressed(slot));
        Ok(())
    }

    /// The slot's file input changed.
    ///
    /// The file is read in the background; the upload is sent only if no
    /// newer selection or unload happened for the slot in the meantime.
    #[wasm_bindgen]
    pub fn file_selected(&self, slot: u32) -> Result<(), JsValue> {
        let slot = slot_arg(slot)?;
        let file = {
            let state = self.inner.borrow();
            state
                .dom
                .as_ref()
                .and_then(|dom| dom.file_input(slot))
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
        };
        let Some(file) = file else {
            return Ok(());
        };

        let mut ticket = None;
        drive(&self.inner, |c| {
            let (effects, t) = c.file_selected(slot, &file.name());
            ticket = t;
            effects
        });
        if let Some(ticket) = ticket {
            spawn_local(read_file(Rc::clone(&self.inner), file, ticket));
        }
        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Get the panel state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        self.inner.borrow().controller.snapshot().to_json()
    }
}

/// Run a controller step, then apply its effects.
///
/// The controller borrow ends before effects run, so effects that call
/// back into the page never see the panel borrowed mutably.
fn drive<F>(inner: &Rc<RefCell<PanelInner>>, step: F)
where
    F: FnOnce(&mut PanelController) -> Vec<Effect>,
{
    let effects = step(&mut inner.borrow_mut().controller);
    if effects.is_empty() {
        return;
    }
    let state = inner.borrow();
    match (&state.dom, &state.window) {
        (Some(dom), Some(window)) => dom.apply(effects, window),
        _ => log("[panel] Not attached, dropping effects"),
    }
}

fn dispatch(inner: &Rc<RefCell<PanelInner>>, message: &str) {
    match HostMessage::parse(message) {
        Ok(Some(msg)) => drive(inner, |c| c.apply(msg)),
        Ok(None) => log(&format!("[panel] Unknown message {:?}", message)),
        Err(e) => log(&format!("[panel] Ignoring message {:?}: {}", message, e)),
    }
}

async fn read_file(inner: Rc<RefCell<PanelInner>>, file: web_sys::File, ticket: ReadTicket) {
    if !inner.borrow().controller.is_read_current(ticket) {
        log(&format!("[panel] Skipping superseded read of {}", file.name()));
        return;
    }
    match JsFuture::from(file.text()).await {
        Ok(text) => match text.as_string() {
            Some(contents) => drive(&inner, |c| c.file_read(ticket, contents)),
            None => log("[panel] File read returned non-text"),
        },
        Err(e) => log(&format!("[panel] Failed to read {}: {}", file.name(), describe(&e))),
    }
}

fn slot_arg(index: u32) -> Result<Slot, JsValue> {
    Slot::from_index(index as usize)
        .ok_or_else(|| JsValue::from_str(&format!("invalid slot {}", index)))
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
