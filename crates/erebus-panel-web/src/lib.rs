//! Browser robot window for the Erebus supervisor panel
//!
//! Thin wasm-bindgen layer over [`erebus_panel`]: it owns the DOM and the
//! simulator connection, and applies the effects the controller returns.
//!
//! ## Modules
//!
//! - `bindings`: extern bindings to the simulator's `webots.window()` object
//! - `dom`: applies patches, alerts and file picker requests to the page
//! - `panel`: the exported [`SupervisorPanel`]
//!
//! ## Usage
//!
//! ```js
//! import init, { SupervisorPanel } from './erebus_panel_web.js';
//!
//! await init();
//! const panel = new SupervisorPanel();
//! panel.attach();
//! document.getElementById('runButton').onclick = () => panel.run_pressed();
//! document.getElementById('robot0File').onchange = () => panel.file_selected(0);
//! ```

mod bindings;
mod dom;
mod panel;
mod util;

pub use panel::SupervisorPanel;
