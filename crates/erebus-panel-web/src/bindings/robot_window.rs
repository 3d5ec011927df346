//! Robot window handle
//!
//! The simulator page exposes `webots.window()`, which returns an object with
//! `setTitle`, `send` and an assignable `receive` callback. Incoming messages
//! are delivered by the simulator calling `receive(message, robotName)`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The robot window object returned by `webots.window()`
    pub type RobotWindow;

    /// Obtain the robot window for this page
    #[wasm_bindgen(js_namespace = webots, js_name = window)]
    pub fn robot_window() -> RobotWindow;

    #[wasm_bindgen(method, js_name = setTitle)]
    pub fn set_title(this: &RobotWindow, title: &str);

    #[wasm_bindgen(method)]
    pub fn send(this: &RobotWindow, message: &str);

    /// Install the inbound message callback
    #[wasm_bindgen(method, setter = receive)]
    pub fn set_receive(this: &RobotWindow, callback: &js_sys::Function);
}

/// Publish the handle as `window.robotWindow`, where page scripts expect it.
pub(crate) fn publish(handle: &RobotWindow) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &"robotWindow".into(), handle);
    }
}
