//! JavaScript Bindings for the Simulator
//!
//! wasm-bindgen extern bindings to objects the simulator injects into the
//! robot window page:
//!
//! - `robot_window` - the `webots.window()` handle used to talk to the supervisor

pub(crate) mod robot_window;
