//! Supervisor Panel Controller for the Erebus rescue simulation
//!
//! This crate is the browser-independent core of the robot window that sits
//! next to the simulation. The host supervisor drives it with short tagged
//! text messages; the panel turns those into DOM patches and turns user
//! actions back into tagged text commands.
//!
//! ## Architecture
//!
//! - [`protocol`]: Typed inbound (`HostMessage`) and outbound (`PanelCommand`) messages
//! - [`model`]: Match state, robot slots, history and button enablement
//! - [`render`]: Pure render functions producing role-addressed [`Patch`]es
//! - [`bindings`]: Element role to DOM id table, validated at attach time
//! - [`intake`]: Controller file validation and read tickets
//! - [`testing`]: In-memory driver for exercising the controller without a browser
//!
//! ## Example
//!
//! ```rust
//! use erebus_panel::{PanelController, PanelConfig, PanelCommand, Effect};
//!
//! let mut panel = PanelController::new(PanelConfig::default());
//! panel.attach();
//! panel.receive("startup").unwrap();
//!
//! let effects = panel.run_pressed();
//! assert!(effects.contains(&Effect::Send(PanelCommand::Run)));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No DOM access here; the web crate applies effects
//! 2. **Closed Protocol**: Every tag is an enum variant, arity checked at parse time
//! 3. **Single Writer**: The controller owns all panel state

pub mod bindings;
pub mod config;
pub mod constants;
pub mod error;
pub mod intake;
pub mod model;
pub mod protocol;
pub mod render;
pub mod testing;

mod controller;
mod effect;
mod snapshot;

pub use bindings::{BindingTable, Role};
pub use config::PanelConfig;
pub use controller::PanelController;
pub use effect::Effect;
pub use error::{BindingError, ConfigError, IntakeError, ProtocolError};
pub use intake::{FileIntake, ReadTicket};
pub use model::{Button, ButtonSet, History, MatchState, RobotSlot, Rgb, RunState, Slot};
pub use protocol::{HostMessage, PanelCommand};
pub use render::{Display, Patch};
pub use snapshot::PanelSnapshot;
