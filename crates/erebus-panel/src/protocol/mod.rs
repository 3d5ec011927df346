//! Host channel protocol
//!
//! Plain text, one message per event, fields separated by `,`.
//!
//! # Wire Format
//!
//! ```text
//! <tag>[<slot>][,<field>[,<field>...]]
//! ```
//!
//! The slot suffix (`0` or `1`) is glued to the tag for per-robot messages.
//! `historyUpdate` additionally separates the two sides with `:`:
//!
//! ```text
//! historyUpdate,<a1>,<a2>,...:<b1>,<b2>,...
//! ```

mod inbound;
mod outbound;

pub use inbound::HostMessage;
pub use outbound::PanelCommand;
