//! Error Types for the panel
//!
//! Defines errors raised while parsing host messages, validating file
//! selections, checking DOM bindings and loading configuration.

/// Errors that can occur while parsing a host message.
///
/// Only messages with a recognized tag can fail; unknown tags are dropped
/// before any field is inspected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProtocolError {
    /// A required positional field is absent.
    #[error("{tag}: missing field '{field}'")]
    MissingField {
        tag: &'static str,
        field: &'static str,
    },

    /// More positional fields than the tag accepts.
    #[error("{tag}: expected {expected} fields, got {got}")]
    TooManyFields {
        tag: &'static str,
        expected: usize,
        got: usize,
    },

    /// A numeric field did not parse.
    #[error("{tag}: field '{field}' is not a number: {value:?}")]
    InvalidNumber {
        tag: &'static str,
        field: &'static str,
        value: String,
    },

    /// `historyUpdate` payload has no `:` between the two sides.
    #[error("historyUpdate: missing side separator ':'")]
    MissingSideSeparator,
}

/// Errors raised when a selected file cannot be used as a controller.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IntakeError {
    /// The file name does not end in the expected extension.
    #[error("{file_name:?} is not a .{expected} file")]
    WrongExtension { file_name: String, expected: String },
}

/// Errors raised by the element binding table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BindingError {
    /// These DOM ids were not found in the document.
    #[error("missing elements: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// A binding override names a role that does not exist.
    #[error("unknown element role: {0}")]
    UnknownRole(String),
}

/// Errors raised while loading a [`PanelConfig`](crate::PanelConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration JSON is malformed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration carries a bad binding override.
    #[error("invalid binding override: {0}")]
    Binding(#[from] BindingError),
}
