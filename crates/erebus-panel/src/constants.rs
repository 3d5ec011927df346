//! Centralized constants for the panel crate
//!
//! Wire tags, default colours and the match clock live here so the protocol
//! and render modules never carry their own copies.

// =============================================================================
// Match Defaults
// =============================================================================

/// Match length used by the host supervisor (8 minutes).
pub const DEFAULT_MATCH_DURATION_SECS: u32 = 8 * 60;

/// File extension a controller upload must carry.
pub const DEFAULT_CONTROLLER_EXTENSION: &str = "py";

/// Title given to the robot window on attach.
pub const DEFAULT_WINDOW_TITLE: &str = "Simulation Controls";

/// Label shown in place of a controller name while a slot is empty.
pub const NO_CONTROLLER_NAME: &str = "None";

/// Alert shown when the selected file is not a controller source file.
pub const WRONG_FILE_ALERT: &str = "Please select a python file.";

// =============================================================================
// Indicator Colours
// =============================================================================

/// Human indicator colour while a human is carried.
pub const HUMAN_LOADED_COLOUR: &str = "gold";

/// Human indicator colour while nothing is carried.
pub const HUMAN_UNLOADED_COLOUR: &str = "black";

/// Activity indicator stroke when no activity is loaded.
pub const ACTIVITY_IDLE_COLOUR: &str = "black";

// =============================================================================
// Wire Tags
// =============================================================================

/// Inbound tag prefixes. Slot-bearing tags carry a trailing `0` or `1`.
pub mod inbound {
    pub const STARTUP: &str = "startup";
    pub const UPDATE: &str = "update";
    pub const LOADED: &str = "loaded";
    pub const UNLOADED: &str = "unloaded";
    pub const ENDED: &str = "ended";
    pub const HUMAN_LOADED: &str = "humanLoaded";
    pub const HUMAN_UNLOADED: &str = "humanUnloaded";
    pub const ACTIVITY_LOADED: &str = "activityLoaded";
    pub const ACTIVITY_UNLOADED: &str = "activityUnloaded";
    pub const HISTORY_UPDATE: &str = "historyUpdate";
}

/// Outbound tags.
pub mod outbound {
    pub const RUN: &str = "run";
    pub const PAUSE: &str = "pause";
    pub const RESET: &str = "reset";
    pub const RELOCATE: &str = "relocate";
}

/// Primary field delimiter on the host channel.
pub const FIELD_DELIMITER: char = ',';

/// Side separator inside a `historyUpdate` payload.
pub const HISTORY_SIDE_DELIMITER: char = ':';
