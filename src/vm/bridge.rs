//! VM bridge layer: connects the Slint UI with the AppState data model
//!
//! Note: the bridge implementation itself lives in main.rs because it
//! depends on the Slint-generated types; this module holds the shared
//! constants.

pub const STATUS_READY: &str = "Ready";
pub const STATUS_NO_FILE: &str = "No file selected";
pub const STATUS_CONVERTING: &str = "Converting...";
pub const STATUS_ERROR_PREFIX: &str = "Error: ";

pub const CONVERT_LABEL: &str = "Convert";
pub const CONVERT_LABEL_DONE: &str = "Converted ✓";
