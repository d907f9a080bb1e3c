//! Desktop file-conversion utility
//!
//! Converts between related document formats (PDF↔DOCX, XLSX↔CSV) by
//! delegating to ecosystem crates; the binary wires this library to a Slint
//! window.

pub mod convert;
pub mod model;
pub mod utils;
pub mod vm;

// Re-export the main types
pub use convert::ConvertError;
pub use model::data_core::{AppError, AppState};
pub use model::formats::{derive_output_path, icon_for_path, FileKind, IconSpec};
