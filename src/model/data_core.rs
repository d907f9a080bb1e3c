//! AppState: the application state behind the UI, plus the user-facing
//! error taxonomy.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::convert::{self, ConvertError};
use crate::model::formats::{derive_output_path, FileKind};
use crate::utils::open::open_with_default_app;

/// Replaces the usual pair of global path variables: the currently selected
/// source file and, after a successful conversion, the derived file.
#[derive(Debug, Default)]
pub struct AppState {
    pub selected: Option<PathBuf>,
    pub converted: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConvertError),
    #[error("failed to open file: {0}")]
    Open(String),
}

impl AppState {
    /// Record a fresh selection; any previous conversion result is stale.
    pub fn select(&mut self, path: PathBuf) {
        tracing::info!("selected file: {}", path.display());
        self.selected = Some(path);
        self.converted = None;
    }

    /// Dispatch the selected file through the format table and run the
    /// matching delegate. Remembers the derived path on success.
    pub fn convert(&mut self) -> Result<PathBuf, AppError> {
        let input = self.selected.as_deref().ok_or(AppError::NoFileSelected)?;
        let kind = FileKind::from_path(input)
            .ok_or_else(|| AppError::UnsupportedFormat(extension_of(input)))?;
        let output = derive_output_path(input, kind.target());

        convert::run(kind, input, &output)?;

        tracing::info!("converted {} -> {}", input.display(), output.display());
        self.converted = Some(output.clone());
        Ok(output)
    }

    pub fn open_selected(&self) -> Result<(), AppError> {
        Self::open(self.selected.as_deref())
    }

    pub fn open_converted(&self) -> Result<(), AppError> {
        Self::open(self.converted.as_deref())
    }

    fn open(path: Option<&Path>) -> Result<(), AppError> {
        let path = path.ok_or(AppError::NoFileSelected)?;
        open_with_default_app(path).map_err(|e| AppError::Open(e.to_string()))
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_convert_without_selection_fails() {
        let mut state = AppState::default();
        let result = state.convert();
        assert!(
            matches!(result, Err(AppError::NoFileSelected)),
            "converting with nothing selected must fail"
        );
    }

    #[test]
    fn test_unsupported_extension_creates_no_output() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let input = dir.path().join("notes.txt");
        fs::write(&input, "plain text").expect("fixture write should succeed");

        let mut state = AppState::default();
        state.select(input);

        let result = state.convert();
        assert!(
            matches!(result, Err(AppError::UnsupportedFormat(ref ext)) if ext == "txt"),
            "a .txt file must be rejected as unsupported"
        );
        assert!(state.converted.is_none());

        let entries = fs::read_dir(dir.path()).expect("dir should list").count();
        assert_eq!(entries, 1, "dispatch failure must not create any file");
    }

    #[test]
    fn test_csv_selection_converts_to_sibling_xlsx() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let input = dir.path().join("notes.csv");
        fs::write(&input, "a,b\n1,2\n").expect("fixture write should succeed");

        let mut state = AppState::default();
        state.select(input.clone());

        let output = state.convert().expect("csv -> xlsx should succeed");
        assert_eq!(output, dir.path().join("notes.xlsx"));
        assert!(output.exists(), "derived file should exist beside the source");
        assert_eq!(state.converted.as_deref(), Some(output.as_path()));
    }

    #[test]
    fn test_new_selection_clears_converted() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let input = dir.path().join("notes.csv");
        fs::write(&input, "a,b\n1,2\n").expect("fixture write should succeed");

        let mut state = AppState::default();
        state.select(input.clone());
        state.convert().expect("csv -> xlsx should succeed");
        assert!(state.converted.is_some());

        state.select(input);
        assert!(
            state.converted.is_none(),
            "selecting a file must reset the converted state"
        );
    }

    #[test]
    fn test_open_with_nothing_converted_fails() {
        let state = AppState::default();
        assert!(matches!(state.open_converted(), Err(AppError::NoFileSelected)));
    }
}
