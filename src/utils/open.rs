//! OS integration: open a file with the platform default application.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("file does not exist: {0}")]
    Missing(String),
    #[error("could not launch the default handler: {0}")]
    Launch(#[from] std::io::Error),
}

/// Hand the file to the platform handler and return without waiting.
pub fn open_with_default_app(path: &Path) -> Result<(), OpenError> {
    if !path.exists() {
        return Err(OpenError::Missing(path.display().to_string()));
    }
    launcher(path).spawn()?;
    tracing::info!("opened {} with the default application", path.display());
    Ok(())
}

#[cfg(target_os = "macos")]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    // empty title argument so a quoted path is not taken for one
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
