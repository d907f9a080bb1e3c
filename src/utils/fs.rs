//! IO helper: staged conversion output

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Create the staging file next to `output` so the final persist is a rename
/// on the same filesystem. The destination extension is kept as a suffix for
/// libraries that sniff it.
pub fn staging_file_for(output: &Path) -> io::Result<NamedTempFile> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let suffix = output
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    tempfile::Builder::new()
        .prefix(".converting-")
        .suffix(&suffix)
        .tempfile_in(dir)
}
