//! Format table: the fixed source→target extension mapping, icon lookup and
//! output-path derivation. This is the only dispatch logic in the app.

use std::path::{Path, PathBuf};

/// The four convertible formats. The mapping is closed: each kind converts to
/// exactly one sibling format and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Xlsx,
    Csv,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [FileKind::Pdf, FileKind::Docx, FileKind::Xlsx, FileKind::Csv];

    /// Parse an extension (without the dot, any case) against the table.
    pub fn from_extension(ext: &str) -> Option<FileKind> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "xlsx" => Some(FileKind::Xlsx),
            "csv" => Some(FileKind::Csv),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<FileKind> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(FileKind::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Xlsx => "xlsx",
            FileKind::Csv => "csv",
        }
    }

    /// The target side of the conversion table:
    /// pdf→docx, docx→pdf, xlsx→csv, csv→xlsx.
    pub fn target(self) -> FileKind {
        match self {
            FileKind::Pdf => FileKind::Docx,
            FileKind::Docx => FileKind::Pdf,
            FileKind::Xlsx => FileKind::Csv,
            FileKind::Csv => FileKind::Xlsx,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF document",
            FileKind::Docx => "Word document",
            FileKind::Xlsx => "Excel workbook",
            FileKind::Csv => "CSV file",
        }
    }
}

/// Icon resource for a file badge: a short label and a badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub label: &'static str,
    pub rgb: (u8, u8, u8),
}

const DEFAULT_ICON: IconSpec = IconSpec {
    label: "FILE",
    rgb: (0x9e, 0x9e, 0x9e),
};

/// Total icon lookup: any path (or none) yields a usable icon, with the
/// neutral default for unknown extensions.
pub fn icon_for_path(path: Option<&Path>) -> IconSpec {
    match path.and_then(FileKind::from_path) {
        Some(FileKind::Pdf) => IconSpec {
            label: "PDF",
            rgb: (0xc6, 0x28, 0x28),
        },
        Some(FileKind::Docx) => IconSpec {
            label: "DOCX",
            rgb: (0x15, 0x65, 0xc0),
        },
        Some(FileKind::Xlsx) => IconSpec {
            label: "XLSX",
            rgb: (0x2e, 0x7d, 0x32),
        },
        Some(FileKind::Csv) => IconSpec {
            label: "CSV",
            rgb: (0x6a, 0x1b, 0x9a),
        },
        None => DEFAULT_ICON,
    }
}

/// Derived output path: same directory, same stem, target extension.
pub fn derive_output_path(input: &Path, target: FileKind) -> PathBuf {
    input.with_extension(target.extension())
}
