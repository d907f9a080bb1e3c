//! Conversion delegates and the dispatcher that runs them.
//!
//! Each delegate is a thin call into an external crate; the only logic here
//! is routing a [`FileKind`] to its delegate and staging the output so a
//! failed conversion never leaves a half-written file behind.

use std::path::Path;

use thiserror::Error;

use crate::model::formats::FileKind;
use crate::utils::fs::staging_file_for;

pub mod docx_to_pdf;
pub mod pdf_to_docx;
pub mod spreadsheet;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF text extraction failed: {0}")]
    PdfExtract(#[from] pdf_extract::OutputError),
    #[error("PDF rendering failed: {0}")]
    PdfRender(String),
    #[error("DOCX processing failed: {0}")]
    Docx(String),
    #[error("workbook read failed: {0}")]
    SheetRead(#[from] calamine::XlsxError),
    #[error("workbook write failed: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0} contains no worksheets")]
    NoWorksheet(String),
    #[error("could not finalize output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Run the delegate for `kind` on `input`, writing `output`.
///
/// The delegate writes into a temp file beside the destination; the result
/// is renamed into place only after the delegate returns success. On any
/// error the temp file is dropped and `output` is left untouched.
pub fn run(kind: FileKind, input: &Path, output: &Path) -> Result<(), ConvertError> {
    let staging = staging_file_for(output)?;
    let staged = staging.path().to_path_buf();

    match kind {
        FileKind::Pdf => pdf_to_docx::convert(input, &staged)?,
        FileKind::Docx => docx_to_pdf::convert(input, &staged)?,
        FileKind::Xlsx => spreadsheet::xlsx_to_csv(input, &staged)?,
        FileKind::Csv => spreadsheet::csv_to_xlsx(input, &staged)?,
    }

    staging.persist(output)?;
    Ok(())
}
