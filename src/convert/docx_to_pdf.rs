//! DOCX→PDF delegate: `docx-rust` parses the paragraphs, `printpdf` renders
//! them with a built-in font.
//!
//! Rendering is text-only: paragraph text survives, images, tables and
//! styling do not. Unlike the office-suite automation this kind of delegate
//! traditionally shells out to, it has no platform requirements.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use docx_rust::document::BodyContent;
use docx_rust::DocxFile;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::ConvertError;

// A4 text layout
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const LINE_HEIGHT_MM: f64 = 6.0;
const WRAP_COLUMNS: usize = 90;

pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let paragraphs = read_paragraphs(input)?;

    let title = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Converted document".to_owned());
    let (doc, first_page, first_layer) =
        PdfDocument::new(&title, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "text");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ConvertError::PdfRender(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;

    for paragraph in &paragraphs {
        for line in wrap_text(paragraph, WRAP_COLUMNS) {
            if cursor_y < MARGIN_MM {
                let (page, layer_idx) =
                    doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "text");
                layer = doc.get_page(page).get_layer(layer_idx);
                cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            layer.use_text(line, 11.0, Mm(MARGIN_MM as f32), Mm(cursor_y as f32), &font);
            cursor_y -= LINE_HEIGHT_MM;
        }
        // half a line of spacing between paragraphs
        cursor_y -= LINE_HEIGHT_MM / 2.0;
    }

    let file = File::create(output)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ConvertError::PdfRender(e.to_string()))?;
    Ok(())
}

fn read_paragraphs(input: &Path) -> Result<Vec<String>, ConvertError> {
    let docx_file =
        DocxFile::from_file(input).map_err(|e| ConvertError::Docx(e.to_string()))?;
    let docx = docx_file
        .parse()
        .map_err(|e| ConvertError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for content in &docx.document.body.content {
        if let BodyContent::Paragraph(paragraph) = content {
            let text: String = paragraph.iter_text().map(|t| t.as_ref()).collect();
            paragraphs.push(text);
        }
    }
    Ok(paragraphs)
}

/// Greedy word wrap; tokens longer than the column budget are hard-split.
fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > columns {
            let split_at = word
                .char_indices()
                .nth(columns)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word[..split_at].to_owned());
            word = &word[split_at..];
        }
        if word.is_empty() {
            continue;
        }

        let width = current.chars().count();
        let fits = width == 0 || width + 1 + word.chars().count() <= columns;
        if !fits {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
