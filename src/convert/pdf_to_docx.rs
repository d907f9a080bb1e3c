//! PDF→DOCX delegate: `pdf-extract` pulls the full document text,
//! `docx-rust` writes it back out paragraph by paragraph.

use std::path::Path;

use docx_rust::document::Paragraph;
use docx_rust::Docx;

use super::ConvertError;

/// Convert the whole document, first page to last.
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let text = pdf_extract::extract_text(input)?;

    let mut docx = Docx::default();
    for paragraph in split_paragraphs(&text) {
        docx.document.push(Paragraph::default().push_text(paragraph));
    }
    docx.write_file(output)
        .map_err(|e| ConvertError::Docx(e.to_string()))?;
    Ok(())
}

/// Collapse the extractor's line breaks into paragraphs: blank lines end a
/// paragraph, single newlines continue one. An empty document still yields
/// one (empty) paragraph so the DOCX has a body.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    if paragraphs.is_empty() {
        paragraphs.push(String::new());
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{BuiltinFont, Mm, PdfDocument};
    use std::fs::File;
    use std::io::BufWriter;

    #[test]
    fn test_split_paragraphs_joins_wrapped_lines() {
        let text = "first line\nstill first\n\nsecond paragraph\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["first line still first".to_owned(), "second paragraph".to_owned()]
        );
    }

    #[test]
    fn test_split_paragraphs_collapses_blank_runs() {
        let text = "alpha\n\n\n\nbeta";
        assert_eq!(split_paragraphs(text), vec!["alpha".to_owned(), "beta".to_owned()]);
    }

    #[test]
    fn test_split_paragraphs_on_empty_input() {
        assert_eq!(
            split_paragraphs(""),
            vec![String::new()],
            "an empty document still needs one paragraph"
        );
    }

    #[test]
    fn test_pdf_converts_to_parseable_docx() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let pdf_path = dir.path().join("page.pdf");

        let (doc, page, layer) =
            PdfDocument::new("page", Mm(210.0), Mm(297.0), "text");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .expect("builtin font should load");
        doc.get_page(page)
            .get_layer(layer)
            .use_text("alpha beta gamma", 12.0, Mm(20.0), Mm(270.0), &font);
        let file = File::create(&pdf_path).expect("fixture pdf should be creatable");
        doc.save(&mut BufWriter::new(file)).expect("fixture pdf should save");

        let docx_path = dir.path().join("page.docx");
        convert(&pdf_path, &docx_path).expect("pdf -> docx should succeed");

        let parsed = docx_rust::DocxFile::from_file(&docx_path)
            .expect("output should open as docx");
        parsed.parse().expect("output should parse as docx");
    }
}
