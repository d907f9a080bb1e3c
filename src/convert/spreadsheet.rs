//! XLSX↔CSV delegates: `calamine` reads workbooks, `rust_xlsxwriter` writes
//! them, the `csv` crate handles both CSV directions.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use super::ConvertError;

/// First worksheet → CSV rows, no index column. Rows pass through uniformly;
/// header rows are not special-cased.
pub fn xlsx_to_csv(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let mut workbook: Xlsx<_> = open_workbook(input)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::NoWorksheet(input.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut writer = csv::Writer::from_path(output)?;
    for row in range.rows() {
        let record: Vec<String> = row.iter().map(cell_to_field).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV records → one worksheet. Numeric-looking fields become number cells
/// so spreadsheet applications treat them as values, not text.
pub fn csv_to_xlsx(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        for (col_idx, field) in record.iter().enumerate() {
            let row = row_idx as u32;
            let col = col_idx as u16;
            match parse_number(field) {
                Some(value) => sheet.write_number(row, col, value)?,
                None => sheet.write_string(row, col, field)?,
            };
        }
    }

    workbook.save(output)?;
    Ok(())
}

fn cell_to_field(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// A field counts as numeric iff it parses as a finite `f64`; "NaN" and
/// "inf" stay strings.
fn parse_number(field: &str) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_number_accepts_plain_numerics_only() {
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number("3.5"), Some(3.5));
        assert_eq!(parse_number("-0.25"), Some(-0.25));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("widget"), None);
        assert_eq!(parse_number("NaN"), None, "NaN must stay a string cell");
        assert_eq!(parse_number("inf"), None, "inf must stay a string cell");
    }

    #[test]
    fn test_xlsx_to_csv_preserves_values_and_order() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let xlsx = dir.path().join("table.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "city").expect("write should succeed");
        sheet.write_string(0, 1, "population").expect("write should succeed");
        sheet.write_string(1, 0, "Oslo").expect("write should succeed");
        sheet.write_number(1, 1, 709037.0).expect("write should succeed");
        workbook.save(&xlsx).expect("fixture workbook should save");

        let csv_path = dir.path().join("table.csv");
        xlsx_to_csv(&xlsx, &csv_path).expect("xlsx -> csv should succeed");

        let text = fs::read_to_string(&csv_path).expect("csv should be readable");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "city,population");
        assert_eq!(lines[1], "Oslo,709037");
    }

    #[test]
    fn test_csv_to_xlsx_writes_numbers_as_numbers() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let csv_path = dir.path().join("data.csv");
        fs::write(&csv_path, "label,value\nalpha,1.5\n").expect("fixture write should succeed");

        let xlsx = dir.path().join("data.xlsx");
        csv_to_xlsx(&csv_path, &xlsx).expect("csv -> xlsx should succeed");

        let mut workbook: Xlsx<_> = open_workbook(&xlsx).expect("output should reopen");
        let sheet = workbook.sheet_names().first().cloned().expect("one sheet expected");
        let range = workbook.worksheet_range(&sheet).expect("range should load");
        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

        assert_eq!(rows[0][0], Data::String("label".to_owned()));
        assert_eq!(rows[1][1], Data::Float(1.5), "numeric field should be a number cell");
    }

    #[test]
    fn test_empty_workbook_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let xlsx = dir.path().join("none.xlsx");
        fs::write(&xlsx, b"not a workbook").expect("fixture write should succeed");

        let result = xlsx_to_csv(&xlsx, &dir.path().join("none.csv"));
        assert!(result.is_err(), "garbage input must be rejected");
    }
}
