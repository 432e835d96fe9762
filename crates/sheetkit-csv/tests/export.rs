//! CSV export of umya-spreadsheet worksheets.

use pretty_assertions::assert_eq;
use sheetkit_core::{CellValue, SheetWrite, WorkbookRead, WorkbookWrite};
use sheetkit_csv::{
    to_csv, to_csv_with, workbook_to_csv, CsvEncoding, CsvWriteOptions, CsvWriter, LineTerminator,
};

fn book_with(rows: &[&[&str]]) -> sheetkit_umya::Workbook {
    let mut book = sheetkit_umya::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if !text.is_empty() {
                sheet
                    .set_value_at(r as u32 + 1, c as u32 + 1, CellValue::string(*text))
                    .unwrap();
            }
        }
    }
    book
}

#[test]
fn test_rows_and_columns() {
    let book = book_with(&[&["Barcode", "Quantity"], &["123", "10"], &["456", "20"]]);
    let export = to_csv(book.sheet(0).unwrap()).unwrap();

    assert_eq!(export.name, "Data");
    assert_eq!(
        export.text(),
        "\"Barcode\",\"Quantity\"\n\"123\",\"10\"\n\"456\",\"20\""
    );
    assert_eq!(export.text().lines().count(), 3);
}

#[test]
fn test_missing_cells_render_as_empty_fields() {
    let book = book_with(&[&["a", "", "c"], &["", "", ""], &["", "", "z"]]);
    let export = to_csv(book.sheet(0).unwrap()).unwrap();

    assert_eq!(
        export.text(),
        "\"a\",\"\",\"c\"\n\"\",\"\",\"\"\n\"\",\"\",\"z\""
    );
}

#[test]
fn test_numbers_use_cell_text() {
    let mut book = sheetkit_umya::new_workbook();
    let sheet = book.add_worksheet("Numbers").unwrap();
    sheet.set_value_at(1, 1, CellValue::Number(42.0)).unwrap();
    sheet.set_value_at(1, 2, CellValue::Number(1.5)).unwrap();

    let export = to_csv(book.sheet(0).unwrap()).unwrap();
    assert_eq!(export.text(), "\"42\",\"1.5\"");
}

#[test]
fn test_ascii_replacement() {
    let book = book_with(&[&["Straße", "ok"]]);
    let ascii = to_csv(book.sheet(0).unwrap()).unwrap();
    assert_eq!(ascii.csv, b"\"Stra?e\",\"ok\"".to_vec());

    let options = CsvWriteOptions {
        encoding: CsvEncoding::Utf8,
        ..Default::default()
    };
    let utf8 = to_csv_with(book.sheet(0).unwrap(), &options).unwrap();
    assert_eq!(utf8.text(), "\"Straße\",\"ok\"");
}

#[test]
fn test_crlf_and_delimiter() {
    let book = book_with(&[&["a", "b"], &["c", "d"]]);
    let options = CsvWriteOptions {
        delimiter: b';',
        line_terminator: LineTerminator::CRLF,
        ..Default::default()
    };

    let mut out = Vec::new();
    CsvWriter::write(book.sheet(0).unwrap(), &mut out, &options).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\"a\";\"b\"\r\n\"c\";\"d\"");
}

#[test]
fn test_empty_sheet() {
    let mut book = sheetkit_umya::new_workbook();
    book.add_worksheet("Empty").unwrap();
    let export = to_csv(book.sheet(0).unwrap()).unwrap();
    assert!(export.csv.is_empty());
}

#[test]
fn test_workbook_export() {
    let mut book = book_with(&[&["x"]]);
    book.add_worksheet("Other")
        .unwrap()
        .set_value_at(2, 2, CellValue::string("y"))
        .unwrap();

    let exports = workbook_to_csv(&book).unwrap();
    let names: Vec<_> = exports.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Data", "Other"]);
    // Dimension always starts at A1
    assert_eq!(exports[1].text(), "\"\",\"\"\n\"\",\"y\"");
}
