//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvEncoding, CsvWriteOptions, LineTerminator};
use sheetkit_core::{SheetRead, WorkbookRead};

/// A worksheet exported to CSV: its name and the encoded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWorksheet {
    pub name: String,
    pub csv: Vec<u8>,
}

impl CsvWorksheet {
    /// The exported bytes as text (lossy for non UTF-8 content)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.csv).into_owned()
    }
}

/// Export a worksheet with the default options
pub fn to_csv<S: SheetRead + ?Sized>(sheet: &S) -> CsvResult<CsvWorksheet> {
    to_csv_with(sheet, &CsvWriteOptions::default())
}

/// Export a worksheet
pub fn to_csv_with<S: SheetRead + ?Sized>(
    sheet: &S,
    options: &CsvWriteOptions,
) -> CsvResult<CsvWorksheet> {
    Ok(CsvWorksheet {
        name: sheet.name().to_string(),
        csv: CsvWriter::to_bytes(sheet, options)?,
    })
}

/// Export every worksheet of a workbook, in workbook order
pub fn workbook_to_csv<B: WorkbookRead>(book: &B) -> CsvResult<Vec<CsvWorksheet>> {
    book.sheets().into_iter().map(|sheet| to_csv(sheet)).collect()
}

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<S: SheetRead + ?Sized, P: AsRef<Path>>(
        worksheet: &S,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    pub fn write<S: SheetRead + ?Sized, W: Write>(
        worksheet: &S,
        mut writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        writer.write_all(&Self::to_bytes(worksheet, options)?)?;
        writer.flush()?;
        Ok(())
    }

    /// Render a worksheet to encoded CSV bytes
    pub fn to_bytes<S: SheetRead + ?Sized>(
        worksheet: &S,
        options: &CsvWriteOptions,
    ) -> CsvResult<Vec<u8>> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(terminator)
            .flexible(false)
            .from_writer(Vec::new());

        if let Some(range) = worksheet.dimension() {
            let mut record = Vec::with_capacity(range.end.col as usize);
            for row in 1..=range.end.row {
                record.clear();
                for col in 1..=range.end.col {
                    let text = worksheet.text_at(row, col);
                    record.push(encode(text, options.encoding));
                }
                csv_writer.write_record(&record)?;
            }
        }

        let mut bytes = csv_writer.into_inner()?;
        let last = options.line_terminator.as_bytes();
        if bytes.ends_with(last) {
            bytes.truncate(bytes.len() - last.len());
        }
        Ok(bytes)
    }
}

fn encode(text: String, encoding: CsvEncoding) -> String {
    match encoding {
        CsvEncoding::Utf8 => text,
        CsvEncoding::Ascii if text.is_ascii() => text,
        CsvEncoding::Ascii => text
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect(),
    }
}
