//! # sheetkit-umya
//!
//! File access for sheetkit workbooks backed by
//! [`umya-spreadsheet`](umya_spreadsheet), which owns reading, writing and
//! styling of the workbook format. The document traits for the engine types
//! come from the `umya` feature of `sheetkit-core`.
//!
//! ```rust,no_run
//! use sheetkit_core::{SheetRead, WorkbookRead};
//!
//! let value = sheetkit_umya::with_workbook("stocks.xlsx", |book| {
//!     let sheet = book.sheet(0).ok_or_else(|| sheetkit_core::Error::SheetNotFound("0".into()))?;
//!     Ok(sheet.text_at(1, 1))
//! })?;
//! # Ok::<(), sheetkit_core::Error>(())
//! ```

use sheetkit_core::{Error, Result};
use std::io::Cursor;
use std::path::Path;
use umya_spreadsheet::{reader, writer, Spreadsheet, XlsxError};

pub use umya_spreadsheet;
pub use umya_spreadsheet::{Spreadsheet as Workbook, Worksheet};

/// Create a workbook without any worksheet
pub fn new_workbook() -> Spreadsheet {
    umya_spreadsheet::new_file_empty_worksheet()
}

/// Read a workbook from an xlsx file
pub fn open<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
    let path = path.as_ref();
    log::debug!("opening workbook {}", path.display());
    reader::xlsx::read(path).map_err(engine_error)
}

/// Write a workbook to an xlsx file
pub fn save<P: AsRef<Path>>(book: &Spreadsheet, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving workbook {}", path.display());
    writer::xlsx::write(book, path).map_err(engine_error)
}

/// Serialize a workbook to xlsx bytes
pub fn to_bytes(book: &Spreadsheet) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    writer::xlsx::write_writer(book, &mut buf).map_err(engine_error)?;
    Ok(buf.into_inner())
}

/// Open `path`, run `f` against the workbook and drop it on every exit path
pub fn with_workbook<P, F, R>(path: P, f: F) -> Result<R>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Spreadsheet) -> Result<R>,
{
    let mut book = open(path)?;
    f(&mut book)
}

fn engine_error(err: XlsxError) -> Error {
    match err {
        XlsxError::Io(e) => Error::Io(e),
        other => Error::document(other),
    }
}
