//! # sheetkit-csv
//!
//! Worksheet to CSV export for sheetkit.
//!
//! Every cell of the sheet's full dimension, from A1 to the bottom-right
//! allocated cell, becomes one double-quoted field. Rows are separated by the
//! line terminator with no terminator after the last row.

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvEncoding, CsvWriteOptions, LineTerminator};
pub use writer::{to_csv, to_csv_with, workbook_to_csv, CsvWorksheet, CsvWriter};
