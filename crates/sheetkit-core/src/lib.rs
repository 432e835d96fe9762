//! # sheetkit-core
//!
//! Core data structures for the sheetkit spreadsheet extensions.
//!
//! This crate owns no document storage. It describes what the mapping and
//! export layers need from a spreadsheet engine:
//! - [`CellValue`] - Cell values (numbers, strings, booleans, errors, dates)
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`column_letter_to_index`] and [`index_to_column_letter`] - column letter arithmetic
//! - [`Style`] - Cell formatting patches (font, fill, alignment, number format)
//! - [`SheetRead`], [`SheetWrite`], [`WorkbookRead`], [`WorkbookWrite`] - the
//!   document operations an engine adapter implements
//!
//! With the `umya` feature the document traits are implemented for
//! `umya_spreadsheet::{Spreadsheet, Worksheet}`.
//!
//! ## Example
//!
//! ```rust
//! use sheetkit_core::{column_letter_to_index, index_to_column_letter, CellRange};
//!
//! assert_eq!(column_letter_to_index("AG").unwrap(), 33);
//! assert_eq!(index_to_column_letter(702).unwrap(), "ZZ");
//!
//! let range = CellRange::parse("A1:C4").unwrap();
//! assert_eq!(range.row_count(), 4);
//! ```

pub mod cell;
pub mod error;
pub mod sheet;
pub mod style;
#[cfg(feature = "umya")]
pub mod umya;

// Re-exports for convenience
pub use cell::{
    column_letter_to_index, datetime_to_serial, index_to_column_letter, serial_to_datetime,
    CellAddress, CellRange, CellValue, MAX_LETTER_COLUMN,
};
pub use error::{format_message, Error, Result};
pub use sheet::{SheetRead, SheetWrite, WorkbookRead, WorkbookWrite};
pub use style::{Alignment, Color, FontStyle, HorizontalAlignment, Style, VerticalAlignment};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
