//! # sheetkit
//!
//! Typed object mapping, structural checks, fluent worksheet building and
//! CSV export for spreadsheets handled by `umya-spreadsheet`.
//!
//! ## Features
//!
//! - Read worksheet rows into structs declared with [`SheetRow`]
//! - Case-insensitive header matching, optional columns and fixed positions
//! - Per-row casting and validation policies with row interceptors
//! - Duplicate, existence and expected-header checks
//! - Fluent multi-sheet builder with titles, headers, tables and styles
//! - Header-only templates generated from row types
//! - CSV export of a sheet or a whole workbook
//!
//! ## Example
//!
//! ```rust
//! use sheetkit::prelude::*;
//! use sheetkit::column;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Stock {
//!     barcode: String,
//!     quantity: i32,
//! }
//!
//! impl SheetRow for Stock {
//!     fn columns(cols: &mut ColumnSet<Self>) {
//!         cols.push(column!(Stock, barcode).named("Barcode"))
//!             .push(column!(Stock, quantity).named("Quantity"));
//!     }
//! }
//!
//! let book = to_worksheet(vec![Stock { barcode: "123".into(), quantity: 4 }], "Stocks").build()?;
//! let stocks: Vec<Stock> = book.worksheet("Stocks")?.to_list()?;
//! assert_eq!(stocks, vec![Stock { barcode: "123".into(), quantity: 4 }]);
//! # Ok::<(), sheetkit::Error>(())
//! ```

pub mod builder;
pub mod coerce;
pub mod config;
pub mod descriptor;
pub mod grid;
pub mod matcher;
pub mod prelude;
pub mod reader;
pub mod template;
pub mod validate;
pub mod workbook;
pub mod worksheet;

pub use builder::{to_worksheet, WorksheetBuilder};
pub use coerce::{CellType, Measure};
pub use config::{CreateConfiguration, ReadConfiguration};
pub use descriptor::{descriptors, worksheet_name, Column, ColumnDescriptor, ColumnKey, ColumnSet, Descriptors, SheetRow};
pub use grid::DataGrid;
pub use reader::Rows;
pub use template::{generate_worksheet, TemplateRegistry};
pub use validate::Rule;
pub use workbook::{read_list, WorkbookExt};
pub use worksheet::{WorksheetExt, WorksheetWriteExt};

// Re-export core types
pub use sheetkit_core::{
    column_letter_to_index, format_message, index_to_column_letter, Alignment, CellAddress,
    CellRange, CellValue, Color, Error, FontStyle, HorizontalAlignment, Result, SheetRead,
    SheetWrite, Style, VerticalAlignment, WorkbookRead, WorkbookWrite, MAX_COLS,
    MAX_LETTER_COLUMN, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export the engine adapter
pub use sheetkit_umya::{new_workbook, open, save, to_bytes, with_workbook, Workbook, Worksheet};

// Re-export CSV export
pub use sheetkit_csv::{
    to_csv, to_csv_with, workbook_to_csv, CsvEncoding, CsvError, CsvWorksheet, CsvWriteOptions,
    CsvWriter, LineTerminator,
};
