//! Prelude module - common imports for sheetkit users
//!
//! ```rust
//! use sheetkit::prelude::*;
//! ```

pub use crate::{
    // Cell and style types
    CellAddress,
    CellRange,
    CellType,
    CellValue,
    Color,

    // Mapping
    Column,
    ColumnSet,
    CreateConfiguration,
    ReadConfiguration,
    Rule,
    SheetRow,

    // Error types
    Error,
    Result,

    HorizontalAlignment,
    Style,
    VerticalAlignment,

    // Document traits
    SheetRead,
    SheetWrite,
    WorkbookRead,
    WorkbookWrite,

    // Extension traits
    WorkbookExt,
    WorksheetExt,
    WorksheetWriteExt,

    // Builders and export
    to_csv,
    to_worksheet,
    TemplateRegistry,
    Workbook,
    Worksheet,
};
