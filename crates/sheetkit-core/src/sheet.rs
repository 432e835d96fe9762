//! Document operations consumed by the mapping, export and builder layers
//!
//! The traits here are the whole surface sheetkit needs from a spreadsheet
//! engine. Rows and columns are 1-based everywhere. [`SheetRead`] and
//! [`SheetWrite`] are object safe so heterogeneous render plans can hold
//! `&mut dyn SheetWrite`.

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::error::Result;
use crate::style::Style;

/// Read access to one worksheet
pub trait SheetRead {
    /// Worksheet name
    fn name(&self) -> &str;

    /// Raw value at (row, col); [`CellValue::Empty`] when nothing is set
    fn value_at(&self, row: u32, col: u32) -> CellValue;

    /// Displayed text at (row, col)
    fn text_at(&self, row: u32, col: u32) -> String {
        self.value_at(row, col).to_string()
    }

    /// Formula text at (row, col), if the cell holds one
    fn formula_at(&self, row: u32, col: u32) -> Option<String>;

    /// Rectangle covering every allocated cell, including ones without a value.
    /// `None` for a sheet with no cells at all.
    fn dimension(&self) -> Option<CellRange>;

    /// Addresses of all allocated cells
    fn cell_addresses(&self) -> Vec<CellAddress> {
        self.dimension()
            .map(|range| range.cells().collect())
            .unwrap_or_default()
    }

    /// Tables defined on the sheet, with their areas
    fn tables(&self) -> Vec<(String, CellRange)>;
}

/// Mutation of one worksheet
pub trait SheetWrite: SheetRead {
    /// Set the value at (row, col); [`CellValue::Empty`] blanks the cell
    fn set_value_at(&mut self, row: u32, col: u32, value: CellValue) -> Result<()>;

    /// Store a formula at (row, col)
    fn set_formula_at(&mut self, row: u32, col: u32, formula: &str) -> Result<()>;

    /// Apply the fields set in `style` to every cell of `range`
    fn apply_style(&mut self, range: &CellRange, style: &Style) -> Result<()>;

    /// Merge the cells of `range`
    fn merge(&mut self, range: &CellRange) -> Result<()>;

    /// Insert `count` empty rows before `row`, shifting the rest down
    fn insert_rows(&mut self, row: u32, count: u32) -> Result<()>;

    /// Delete `count` columns starting at `col`, shifting the rest left
    fn delete_columns(&mut self, col: u32, count: u32) -> Result<()>;

    /// Define a table over `range`, whose first row holds the column names.
    /// Returns the table name actually used.
    fn add_table(&mut self, name: Option<&str>, range: &CellRange) -> Result<String>;
}

/// Read access to a workbook
pub trait WorkbookRead {
    type Sheet: SheetRead;

    fn sheet_count(&self) -> usize;

    /// Sheet by 0-based position
    fn sheet(&self, index: usize) -> Option<&Self::Sheet>;

    fn sheet_by_name(&self, name: &str) -> Option<&Self::Sheet>;

    /// All sheets in workbook order
    fn sheets(&self) -> Vec<&Self::Sheet> {
        (0..self.sheet_count())
            .filter_map(|i| self.sheet(i))
            .collect()
    }
}

/// Sheet creation and mutable lookup on a workbook
pub trait WorkbookWrite {
    type SheetMut: SheetWrite;

    /// Append a new, empty sheet
    fn add_worksheet(&mut self, name: &str) -> Result<&mut Self::SheetMut>;

    fn sheet_by_name_mut(&mut self, name: &str) -> Option<&mut Self::SheetMut>;
}
