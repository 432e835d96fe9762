//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value read from or written to a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - column letter conversions for the "A".."ZZ" domain

mod address;
mod value;

pub use address::{
    column_letter_to_index, index_to_column_letter, CellAddress, CellRange, MAX_LETTER_COLUMN,
};
pub use value::{datetime_to_serial, serial_to_datetime, CellValue};
