//! Document traits implemented for `umya-spreadsheet` workbooks
//!
//! Enabled by the `umya` feature. Opening and saving files lives in the
//! `sheetkit-umya` crate.

mod book;
mod sheet;
mod styles;
