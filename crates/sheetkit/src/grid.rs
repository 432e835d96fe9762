//! Detached, untyped copy of a worksheet's data region

use crate::matcher::eq_ignore_case;
use crate::worksheet::{valued_dimension, WorksheetExt};
use crate::{CellValue, SheetRead};

/// Named columns and raw values copied out of a worksheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataGrid {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataGrid {
    /// Copy the data bounds of `sheet`.
    ///
    /// With `has_header_row` the first row names the columns; a blank header,
    /// or a sheet read without headers, gets `Column<n>` instead.
    pub fn from_sheet<S: SheetRead + ?Sized>(sheet: &S, has_header_row: bool) -> Self {
        let mut grid = DataGrid {
            name: sheet.name().to_string(),
            ..Default::default()
        };

        let Some(bounds) = valued_dimension(sheet).or_else(|| sheet.dimension()) else {
            return grid;
        };

        grid.columns = (bounds.start.col..=bounds.end.col)
            .enumerate()
            .map(|(i, col)| {
                let text = if has_header_row {
                    sheet.text_at(bounds.start.row, col)
                } else {
                    String::new()
                };
                if text.trim().is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    text
                }
            })
            .collect();

        let header_only = has_header_row && bounds.start.row == bounds.end.row;
        if header_only {
            return grid;
        }

        if let Some(data) = sheet.data_bounds(has_header_row) {
            grid.rows = (data.start.row..=data.end.row)
                .map(|row| {
                    (data.start.col..=data.end.col)
                        .map(|col| sheet.value_at(row, col))
                        .collect()
                })
                .collect();
        }
        grid
    }

    /// Position of the column named `name`, ignoring case
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| eq_ignore_case(c, name))
    }

    /// Value of `column` on the 0-based data `row`
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
