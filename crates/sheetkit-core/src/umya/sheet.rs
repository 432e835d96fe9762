//! [`SheetRead`] and [`SheetWrite`] for `umya_spreadsheet::Worksheet`
//!
//! umya addresses cells as `(column, row)`; everything here flips to the
//! `(row, column)` order used by sheetkit.

use crate::{
    datetime_to_serial, CellAddress, CellRange, CellValue, Error, Result, SheetRead, SheetWrite,
    Style,
};
use umya_spreadsheet::structs::{Table, TableColumn};
use umya_spreadsheet::{CellRawValue, Worksheet};

use super::styles;

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Convert an engine cell value to a [`CellValue`]
pub(crate) fn convert_cell_value(cv: &umya_spreadsheet::CellValue) -> CellValue {
    match cv.get_raw_value() {
        CellRawValue::Numeric(n) => CellValue::Number(*n),
        CellRawValue::Bool(b) => CellValue::Boolean(*b),
        CellRawValue::String(s) => CellValue::String(s.to_string()),
        CellRawValue::RichText(rt) => CellValue::String(rt.get_text().to_string()),
        CellRawValue::Lazy(s) => {
            let txt: &str = s.as_ref();
            if let Ok(n) = txt.parse::<f64>() {
                CellValue::Number(n)
            } else if txt.eq_ignore_ascii_case("TRUE") {
                CellValue::Boolean(true)
            } else if txt.eq_ignore_ascii_case("FALSE") {
                CellValue::Boolean(false)
            } else {
                CellValue::String(txt.to_string())
            }
        }
        CellRawValue::Error(_) => CellValue::Error(cv.get_value().into_owned()),
        CellRawValue::Empty => CellValue::Empty,
    }
}

impl SheetRead for Worksheet {
    fn name(&self) -> &str {
        self.get_name()
    }

    fn value_at(&self, row: u32, col: u32) -> CellValue {
        self.get_cell((col, row))
            .map(|cell| convert_cell_value(cell.get_cell_value()))
            .unwrap_or_default()
    }

    fn text_at(&self, row: u32, col: u32) -> String {
        self.get_cell((col, row))
            .map(|cell| cell.get_value().into_owned())
            .unwrap_or_default()
    }

    fn formula_at(&self, row: u32, col: u32) -> Option<String> {
        let cv = self.get_cell((col, row))?.get_cell_value();
        if !cv.is_formula() {
            return None;
        }
        let f = cv.get_formula();
        if f.is_empty() {
            None
        } else {
            Some(f.to_string())
        }
    }

    fn dimension(&self) -> Option<CellRange> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for address in self.cell_addresses() {
            let (r, c) = (address.row, address.col);
            bounds = Some(match bounds {
                None => (r, c, r, c),
                Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
            });
        }
        bounds.map(|(r0, c0, r1, c1)| CellRange::from_indices(r0, c0, r1, c1))
    }

    fn cell_addresses(&self) -> Vec<CellAddress> {
        self.get_cell_collection()
            .into_iter()
            .map(|cell| {
                let coord = cell.get_coordinate();
                CellAddress::new(*coord.get_row_num(), *coord.get_col_num())
            })
            .collect()
    }

    fn tables(&self) -> Vec<(String, CellRange)> {
        self.get_tables()
            .iter()
            .map(|table| {
                let (start, end) = table.get_area();
                let range = CellRange::from_indices(
                    *start.get_row_num(),
                    *start.get_col_num(),
                    *end.get_row_num(),
                    *end.get_col_num(),
                );
                (table.get_name().to_string(), range)
            })
            .collect()
    }
}

impl SheetWrite for Worksheet {
    fn set_value_at(&mut self, row: u32, col: u32, value: CellValue) -> Result<()> {
        match value {
            CellValue::Empty => {
                self.get_cell_mut((col, row)).set_blank();
            }
            CellValue::Boolean(b) => {
                self.get_cell_mut((col, row)).set_value_bool(b);
            }
            CellValue::Number(n) => {
                self.get_cell_mut((col, row)).set_value_number(n);
            }
            CellValue::String(s) => {
                self.get_cell_mut((col, row)).set_value_string(s);
            }
            CellValue::Error(e) => {
                self.get_cell_mut((col, row)).set_value(e);
            }
            CellValue::DateTime(dt) => {
                self.get_cell_mut((col, row))
                    .set_value_number(datetime_to_serial(dt));
                let format = if dt.time() == chrono::NaiveTime::MIN {
                    DATE_FORMAT
                } else {
                    DATETIME_FORMAT
                };
                self.get_style_mut((col, row))
                    .get_number_format_mut()
                    .set_format_code(format);
            }
        }
        Ok(())
    }

    fn set_formula_at(&mut self, row: u32, col: u32, formula: &str) -> Result<()> {
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        if formula.is_empty() {
            return Err(Error::InvalidArgument {
                name: "formula",
                message: "empty formula".into(),
            });
        }
        self.get_cell_mut((col, row)).set_formula(formula);
        Ok(())
    }

    fn apply_style(&mut self, range: &CellRange, style: &Style) -> Result<()> {
        if style.is_empty() {
            return Ok(());
        }
        for address in range.cells() {
            styles::apply(self.get_style_mut((address.col, address.row)), style);
        }
        Ok(())
    }

    fn merge(&mut self, range: &CellRange) -> Result<()> {
        if range.start != range.end {
            self.add_merge_cells(range.to_a1_string());
        }
        Ok(())
    }

    fn insert_rows(&mut self, row: u32, count: u32) -> Result<()> {
        if row == 0 {
            return Err(Error::OutOfRange {
                name: "row",
                message: "rows are 1-based".into(),
            });
        }
        if count > 0 {
            self.insert_new_row(&row, &count);
        }
        Ok(())
    }

    fn delete_columns(&mut self, col: u32, count: u32) -> Result<()> {
        if col == 0 {
            return Err(Error::OutOfRange {
                name: "column",
                message: "columns are 1-based".into(),
            });
        }
        if count > 0 {
            self.remove_column_by_index(&col, &count);
        }
        Ok(())
    }

    fn add_table(&mut self, name: Option<&str>, range: &CellRange) -> Result<String> {
        let existing: Vec<String> = SheetRead::tables(self).into_iter().map(|(n, _)| n).collect();

        let name = match name {
            Some(name) => {
                if existing.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                    return Err(Error::document(format!("table '{}' already exists", name)));
                }
                name.to_string()
            }
            None => first_free_table_name(&existing),
        };

        let header_row = range.start.row;
        let headers: Vec<String> = (range.start.col..=range.end.col)
            .map(|col| SheetRead::text_at(self, header_row, col).trim().to_string())
            .collect();

        if headers.iter().any(|h| h.is_empty()) {
            return Err(Error::document(format!(
                "table '{}' needs a header text in every column of {}",
                name, range
            )));
        }
        for (i, header) in headers.iter().enumerate() {
            if headers[..i].iter().any(|h| h.eq_ignore_ascii_case(header)) {
                return Err(Error::document(format!(
                    "table '{}' has duplicated column '{}'",
                    name, header
                )));
            }
        }

        let start = range.start.to_a1_string();
        let end = range.end.to_a1_string();
        let mut table = Table::new(&name, (start.as_str(), end.as_str()));
        for header in &headers {
            table.add_column(TableColumn::new(header));
        }
        Worksheet::add_table(self, table);
        log::trace!("added table '{}' over {} on '{}'", name, range, self.get_name());
        Ok(name)
    }
}

/// First `Table{n}` name not present in `taken`
fn first_free_table_name(taken: &[String]) -> String {
    (1..)
        .map(|n| format!("Table{}", n))
        .find(|candidate| !taken.iter().any(|t| t.eq_ignore_ascii_case(candidate)))
        .unwrap_or_else(|| "Table".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_free_table_name() {
        assert_eq!(first_free_table_name(&[]), "Table1");
        let taken = vec!["table1".to_string(), "Table3".to_string()];
        assert_eq!(first_free_table_name(&taken), "Table2");
    }
}
