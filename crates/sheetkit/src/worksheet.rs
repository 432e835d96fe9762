//! Extension traits over any worksheet
//!
//! [`WorksheetExt`] adds bounds computation, structural checks and typed
//! reading to every [`SheetRead`]. [`WorksheetWriteExt`] adds line, header,
//! object and styling helpers to every [`SheetWrite`].

use crate::config::ReadConfiguration;
use crate::descriptor::{descriptors, SheetRow};
use crate::grid::DataGrid;
use crate::matcher::eq_ignore_case;
use crate::reader::{self, Rows};
use crate::{
    format_message, CellRange, CellValue, Color, Error, HorizontalAlignment, Result, SheetRead,
    SheetWrite, Style, VerticalAlignment,
};

/// Smallest rectangle covering every cell that holds a value
pub(crate) fn valued_dimension<S: SheetRead + ?Sized>(sheet: &S) -> Option<CellRange> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for address in sheet.cell_addresses() {
        if sheet.value_at(address.row, address.col).is_empty() {
            continue;
        }
        let (r, c) = (address.row, address.col);
        bounds = Some(match bounds {
            None => (r, c, r, c),
            Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
        });
    }
    bounds.map(|(r0, c0, r1, c1)| CellRange::from_indices(r0, c0, r1, c1))
}

fn duplicated_error(column: &str, row: u32, message: Option<&str>) -> Error {
    let message = match message {
        Some(template) if !template.is_empty() => format_message(template, &[&column, &row]),
        _ => format!("'{}' column is duplicated on {}. row.", column, row),
    };
    Error::Validation {
        column: Some(column.to_string()),
        row: Some(row),
        message,
    }
}

/// Read helpers available on every worksheet
pub trait WorksheetExt: SheetRead {
    /// Rectangle over the cells that hold a value; `None` when there are none
    fn valued_dimension(&self) -> Option<CellRange> {
        valued_dimension(self)
    }

    /// Region holding data, falling back to the allocated dimension.
    ///
    /// With `has_header_row` the first row is left out, unless it is the only
    /// row.
    fn data_bounds(&self, has_header_row: bool) -> Option<CellRange> {
        let bounds = valued_dimension(self).or_else(|| self.dimension())?;
        let skip = has_header_row && bounds.start.row != bounds.end.row;
        Some(CellRange::from_indices(
            bounds.start.row + u32::from(skip),
            bounds.start.col,
            bounds.end.row,
            bounds.end.col,
        ))
    }

    /// `(column, text)` for each column of the valued dimension on `row`
    fn columns(&self, row: u32) -> Vec<(u32, String)> {
        match valued_dimension(self) {
            Some(bounds) => (bounds.start.col..=bounds.end.col)
                .map(|col| (col, self.text_at(row, col)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// More than one cell on `row` reads `text`, ignoring case
    fn is_column_duplicated_on_row(&self, row: u32, text: &str) -> bool {
        self.columns(row)
            .iter()
            .filter(|(_, value)| eq_ignore_case(value, text))
            .nth(1)
            .is_some()
    }

    /// Fail on the first header text that occurs twice on `row`.
    ///
    /// A custom `message` may use `{0}` for the column and `{1}` for the row.
    fn check_duplicated_columns(&self, row: u32, message: Option<&str>) -> Result<()> {
        for (_, text) in self.columns(row) {
            if !text.is_empty() && self.is_column_duplicated_on_row(row, &text) {
                return Err(duplicated_error(&text, row, message));
            }
        }
        Ok(())
    }

    /// Like [`check_duplicated_columns`](Self::check_duplicated_columns), for
    /// the columns mapped by `T` only
    fn check_duplicated_columns_for<T: SheetRow>(&self, row: u32, message: Option<&str>) -> Result<()> {
        for descriptor in descriptors::<T>()?.iter() {
            if self.is_column_duplicated_on_row(row, descriptor.header()) {
                return Err(duplicated_error(descriptor.header(), row, message));
            }
        }
        Ok(())
    }

    /// Fail unless the cell at (`row`, `col`) reads exactly `expected`.
    ///
    /// A custom `message` may use `{0}` for the column and `{1}` for the
    /// expected text.
    fn check_column(&self, row: u32, col: u32, expected: &str, message: Option<&str>) -> Result<()> {
        if self
            .columns(row)
            .iter()
            .any(|(c, text)| *c == col && text == expected)
        {
            return Ok(());
        }

        let message = match message {
            Some(template) if !template.is_empty() => format_message(template, &[&col, &expected]),
            _ => format!("The {}. column of worksheet should be '{}'.", col, expected),
        };
        Err(Error::Validation {
            column: Some(expected.to_string()),
            row: Some(row),
            message,
        })
    }

    /// Every required column of `T` sits at its declaration position
    fn check_headers<T: SheetRow>(&self, row: u32, message: Option<&str>) -> Result<()> {
        for (i, descriptor) in descriptors::<T>()?.iter().enumerate() {
            if descriptor.is_optional() {
                continue;
            }
            self.check_column(row, i as u32 + 1, descriptor.header(), message)?;
        }
        Ok(())
    }

    /// Every required column of `T` appears on `row`.
    ///
    /// A custom `message` may use `{0}` for the missing column.
    fn check_columns_exist<T: SheetRow>(&self, row: u32, message: Option<&str>) -> Result<()> {
        let columns = self.columns(row);
        for descriptor in descriptors::<T>()?.iter() {
            if descriptor.is_optional() {
                continue;
            }
            let header = descriptor.header();
            if !columns.iter().any(|(_, text)| text == header) {
                let template = match message {
                    Some(template) if !template.is_empty() => template,
                    _ => "'{0}' column is not found on the worksheet.",
                };
                return Err(Error::Validation {
                    column: Some(header.to_string()),
                    row: Some(row),
                    message: format_message(template, &[&header]),
                });
            }
        }
        Ok(())
    }

    fn has_any_formula(&self) -> bool {
        self.cell_addresses()
            .iter()
            .any(|a| self.formula_at(a.row, a.col).is_some_and(|f| !f.is_empty()))
    }

    fn check_no_formula(&self, message: &str) -> Result<()> {
        if self.has_any_formula() {
            return Err(Error::validation(message));
        }
        Ok(())
    }

    /// No value, or text that is only whitespace
    fn is_cell_empty(&self, row: u32, col: u32) -> bool {
        self.value_at(row, col).is_blank()
    }

    /// Copy the data region into a detached grid
    fn to_grid(&self, has_header_row: bool) -> DataGrid {
        DataGrid::from_sheet(self, has_header_row)
    }

    /// Lazily read rows as `T`, see [`Rows`]
    fn rows<T: SheetRow>(&self, config: ReadConfiguration<T>) -> Result<Rows<'_, Self, T>> {
        reader::rows(self, config)
    }

    /// [`rows`](Self::rows) with a configuration built in place
    fn rows_with<T, F>(&self, configure: F) -> Result<Rows<'_, Self, T>>
    where
        T: SheetRow,
        F: FnOnce(&mut ReadConfiguration<T>),
    {
        let mut config = ReadConfiguration::default();
        configure(&mut config);
        reader::rows(self, config)
    }

    /// Read every row as `T` with the default configuration
    fn to_list<T: SheetRow>(&self) -> Result<Vec<T>> {
        self.rows(ReadConfiguration::default())?.collect()
    }

    fn to_list_with<T, F>(&self, configure: F) -> Result<Vec<T>>
    where
        T: SheetRow,
        F: FnOnce(&mut ReadConfiguration<T>),
    {
        self.rows_with(configure)?.collect()
    }
}

impl<S: SheetRead + ?Sized> WorksheetExt for S {}

/// Write helpers available on every mutable worksheet
pub trait WorksheetWriteExt: SheetWrite {
    /// Style the cell, then set its value
    fn change_cell_value<V>(&mut self, row: u32, col: u32, value: V, style: Option<&Style>) -> Result<&mut Self>
    where
        V: Into<CellValue>,
    {
        if let Some(style) = style {
            self.apply_style(&CellRange::from_indices(row, col, row, col), style)?;
        }
        self.set_value_at(row, col, value.into())?;
        Ok(self)
    }

    /// Write `values` on `row` from `start_col` rightwards
    fn add_line<I>(&mut self, row: u32, start_col: u32, values: I, style: Option<&Style>) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        for (col, value) in (start_col..).zip(values) {
            self.change_cell_value(row, col, value, style)?;
        }
        Ok(self)
    }

    /// Insert a bold header row above the existing content
    fn add_header(&mut self, texts: &[&str], style: Option<&Style>) -> Result<&mut Self> {
        if texts.is_empty() {
            return Ok(self);
        }

        self.insert_rows(1, 1)?;
        let bold = Style::new().bold(true);
        let style = style.map_or_else(|| bold.clone(), |s| bold.merge(s));
        self.add_line(1, 1, texts.iter().copied(), Some(&style))
    }

    /// One row per item, one column per mapped property of `T`
    fn add_objects<T: SheetRow>(
        &mut self,
        items: &[T],
        start_row: u32,
        start_col: u32,
        style: Option<&Style>,
    ) -> Result<&mut Self> {
        let descriptors = descriptors::<T>()?;
        for (row, item) in (start_row..).zip(items) {
            self.add_line(row, start_col, descriptors.iter().map(|d| d.value_of(item)), style)?;
        }
        Ok(self)
    }

    /// One row per item, one column per selector
    fn add_objects_with<T>(
        &mut self,
        items: &[T],
        start_row: u32,
        start_col: u32,
        selectors: &[&dyn Fn(&T) -> CellValue],
        style: Option<&Style>,
    ) -> Result<&mut Self> {
        if selectors.is_empty() {
            return Err(Error::InvalidArgument {
                name: "selectors",
                message: "at least one selector is required".into(),
            });
        }
        for (row, item) in (start_row..).zip(items) {
            self.add_line(row, start_col, selectors.iter().map(|select| select(item)), style)?;
        }
        Ok(self)
    }

    /// Delete the first column whose header reads `header`, ignoring case
    fn delete_column(&mut self, header: &str) -> Result<&mut Self> {
        let Some(bounds) = valued_dimension(self) else {
            return Ok(self);
        };
        let row = bounds.start.row;
        let found = (bounds.start.col..=bounds.end.col)
            .find(|&col| eq_ignore_case(&self.text_at(row, col), header));
        if let Some(col) = found {
            log::trace!("deleting column {} ('{}') of sheet '{}'", col, header, self.name());
            self.delete_columns(col, 1)?;
        }
        Ok(self)
    }

    /// Delete every column whose header reads `header`, ignoring case
    fn delete_columns_named(&mut self, header: &str) -> Result<&mut Self> {
        let count = match valued_dimension(self) {
            Some(bounds) => (bounds.start.col..=bounds.end.col)
                .filter(|&col| eq_ignore_case(&self.text_at(bounds.start.row, col), header))
                .count(),
            None => 0,
        };
        for _ in 0..count {
            self.delete_column(header)?;
        }
        Ok(self)
    }

    /// Table over the used area, reusing one that already ends where the data ends
    fn as_table(&mut self) -> Result<String> {
        as_table(self, None)
    }

    fn as_table_named(&mut self, name: &str) -> Result<String> {
        as_table(self, Some(name))
    }

    /// Font color over `range`, or over the used area when `None`
    fn set_font_color(&mut self, color: Color, range: Option<&CellRange>) -> Result<&mut Self> {
        style_area(self, range, &Style::new().font_color(color))
    }

    fn set_background_color(&mut self, color: Color, range: Option<&CellRange>) -> Result<&mut Self> {
        style_area(self, range, &Style::new().fill_color(color))
    }

    fn set_horizontal_alignment(
        &mut self,
        alignment: HorizontalAlignment,
        range: Option<&CellRange>,
    ) -> Result<&mut Self> {
        style_area(self, range, &Style::new().horizontal_alignment(alignment))
    }

    fn set_vertical_alignment(
        &mut self,
        alignment: VerticalAlignment,
        range: Option<&CellRange>,
    ) -> Result<&mut Self> {
        style_area(self, range, &Style::new().vertical_alignment(alignment))
    }
}

impl<S: SheetWrite + ?Sized> WorksheetWriteExt for S {}

fn as_table<S: SheetWrite + ?Sized>(sheet: &mut S, name: Option<&str>) -> Result<String> {
    let bounds = sheet.data_bounds(false);

    if let Some(bounds) = &bounds {
        let existing = sheet
            .tables()
            .into_iter()
            .find(|(_, area)| area.end == bounds.end);
        if let Some((existing, _)) = existing {
            return Ok(existing);
        }
    }

    let range = bounds.unwrap_or_else(|| CellRange::from_indices(1, 1, 1, 1));
    sheet.add_table(name, &range)
}

fn style_area<'a, S: SheetWrite + ?Sized>(
    sheet: &'a mut S,
    range: Option<&CellRange>,
    style: &Style,
) -> Result<&'a mut S> {
    let area = match range {
        Some(range) => Some(*range),
        None => sheet.dimension(),
    };
    if let Some(area) = area {
        sheet.apply_style(&area, style)?;
    }
    Ok(sheet)
}
