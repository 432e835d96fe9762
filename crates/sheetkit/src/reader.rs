//! Materializing worksheet rows into typed objects

use std::fmt;

use crate::config::ReadConfiguration;
use crate::descriptor::{descriptors, ColumnKey, Descriptors, SheetRow};
use crate::matcher::match_columns;
use crate::worksheet::valued_dimension;
use crate::{Error, Result, SheetRead};

/// Lazy sequence of objects read from a worksheet
///
/// Created by [`WorksheetExt::rows`](crate::WorksheetExt::rows). Column
/// resolution happens up front, so a missing required column fails before
/// the iterator exists. Row errors are yielded once; the iterator is fused
/// after the first one.
pub struct Rows<'s, S: ?Sized, T> {
    sheet: &'s S,
    descriptors: Descriptors<T>,
    positions: Vec<Option<u32>>,
    last_col: u32,
    first_row: u32,
    next_row: u32,
    end_row: u32,
    config: ReadConfiguration<T>,
    failed: bool,
}

/// Resolve `T`'s columns against `sheet` and prepare a row iterator
pub(crate) fn rows<'s, S, T>(sheet: &'s S, config: ReadConfiguration<T>) -> Result<Rows<'s, S, T>>
where
    S: SheetRead + ?Sized,
    T: SheetRow,
{
    let descriptors = descriptors::<T>()?;

    let Some(bounds) = valued_dimension(sheet) else {
        log::debug!("sheet '{}' has no values, nothing to read", sheet.name());
        return Ok(Rows::empty(sheet, descriptors, config));
    };

    let header_row = config.has_header_row().then_some(bounds.start.row);
    let positions = match_columns(sheet, header_row, &bounds, &descriptors)?;
    let first_row = match header_row {
        Some(row) => row + 1,
        None => bounds.start.row,
    };

    log::debug!(
        "reading rows {}..={} of sheet '{}' into {}",
        first_row,
        bounds.end.row,
        sheet.name(),
        std::any::type_name::<T>()
    );

    Ok(Rows {
        sheet,
        descriptors,
        positions,
        last_col: bounds.end.col,
        first_row,
        next_row: first_row,
        end_row: bounds.end.row,
        config,
        failed: false,
    })
}

impl<'s, S: SheetRead + ?Sized, T: SheetRow> Rows<'s, S, T> {
    fn empty(sheet: &'s S, descriptors: Descriptors<T>, config: ReadConfiguration<T>) -> Self {
        Rows {
            sheet,
            descriptors,
            positions: Vec::new(),
            last_col: 0,
            first_row: 1,
            next_row: 1,
            end_row: 0,
            config,
            failed: false,
        }
    }

    fn read_row(&self, row: u32) -> Result<T> {
        let mut item = T::default();

        for (descriptor, position) in self.descriptors.iter().zip(&self.positions) {
            let Some(col) = *position else { continue };
            if col > self.last_col {
                let index = match descriptor.key() {
                    ColumnKey::Index(index) => *index,
                    ColumnKey::Name(_) => col,
                };
                return Err(Error::Casting {
                    column: descriptor.header().to_string(),
                    row,
                    message: format!("column {} is outside the data bounds", index),
                });
            }

            let value = self.sheet.value_at(row, col);
            descriptor
                .read_into(&mut item, &value)
                .map_err(|message| Error::Casting {
                    column: descriptor.header().to_string(),
                    row,
                    message,
                })?;
        }

        for (descriptor, position) in self.descriptors.iter().zip(&self.positions) {
            if position.is_none() {
                continue;
            }
            if let Some(message) = descriptor.validate(&item) {
                return Err(Error::Validation {
                    column: Some(descriptor.header().to_string()),
                    row: Some(row),
                    message,
                });
            }
        }

        Ok(item)
    }

    fn skips(&self, err: &Error) -> bool {
        match err {
            Error::Casting { .. } => self.config.skips_casting_errors(),
            Error::Validation { .. } => self.config.skips_validation_errors(),
            _ => false,
        }
    }
}

impl<S: SheetRead + ?Sized, T: SheetRow> Iterator for Rows<'_, S, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && self.next_row <= self.end_row {
            let row = self.next_row;
            self.next_row += 1;

            match self.read_row(row) {
                Ok(mut item) => {
                    let offset = (row - self.first_row) as usize;
                    self.config.run_interceptor(&mut item, offset);
                    return Some(Ok(item));
                }
                Err(err) if self.skips(&err) => {
                    log::debug!("skipping row {}: {}", row, err);
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed || self.next_row > self.end_row {
            return (0, Some(0));
        }
        (0, Some((self.end_row - self.next_row + 1) as usize))
    }
}

impl<S: ?Sized, T> fmt::Debug for Rows<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("positions", &self.positions)
            .field("next_row", &self.next_row)
            .field("end_row", &self.end_row)
            .field("failed", &self.failed)
            .finish()
    }
}

impl<S: SheetRead + ?Sized, T: SheetRow> std::iter::FusedIterator for Rows<'_, S, T> {}
