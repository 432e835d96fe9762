//! Binding column descriptors to positions in one worksheet

use crate::descriptor::{ColumnDescriptor, ColumnKey};
use crate::{CellRange, Error, Result, SheetRead};

/// Case-insensitive exact comparison of header texts
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Resolve each descriptor to an absolute 1-based column, or `None` when an
/// optional column is absent.
///
/// `header_row` is the row holding column names; without it, name-keyed
/// descriptors take their declaration position. Index-keyed descriptors are
/// relative to the first column of `bounds` and are not checked here: an
/// index past the bounds fails when a row is read.
pub fn match_columns<S, T>(
    sheet: &S,
    header_row: Option<u32>,
    bounds: &CellRange,
    descriptors: &[ColumnDescriptor<T>],
) -> Result<Vec<Option<u32>>>
where
    S: SheetRead + ?Sized,
{
    let first_col = bounds.start.col;
    let headers: Vec<(u32, String)> = match header_row {
        Some(row) => (first_col..=bounds.end.col)
            .map(|col| (col, sheet.text_at(row, col)))
            .filter(|(_, text)| !text.is_empty())
            .collect(),
        None => Vec::new(),
    };

    descriptors
        .iter()
        .enumerate()
        .map(|(ordinal, descriptor)| {
            let position = match descriptor.key() {
                ColumnKey::Index(index) => {
                    let col = first_col.saturating_add(index - 1);
                    if descriptor.is_optional() && col > bounds.end.col {
                        None
                    } else {
                        Some(col)
                    }
                }
                ColumnKey::Name(_) if header_row.is_none() => Some(first_col + ordinal as u32),
                ColumnKey::Name(name) => {
                    let found = headers
                        .iter()
                        .find(|(_, text)| eq_ignore_case(text, name))
                        .map(|(col, _)| *col);
                    match found {
                        Some(col) => Some(col),
                        None if descriptor.is_optional() => None,
                        None => {
                            return Err(Error::ColumnNotFound {
                                column: name.clone(),
                            })
                        }
                    }
                }
            };
            Ok(position)
        })
        .collect()
}
