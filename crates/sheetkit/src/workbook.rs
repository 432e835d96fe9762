//! Workbook level lookups and file helpers

use std::path::Path;

use crate::config::ReadConfiguration;
use crate::descriptor::SheetRow;
use crate::worksheet::WorksheetExt;
use crate::{Error, Result, WorkbookRead};

/// Lookups that fail with [`Error::SheetNotFound`] instead of returning `None`
pub trait WorkbookExt: WorkbookRead {
    fn worksheet(&self, name: &str) -> Result<&Self::Sheet> {
        self.sheet_by_name(name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    fn worksheet_at(&self, index: usize) -> Result<&Self::Sheet> {
        self.sheet(index)
            .ok_or_else(|| Error::SheetNotFound(format!("#{}", index)))
    }
}

impl<B: WorkbookRead + ?Sized> WorkbookExt for B {}

/// Open `path`, read the sheet named `sheet` as `T` and close the workbook
pub fn read_list<T, P, F>(path: P, sheet: &str, configure: F) -> Result<Vec<T>>
where
    T: SheetRow,
    P: AsRef<Path>,
    F: FnOnce(&mut ReadConfiguration<T>),
{
    sheetkit_umya::with_workbook(path, |book| {
        WorkbookExt::worksheet(&*book, sheet)?.to_list_with(configure)
    })
}
