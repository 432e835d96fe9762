//! [`WorkbookRead`] and [`WorkbookWrite`] for `umya_spreadsheet::Spreadsheet`

use crate::{Error, Result, WorkbookRead, WorkbookWrite, MAX_SHEET_NAME_LEN};
use umya_spreadsheet::{Spreadsheet, Worksheet};

impl WorkbookRead for Spreadsheet {
    type Sheet = Worksheet;

    fn sheet_count(&self) -> usize {
        self.get_sheet_count()
    }

    fn sheet(&self, index: usize) -> Option<&Worksheet> {
        self.get_sheet(&index)
    }

    fn sheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.get_sheet_by_name(name)
    }
}

impl WorkbookWrite for Spreadsheet {
    type SheetMut = Worksheet;

    fn add_worksheet(&mut self, name: &str) -> Result<&mut Worksheet> {
        validate_sheet_name(name)?;
        self.new_sheet(name).map_err(Error::document)
    }

    fn sheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.get_sheet_by_name_mut(name)
    }
}

/// Reject names Excel refuses to open
pub(crate) fn validate_sheet_name(name: &str) -> Result<()> {
    const FORBIDDEN: &[char] = &['\\', '/', '?', '*', '[', ']', ':'];

    if name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            name: "sheet_name",
            message: "sheet name must not be empty".into(),
        });
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidArgument {
            name: "sheet_name",
            message: format!("'{}' is longer than {} characters", name, MAX_SHEET_NAME_LEN),
        });
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN.contains(c)) {
        return Err(Error::InvalidArgument {
            name: "sheet_name",
            message: format!("'{}' contains the forbidden character '{}'", name, c),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sheet_name() {
        assert!(validate_sheet_name("Stocks").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
    }
}
