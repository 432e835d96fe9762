//! Per-call read and create configuration

use std::fmt;

use crate::Style;

type Interceptor<T> = Box<dyn FnMut(&mut T, usize)>;
type CellStyler<T> = Box<dyn Fn(&T) -> Option<Style>>;

/// Options for reading rows into objects
///
/// ```
/// use sheetkit::ReadConfiguration;
///
/// let mut config = ReadConfiguration::<()>::default();
/// config.without_header_row().skip_casting_errors();
/// assert!(!config.has_header_row());
/// ```
pub struct ReadConfiguration<T> {
    has_header_row: bool,
    skip_casting_errors: bool,
    skip_validation_errors: bool,
    interceptor: Option<Interceptor<T>>,
}

impl<T> Default for ReadConfiguration<T> {
    fn default() -> Self {
        Self {
            has_header_row: true,
            skip_casting_errors: false,
            skip_validation_errors: false,
            interceptor: None,
        }
    }
}

impl<T> ReadConfiguration<T> {
    /// The first valued row is data; columns bind by declaration order
    pub fn without_header_row(&mut self) -> &mut Self {
        self.has_header_row = false;
        self
    }

    /// Drop rows whose cells cannot be converted instead of failing
    pub fn skip_casting_errors(&mut self) -> &mut Self {
        self.skip_casting_errors = true;
        self
    }

    /// Drop rows that fail a validation rule instead of failing
    pub fn skip_validation_errors(&mut self) -> &mut Self {
        self.skip_validation_errors = true;
        self
    }

    /// Call `f` with each materialized object and its 0-based offset in the
    /// data region, before the object is yielded
    pub fn intercept<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut T, usize) + 'static,
    {
        self.interceptor = Some(Box::new(f));
        self
    }

    pub fn has_header_row(&self) -> bool {
        self.has_header_row
    }

    pub fn skips_casting_errors(&self) -> bool {
        self.skip_casting_errors
    }

    pub fn skips_validation_errors(&self) -> bool {
        self.skip_validation_errors
    }

    pub(crate) fn run_interceptor(&mut self, item: &mut T, offset: usize) {
        if let Some(f) = self.interceptor.as_mut() {
            f(item, offset);
        }
    }
}

impl<T> fmt::Debug for ReadConfiguration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadConfiguration")
            .field("has_header_row", &self.has_header_row)
            .field("skip_casting_errors", &self.skip_casting_errors)
            .field("skip_validation_errors", &self.skip_validation_errors)
            .field("interceptor", &self.interceptor.is_some())
            .finish()
    }
}

/// Styles applied while rendering a worksheet from objects
pub struct CreateConfiguration<T> {
    pub(crate) title_style: Style,
    pub(crate) header_style: Style,
    pub(crate) header_row_style: Style,
    pub(crate) column_style: Style,
    pub(crate) cell_style: Option<CellStyler<T>>,
}

impl<T> Default for CreateConfiguration<T> {
    fn default() -> Self {
        Self {
            title_style: Style::new(),
            header_style: Style::new(),
            header_row_style: Style::new(),
            column_style: Style::new(),
            cell_style: None,
        }
    }
}

impl<T> CreateConfiguration<T> {
    /// Style for every merged title row
    pub fn with_title_style(&mut self, style: Style) -> &mut Self {
        self.title_style = style;
        self
    }

    /// Style for each header cell
    pub fn with_header_style(&mut self, style: Style) -> &mut Self {
        self.header_style = style;
        self
    }

    /// Style for the whole header row, applied after the header cells
    pub fn with_header_row_style(&mut self, style: Style) -> &mut Self {
        self.header_row_style = style;
        self
    }

    /// Style for every rendered column, applied last
    pub fn with_column_style(&mut self, style: Style) -> &mut Self {
        self.column_style = style;
        self
    }

    /// Style for each data cell, chosen from the object of its row
    pub fn with_cell_style<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&T) -> Option<Style> + 'static,
    {
        self.cell_style = Some(Box::new(f));
        self
    }

    pub(crate) fn cell_style_for(&self, item: &T) -> Option<Style> {
        self.cell_style.as_ref().and_then(|f| f(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_defaults() {
        let config = ReadConfiguration::<u32>::default();
        assert!(config.has_header_row());
        assert!(!config.skips_casting_errors());
        assert!(!config.skips_validation_errors());
    }

    #[test]
    fn test_interceptor() {
        let mut config = ReadConfiguration::<u32>::default();
        config.intercept(|value, offset| *value += offset as u32);

        let mut value = 10;
        config.run_interceptor(&mut value, 2);
        assert_eq!(value, 12);
    }

    #[test]
    fn test_cell_style() {
        let mut config = CreateConfiguration::<i32>::default();
        config.with_cell_style(|v| (*v < 0).then(|| Style::new().bold(true)));

        assert_eq!(config.cell_style_for(&-1), Some(Style::new().bold(true)));
        assert_eq!(config.cell_style_for(&1), None);
    }
}
