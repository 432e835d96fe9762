//! Header-only worksheets generated from row types

use ahash::AHashMap;

use crate::descriptor::{descriptors, type_short_name, worksheet_name, SheetRow};
use crate::{CellRange, CellValue, Error, Result, SheetWrite, Style, WorkbookWrite};

/// Add a sheet named after `T` holding one header cell per mapped column
pub fn generate_worksheet<'b, T, B>(book: &'b mut B, header_style: Option<&Style>) -> Result<&'b mut B::SheetMut>
where
    T: SheetRow,
    B: WorkbookWrite,
{
    let descriptors = descriptors::<T>()?;
    let sheet = book.add_worksheet(&worksheet_name::<T>())?;

    for (col, descriptor) in (1..).zip(descriptors.iter()) {
        sheet.set_value_at(1, col, CellValue::string(descriptor.header()))?;
        if let Some(style) = header_style {
            sheet.apply_style(&CellRange::from_indices(1, col, 1, col), style)?;
        }
    }
    Ok(sheet)
}

type Generator<B> = for<'b> fn(&'b mut B, Option<&Style>) -> Result<&'b mut <B as WorkbookWrite>::SheetMut>;

/// Row types that can be generated by name
///
/// ```
/// use sheetkit::{column, ColumnSet, SheetRow, TemplateRegistry};
///
/// #[derive(Default)]
/// struct Stock {
///     barcode: String,
/// }
///
/// impl SheetRow for Stock {
///     fn columns(cols: &mut ColumnSet<Self>) {
///         cols.push(column!(Stock, barcode).named("Barcode"));
///     }
/// }
///
/// let mut registry = TemplateRegistry::new();
/// registry.register::<Stock>();
///
/// let mut book = sheetkit::new_workbook();
/// registry.generate(&mut book, "Stock", None)?;
/// assert!(registry.generate(&mut book, "Order", None).is_err());
/// # Ok::<(), sheetkit::Error>(())
/// ```
pub struct TemplateRegistry<B: WorkbookWrite = sheetkit_umya::Workbook> {
    generators: AHashMap<&'static str, Generator<B>>,
}

impl<B: WorkbookWrite> TemplateRegistry<B> {
    pub fn new() -> Self {
        Self {
            generators: AHashMap::new(),
        }
    }

    /// Make `T` available under its type name
    pub fn register<T: SheetRow>(&mut self) -> &mut Self {
        self.generators
            .insert(type_short_name::<T>(), generate_worksheet::<T, B>);
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.generators.contains_key(type_name)
    }

    /// Generate the template of the type registered as `type_name`
    pub fn generate<'b>(
        &self,
        book: &'b mut B,
        type_name: &str,
        header_style: Option<&Style>,
    ) -> Result<&'b mut B::SheetMut> {
        let generate = self.generators.get(type_name).ok_or_else(|| {
            Error::Configuration(format!(
                "The '{}' type could not be found in the registry.",
                type_name
            ))
        })?;
        generate(book, header_style)
    }
}

impl<B: WorkbookWrite> Default for TemplateRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}
