//! Fluent construction of workbooks from object collections
//!
//! A [`WorksheetBuilder`] collects one plan per worksheet: rows, columns,
//! title rows and styles. Nothing touches a workbook until
//! [`build_into`](WorksheetBuilder::build_into) or
//! [`build`](WorksheetBuilder::build) renders every plan in order.
//!
//! ```
//! use sheetkit::{column, to_worksheet, ColumnSet, SheetRow, Style};
//!
//! #[derive(Default)]
//! struct Stock {
//!     barcode: String,
//!     quantity: i32,
//! }
//!
//! impl SheetRow for Stock {
//!     fn columns(cols: &mut ColumnSet<Self>) {
//!         cols.push(column!(Stock, barcode).named("Barcode"))
//!             .push(column!(Stock, quantity).named("Quantity"));
//!     }
//! }
//!
//! let stocks = vec![Stock { barcode: "123".into(), quantity: 4 }];
//! let book = to_worksheet(stocks, "Stocks")
//!     .with_title("Stock list")
//!     .with_configuration(|c| {
//!         c.with_header_style(Style::new().bold(true));
//!     })
//!     .build()?;
//! # let _ = book;
//! # Ok::<(), sheetkit::Error>(())
//! ```

use crate::config::CreateConfiguration;
use crate::descriptor::{descriptors, SheetRow};
use crate::{CellRange, CellValue, Error, Result, SheetWrite, Style, WorkbookWrite};

type Selector<T> = Box<dyn Fn(&T) -> CellValue>;
type ColumnGenerator<T> = fn() -> Result<Vec<ColumnSpec<T>>>;

struct ColumnSpec<T> {
    header: String,
    select: Selector<T>,
    style: Option<Style>,
}

struct TitleSpec {
    text: String,
    style: Option<Style>,
}

struct SheetSpec<T> {
    name: String,
    rows: Vec<T>,
    columns: Vec<ColumnSpec<T>>,
    generate: Option<ColumnGenerator<T>>,
    titles: Vec<TitleSpec>,
    header: bool,
    config: CreateConfiguration<T>,
}

/// A worksheet ready to be rendered
trait SheetPlan {
    fn name(&self) -> &str;

    fn render(&self, sheet: &mut dyn SheetWrite) -> Result<()>;
}

fn mapped_columns<T: SheetRow>() -> Result<Vec<ColumnSpec<T>>> {
    let descriptors = descriptors::<T>()?;
    Ok((0..descriptors.len())
        .map(|i| {
            let owned = descriptors.clone();
            ColumnSpec {
                header: descriptors[i].header().to_string(),
                select: Box::new(move |row: &T| owned[i].value_of(row)),
                style: None,
            }
        })
        .collect())
}

impl<T> SheetSpec<T> {
    fn new(rows: Vec<T>, name: &str, generate: Option<ColumnGenerator<T>>) -> Self {
        SheetSpec {
            name: name.to_string(),
            rows,
            columns: Vec::new(),
            generate,
            titles: Vec::new(),
            header: true,
            config: CreateConfiguration::default(),
        }
    }
}

/// Table name derived from the sheet name, unique within a workbook
fn table_name(sheet: &str) -> String {
    let body: String = sheet
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("tbl{}", body)
}

fn style_if_set(sheet: &mut dyn SheetWrite, range: &CellRange, style: &Style) -> Result<()> {
    if style.is_empty() {
        return Ok(());
    }
    sheet.apply_style(range, style)
}

impl<T> SheetPlan for SheetSpec<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, sheet: &mut dyn SheetWrite) -> Result<()> {
        let generated;
        let columns: &[ColumnSpec<T>] = match (self.columns.is_empty(), self.generate) {
            (false, _) => &self.columns,
            (true, Some(generate)) => {
                generated = generate()?;
                &generated
            }
            (true, None) => {
                return Err(Error::Configuration(format!(
                    "worksheet '{}' has no columns",
                    self.name
                )))
            }
        };
        let width = columns.len() as u32;
        let config = &self.config;
        let mut offset = 0;

        for (row, title) in (1..).zip(&self.titles) {
            let range = CellRange::from_indices(row, 1, row, width);
            if width > 1 {
                sheet.merge(&range)?;
            }
            sheet.set_value_at(row, 1, CellValue::string(title.text.as_str()))?;
            style_if_set(sheet, &range, &config.title_style)?;
            if let Some(style) = &title.style {
                sheet.apply_style(&range, style)?;
            }
        }
        offset += self.titles.len() as u32;

        if self.header {
            let row = offset + 1;
            for (col, column) in (1..).zip(columns) {
                sheet.set_value_at(row, col, CellValue::string(column.header.as_str()))?;
                style_if_set(sheet, &CellRange::from_indices(row, col, row, col), &config.header_style)?;
            }
            style_if_set(sheet, &CellRange::from_indices(row, 1, row, width), &config.header_row_style)?;
            offset += 1;
        }

        let table_start = self.titles.len() as u32 + 1;
        let table = CellRange::from_indices(
            table_start,
            1,
            table_start + self.rows.len() as u32,
            width,
        );
        match sheet.add_table(Some(&table_name(&self.name)), &table) {
            Ok(name) => log::trace!("added table {} over {} on '{}'", name, table, self.name),
            Err(err) => log::warn!("no table created on '{}': {}", self.name, err),
        }

        for (row, item) in (offset + 1..).zip(&self.rows) {
            let style = config.cell_style_for(item);
            for (col, column) in (1..).zip(columns) {
                sheet.set_value_at(row, col, (column.select)(item))?;
                if let Some(style) = &style {
                    sheet.apply_style(&CellRange::from_indices(row, col, row, col), style)?;
                }
            }
        }

        let last_row = (offset + self.rows.len() as u32).max(1);
        for (col, column) in (1..).zip(columns) {
            let range = CellRange::from_indices(1, col, last_row, col);
            style_if_set(sheet, &range, &config.column_style)?;
            if let Some(style) = &column.style {
                sheet.apply_style(&range, style)?;
            }
        }

        log::debug!(
            "rendered worksheet '{}': {} titles, {} columns, {} rows",
            self.name,
            self.titles.len(),
            width,
            self.rows.len()
        );
        Ok(())
    }
}

/// Fluent builder over one or more worksheets
pub struct WorksheetBuilder<T> {
    finished: Vec<Box<dyn SheetPlan>>,
    current: SheetSpec<T>,
}

/// Start a workbook with a worksheet of `rows`.
///
/// Without [`with_column`](WorksheetBuilder::with_column) calls, the columns
/// of `T` are rendered in declaration order.
pub fn to_worksheet<T, I>(rows: I, name: &str) -> WorksheetBuilder<T>
where
    T: SheetRow,
    I: IntoIterator<Item = T>,
{
    WorksheetBuilder {
        finished: Vec::new(),
        current: SheetSpec::new(rows.into_iter().collect(), name, Some(mapped_columns::<T>)),
    }
}

impl<T: 'static> WorksheetBuilder<T> {
    /// Start a worksheet of any row type; columns must be added explicitly
    pub fn new<I: IntoIterator<Item = T>>(rows: I, name: &str) -> Self {
        WorksheetBuilder {
            finished: Vec::new(),
            current: SheetSpec::new(rows.into_iter().collect(), name, None),
        }
    }

    pub fn with_column<F, V>(self, header: &str, select: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        self.push_column(header, select, None)
    }

    /// Add a column and style it after the data is written
    pub fn with_column_styled<F, V>(self, header: &str, select: F, style: Style) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        self.push_column(header, select, Some(style))
    }

    fn push_column<F, V>(mut self, header: &str, select: F, style: Option<Style>) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        self.current.columns.push(ColumnSpec {
            header: header.to_string(),
            select: Box::new(move |row| select(row).into()),
            style,
        });
        self
    }

    /// Add a title row merged across all columns, above the header
    pub fn with_title(self, text: &str) -> Self {
        self.push_title(text, None)
    }

    pub fn with_title_styled(self, text: &str, style: Style) -> Self {
        self.push_title(text, Some(style))
    }

    fn push_title(mut self, text: &str, style: Option<Style>) -> Self {
        self.current.titles.push(TitleSpec {
            text: text.to_string(),
            style,
        });
        self
    }

    pub fn without_header(mut self) -> Self {
        self.current.header = false;
        self
    }

    pub fn with_configuration<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut CreateConfiguration<T>),
    {
        configure(&mut self.current.config);
        self
    }

    /// Finish this worksheet and start another one with a new row type
    pub fn next_worksheet<U, I>(self, rows: I, name: &str) -> WorksheetBuilder<U>
    where
        U: SheetRow,
        I: IntoIterator<Item = U>,
    {
        let mut finished = self.finished;
        finished.push(Box::new(self.current));
        WorksheetBuilder {
            finished,
            current: SheetSpec::new(rows.into_iter().collect(), name, Some(mapped_columns::<U>)),
        }
    }

    /// Render every worksheet into `book`, in the order they were declared
    pub fn build_into<B: WorkbookWrite>(self, book: &mut B) -> Result<()> {
        let mut plans = self.finished;
        plans.push(Box::new(self.current));
        for plan in &plans {
            let sheet = book.add_worksheet(plan.name())?;
            plan.render(sheet)?;
        }
        Ok(())
    }

    /// Render into a new workbook
    pub fn build(self) -> Result<sheetkit_umya::Workbook> {
        let mut book = sheetkit_umya::new_workbook();
        self.build_into(&mut book)?;
        Ok(book)
    }

    /// Render into a new workbook and serialize it as xlsx
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        sheetkit_umya::to_bytes(&self.build()?)
    }
}
