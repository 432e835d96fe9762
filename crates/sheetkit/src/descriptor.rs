//! Column descriptors: which property maps to which worksheet column
//!
//! A row type lists its mapped properties once in [`SheetRow::columns`]. The
//! resulting descriptors are built on first use and cached per type, so the
//! per-row work is a plain call through prebuilt accessor closures.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::coerce::CellType;
use crate::validate::Rule;
use crate::{CellValue, Error, Result};

/// A type whose instances map to worksheet rows
///
/// ```
/// use sheetkit::{column, ColumnSet, SheetRow};
///
/// #[derive(Default)]
/// struct Stock {
///     barcode: String,
///     quantity: i32,
/// }
///
/// impl SheetRow for Stock {
///     fn columns(cols: &mut ColumnSet<Self>) {
///         cols.push(column!(Stock, barcode).named("Barcode"));
///         cols.push(column!(Stock, quantity).named("Quantity"));
///     }
/// }
/// ```
pub trait SheetRow: Default + 'static {
    /// Declare the mapped columns in declaration order
    fn columns(columns: &mut ColumnSet<Self>);

    /// Worksheet name used when generating sheets for this type
    fn worksheet_name() -> Option<&'static str> {
        None
    }
}

/// How a descriptor finds its column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Header text, matched case-insensitively
    Name(String),
    /// Fixed 1-based position inside the data bounds
    Index(u32),
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Name(name) => write!(f, "{}", name),
            ColumnKey::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Builder for one mapped property, see [`column!`](crate::column)
pub struct Column<T, F> {
    property: &'static str,
    key: Option<ColumnKey>,
    optional: bool,
    rules: Vec<Rule>,
    get: fn(&T) -> &F,
    get_mut: fn(&mut T) -> &mut F,
}

impl<T: 'static, F: CellType + 'static> Column<T, F> {
    pub fn new(property: &'static str, get: fn(&T) -> &F, get_mut: fn(&mut T) -> &mut F) -> Self {
        Self {
            property,
            key: None,
            optional: false,
            rules: Vec::new(),
            get,
            get_mut,
        }
    }

    /// Match the column by header text
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.key = Some(ColumnKey::Name(name.into()));
        self
    }

    /// Read the column at a fixed 1-based position
    pub fn indexed(mut self, index: u32) -> Self {
        self.key = Some(ColumnKey::Index(index));
        self
    }

    /// A missing column leaves the property at its default
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a validation rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    fn into_descriptor(self) -> ColumnDescriptor<T> {
        let Column {
            property,
            key,
            optional,
            rules,
            get,
            get_mut,
        } = self;

        let key = key.unwrap_or_else(|| ColumnKey::Name(property.to_string()));
        let header = match &key {
            ColumnKey::Name(name) => name.clone(),
            ColumnKey::Index(_) => property.to_string(),
        };

        ColumnDescriptor {
            property,
            key,
            header,
            optional,
            read: Box::new(move |row, value| {
                let parsed = if value.is_empty() {
                    F::default()
                } else {
                    F::from_cell(value)?
                };
                *get_mut(row) = parsed;
                Ok(())
            }),
            write: Box::new(move |row| get(row).to_cell()),
            validate: Box::new(move |row, column| {
                let measure = get(row).measure();
                rules.iter().find_map(|rule| rule.check(column, &measure))
            }),
        }
    }
}

type ReadFn<T> = Box<dyn Fn(&mut T, &CellValue) -> std::result::Result<(), String> + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&T) -> CellValue + Send + Sync>;
type ValidateFn<T> = Box<dyn Fn(&T, &str) -> Option<String> + Send + Sync>;

/// A mapped property with its column key and prebuilt accessors
pub struct ColumnDescriptor<T> {
    property: &'static str,
    key: ColumnKey,
    header: String,
    optional: bool,
    read: ReadFn<T>,
    write: WriteFn<T>,
    validate: ValidateFn<T>,
}

impl<T> ColumnDescriptor<T> {
    /// Property name as declared
    pub fn property(&self) -> &'static str {
        self.property
    }

    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Text used for this column in headers and messages
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Coerce `value` and store it on `row`; the error is a human readable reason
    pub fn read_into(&self, row: &mut T, value: &CellValue) -> std::result::Result<(), String> {
        (self.read)(row, value)
    }

    /// Current property value as a cell value
    pub fn value_of(&self, row: &T) -> CellValue {
        (self.write)(row)
    }

    /// First failing rule message for the property value on `row`
    pub fn validate(&self, row: &T) -> Option<String> {
        (self.validate)(row, &self.header)
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("property", &self.property)
            .field("key", &self.key)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Collects the descriptors declared by [`SheetRow::columns`]
pub struct ColumnSet<T> {
    columns: Vec<ColumnDescriptor<T>>,
}

impl<T: 'static> ColumnSet<T> {
    fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn push<F: CellType + 'static>(&mut self, column: Column<T, F>) -> &mut Self {
        self.columns.push(column.into_descriptor());
        self
    }
}

/// Ordered, resolved descriptors of one row type
pub type Descriptors<T> = Arc<Vec<ColumnDescriptor<T>>>;

static REGISTRY: Lazy<RwLock<AHashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    Lazy::new(|| RwLock::new(AHashMap::new()));

/// Descriptors of `T` in declaration order, built once per type
pub fn descriptors<T: SheetRow>() -> Result<Descriptors<T>> {
    let id = TypeId::of::<T>();

    let cached = REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(&id)
        .cloned();
    if let Some(entry) = cached {
        if let Ok(found) = entry.downcast::<Vec<ColumnDescriptor<T>>>() {
            return Ok(found);
        }
    }

    let mut set = ColumnSet::new();
    T::columns(&mut set);
    if set.columns.is_empty() {
        return Err(Error::Configuration(format!(
            "Given object does not have any mapped column: {}",
            type_short_name::<T>()
        )));
    }
    if let Some(column) = set
        .columns
        .iter()
        .find(|column| column.key == ColumnKey::Index(0))
    {
        return Err(Error::Configuration(format!(
            "Column index of '{}' on {} must be positive",
            column.property,
            type_short_name::<T>()
        )));
    }

    log::trace!(
        "resolved {} column descriptors for {}",
        set.columns.len(),
        type_short_name::<T>()
    );
    let built: Descriptors<T> = Arc::new(set.columns);
    REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(id, built.clone());
    Ok(built)
}

/// Worksheet name for `T`: its override or the unqualified type name
pub fn worksheet_name<T: SheetRow>() -> String {
    T::worksheet_name()
        .map(str::to_string)
        .unwrap_or_else(|| type_short_name::<T>().to_string())
}

pub(crate) fn type_short_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Build a [`Column`] for a named field of a row type
///
/// `column!(Stock, barcode)` expands to a column keyed by the field name with
/// plain field accessors; chain `.named()`, `.indexed()`, `.optional()` or
/// `.rule()` to adjust it.
#[macro_export]
macro_rules! column {
    ($ty:ty, $field:ident) => {
        $crate::Column::new(
            stringify!($field),
            |row: &$ty| &row.$field,
            |row: &mut $ty| &mut row.$field,
        )
    };
}
