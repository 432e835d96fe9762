//! Conversion between cell values and property types

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::CellValue;
use sheetkit_core::serial_to_datetime;

/// What validation rules see of a property value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure<'a> {
    /// Absent optional value
    Null,
    Text(&'a str),
    Number(f64),
    /// Anything rules do not inspect (booleans, dates, enums)
    Other,
}

/// A property type that can be read from and written to a cell
///
/// Blank cells never reach [`CellType::from_cell`]: the property keeps
/// `Default::default()` instead, which is `None` for `Option<T>`.
pub trait CellType: Default + Sized {
    /// Parse a non-empty cell value; the error is a human readable reason
    fn from_cell(value: &CellValue) -> Result<Self, String>;

    fn to_cell(&self) -> CellValue;

    fn measure(&self) -> Measure<'_> {
        Measure::Other
    }
}

pub(crate) fn cast_error(value: &CellValue, target: &str) -> String {
    format!("'{}' ({}) cannot be converted to {}", value, value.type_name(), target)
}

impl CellType for String {
    fn from_cell(value: &CellValue) -> Result<Self, String> {
        Ok(value.to_string())
    }

    fn to_cell(&self) -> CellValue {
        CellValue::String(self.clone())
    }

    fn measure(&self) -> Measure<'_> {
        Measure::Text(self)
    }
}

impl CellType for bool {
    fn from_cell(value: &CellValue) -> Result<Self, String> {
        match value {
            CellValue::Boolean(b) => Ok(*b),
            CellValue::Number(n) => Ok(*n != 0.0),
            CellValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(cast_error(value, "bool")),
            },
            _ => Err(cast_error(value, "bool")),
        }
    }

    fn to_cell(&self) -> CellValue {
        CellValue::Boolean(*self)
    }
}

fn number_of(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::String(s) => s.trim().parse::<f64>().ok(),
        other => other.as_number(),
    }
}

macro_rules! cell_int {
    ($($t:ty),*) => {$(
        impl CellType for $t {
            fn from_cell(value: &CellValue) -> Result<Self, String> {
                if let CellValue::String(s) = value {
                    if let Ok(n) = s.trim().parse::<$t>() {
                        return Ok(n);
                    }
                }
                match number_of(value) {
                    Some(n)
                        if n.is_finite()
                            && n.fract() == 0.0
                            && n >= <$t>::MIN as f64
                            // MAX rounds up to 2^63 / 2^64 for the 64-bit types
                            && n < <$t>::MAX as f64 + 1.0 =>
                    {
                        Ok(n as $t)
                    }
                    _ => Err(cast_error(value, stringify!($t))),
                }
            }

            fn to_cell(&self) -> CellValue {
                CellValue::Number(*self as f64)
            }

            fn measure(&self) -> Measure<'_> {
                Measure::Number(*self as f64)
            }
        }
    )*};
}

cell_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! cell_float {
    ($($t:ty),*) => {$(
        impl CellType for $t {
            fn from_cell(value: &CellValue) -> Result<Self, String> {
                match number_of(value) {
                    Some(n) if n.is_finite() => Ok(n as $t),
                    _ => Err(cast_error(value, stringify!($t))),
                }
            }

            fn to_cell(&self) -> CellValue {
                CellValue::Number(*self as f64)
            }

            fn measure(&self) -> Measure<'_> {
                Measure::Number(*self as f64)
            }
        }
    )*};
}

cell_float!(f32, f64);

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

impl CellType for NaiveDateTime {
    fn from_cell(value: &CellValue) -> Result<Self, String> {
        let parsed = match value {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Number(n) => serial_to_datetime(*n),
            CellValue::String(s) => parse_datetime(s),
            _ => None,
        };
        parsed.ok_or_else(|| cast_error(value, "date and time"))
    }

    fn to_cell(&self) -> CellValue {
        CellValue::DateTime(*self)
    }
}

impl CellType for NaiveDate {
    fn from_cell(value: &CellValue) -> Result<Self, String> {
        NaiveDateTime::from_cell(value)
            .map(|dt| dt.date())
            .map_err(|_| cast_error(value, "date"))
    }

    fn to_cell(&self) -> CellValue {
        CellValue::DateTime(self.and_time(NaiveTime::MIN))
    }
}

impl<T: CellType> CellType for Option<T> {
    fn from_cell(value: &CellValue) -> Result<Self, String> {
        if value.is_blank() {
            return Ok(None);
        }
        T::from_cell(value).map(Some)
    }

    fn to_cell(&self) -> CellValue {
        self.as_ref().map_or(CellValue::Empty, CellType::to_cell)
    }

    fn measure(&self) -> Measure<'_> {
        self.as_ref().map_or(Measure::Null, CellType::measure)
    }
}

/// Implement [`CellType`] for a fieldless enum
///
/// A cell matches a variant by its exact name or by its numeric
/// discriminant. Values are written back as the variant name.
///
/// ```
/// use sheetkit::{cell_enum, CellType, CellValue};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq)]
/// enum Status {
///     #[default]
///     Active = 1,
///     Passive = 2,
/// }
///
/// cell_enum!(Status { Active, Passive });
///
/// assert_eq!(Status::from_cell(&CellValue::string("Passive")), Ok(Status::Passive));
/// assert_eq!(Status::from_cell(&CellValue::Number(1.0)), Ok(Status::Active));
/// assert!(Status::from_cell(&CellValue::string("passive")).is_err());
/// ```
#[macro_export]
macro_rules! cell_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::CellType for $ty {
            fn from_cell(value: &$crate::CellValue) -> ::std::result::Result<Self, String> {
                let number = match value {
                    $crate::CellValue::Number(n) => Some(*n),
                    $crate::CellValue::String(s) => {
                        $(
                            if s.as_str() == stringify!($variant) {
                                return Ok(Self::$variant);
                            }
                        )+
                        s.trim().parse::<f64>().ok()
                    }
                    _ => None,
                };
                if let Some(n) = number {
                    $(
                        if n == (Self::$variant as i64) as f64 {
                            return Ok(Self::$variant);
                        }
                    )+
                }
                Err(format!(
                    "'{}' is not a valid {}",
                    value,
                    stringify!($ty)
                ))
            }

            fn to_cell(&self) -> $crate::CellValue {
                match self {
                    $( Self::$variant => $crate::CellValue::String(stringify!($variant).to_string()), )+
                }
            }
        }
    };
}
