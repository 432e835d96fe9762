//! Error types for sheetkit-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while mapping, checking or writing worksheets
#[derive(Debug, Error)]
pub enum Error {
    /// The target row type declares no mapped columns
    #[error("{0}")]
    Configuration(String),

    /// A required column is missing from the header row
    #[error("'{column}' column could not be found on the worksheet")]
    ColumnNotFound { column: String },

    /// A cell could not be coerced to the declared property type
    #[error("The '{column}' column on row {row} could not be cast: {message}")]
    Casting {
        column: String,
        row: u32,
        message: String,
    },

    /// A value or a worksheet structure failed a validation rule
    #[error("{message}")]
    Validation {
        column: Option<String>,
        row: Option<u32>,
        message: String,
    },

    /// Malformed input to a utility function
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// Numeric input outside the accepted domain
    #[error("Argument '{name}' out of range: {message}")]
    OutOfRange { name: &'static str, message: String },

    /// Sheet not found by name or position
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Failure reported by the underlying spreadsheet engine
    #[error("Document error: {0}")]
    Document(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Structural validation failure without a column or row
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            column: None,
            row: None,
            message: message.into(),
        }
    }

    /// Create a new document error with a message
    pub fn document<S: ToString>(msg: S) -> Self {
        Error::Document(msg.to_string())
    }

    pub fn is_casting(&self) -> bool {
        matches!(self, Error::Casting { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Column named by the error payload, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            Error::ColumnNotFound { column } | Error::Casting { column, .. } => Some(column),
            Error::Validation { column, .. } => column.as_deref(),
            _ => None,
        }
    }

    /// Worksheet row named by the error payload, if any
    pub fn row(&self) -> Option<u32> {
        match self {
            Error::Casting { row, .. } => Some(*row),
            Error::Validation { row, .. } => *row,
            _ => None,
        }
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a caller supplied message.
pub fn format_message(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), &arg.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message("'{0}' column is duplicated (rowIndex: {1})", &[&"Barcode", &1]),
            "'Barcode' column is duplicated (rowIndex: 1)"
        );
        assert_eq!(format_message("no placeholders", &[&3]), "no placeholders");
    }

    #[test]
    fn test_payload_accessors() {
        let err = Error::Casting {
            column: "Quantity".into(),
            row: 4,
            message: "not a number".into(),
        };
        assert!(err.is_casting());
        assert_eq!(err.column(), Some("Quantity"));
        assert_eq!(err.row(), Some(4));

        let err = Error::validation("First worksheet has formulas.");
        assert!(err.is_validation());
        assert_eq!(err.column(), None);
        assert_eq!(err.to_string(), "First worksheet has formulas.");
    }
}
