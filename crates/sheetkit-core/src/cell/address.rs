//! Cell address and range types, and column letter arithmetic

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// Highest column reachable with one or two letters ("ZZ").
pub const MAX_LETTER_COLUMN: u32 = 702;

/// Convert 1-2 column letters to a 1-based column index.
///
/// `None` stands for a missing value and is rejected separately from a value
/// of the wrong shape.
///
/// # Examples
/// ```
/// use sheetkit_core::column_letter_to_index;
///
/// assert_eq!(column_letter_to_index("A").unwrap(), 1);
/// assert_eq!(column_letter_to_index("ag").unwrap(), 33);
/// assert!(column_letter_to_index(None).is_err());
/// ```
pub fn column_letter_to_index<'a>(letters: impl Into<Option<&'a str>>) -> Result<u32> {
    let letters = letters.into().ok_or(Error::InvalidArgument {
        name: "column_letter",
        message: "value must not be null".into(),
    })?;

    let valid = (1..=2).contains(&letters.len()) && letters.bytes().all(|b| b.is_ascii_alphabetic());
    if !valid {
        return Err(Error::OutOfRange {
            name: "column_letter",
            message: "Must only be 1-2 alpha characters".into(),
        });
    }

    Ok(letters
        .bytes()
        .fold(0, |sum, b| sum * 26 + (b.to_ascii_uppercase() - b'A') as u32 + 1))
}

/// Convert a 1-based column index in `1..=702` to its letters.
///
/// # Examples
/// ```
/// use sheetkit_core::index_to_column_letter;
///
/// assert_eq!(index_to_column_letter(633).unwrap(), "XI");
/// assert!(index_to_column_letter(703).is_err());
/// ```
pub fn index_to_column_letter(index: u32) -> Result<String> {
    if index == 0 || index > MAX_LETTER_COLUMN {
        return Err(Error::OutOfRange {
            name: "column_index",
            message: format!("Must be between 1 and {}", MAX_LETTER_COLUMN),
        });
    }
    Ok(CellAddress::column_to_letters(index))
}

/// A cell address (e.g., "A1"), 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1)
    pub col: u32,
}

impl CellAddress {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation (`$` markers are ignored)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidArgument {
                name: "address",
                message: "empty address".into(),
            });
        }

        let cleaned: String = s.chars().filter(|c| *c != '$').collect();
        let split = cleaned
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(cleaned.len());
        let (letters, digits) = cleaned.split_at(split);

        let col = Self::letters_to_column(letters)?;
        let row: u32 = digits.parse().map_err(|_| Error::InvalidArgument {
            name: "address",
            message: format!("invalid row number in '{}'", s),
        })?;

        if row == 0 {
            return Err(Error::InvalidArgument {
                name: "address",
                message: format!("row number must be >= 1 in '{}'", s),
            });
        }

        Ok(Self { row, col })
    }

    /// Convert a 1-based column number to letters (1 = A, 27 = AA, no upper bound)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            n /= 26;
        }

        result
    }

    /// Convert column letters of any length to a 1-based column number
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidArgument {
                name: "address",
                message: "empty column letters".into(),
            });
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidArgument {
                    name: "address",
                    message: format!("invalid column letter '{}'", c),
                });
            }
            col = col
                .saturating_mul(26)
                .saturating_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        if col > MAX_COLS {
            return Err(Error::OutOfRange {
                name: "address",
                message: format!("column {} exceeds {}", col, MAX_COLS),
            });
        }

        Ok(col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so start is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from 1-based row/column numbers
    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().split_once(':') {
            Some((start, end)) => Ok(Self::new(CellAddress::parse(start)?, CellAddress::parse(end)?)),
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let range = *self;
        (range.start.row..=range.end.row)
            .flat_map(move |row| (range.start.col..=range.end.col).map(move |col| CellAddress::new(row, col)))
    }

    /// Format as A1:B10 string (a single cell prints as A1)
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
