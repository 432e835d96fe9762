//! CSV options

/// Options for writing CSV exports
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote); every field is quoted
    pub quote: u8,
    /// Separator between rows; never written after the last row
    pub line_terminator: LineTerminator,
    /// Output text encoding
    pub encoding: CsvEncoding,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::LF,
            encoding: CsvEncoding::Ascii,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl LineTerminator {
    pub(crate) fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineTerminator::LF => b"\n",
            LineTerminator::CRLF => b"\r\n",
            LineTerminator::CR => b"\r",
        }
    }
}

/// Byte encoding of the exported text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvEncoding {
    /// One byte per character; anything outside ASCII becomes `?`
    #[default]
    Ascii,
    /// UTF-8, unchanged
    Utf8,
}
