//! Cell styling types
//!
//! A [`Style`] is a patch: every field is optional and only the fields that
//! are set get written to the target cells. This lets header, column and
//! per-cell styles be layered on the same cells.
//!
//! - [`Style`] - Complete cell style patch
//! - [`FontStyle`] - Font settings
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation

mod alignment;
mod color;
mod font;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use color::Color;
pub use font::FontStyle;

/// Cell style patch
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Solid background fill
    pub fill: Option<Color>,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format code (e.g., "0.00", "yyyy-mm-dd")
    pub number_format: Option<String>,
}

impl Style {
    /// Create a style that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = Some(italic);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = Some(size);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = Some(name.into());
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = Some(wrap);
        self
    }

    /// True when applying this style would not change anything
    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.fill.is_none()
            && self.alignment.is_empty()
            && self.number_format.is_none()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            font: self.font.merge(&other.font),
            fill: other.fill.or(self.fill),
            alignment: self.alignment.merge(&other.alignment),
            number_format: other
                .number_format
                .clone()
                .or_else(|| self.number_format.clone()),
        }
    }
}
