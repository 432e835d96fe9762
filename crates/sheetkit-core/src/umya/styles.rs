//! Style patch translation onto umya-spreadsheet styles

use crate::{HorizontalAlignment, Style, VerticalAlignment};
use umya_spreadsheet::{HorizontalAlignmentValues, VerticalAlignmentValues};

/// Write the fields set in `style` onto an engine cell style
pub(crate) fn apply(target: &mut umya_spreadsheet::Style, style: &Style) {
    let font = &style.font;
    if !font.is_empty() {
        let out = target.get_font_mut();
        if let Some(name) = &font.name {
            out.set_name(name.as_str());
        }
        if let Some(size) = font.size {
            out.set_size(size);
        }
        if let Some(bold) = font.bold {
            out.set_bold(bold);
        }
        if let Some(italic) = font.italic {
            out.set_italic(italic);
        }
        if let Some(color) = font.color {
            out.get_color_mut().set_argb(color.to_argb_hex());
        }
    }

    if let Some(fill) = style.fill {
        target.set_background_color(fill.to_argb_hex());
    }

    let alignment = &style.alignment;
    if !alignment.is_empty() {
        let out = target.get_alignment_mut();
        if let Some(h) = alignment.horizontal {
            out.set_horizontal(horizontal(h));
        }
        if let Some(v) = alignment.vertical {
            out.set_vertical(vertical(v));
        }
        if let Some(wrap) = alignment.wrap_text {
            out.set_wrap_text(wrap);
        }
    }

    if let Some(code) = &style.number_format {
        target.get_number_format_mut().set_format_code(code.as_str());
    }
}

fn horizontal(align: HorizontalAlignment) -> HorizontalAlignmentValues {
    match align {
        HorizontalAlignment::General => HorizontalAlignmentValues::General,
        HorizontalAlignment::Left => HorizontalAlignmentValues::Left,
        HorizontalAlignment::Center => HorizontalAlignmentValues::Center,
        HorizontalAlignment::Right => HorizontalAlignmentValues::Right,
        HorizontalAlignment::Fill => HorizontalAlignmentValues::Fill,
        HorizontalAlignment::Justify => HorizontalAlignmentValues::Justify,
        HorizontalAlignment::CenterContinuous => HorizontalAlignmentValues::CenterContinuous,
        HorizontalAlignment::Distributed => HorizontalAlignmentValues::Distributed,
    }
}

fn vertical(align: VerticalAlignment) -> VerticalAlignmentValues {
    match align {
        VerticalAlignment::Top => VerticalAlignmentValues::Top,
        VerticalAlignment::Center => VerticalAlignmentValues::Center,
        VerticalAlignment::Bottom => VerticalAlignmentValues::Bottom,
        VerticalAlignment::Justify => VerticalAlignmentValues::Justify,
        VerticalAlignment::Distributed => VerticalAlignmentValues::Distributed,
    }
}
