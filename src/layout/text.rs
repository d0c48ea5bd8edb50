use crate::colour::colours;
use crate::font::{FontRef, StockFont};
use crate::render::Renderer;
use crate::units::Pt;
use crate::PDFError;

/// Distance between the left edge of a box and left-aligned text
pub const LEFT_INSET: Pt = Pt(2.0);
/// Distance between right-aligned text and the right edge of its box
pub const RIGHT_INSET: Pt = Pt(5.0);
/// How far below the baseline underlines are drawn
pub const UNDERLINE_DROP: Pt = Pt(2.0);
/// How far past the end of the text underlines extend
pub const UNDERLINE_OVERHANG: Pt = Pt(1.0);
/// Stroke width of underlines
pub const UNDERLINE_WIDTH: Pt = Pt(0.5);

/// The font, size, and decoration text is set in. Styles are plain values: every
/// drawing function takes the style it should use, so nothing one function does
/// can leak into the next.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub font: FontRef,
    pub size: Pt,
    pub underline: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font: FontRef::Stock(StockFont::Helvetica),
            size: Pt(10.0),
            underline: false,
        }
    }
}

impl Style {
    /// Plain, non-underlined text in `font` at `size`
    pub fn new<F: Into<FontRef>>(font: F, size: Pt) -> Style {
        Style {
            font: font.into(),
            size,
            underline: false,
        }
    }

    /// The same style, underlined or not
    pub fn with_underline(self, underline: bool) -> Style {
        Style { underline, ..self }
    }

    /// The same style in another font
    pub fn with_font<F: Into<FontRef>>(self, font: F) -> Style {
        Style {
            font: font.into(),
            ..self
        }
    }

    /// The same style in the emphasized variant of its font
    pub fn emphasized(self) -> Style {
        self.with_font(self.font.emphasized())
    }
}

/// Calculate the width of `text` set in `font` at `size`
pub fn width_of_text<R: Renderer + ?Sized>(
    renderer: &R,
    font: FontRef,
    size: Pt,
    text: &str,
) -> Result<Pt, PDFError> {
    let units = renderer.measure_text(font, text)?;
    Ok(Pt(units * size.0 / 1000.0))
}

/// Draw `text` with its baseline starting at `(x, y)`, underlining it if the
/// style asks for it
pub fn add_text<R: Renderer + ?Sized>(
    renderer: &mut R,
    style: &Style,
    x: Pt,
    y: Pt,
    text: &str,
) -> Result<(), PDFError> {
    renderer.set_font(style.font, style.size)?;
    renderer.draw_text(x, y, text)?;
    if style.underline {
        underline_text(renderer, style.font, style.size, x, y, text)?;
    }
    Ok(())
}

/// Draw `text` horizontally centered between `left` and `right`. Text wider
/// than the span overflows both sides equally.
pub fn add_text_centered<R: Renderer + ?Sized>(
    renderer: &mut R,
    style: &Style,
    y: Pt,
    left: Pt,
    right: Pt,
    text: &str,
) -> Result<(), PDFError> {
    let width = width_of_text(renderer, style.font, style.size, text)?;
    let x = left + (right - left - width) / 2.0;
    add_text(renderer, style, x, y, text)
}

/// Draw `text` horizontally centered on a page `page_width` wide
pub fn add_text_centered_on_page<R: Renderer + ?Sized>(
    renderer: &mut R,
    style: &Style,
    page_width: Pt,
    y: Pt,
    text: &str,
) -> Result<(), PDFError> {
    add_text_centered(renderer, style, y, Pt(0.0), page_width, text)
}

/// Draw `text` so that it ends [RIGHT_INSET] before `right`
pub fn add_text_right_aligned<R: Renderer + ?Sized>(
    renderer: &mut R,
    style: &Style,
    y: Pt,
    right: Pt,
    text: &str,
) -> Result<(), PDFError> {
    let width = width_of_text(renderer, style.font, style.size, text)?;
    add_text(renderer, style, right - RIGHT_INSET - width, y, text)
}

/// Underline text whose baseline starts at `(x, y)`, measuring it in the given font
/// and size rather than whatever font is currently selected
pub fn underline_text<R: Renderer + ?Sized>(
    renderer: &mut R,
    font: FontRef,
    size: Pt,
    x: Pt,
    y: Pt,
    text: &str,
) -> Result<(), PDFError> {
    let width = width_of_text(renderer, font, size, text)?;
    let y = y - UNDERLINE_DROP;
    renderer.draw_line(
        (x, y),
        (x + UNDERLINE_OVERHANG + width, y),
        UNDERLINE_WIDTH,
        colours::BLACK,
    )
}
