use super::text::{add_text, Style};
use crate::font::FontRef;
use crate::render::Renderer;
use crate::units::Pt;
use crate::PDFError;

/// A piece of text pinned to a position on the page
#[derive(Clone, Debug, PartialEq)]
pub struct SectionElement {
    pub x: Pt,
    pub y: Pt,
    pub value: String,
    pub underline: bool,
}

/// A block of free-standing text elements sharing one font and size, such as an
/// address block or the legal notes at the bottom of an invoice. Unlike a
/// [Table](crate::table::Table), a section is not consumed by drawing it: the same
/// section can be drawn on every page.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    elements: Vec<SectionElement>,
    font: FontRef,
    size: Pt,
}

impl Default for Section {
    fn default() -> Self {
        let style = Style::default();
        Section {
            elements: Vec::default(),
            font: style.font,
            size: style.size,
        }
    }
}

impl Section {
    /// An empty section set in Helvetica 10pt
    pub fn new() -> Section {
        Section::default()
    }

    /// Add a text element at `(x, y)`, returning it for further tweaking
    pub fn add<S: Into<String>>(&mut self, x: Pt, y: Pt, value: S) -> &mut SectionElement {
        self.push(x, y, value.into(), false)
    }

    /// Add an underlined text element at `(x, y)`
    pub fn add_underlined<S: Into<String>>(
        &mut self,
        x: Pt,
        y: Pt,
        value: S,
    ) -> &mut SectionElement {
        self.push(x, y, value.into(), true)
    }

    fn push(&mut self, x: Pt, y: Pt, value: String, underline: bool) -> &mut SectionElement {
        self.elements.push(SectionElement {
            x,
            y,
            value,
            underline,
        });
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    /// Elements in the order they were added, which is the drawing order
    pub fn elements(&self) -> &[SectionElement] {
        &self.elements
    }

    /// Font every element is drawn in
    pub fn set_font<F: Into<FontRef>>(&mut self, font: F) {
        self.font = font.into();
    }

    /// Font size every element is drawn at
    pub fn set_size(&mut self, size: Pt) {
        self.size = size;
    }

    /// The style elements are drawn with, before per-element underlining
    pub fn style(&self) -> Style {
        Style::new(self.font, self.size)
    }

    /// Draw every element in insertion order in the section's own style
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), PDFError> {
        let style = self.style();
        for element in self.elements.iter() {
            add_text(
                renderer,
                &style.with_underline(element.underline),
                element.x,
                element.y,
                &element.value,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StockFont;
    use crate::render::{DrawOp, Recording};

    #[test]
    fn elements_use_the_section_style() {
        let mut section = Section::new();
        section.set_font(StockFont::Courier);
        section.set_size(Pt(8.0));
        section.add(Pt(400.0), Pt(780.0), "ACME Ltd.");
        section.add_underlined(Pt(400.0), Pt(770.0), "Accounts");

        let mut rec = Recording::new();
        section.draw(&mut rec).expect("can draw");

        assert_eq!(rec.texts().collect::<Vec<_>>(), vec!["ACME Ltd.", "Accounts"]);
        assert_eq!(rec.line_count(), 1);
        assert!(rec.ops.iter().all(|op| match op {
            DrawOp::Text { font, size, .. } | DrawOp::SetFont { font, size } => {
                *font == FontRef::Stock(StockFont::Courier) && *size == Pt(8.0)
            }
            _ => true,
        }));
    }

    #[test]
    fn drawing_does_not_consume_the_section() {
        let mut section = Section::new();
        section.add(Pt(10.0), Pt(10.0), "Page footer");
        let mut rec = Recording::new();
        section.draw(&mut rec).expect("first page");
        section.draw(&mut rec).expect("second page");
        assert_eq!(rec.texts().count(), 2);
    }
}
