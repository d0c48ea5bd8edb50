//! The drawing capability consumed by the layout and table code.
//!
//! Layout code never touches a content stream directly: it asks a [Renderer] to
//! measure text, select fonts, and stroke lines. [PdfRenderer] is the real
//! implementation, writing into a page of a [Document](crate::Document);
//! [Recording] captures every call instead, which is handy for dry runs (e.g.
//! counting how many pages a table will need) and for tests.

use crate::colour::Colour;
use crate::encoding;
use crate::font::{Font, FontMetrics, FontRef};
use crate::image::Image;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Arena;
use pdf_writer::{Content, Name, Str};
use std::path::{Path, PathBuf};

/// Primitive drawing operations. Every operation may fail with
/// [PDFError::Render] (or a more specific error) if the sink rejects it.
pub trait Renderer {
    /// Width of `text` set in `font`, in glyph-space units (1/1000 of the font size)
    fn measure_text(&self, font: FontRef, text: &str) -> Result<f32, PDFError>;

    /// Select the font used by subsequent [Renderer::draw_text] calls
    fn set_font(&mut self, font: FontRef, size: Pt) -> Result<(), PDFError>;

    /// Draw `text` with its baseline starting at `(x, y)` in the current font
    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), PDFError>;

    /// Stroke a straight line
    fn draw_line(
        &mut self,
        from: (Pt, Pt),
        to: (Pt, Pt),
        width: Pt,
        colour: Colour,
    ) -> Result<(), PDFError>;

    /// Paint the image stored at `path` with its lower-left corner at `(x, y)`
    fn draw_image(
        &mut self,
        path: &Path,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError>;
}

/// A drawing session on a single page of a [Document](crate::Document). Obtained
/// through [Document::draw_on_page](crate::Document::draw_on_page), which commits the
/// generated content to the page once the session ends successfully.
///
/// Images loaded during the session are held back and only join the document's
/// images when the session is committed.
pub struct PdfRenderer<'d> {
    fonts: &'d Arena<Font>,
    images: &'d Arena<Image>,
    staged_images: Vec<Image>,
    content: Content,
    current_font: Option<(FontRef, Pt)>,
}

impl<'d> PdfRenderer<'d> {
    pub(crate) fn new(fonts: &'d Arena<Font>, images: &'d Arena<Image>) -> Self {
        PdfRenderer {
            fonts,
            images,
            staged_images: Vec::default(),
            content: Content::new(),
            current_font: None,
        }
    }

    fn resource_name(&self, font: FontRef) -> Result<String, PDFError> {
        match font {
            FontRef::Stock(stock) => Ok(stock.resource_name().to_string()),
            FontRef::Embedded(id) => self
                .fonts
                .get(id)
                .map(|_| format!("F{}", id.index()))
                .ok_or(PDFError::FontMissing),
        }
    }

    /// The content stream and the images it paints, in the order they must be
    /// added to the document's image arena
    pub(crate) fn finish(self) -> (Vec<u8>, Vec<Image>) {
        (self.content.finish(), self.staged_images)
    }
}

impl Renderer for PdfRenderer<'_> {
    fn measure_text(&self, font: FontRef, text: &str) -> Result<f32, PDFError> {
        match font {
            FontRef::Stock(stock) => Ok(stock.measure(text)),
            FontRef::Embedded(id) => self
                .fonts
                .get(id)
                .map(|font| font.measure(text))
                .ok_or(PDFError::FontMissing),
        }
    }

    fn set_font(&mut self, font: FontRef, size: Pt) -> Result<(), PDFError> {
        if self.current_font == Some((font, size)) {
            return Ok(());
        }
        let name = self.resource_name(font)?;
        self.content.set_font(Name(name.as_bytes()), size.into());
        self.current_font = Some((font, size));
        Ok(())
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), PDFError> {
        if self.current_font.is_none() {
            return Err(PDFError::Render("text drawn before a font was set".into()));
        }
        let encoded = encoding::encode(text);
        self.content
            .begin_text()
            .set_text_matrix([1.0, 0.0, 0.0, 1.0, x.into(), y.into()])
            .show(Str(&encoded))
            .end_text();
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (Pt, Pt),
        to: (Pt, Pt),
        width: Pt,
        colour: Colour,
    ) -> Result<(), PDFError> {
        colour.apply_stroke(&mut self.content);
        self.content
            .set_line_width(width.into())
            .move_to(from.0.into(), from.1.into())
            .line_to(to.0.into(), to.1.into())
            .stroke();
        Ok(())
    }

    fn draw_image(
        &mut self,
        path: &Path,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        let image = Image::new_from_disk(path)?;
        // staged images are allocated right after the existing ones on commit
        let index = self.images.len() + self.staged_images.len();
        self.staged_images.push(image);
        self.content
            .save_state()
            .transform([width.into(), 0.0, 0.0, height.into(), x.into(), y.into()])
            .x_object(Name(format!("I{index}").as_bytes()))
            .restore_state();
        Ok(())
    }
}

/// A single call captured by [Recording]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetFont {
        font: FontRef,
        size: Pt,
    },
    Text {
        x: Pt,
        y: Pt,
        text: String,
        font: FontRef,
        size: Pt,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        width: Pt,
        colour: Colour,
    },
    Image {
        path: PathBuf,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    },
}

/// A renderer that draws nothing and remembers every operation instead. Only stock
/// fonts can be measured, as there is no document to look embedded fonts up in.
#[derive(Debug, Default)]
pub struct Recording {
    pub ops: Vec<DrawOp>,
    current_font: Option<(FontRef, Pt)>,
    fail_after: Option<usize>,
}

impl Recording {
    /// An empty recording that accepts every operation
    pub fn new() -> Recording {
        Recording::default()
    }

    /// A recording that rejects every draw operation after the first `count`,
    /// simulating a sink that fails mid-page
    pub fn failing_after(count: usize) -> Recording {
        Recording {
            fail_after: Some(count),
            ..Recording::default()
        }
    }

    /// All text drawn so far, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of lines stroked so far
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    fn record(&mut self, op: DrawOp) -> Result<(), PDFError> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(PDFError::Render(format!("sink closed after {limit} operations")));
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Renderer for Recording {
    fn measure_text(&self, font: FontRef, text: &str) -> Result<f32, PDFError> {
        match font {
            FontRef::Stock(stock) => Ok(stock.measure(text)),
            FontRef::Embedded(_) => Err(PDFError::FontMissing),
        }
    }

    fn set_font(&mut self, font: FontRef, size: Pt) -> Result<(), PDFError> {
        self.record(DrawOp::SetFont { font, size })?;
        self.current_font = Some((font, size));
        Ok(())
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), PDFError> {
        let (font, size) = self
            .current_font
            .ok_or_else(|| PDFError::Render("text drawn before a font was set".into()))?;
        self.record(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
        })
    }

    fn draw_line(
        &mut self,
        from: (Pt, Pt),
        to: (Pt, Pt),
        width: Pt,
        colour: Colour,
    ) -> Result<(), PDFError> {
        self.record(DrawOp::Line {
            from,
            to,
            width,
            colour,
        })
    }

    fn draw_image(
        &mut self,
        path: &Path,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        self.record(DrawOp::Image {
            path: path.to_owned(),
            x,
            y,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StockFont;

    #[test]
    fn pdf_renderer_emits_text_and_lines() {
        let fonts = Arena::new();
        let images = Arena::new();
        let mut renderer = PdfRenderer::new(&fonts, &images);
        renderer
            .set_font(StockFont::Helvetica.into(), Pt(10.0))
            .expect("can set font");
        renderer
            .draw_text(Pt(52.0), Pt(600.0), "Total")
            .expect("can draw text");
        renderer
            .draw_line(
                (Pt(50.0), Pt(700.0)),
                (Pt(150.0), Pt(700.0)),
                Pt(0.5),
                crate::colours::BLACK,
            )
            .expect("can draw line");
        let (content, staged) = renderer.finish();
        assert!(staged.is_empty());
        let out = String::from_utf8_lossy(&content).to_string();
        assert!(out.contains("/SH 10 Tf"));
        assert!(out.contains("(Total) Tj"));
        assert!(out.contains("50 700 m"));
        assert!(out.contains("150 700 l"));
    }

    #[test]
    fn text_without_a_font_is_rejected() {
        let fonts = Arena::new();
        let images = Arena::new();
        let mut renderer = PdfRenderer::new(&fonts, &images);
        assert!(matches!(
            renderer.draw_text(Pt(0.0), Pt(0.0), "x"),
            Err(PDFError::Render(_))
        ));
    }

    #[test]
    fn recording_fails_once_its_budget_is_spent() {
        let mut rec = Recording::failing_after(1);
        rec.set_font(StockFont::Courier.into(), Pt(12.0))
            .expect("first op is accepted");
        assert!(rec.draw_text(Pt(0.0), Pt(0.0), "x").is_err());
        assert_eq!(rec.ops.len(), 1);
    }
}
