use crate::font::{Font, StockFont};
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::Arena;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};
use std::io::Write;

/// A single page of a document. Pages don't hold any layout state of their own:
/// every drawing session opened on a page (see
/// [Document::draw_on_page](crate::Document::draw_on_page)) appends one chunk of
/// content stream, and chunks are painted in the order they were committed.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Committed content stream chunks
    pub contents: Vec<Vec<u8>>,
}

impl Page {
    /// Create a new page with the given size and optional margins. Without margins
    /// the content box covers the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Width of the media box
    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    /// Height of the media box
    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Append a chunk of raw content stream to the page
    pub fn add_raw_content<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.contents.push(content.into_iter().collect());
    }

    #[allow(clippy::write_with_newline)]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut content: Vec<u8> = Vec::default();
        // isolate each chunk's graphics state from the next
        for chunk in self.contents.iter() {
            write!(&mut content, "q\n")?;
            content.write_all(chunk)?;
            write!(&mut content, "\nQ\n")?;
        }
        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let page_tree_id = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for stock in StockFont::ALL {
            if let Some(font_ref) = refs.get(RefType::StockFont(stock)) {
                resource_fonts.pair(Name(stock.resource_name().as_bytes()), font_ref);
            }
        }
        for (id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(id.index())) {
                resource_fonts.pair(Name(format!("F{}", id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(id.index())) {
                resource_xobjects.pair(Name(format!("I{}", id.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();
        page.finish();

        let rendered = self.render()?;
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
