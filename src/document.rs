use crate::{
    font::{Font, StockFont},
    image::Image,
    layout::{add_text, Style},
    page::Page,
    refs::{ObjectReferences, RefType},
    render::PdfRenderer,
    units::Pt,
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;
use tracing::debug;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|p| *p == page)
    }

    /// Add a TrueType font to the document. Fonts are stored "globally" within the
    /// document: any page can use it through the returned id (or a
    /// [FontRef](crate::FontRef) built from it).
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document so it can be painted on any page
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Open a drawing session on a page and hand it to `draw`. The content drawn
    /// during the session, and any images it loaded, are added only if `draw`
    /// succeeds; on error the page and the document are left exactly as they were.
    ///
    /// ```
    /// use pdf_table::{Document, Page, Pt};
    /// use pdf_table::layout::{add_text, Style};
    /// use pdf_table::pagesize;
    ///
    /// let mut doc = Document::default();
    /// let page = doc.add_page(Page::new(pagesize::A4, None));
    /// doc.draw_on_page(page, |renderer| {
    ///     add_text(renderer, &Style::default(), Pt(72.0), Pt(720.0), "Statement of account")
    /// })
    /// .expect("can draw");
    /// assert_eq!(doc.pages[page].contents.len(), 1);
    /// ```
    pub fn draw_on_page<T, F>(&mut self, page: Id<Page>, draw: F) -> Result<T, PDFError>
    where
        F: FnOnce(&mut PdfRenderer<'_>) -> Result<T, PDFError>,
    {
        let Document {
            pages,
            fonts,
            images,
            ..
        } = self;
        let page = pages.get_mut(page).ok_or(PDFError::PageMissing)?;

        let mut renderer = PdfRenderer::new(fonts, images);
        let result = draw(&mut renderer)?;
        let (content, staged) = renderer.finish();
        for image in staged {
            images.alloc(image);
        }
        page.add_raw_content(content);
        Ok(result)
    }

    /// Write the total number of pages at `(x, y)` on every page, for "page n of
    /// N" style footers. Call this once every page has been added.
    pub fn stamp_page_count(&mut self, style: &Style, x: Pt, y: Pt) -> Result<(), PDFError> {
        let total = self.page_count().to_string();
        debug!(pages = self.page_count(), "stamping page count");
        for id in self.page_order.clone() {
            self.draw_on_page(id, |renderer| add_text(renderer, style, x, y, &total))?;
        }
        Ok(())
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. If you have a very large
    /// document, this could allocate a significant amount of memory. This limitation is due
    /// to the underlying pdf-writer implementation.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for stock in StockFont::ALL {
            stock.write(&mut refs, &mut writer);
        }

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        debug!(
            pages = page_order.len(),
            fonts = fonts.len(),
            images = images.len(),
            "writing document"
        );
        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
