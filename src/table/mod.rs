//! Bordered tables that continue across pages.
//!
//! A [Table] is a stack of [Row]s, each a run of fixed-width [Cell]s, plus a header
//! row that is repeated at the top of every page. Drawing a table onto a page
//! consumes rows until either the table runs out or the next row would start
//! below the page-break threshold; the rows that didn't fit stay in the table and
//! are drawn by the next call, normally on the next page.
//!
//! # Example
//!
//! ```
//! use pdf_table::layout::Style;
//! use pdf_table::render::Recording;
//! use pdf_table::table::{Alignment, Table};
//! use pdf_table::Pt;
//!
//! let mut table = Table::new(Pt(50.0), Pt(700.0));
//! table.get_header().add_cell_with_value(Pt(300.0), "Item");
//! table.get_header().add_cell_with_alignment(Pt(100.0), "Amount", Alignment::Right);
//! for i in 0..100 {
//!     let row = table.add_row_with_height(Pt(20.0));
//!     row.add_cell_with_value(Pt(300.0), format!("Line {i}"));
//!     row.add_cell_with_alignment(Pt(100.0), "9,99", Alignment::Right);
//! }
//!
//! let mut pages = Vec::new();
//! while table.has_next() {
//!     let mut page = Recording::new();
//!     table.draw(&mut page, &Style::default(), Pt(50.0)).expect("can draw");
//!     pages.push(page);
//! }
//! assert_eq!(pages.len(), 4);
//! ```

mod border;
mod cell;
mod row;

pub use border::*;
pub use cell::*;
pub use row::*;

use crate::colour::colours;
use crate::font::FontRef;
use crate::layout::{add_text, add_text_centered, add_text_right_aligned, Style, LEFT_INSET};
use crate::render::Renderer;
use crate::units::Pt;
use crate::PDFError;
use tracing::{debug, trace};

/// Height of the header row of a freshly created table
pub const DEFAULT_HEADER_HEIGHT: Pt = Pt(32.0);

/// An ordered stack of rows drawn top to bottom from an origin (the top-left
/// corner of the table), with a header row repeated on every page.
///
/// Rows are consumed as they are drawn: a table keeps a cursor to the first row
/// that hasn't been drawn yet, so repeated calls to [Table::draw] lay every row
/// out exactly once, in order. The cursor only moves forward; to draw the same
/// rows again, build a new table.
///
/// A table does no locking. Draw calls for one table must come from one caller,
/// in page order.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    origin: (Pt, Pt),
    rows: Vec<Row>,
    header: Row,
    header_font: Option<FontRef>,
    default_columns: Vec<Pt>,
    default_row_height: Pt,
    cursor: usize,
}

impl Table {
    /// An empty table whose top-left corner sits at `(x, y)`
    pub fn new(x: Pt, y: Pt) -> Table {
        Table {
            origin: (x, y),
            rows: Vec::default(),
            header: Row::new(DEFAULT_HEADER_HEIGHT),
            header_font: None,
            default_columns: Vec::default(),
            default_row_height: Pt(0.0),
            cursor: 0,
        }
    }

    /// A table with a single-column template `width` wide and rows `height` high.
    /// Unless both are zero the table starts out with one empty row of that shape.
    pub fn with_default_cell(x: Pt, y: Pt, width: Pt, height: Pt) -> Table {
        let mut table = Table::new(x, y);
        table.default_columns = vec![width];
        table.default_row_height = height;
        if width != Pt(0.0) || height != Pt(0.0) {
            table.add_row().add_cell_with_width(width);
        }
        table
    }

    /// The top-left corner of the table
    pub fn origin(&self) -> (Pt, Pt) {
        self.origin
    }

    /// Move the top-left corner of the table, typically before drawing the
    /// remaining rows on a new page
    pub fn set_origin(&mut self, x: Pt, y: Pt) {
        self.origin = (x, y);
    }

    /// Move the table horizontally
    pub fn set_x(&mut self, x: Pt) {
        self.origin.0 = x;
    }

    /// Move the table vertically
    pub fn set_y(&mut self, y: Pt) {
        self.origin.1 = y;
    }

    /// The row drawn at the top of every page. Add cells to it to give the table
    /// column titles; a header without cells still takes up its height.
    pub fn get_header(&mut self) -> &mut Row {
        &mut self.header
    }

    /// The header row, read-only
    pub fn header(&self) -> &Row {
        &self.header
    }

    /// Draw the header in this font rather than the emphasized variant of the
    /// body font
    pub fn set_header_font<F: Into<FontRef>>(&mut self, font: F) {
        self.header_font = Some(font.into());
    }

    /// Column widths used by [Table::add_templated_row]
    pub fn default_columns(&self) -> &[Pt] {
        &self.default_columns
    }

    /// Replace the column widths used by [Table::add_templated_row]
    pub fn set_default_columns(&mut self, columns: Vec<Pt>) {
        self.default_columns = columns;
    }

    /// Height given to rows added without an explicit height
    pub fn default_row_height(&self) -> Pt {
        self.default_row_height
    }

    /// Change the height given to rows added without an explicit height
    pub fn set_default_row_height(&mut self, height: Pt) {
        self.default_row_height = height;
    }

    /// Append an empty row of the default height
    pub fn add_row(&mut self) -> &mut Row {
        self.add_row_with_height(self.default_row_height)
    }

    /// Append an empty row `height` points high
    pub fn add_row_with_height(&mut self, height: Pt) -> &mut Row {
        self.push_row(Row::new(height))
    }

    /// Append an existing row
    pub fn push_row(&mut self, row: Row) -> &mut Row {
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Append a row of the default height with one cell per default column,
    /// filled with `values` from left to right. Columns without a value are left
    /// empty and values without a column are dropped.
    pub fn add_templated_row<I, S>(&mut self, values: I) -> &mut Row
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Row::new(self.default_row_height);
        let mut values = values.into_iter();
        for width in self.default_columns.iter().copied() {
            let value: String = values.next().map(Into::into).unwrap_or_default();
            row.add_cell_with_value(width, value);
        }
        self.push_row(row)
    }

    /// Number of body rows, drawn or not
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All body rows in drawing order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The body row at `index`, failing with [PDFError::IndexOutOfRange] past the end
    pub fn get_row(&self, index: usize) -> Result<&Row, PDFError> {
        let len = self.rows.len();
        self.rows
            .get(index)
            .ok_or(PDFError::IndexOutOfRange { index, len })
    }

    /// Mutable access to the body row at `index`
    pub fn get_row_mut(&mut self, index: usize) -> Result<&mut Row, PDFError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(PDFError::IndexOutOfRange { index, len })
    }

    /// Show every border of every body row
    pub fn show_all_borders(&mut self) {
        self.rows.iter_mut().for_each(Row::show_all_borders);
    }

    /// Hide every border of every body row
    pub fn hide_all_borders(&mut self) {
        self.rows.iter_mut().for_each(Row::hide_all_borders);
    }

    /// Whether there are rows left to draw
    pub fn has_next(&self) -> bool {
        self.cursor < self.rows.len()
    }

    /// Number of rows not yet drawn
    pub fn remaining(&self) -> usize {
        self.rows.len() - self.cursor
    }

    /// Take the next undrawn row, failing with [PDFError::ExhaustedIterator] if
    /// every row has been drawn
    pub fn next_row(&mut self) -> Result<&mut Row, PDFError> {
        let row = self
            .rows
            .get_mut(self.cursor)
            .ok_or(PDFError::ExhaustedIterator)?;
        self.cursor += 1;
        Ok(row)
    }

    /// Lay the table out on one page, starting at its origin.
    ///
    /// The header is drawn first, in the emphasized variant of `style`'s font (or
    /// the font set with [Table::set_header_font]). Body rows follow in order, each
    /// cell drawn as up to four border lines plus its text. After each row, if the
    /// next row would start below `page_break_y` drawing stops; the row that
    /// crossed the threshold is kept on this page, and whatever is left is drawn by
    /// the next call.
    ///
    /// Returns the number of body rows drawn. Calling this on an exhausted table is
    /// fine: it draws the header alone and returns 0.
    ///
    /// A renderer error aborts the call immediately. The row being drawn at that
    /// moment counts as consumed.
    pub fn draw<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        style: &Style,
        page_break_y: Pt,
    ) -> Result<usize, PDFError> {
        let (origin_x, origin_y) = self.origin;
        let mut y = origin_y;

        let header_style = Style {
            font: self.header_font.unwrap_or_else(|| style.font.emphasized()),
            ..*style
        };
        let mut x = origin_x;
        for cell in self.header.cells() {
            draw_cell(renderer, &header_style, x, y, self.header.height(), cell)?;
            x += cell.width();
        }
        y -= self.header.height();

        let mut drawn = 0;
        while self.has_next() {
            let index = self.cursor;
            let row = self.next_row()?;
            let height = row.height();
            trace!(index, y = y.0, "drawing row");

            let mut x = origin_x;
            for cell in row.cells() {
                draw_cell(renderer, style, x, y, height, cell)?;
                x += cell.width();
            }
            y -= height;
            drawn += 1;

            if y < page_break_y {
                debug!(
                    drawn,
                    remaining = self.remaining(),
                    y = y.0,
                    page_break_y = page_break_y.0,
                    "page break reached"
                );
                return Ok(drawn);
            }
        }

        debug!(drawn, y = y.0, "table finished");
        Ok(drawn)
    }
}

/// The baseline for single-line text in a box whose top edge is at `top`. The
/// font size stands in for the text height, which centers the text vertically
/// well enough for the usual Latin fonts.
pub fn cell_baseline(top: Pt, height: Pt, size: Pt) -> Pt {
    top - height / 2.0 - size / 2.0
}

fn draw_cell<R: Renderer + ?Sized>(
    renderer: &mut R,
    style: &Style,
    x: Pt,
    top: Pt,
    height: Pt,
    cell: &Cell,
) -> Result<(), PDFError> {
    for (edge, border) in cell.visible_borders() {
        let (from, to) = edge.segment(x, top, cell.width(), height);
        renderer.draw_line(from, to, border.width(), colours::BLACK)?;
    }

    let baseline = cell_baseline(top, height, style.size);
    match cell.alignment() {
        Alignment::Left => add_text(renderer, style, x + LEFT_INSET, baseline, cell.value()),
        Alignment::Right => {
            add_text_right_aligned(renderer, style, baseline, x + cell.width(), cell.value())
        }
        Alignment::Center => {
            add_text_centered(renderer, style, baseline, x, x + cell.width(), cell.value())
        }
    }
}
