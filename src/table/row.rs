use super::border::Edge;
use super::cell::{Alignment, Cell};
use crate::units::Pt;
use crate::PDFError;

/// A left-to-right run of [Cell]s sharing one height. Cells are kept in the order
/// they were added, which is the order they are drawn in.
///
/// Besides random access, a row carries a forward-only cursor over its cells
/// ([Row::has_next] / [Row::next_cell]). The cursor never rewinds; use
/// [Row::get_cell] and [Row::cell_count] to revisit cells. Drawing a row as part of
/// a [Table](super::Table) always draws every cell, wherever the cursor is.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    height: Pt,
    cells: Vec<Cell>,
    cursor: usize,
}

impl Row {
    /// An empty row `height` points high
    pub fn new(height: Pt) -> Row {
        Row {
            height,
            cells: Vec::default(),
            cursor: 0,
        }
    }

    /// Vertical space the row takes up when drawn
    pub fn height(&self) -> Pt {
        self.height
    }

    /// Change the row height; takes effect the next time the row is drawn
    pub fn set_height(&mut self, height: Pt) {
        self.height = height;
    }

    /// Append a cell, returning it for further tweaking
    pub fn add_cell(&mut self, cell: Cell) -> &mut Cell {
        self.cells.push(cell);
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    /// Append an empty, left-aligned cell
    pub fn add_cell_with_width(&mut self, width: Pt) -> &mut Cell {
        self.add_cell(Cell::new(width))
    }

    /// Append a left-aligned cell holding `value`
    pub fn add_cell_with_value<S: Into<String>>(&mut self, width: Pt, value: S) -> &mut Cell {
        self.add_cell(Cell::with_value(width, value))
    }

    /// Append a cell holding `value` with the given text alignment
    pub fn add_cell_with_alignment<S: Into<String>>(
        &mut self,
        width: Pt,
        value: S,
        alignment: Alignment,
    ) -> &mut Cell {
        self.add_cell(Cell::with_alignment(width, value, alignment))
    }

    /// The cell at `index`, failing with [PDFError::IndexOutOfRange] past the end
    pub fn get_cell(&self, index: usize) -> Result<&Cell, PDFError> {
        let len = self.cells.len();
        self.cells
            .get(index)
            .ok_or(PDFError::IndexOutOfRange { index, len })
    }

    /// Mutable access to the cell at `index`
    pub fn get_cell_mut(&mut self, index: usize) -> Result<&mut Cell, PDFError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(PDFError::IndexOutOfRange { index, len })
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells, left to right
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The width the row occupies when drawn. Nothing checks this against the
    /// width of the table the row belongs to.
    pub fn width(&self) -> Pt {
        self.cells.iter().map(Cell::width).sum()
    }

    /// Show every edge of every cell
    pub fn show_all_borders(&mut self) {
        self.cells.iter_mut().for_each(|cell| {
            cell.show_all_borders();
        });
    }

    /// Hide every edge of every cell
    pub fn hide_all_borders(&mut self) {
        self.cells.iter_mut().for_each(|cell| {
            cell.hide_all_borders();
        });
    }

    /// Show the given edge on every cell of the row
    pub fn show_border(&mut self, edge: Edge) {
        self.cells.iter_mut().for_each(|cell| {
            cell.show_border(edge);
        });
    }

    /// Hide the given edge on every cell of the row
    pub fn hide_border(&mut self, edge: Edge) {
        self.cells.iter_mut().for_each(|cell| {
            cell.hide_border(edge);
        });
    }

    /// Whether the cell cursor has cells left to visit
    pub fn has_next(&self) -> bool {
        self.cursor < self.cells.len()
    }

    /// Advance the cell cursor, failing with [PDFError::ExhaustedIterator] once every
    /// cell has been visited
    pub fn next_cell(&mut self) -> Result<&Cell, PDFError> {
        let cell = self
            .cells
            .get(self.cursor)
            .ok_or(PDFError::ExhaustedIterator)?;
        self.cursor += 1;
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invoice_line() -> Row {
        let mut row = Row::new(Pt(20.0));
        row.add_cell_with_value(Pt(250.0), "Consulting");
        row.add_cell_with_alignment(Pt(60.0), "3", Alignment::Center);
        row.add_cell_with_alignment(Pt(100.0), "450,00", Alignment::Right);
        row
    }

    #[test]
    fn cells_keep_insertion_order() {
        let row = invoice_line();
        let values: Vec<&str> = row.cells().iter().map(Cell::value).collect();
        assert_eq!(values, vec!["Consulting", "3", "450,00"]);
        assert_eq!(row.width(), Pt(410.0));
    }

    #[test]
    fn added_cells_can_be_customised_in_place() {
        let mut row = Row::new(Pt(20.0));
        row.add_cell_with_width(Pt(30.0))
            .set_value("#")
            .hide_border(Edge::Left);
        let cell = row.get_cell(0).expect("cell exists");
        assert_eq!(cell.value(), "#");
        assert!(!cell.border(Edge::Left).is_visible());
    }

    #[test]
    fn out_of_range_cells_are_an_error() {
        let row = invoice_line();
        assert!(matches!(
            row.get_cell(3),
            Err(PDFError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn cursor_is_forward_only() {
        let mut row = invoice_line();
        let mut seen = Vec::new();
        while row.has_next() {
            seen.push(row.next_cell().expect("has next").value().to_string());
        }
        assert_eq!(seen, vec!["Consulting", "3", "450,00"]);
        assert!(matches!(row.next_cell(), Err(PDFError::ExhaustedIterator)));
        // random access still works after the cursor is spent
        assert_eq!(row.get_cell(0).expect("cell exists").value(), "Consulting");
    }

    #[test]
    fn row_wide_border_changes_apply_to_every_cell() {
        let mut row = invoice_line();
        row.hide_border(Edge::Top);
        assert!(row.cells().iter().all(|c| !c.border(Edge::Top).is_visible()));
        assert!(row.cells().iter().all(|c| c.border(Edge::Bottom).is_visible()));
        row.hide_all_borders();
        assert!(row.cells().iter().all(|c| c.visible_borders().count() == 0));
        row.show_all_borders();
        assert!(row.cells().iter().all(|c| c.visible_borders().count() == 4));
    }
}
