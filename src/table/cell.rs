use super::border::{Border, Edge};
use crate::units::Pt;

/// Horizontal placement of a cell's text
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Starts a fixed 2pt inset from the left edge
    #[default]
    Left,
    /// Ends a fixed 5pt inset from the right edge
    Right,
    /// Centered between the two edges
    Center,
}

/// The smallest unit of a table: a fixed width box holding one line of text
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    width: Pt,
    value: String,
    alignment: Alignment,
    borders: [Border; 4],
}

impl Cell {
    /// An empty, left-aligned cell
    pub fn new(width: Pt) -> Cell {
        Cell::with_alignment(width, "", Alignment::Left)
    }

    /// A left-aligned cell holding `value`
    pub fn with_value<S: Into<String>>(width: Pt, value: S) -> Cell {
        Cell::with_alignment(width, value, Alignment::Left)
    }

    /// A cell holding `value` placed according to `alignment`
    pub fn with_alignment<S: Into<String>>(width: Pt, value: S, alignment: Alignment) -> Cell {
        Cell {
            width,
            value: value.into(),
            alignment,
            borders: [Border::default(); 4],
        }
    }

    /// Horizontal space the cell takes up in its row
    pub fn width(&self) -> Pt {
        self.width
    }

    /// Change the cell width
    pub fn set_width(&mut self, width: Pt) -> &mut Self {
        self.width = width;
        self
    }

    /// The text drawn in the cell
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text drawn in the cell
    pub fn set_value<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.value = value.into();
        self
    }

    /// How the text is placed horizontally
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Change how the text is placed horizontally
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// The border along `edge`
    pub fn border(&self, edge: Edge) -> &Border {
        &self.borders[edge.index()]
    }

    /// Mutable access to the border along `edge`
    pub fn border_mut(&mut self, edge: Edge) -> &mut Border {
        &mut self.borders[edge.index()]
    }

    /// Make the border along `edge` visible
    pub fn show_border(&mut self, edge: Edge) -> &mut Self {
        self.border_mut(edge).show();
        self
    }

    /// Hide the border along `edge`; the other edges are untouched
    pub fn hide_border(&mut self, edge: Edge) -> &mut Self {
        self.border_mut(edge).hide();
        self
    }

    /// Set the stroke width of the border along `edge`
    pub fn set_border_width(&mut self, edge: Edge, width: Pt) -> &mut Self {
        self.border_mut(edge).set_width(width);
        self
    }

    /// Make all four borders visible
    pub fn show_all_borders(&mut self) -> &mut Self {
        self.borders.iter_mut().for_each(Border::show);
        self
    }

    /// Hide all four borders
    pub fn hide_all_borders(&mut self) -> &mut Self {
        self.borders.iter_mut().for_each(Border::hide);
        self
    }

    /// The visible borders of this cell, in drawing order
    pub fn visible_borders(&self) -> impl Iterator<Item = (Edge, &Border)> + '_ {
        Edge::ALL
            .into_iter()
            .map(move |edge| (edge, self.border(edge)))
            .filter(|(_, border)| border.is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cells_are_empty_left_aligned_and_boxed() {
        let cell = Cell::new(Pt(80.0));
        assert_eq!(cell.value(), "");
        assert_eq!(cell.alignment(), Alignment::Left);
        assert_eq!(cell.visible_borders().count(), 4);
    }

    #[test]
    fn hiding_one_edge_leaves_the_others_alone() {
        for edge in Edge::ALL {
            let mut cell = Cell::with_value(Pt(80.0), "Qty");
            cell.hide_border(edge);
            for other in Edge::ALL {
                assert_eq!(cell.border(other).is_visible(), other != edge);
            }
        }
    }

    #[test]
    fn border_widths_are_per_edge() {
        let mut cell = Cell::new(Pt(40.0));
        cell.set_border_width(Edge::Bottom, Pt(2.0));
        assert_eq!(cell.border(Edge::Bottom).width(), Pt(2.0));
        assert_eq!(cell.border(Edge::Top).width(), Pt(0.5));
    }

    #[test]
    fn bulk_border_toggles() {
        let mut cell = Cell::with_alignment(Pt(40.0), "9,99", Alignment::Right);
        cell.hide_all_borders();
        assert_eq!(cell.visible_borders().count(), 0);
        cell.show_border(Edge::Left).show_border(Edge::Right);
        let shown: Vec<Edge> = cell.visible_borders().map(|(edge, _)| edge).collect();
        assert_eq!(shown, vec![Edge::Right, Edge::Left]);
        cell.show_all_borders();
        assert_eq!(cell.visible_borders().count(), 4);
    }
}
