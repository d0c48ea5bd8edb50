use crate::units::Pt;

/// One of the four sides of a [Cell](super::Cell)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges, clockwise from the top, which is also the order they are drawn in
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub(crate) fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }

    /// The line this edge occupies on a box whose top-left corner is `(x, top)`.
    /// Segments run clockwise, so the four of them trace the box outline.
    pub fn segment(self, x: Pt, top: Pt, width: Pt, height: Pt) -> ((Pt, Pt), (Pt, Pt)) {
        let right = x + width;
        let bottom = top - height;
        match self {
            Edge::Top => ((x, top), (right, top)),
            Edge::Right => ((right, top), (right, bottom)),
            Edge::Bottom => ((right, bottom), (x, bottom)),
            Edge::Left => ((x, bottom), (x, top)),
        }
    }
}

/// The stroke along one edge of a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    visible: bool,
    width: Pt,
}

impl Default for Border {
    fn default() -> Self {
        Border {
            visible: true,
            width: Pt(0.5),
        }
    }
}

impl Border {
    /// Stroke this edge when the cell is drawn
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Leave this edge out when the cell is drawn
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Stroke width of the edge in points
    pub fn set_width(&mut self, width: Pt) {
        self.width = width;
    }

    /// Whether the edge will be stroked
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Stroke width of the edge in points
    pub fn width(&self) -> Pt {
        self.width
    }
}
