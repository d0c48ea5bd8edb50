use pdf_table::colours;
use pdf_table::layout::Style;
use pdf_table::render::{DrawOp, Recording, Renderer};
use pdf_table::table::{Alignment, Edge, Row, Table};
use pdf_table::{Colour, FontRef, PDFError, Pt};
use pretty_assertions::assert_eq;
use std::path::Path;

fn three_row_table() -> Table {
    let mut table = Table::new(Pt(50.0), Pt(700.0));
    table.get_header().add_cell_with_value(Pt(100.0), "Item");
    for name in ["row 1", "row 2", "row 3"] {
        table
            .add_row_with_height(Pt(20.0))
            .add_cell_with_value(Pt(100.0), name);
    }
    table
}

fn body_texts(rec: &Recording) -> Vec<&str> {
    rec.texts().filter(|text| *text != "Item").collect()
}

#[test]
fn short_table_fits_on_one_page() {
    let mut table = three_row_table();
    let mut page = Recording::new();
    let drawn = table
        .draw(&mut page, &Style::default(), Pt(100.0))
        .expect("can draw");

    assert_eq!(drawn, 3);
    assert!(!table.has_next());
    assert_eq!(page.texts().collect::<Vec<_>>(), vec!["Item", "row 1", "row 2", "row 3"]);
}

#[test]
fn rows_below_the_break_continue_on_the_next_call() {
    let mut table = three_row_table();

    let mut first = Recording::new();
    let drawn = table
        .draw(&mut first, &Style::default(), Pt(650.0))
        .expect("can draw first page");
    assert_eq!(drawn, 1);
    assert_eq!(table.remaining(), 2);
    assert_eq!(first.texts().collect::<Vec<_>>(), vec!["Item", "row 1"]);

    // the next page has the whole height available
    table.set_origin(Pt(50.0), Pt(700.0));
    let mut second = Recording::new();
    let drawn = table
        .draw(&mut second, &Style::default(), Pt(100.0))
        .expect("can draw second page");
    assert_eq!(drawn, 2);
    assert_eq!(second.texts().collect::<Vec<_>>(), vec!["Item", "row 2", "row 3"]);
    assert!(!table.has_next());
}

#[test]
fn the_row_crossing_the_break_stays_on_its_page() {
    let mut table = three_row_table();
    let mut pages = Vec::new();
    while table.has_next() {
        let mut page = Recording::new();
        table
            .draw(&mut page, &Style::default(), Pt(650.0))
            .expect("can draw");
        pages.push(page);
    }

    let bodies: Vec<Vec<&str>> = pages.iter().map(body_texts).collect();
    assert_eq!(bodies, vec![vec!["row 1"], vec!["row 2"], vec!["row 3"]]);
}

#[test]
fn every_row_is_drawn_exactly_once_in_order() {
    let mut table = Table::new(Pt(40.0), Pt(800.0));
    for i in 0..57 {
        table
            .add_row_with_height(Pt(15.0 + (i % 4) as f32 * 5.0))
            .add_cell_with_value(Pt(200.0), format!("{i}"));
    }

    let mut seen = Vec::new();
    let mut calls = 0;
    while table.has_next() {
        let mut page = Recording::new();
        let drawn = table
            .draw(&mut page, &Style::default(), Pt(60.0))
            .expect("can draw");
        assert!(drawn > 0);
        seen.extend(page.texts().map(str::to_string));
        calls += 1;
    }

    let expected: Vec<String> = (0..57).map(|i| i.to_string()).collect();
    assert_eq!(seen, expected);
    assert!(calls > 1);
}

#[test]
fn header_is_drawn_once_per_call() {
    let mut table = three_row_table();
    let mut pages = Vec::new();
    while table.has_next() {
        let mut page = Recording::new();
        table
            .draw(&mut page, &Style::default(), Pt(650.0))
            .expect("can draw");
        pages.push(page);
    }
    for page in pages.iter() {
        assert_eq!(page.texts().filter(|text| *text == "Item").count(), 1);
    }
}

#[test]
fn exhausted_table_still_draws_its_header() {
    let mut table = three_row_table();
    table
        .draw(&mut Recording::new(), &Style::default(), Pt(0.0))
        .expect("can draw");
    assert!(!table.has_next());

    let mut again = Recording::new();
    let drawn = table
        .draw(&mut again, &Style::default(), Pt(0.0))
        .expect("can draw an exhausted table");
    assert_eq!(drawn, 0);
    assert_eq!(again.texts().collect::<Vec<_>>(), vec!["Item"]);
    assert!(matches!(table.next_row(), Err(PDFError::ExhaustedIterator)));
}

#[test]
fn body_row_borders_are_drawn_clockwise() {
    let mut table = Table::new(Pt(50.0), Pt(700.0));
    table
        .add_row_with_height(Pt(20.0))
        .add_cell_with_value(Pt(100.0), "x");
    let mut page = Recording::new();
    table
        .draw(&mut page, &Style::default(), Pt(0.0))
        .expect("can draw");

    let lines: Vec<((Pt, Pt), (Pt, Pt))> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    // the empty header still takes up 32pt
    let (l, r, t, b) = (Pt(50.0), Pt(150.0), Pt(668.0), Pt(648.0));
    assert_eq!(
        lines,
        vec![((l, t), (r, t)), ((r, t), (r, b)), ((r, b), (l, b)), ((l, b), (l, t))]
    );
}

#[test]
fn hidden_borders_draw_no_lines_but_keep_the_text() {
    let mut table = Table::new(Pt(50.0), Pt(700.0));
    let row = table.add_row_with_height(Pt(20.0));
    row.add_cell_with_value(Pt(100.0), "left");
    row.add_cell_with_alignment(Pt(100.0), "right", Alignment::Right);
    row.hide_all_borders();

    let mut page = Recording::new();
    table
        .draw(&mut page, &Style::default(), Pt(0.0))
        .expect("can draw");
    assert_eq!(page.line_count(), 0);
    assert_eq!(page.texts().collect::<Vec<_>>(), vec!["left", "right"]);
}

#[test]
fn every_cell_is_drawn_whatever_the_row_cursor_says() {
    let mut row = Row::new(Pt(20.0));
    row.add_cell_with_value(Pt(100.0), "first");
    row.add_cell_with_value(Pt(100.0), "second");
    row.next_cell().expect("row has cells");

    let mut table = Table::new(Pt(50.0), Pt(700.0));
    table.push_row(row);
    let mut page = Recording::new();
    table
        .draw(&mut page, &Style::default(), Pt(0.0))
        .expect("can draw");

    let placed: Vec<(String, Pt)> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, text, .. } => Some((text.clone(), *x)),
            _ => None,
        })
        .collect();
    assert_eq!(
        placed,
        vec![("first".to_string(), Pt(52.0)), ("second".to_string(), Pt(152.0))]
    );
    // four borders per cell
    assert_eq!(page.line_count(), 8);
}

#[test]
fn single_hidden_edge_is_skipped() {
    let mut table = Table::new(Pt(0.0), Pt(500.0));
    table
        .add_row_with_height(Pt(20.0))
        .add_cell_with_value(Pt(100.0), "x")
        .hide_border(Edge::Bottom);
    let mut page = Recording::new();
    table
        .draw(&mut page, &Style::default(), Pt(0.0))
        .expect("can draw");
    assert_eq!(page.line_count(), 3);
}

#[test]
fn renderer_failure_aborts_the_call() {
    let mut table = three_row_table();
    // header: 4 borders, font, text; row 1 gets through its borders only
    let mut page = Recording::failing_after(10);
    let result = table.draw(&mut page, &Style::default(), Pt(0.0));
    assert!(matches!(result, Err(PDFError::Render(_))));
    assert_eq!(page.texts().collect::<Vec<_>>(), vec!["Item"]);
    // the row that was being drawn counts as consumed
    assert_eq!(table.remaining(), 2);
}

/// Measures every string as 40 glyph units, whatever it contains
struct FixedWidth(Recording);

impl Renderer for FixedWidth {
    fn measure_text(&self, _font: FontRef, _text: &str) -> Result<f32, PDFError> {
        Ok(40.0)
    }

    fn set_font(&mut self, font: FontRef, size: Pt) -> Result<(), PDFError> {
        self.0.set_font(font, size)
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), PDFError> {
        self.0.draw_text(x, y, text)
    }

    fn draw_line(
        &mut self,
        from: (Pt, Pt),
        to: (Pt, Pt),
        width: Pt,
        colour: Colour,
    ) -> Result<(), PDFError> {
        self.0.draw_line(from, to, width, colour)
    }

    fn draw_image(
        &mut self,
        path: &Path,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        self.0.draw_image(path, x, y, width, height)
    }
}

fn text_position(ops: &[DrawOp], wanted: &str) -> Option<(Pt, Pt)> {
    ops.iter().find_map(|op| match op {
        DrawOp::Text { x, y, text, .. } if text == wanted => Some((*x, *y)),
        _ => None,
    })
}

#[test]
fn cell_text_alignment() {
    let mut table = Table::new(Pt(50.0), Pt(700.0));
    let row = table.add_row_with_height(Pt(20.0));
    row.add_cell_with_value(Pt(100.0), "left");
    row.add_cell_with_alignment(Pt(100.0), "right", Alignment::Right);
    row.add_cell_with_alignment(Pt(100.0), "center", Alignment::Center);

    let mut renderer = FixedWidth(Recording::new());
    table
        .draw(&mut renderer, &Style::default(), Pt(0.0))
        .expect("can draw");
    let ops = &renderer.0.ops;

    // top edge 668, height 20, size 10
    let baseline = Pt(668.0 - 10.0 - 5.0);
    assert_eq!(text_position(ops, "left"), Some((Pt(52.0), baseline)));
    assert_eq!(
        text_position(ops, "right"),
        Some((Pt(150.0) + Pt(100.0) - Pt(5.0) - Pt(0.4), baseline))
    );
    assert_eq!(
        text_position(ops, "center"),
        Some((Pt(250.0) + (Pt(100.0) - Pt(0.4)) / 2.0, baseline))
    );
}

#[test]
fn borders_are_black_at_their_own_width() {
    let mut table = Table::new(Pt(0.0), Pt(100.0));
    table
        .add_row_with_height(Pt(10.0))
        .add_cell_with_width(Pt(10.0))
        .set_border_width(Edge::Top, Pt(2.0));
    let mut page = Recording::new();
    table
        .draw(&mut page, &Style::default(), Pt(0.0))
        .expect("can draw");

    let widths: Vec<(Pt, Colour)> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { width, colour, .. } => Some((*width, *colour)),
            _ => None,
        })
        .collect();
    assert_eq!(widths[0], (Pt(2.0), colours::BLACK));
    assert!(widths[1..].iter().all(|w| *w == (Pt(0.5), colours::BLACK)));
}
