use pdf_table::layout::{add_text, add_text_centered_on_page, Margins, Section, Style};
use pdf_table::pagesize;
use pdf_table::table::{Alignment, Edge, Table};
use pdf_table::{Document, In, Page, Pt, StockFont};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=pdf_table=debug shows where the pages break
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let margins = Margins::all(In(0.75));
    let (left, top) = margins.top_left(pagesize::A4.1);

    // columns: description, quantity, unit price, total
    let columns = [Pt(280.0), Pt(50.0), Pt(70.0), Pt(70.0)];

    let mut table = Table::new(left, top - Pt(80.0));
    let header = table.get_header();
    header.add_cell_with_value(columns[0], "Description");
    header.add_cell_with_alignment(columns[1], "Qty", Alignment::Center);
    header.add_cell_with_alignment(columns[2], "Unit price", Alignment::Right);
    header.add_cell_with_alignment(columns[3], "Total", Alignment::Right);

    table.set_default_columns(columns.to_vec());
    table.set_default_row_height(Pt(18.0));
    for i in 1..=120 {
        // a few words of filler text per line item
        let description: String = lipsum::lipsum_words(2 + i % 4);
        let quantity = 1 + i % 7;
        let price = 3.5 * (1 + i % 11) as f32;
        let row = table.add_templated_row([
            description,
            quantity.to_string(),
            format!("{price:.2}"),
            format!("{:.2}", price * quantity as f32),
        ]);
        row.get_cell_mut(1).expect("quantity column").set_alignment(Alignment::Center);
        row.get_cell_mut(2).expect("unit price column").set_alignment(Alignment::Right);
        row.get_cell_mut(3).expect("total column").set_alignment(Alignment::Right);
        // only rule lines between items
        row.hide_border(Edge::Left);
        row.hide_border(Edge::Right);
    }

    // the sender's address sits on every page
    let mut address = Section::new();
    address.set_size(Pt(8.0));
    address.add_underlined(left, top, "ACME Hardware Ltd.");
    address.add(left, top - Pt(10.0), "12 Rue de la Gare");
    address.add(left, top - Pt(20.0), "L-1611 Luxembourg");

    let body = Style::default();
    let title = Style::new(StockFont::HelveticaBold, Pt(16.0));
    let mut doc = Document::default();
    while table.has_next() {
        let page = doc.add_page(Page::new(pagesize::A4, Some(margins.clone())));
        let page_number = doc.page_count();
        doc.draw_on_page(page, |renderer| {
            address.draw(renderer)?;
            add_text_centered_on_page(renderer, &title, pagesize::A4.0, top - Pt(50.0), "Invoice")?;
            table.draw(renderer, &body, margins.page_break())?;
            add_text(
                renderer,
                &body,
                left,
                Pt(30.0),
                &format!("Page {page_number} of"),
            )
        })
        .expect("can draw page");
    }

    // fill in the "of N" now that the number of pages is known
    doc.stamp_page_count(&body, left + Pt(50.0), Pt(30.0))
        .expect("can stamp page count");

    let mut out = std::fs::File::create("invoice.pdf").expect("can create output file");
    doc.write(&mut out).expect("can write pdf");
}
