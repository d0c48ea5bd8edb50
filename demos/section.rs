use pdf_table::layout::{add_text_right_aligned, Section, Style};
use pdf_table::pagesize;
use pdf_table::{Document, Font, FontRef, Page, Pt, StockFont};

fn main() {
    let mut doc = Document::default();

    // pass a TrueType font on the command line to set the letter in it,
    // otherwise fall back to Helvetica
    let font: FontRef = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(path).expect("can read font file");
            let font = Font::load(bytes).expect("can load font");
            doc.add_font(font).into()
        }
        None => StockFont::Helvetica.into(),
    };

    let mut recipient = Section::new();
    recipient.set_font(font);
    recipient.set_size(Pt(11.0));
    recipient.add(Pt(340.0), Pt(720.0), "Mme. Jeanne Weber");
    recipient.add(Pt(340.0), Pt(706.0), "4, Place d'Armes");
    recipient.add(Pt(340.0), Pt(692.0), "L-1136 Luxembourg");

    let mut body = Section::new();
    body.set_font(font);
    body.add_underlined(Pt(72.0), Pt(600.0), "Subject: renewal of your service contract");
    for (i, line) in lipsum::lipsum(60).split(". ").take(8).enumerate() {
        body.add(Pt(72.0), Pt(570.0) - Pt(14.0) * i as f32, line);
    }

    let page = doc.add_page(Page::new(pagesize::A4, None));
    doc.draw_on_page(page, |renderer| {
        recipient.draw(renderer)?;
        body.draw(renderer)?;
        add_text_right_aligned(
            renderer,
            &Style::new(font, Pt(11.0)),
            Pt(760.0),
            Pt(540.0),
            "Luxembourg, 3 March",
        )
    })
    .expect("can draw letter");

    let mut out = std::fs::File::create("section.pdf").expect("can create output file");
    doc.write(&mut out).expect("can write pdf");
}
