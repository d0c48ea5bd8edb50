use crate::{
    encoding,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{types::FontFlags, Finish, Name, Pdf};

/// Anything that can report how wide a string of text is. Widths are expressed in
/// glyph-space units, i.e. 1/1000 of the font size: text set at size `s` with a
/// measured width of `w` units spans `w * s / 1000` points.
pub trait FontMetrics {
    /// The PostScript-style name the font is known by
    fn name(&self) -> &str;

    /// Width of `text` in glyph-space units
    fn measure(&self, text: &str) -> f32;
}

/// Fonts every PDF reader ships with. These are never embedded, only named.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StockFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

// AFM advance widths indexed by WinAnsi code, 0 where the code has no glyph
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    // 0x80: Euro, quotes, ellipsis, daggers, OE, Zcaron
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    // 0x90: curly quotes, bullet, dashes, trademark, oe, Ydieresis
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0: accented capitals
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0: accented lowercase
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

impl StockFont {
    pub const ALL: [StockFont; 4] = [
        StockFont::Helvetica,
        StockFont::HelveticaBold,
        StockFont::Courier,
        StockFont::CourierBold,
    ];

    /// The heavier member of the same family; bold fonts are their own emphasis
    pub fn bold(self) -> StockFont {
        match self {
            StockFont::Helvetica | StockFont::HelveticaBold => StockFont::HelveticaBold,
            StockFont::Courier | StockFont::CourierBold => StockFont::CourierBold,
        }
    }

    /// Resource name used inside page content streams
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            StockFont::Helvetica => "SH",
            StockFont::HelveticaBold => "SHB",
            StockFont::Courier => "SC",
            StockFont::CourierBold => "SCB",
        }
    }

    /// Width of the glyph drawn for `ch`, which is `?` for characters WinAnsi
    /// can't express
    fn char_width(self, ch: char) -> u16 {
        let code = encoding::encode_char(ch).unwrap_or(b'?') as usize;
        match self {
            StockFont::Helvetica => HELVETICA_WIDTHS[code],
            StockFont::HelveticaBold => HELVETICA_BOLD_WIDTHS[code],
            StockFont::Courier | StockFont::CourierBold => 600,
        }
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::StockFont(self));
        writer
            .type1_font(id)
            .base_font(Name(self.name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl FontMetrics for StockFont {
    fn name(&self) -> &str {
        match self {
            StockFont::Helvetica => "Helvetica",
            StockFont::HelveticaBold => "Helvetica-Bold",
            StockFont::Courier => "Courier",
            StockFont::CourierBold => "Courier-Bold",
        }
    }

    fn measure(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch) as f32).sum()
    }
}

/// A parsed TrueType font. The font file is embedded in its entirety in the generated
/// PDF as a simple (single-byte, WinAnsi) TrueType font, so large fonts may
/// dramatically increase the size of the generated PDF.
///
/// Fonts are referred to by their [Id] within the document that owns them, usually
/// wrapped up in a [FontRef].
pub struct Font {
    pub face: OwnedFace,
    name: String,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        let name = face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| {
                name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode()
            })
            .and_then(|name| name.to_string())
            .map(|name| {
                name.chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                    .collect::<String>()
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "EmbeddedFont".to_string());

        Ok(Font { face, name })
    }

    /// Advance width of a single character in glyph-space units, 0 if the font has
    /// no glyph for it
    pub fn char_width(&self, ch: char) -> f32 {
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;
        face.glyph_index(ch)
            .and_then(|gid| face.glyph_hor_advance(gid))
            .map(|adv| adv as f32 * scaling)
            .unwrap_or_default()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let descriptor_id = refs.gen(RefType::FontDescriptor(font_index));
        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        let bbox = face.global_bounding_box();
        let mut descriptor = writer.font_descriptor(descriptor_id);
        descriptor
            .name(Name(self.name.as_bytes()))
            .flags(flags)
            .bbox(pdf_writer::Rect {
                x1: bbox.x_min as f32 * scaling,
                y1: bbox.y_min as f32 * scaling,
                x2: bbox.x_max as f32 * scaling,
                y2: bbox.y_max as f32 * scaling,
            })
            .italic_angle(0.0)
            .ascent(face.ascender() as f32 * scaling)
            .descent(face.descender() as f32 * scaling)
            .cap_height(
                face.capital_height()
                    .map(|h| h as f32 * scaling)
                    .unwrap_or(700.0),
            )
            // not recorded in the font file, 80 is what most writers assume
            .stem_v(80.0)
            .font_file2(data_id);
        descriptor.finish();

        // simple fonts address glyphs through the encoding, so widths are listed
        // per WinAnsi code rather than per glyph
        let widths: Vec<f32> = (32u8..=255)
            .map(|code| {
                encoding::decode_byte(code)
                    .map(|ch| self.char_width(ch))
                    .unwrap_or_default()
            })
            .collect();

        let font_id = refs.gen(RefType::Font(font_index));
        let mut font = writer.indirect(font_id).dict();
        font.pair(Name(b"Type"), Name(b"Font"));
        font.pair(Name(b"Subtype"), Name(b"TrueType"));
        font.pair(Name(b"BaseFont"), Name(self.name.as_bytes()));
        font.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
        font.pair(Name(b"FirstChar"), 32);
        font.pair(Name(b"LastChar"), 255);
        font.insert(Name(b"Widths")).array().items(widths);
        font.pair(Name(b"FontDescriptor"), descriptor_id);
        font.finish();
    }
}

impl FontMetrics for Font {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| {
                let drawn = encoding::encode_char(ch)
                    .and_then(encoding::decode_byte)
                    .unwrap_or('?');
                self.char_width(drawn)
            })
            .sum()
    }
}

/// An opaque handle to a font: either one of the reader-supplied stock fonts, or a
/// TrueType font embedded in a [Document](crate::Document)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontRef {
    Stock(StockFont),
    Embedded(Id<Font>),
}

impl FontRef {
    /// The variant used for emphasised text such as table headers. Embedded fonts
    /// carry no family information and are their own emphasis.
    pub fn emphasized(self) -> FontRef {
        match self {
            FontRef::Stock(font) => FontRef::Stock(font.bold()),
            embedded => embedded,
        }
    }
}

impl Default for FontRef {
    fn default() -> Self {
        FontRef::Stock(StockFont::Helvetica)
    }
}

impl From<StockFont> for FontRef {
    fn from(font: StockFont) -> Self {
        FontRef::Stock(font)
    }
}

impl From<Id<Font>> for FontRef {
    fn from(id: Id<Font>) -> Self {
        FontRef::Embedded(id)
    }
}
