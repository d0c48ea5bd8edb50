use pdf_writer::Content;

/// A colour, expressed in RGB or CMYK colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Select this colour as the stroking colour of a content stream
    pub(crate) fn apply_stroke(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const GREY: Colour = Colour::Grey { g: 0.5 };
    /// The dark teal used for headings in generated reports (0, 80, 111)
    pub const TEAL: Colour = Colour::RGB {
        r: 0.0,
        g: 80.0 / 255.0,
        b: 111.0 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_components_are_normalised() {
        assert_eq!(Colour::new_rgb_bytes(0, 80, 111), colours::TEAL);
    }

    #[test]
    fn stroke_colour_matches_the_colour_space() {
        let mut content = Content::new();
        colours::GREY.apply_stroke(&mut content);
        Colour::CMYK {
            c: 1.0,
            m: 0.0,
            y: 0.0,
            k: 0.0,
        }
        .apply_stroke(&mut content);
        let out = String::from_utf8(content.finish()).expect("utf8");
        assert!(out.contains("0.5 G"));
        assert!(out.contains("1 0 0 0 K"));
    }
}
