//! WinAnsi (Windows-1252) single-byte encoding, used for every string written to a
//! content stream. Both the standard-14 fonts and embedded TrueType fonts are
//! declared with `WinAnsiEncoding`, so a single code table serves both.

use tracing::warn;

/// Characters occupying the 0x80..=0x9F block, in code order. `None` marks the
/// five codes left undefined by the encoding.
const HIGH_BLOCK: [Option<char>; 32] = [
    Some('€'),
    None,
    Some('‚'),
    Some('ƒ'),
    Some('„'),
    Some('…'),
    Some('†'),
    Some('‡'),
    Some('ˆ'),
    Some('‰'),
    Some('Š'),
    Some('‹'),
    Some('Œ'),
    None,
    Some('Ž'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('•'),
    Some('–'),
    Some('—'),
    Some('˜'),
    Some('™'),
    Some('š'),
    Some('›'),
    Some('œ'),
    None,
    Some('ž'),
    Some('Ÿ'),
];

/// Encode a single character, returning [None] if it has no WinAnsi code
pub fn encode_char(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => Some(cp as u8),
        _ => HIGH_BLOCK
            .iter()
            .position(|c| *c == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}

/// Decode a WinAnsi code back into the character it represents
pub fn decode_byte(code: u8) -> Option<char> {
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as char),
        0x80..=0x9F => HIGH_BLOCK[(code - 0x80) as usize],
        _ => None,
    }
}

/// Encode a string for a content stream. Characters outside the encoding are
/// replaced with `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            encode_char(ch).unwrap_or_else(|| {
                warn!(?ch, "character has no WinAnsi code, substituting '?'");
                b'?'
            })
        })
        .collect()
}
