// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Frame color used when a listing names no recognizable color (blue-600).
pub const DEFAULT_FRAME_COLOR: Color = Color::from_rgb8(0x25, 0x63, 0xeb);

/// Rim color (slate-400).
pub const RIM_COLOR: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);

/// Tire color (slate-800).
pub const TIRE_COLOR: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);

/// Color words recognized in listing text, with their swatch values.
const COLOR_WORDS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
    ("red", [0xef, 0x44, 0x44]),
    ("blue", [0x3b, 0x82, 0xf6]),
    ("green", [0x22, 0xc5, 0x5e]),
    ("gray", [0x6b, 0x72, 0x80]),
    ("grey", [0x6b, 0x72, 0x80]),
    ("silver", [0x9c, 0xa3, 0xaf]),
    ("gold", [0xea, 0xb3, 0x08]),
    ("orange", [0xf9, 0x73, 0x16]),
    ("yellow", [0xfa, 0xcc, 0x15]),
    ("purple", [0xa8, 0x55, 0xf7]),
    ("pink", [0xec, 0x48, 0x99]),
    ("brown", [0x92, 0x40, 0x0e]),
    ("navy", [0x1e, 0x3a, 0x8a]),
    ("teal", [0x0d, 0x94, 0x88]),
];

/// Picks a frame color from free listing text such as `"matte black / red"`.
///
/// A `#rrggbb` or `#rgb` code anywhere in the text wins. Otherwise the text
/// is split on whitespace, `,`, `/` and `-`, and the first token naming a
/// known color is used. Anything else yields [`DEFAULT_FRAME_COLOR`].
#[must_use]
pub fn normalize_color(text: Option<&str>) -> Color {
    let Some(text) = text else {
        return DEFAULT_FRAME_COLOR;
    };
    if let Some(color) = find_hex(text) {
        return color;
    }
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '-'))
        .find_map(|token| {
            COLOR_WORDS
                .iter()
                .find(|(word, _)| word.eq_ignore_ascii_case(token))
        })
        .map_or(DEFAULT_FRAME_COLOR, |(_, [r, g, b])| {
            Color::from_rgb8(*r, *g, *b)
        })
}

/// Finds the first `#` followed by six (preferred) or three hex digits.
fn find_hex(text: &str) -> Option<Color> {
    let bytes = text.as_bytes();
    for (i, _) in text.match_indices('#') {
        let digits = bytes[i + 1..]
            .iter()
            .take(6)
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        let hex = &bytes[i + 1..i + 1 + digits];
        match digits {
            6 => {
                return Some(Color::from_rgb8(
                    hex_byte(hex[0], hex[1]),
                    hex_byte(hex[2], hex[3]),
                    hex_byte(hex[4], hex[5]),
                ));
            }
            3..=5 => {
                return Some(Color::from_rgb8(
                    hex_byte(hex[0], hex[0]),
                    hex_byte(hex[1], hex[1]),
                    hex_byte(hex[2], hex[2]),
                ));
            }
            _ => {}
        }
    }
    None
}

fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_nibble(hi) << 4) | hex_nibble(lo)
}

fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}
