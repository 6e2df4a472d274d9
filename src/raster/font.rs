//! Fixed-pitch 5×7 bitmap font.
//!
//! Each glyph cell becomes a `scale × scale` square. Every mapped character advances the
//! cursor by six cells (five columns plus one column of spacing); characters without a
//! glyph draw nothing and advance by three cells.

use crate::foundation::core::Rgba8;
use crate::raster::buffer::PixelBuffer;
use crate::raster::shapes::fill_rect;

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;

const ADVANCE_CELLS: i64 = 6;
const MISSING_ADVANCE_CELLS: i64 = 3;

/// One character bitmap: seven row masks, bit 4 is the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        Self { rows }
    }

    pub fn is_set(&self, col: usize, row: usize) -> bool {
        col < GLYPH_COLS
            && row < GLYPH_ROWS
            && (self.rows[row] >> (GLYPH_COLS - 1 - col)) & 1 == 1
    }

    /// `(col, row)` of every filled cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLS)
                .filter(move |&col| self.is_set(col, row))
                .map(move |col| (col, row))
        })
    }
}

static FONT: &[(char, Glyph)] = &[
    ('A', Glyph::new([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', Glyph::new([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', Glyph::new([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100])),
    ('E', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('G', Glyph::new([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110])),
    ('H', Glyph::new([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', Glyph::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111])),
    ('J', Glyph::new([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', Glyph::new([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', Glyph::new([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', Glyph::new([0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001])),
    ('N', Glyph::new([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001])),
    ('O', Glyph::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('R', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', Glyph::new([0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110])),
    ('T', Glyph::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', Glyph::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', Glyph::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', Glyph::new([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001])),
    ('X', Glyph::new([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', Glyph::new([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('Z', Glyph::new([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('0', Glyph::new([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', Glyph::new([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111])),
    (' ', Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('.', Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100])),
    ('-', Glyph::new([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('?', Glyph::new([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100])),
];

/// Bitmap for `ch`, matched exactly (callers upper-case first).
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    FONT.iter().find(|(c, _)| *c == ch).map(|(_, g)| g)
}

/// Stamp `text` with its top-left corner at `(x, y)`; returns the cursor after the last
/// character.
///
/// Lookup is case-insensitive. Unknown characters are skipped with a narrower advance.
pub fn draw_text(
    buf: &mut PixelBuffer,
    text: &str,
    x: i32,
    y: i32,
    scale: i32,
    color: Rgba8,
) -> i32 {
    let scale = i64::from(scale);
    let y = i64::from(y);
    let mut cursor = i64::from(x);
    for ch in text.chars().flat_map(char::to_uppercase) {
        let Some(g) = glyph(ch) else {
            cursor = cursor.saturating_add(MISSING_ADVANCE_CELLS * scale);
            continue;
        };
        for (col, row) in g.cells() {
            let px = cursor.saturating_add(col as i64 * scale);
            let py = y + row as i64 * scale;
            fill_rect(
                buf,
                clamp_i32(px),
                clamp_i32(py),
                clamp_i32(px.saturating_add(scale)),
                clamp_i32(py + scale),
                color,
            );
        }
        cursor = cursor.saturating_add(ADVANCE_CELLS * scale);
    }
    clamp_i32(cursor)
}

/// Horizontal extent of `text` when every character has a glyph; the trailing
/// one-cell gap after the last character is not counted. Saturates at the `i32` range.
pub fn text_width(text: &str, scale: i32) -> i32 {
    clamp_i32(width_i64(text, scale))
}

/// Left edge that centres `text` on a canvas of `canvas_width` pixels (floored).
pub fn centered_x(canvas_width: u32, text: &str, scale: i32) -> i32 {
    clamp_i32(
        i64::from(canvas_width)
            .saturating_sub(width_i64(text, scale))
            .div_euclid(2),
    )
}

fn width_i64(text: &str, scale: i32) -> i64 {
    let scale = i64::from(scale);
    i64::try_from(text.chars().count())
        .unwrap_or(i64::MAX)
        .saturating_mul(ADVANCE_CELLS * scale)
        .saturating_sub(scale)
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/raster/font.rs"]
mod tests;
