use super::*;

const INK: Rgba8 = Rgba8::rgb(255, 255, 255);

fn ink_columns(buf: &PixelBuffer) -> Vec<i32> {
    let mut cols = Vec::new();
    for x in 0..buf.width() as i32 {
        if (0..buf.height() as i32).any(|y| buf.pixel(x, y) == Some(INK)) {
            cols.push(x);
        }
    }
    cols
}

#[test]
fn glyph_table_covers_site_copy() {
    for ch in "AM I COOKED? FIND OUT IF AI IS COMING FOR YOUR JOB CHECK SCORE AMICOOKED.IO -01"
        .chars()
    {
        assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
    }
    for ch in ['#', 'a', '2', '!', 'é'] {
        assert!(glyph(ch).is_none(), "unexpected glyph for {ch:?}");
    }
}

#[test]
fn glyph_cells_follow_row_masks() {
    let i = glyph('I').unwrap();
    assert!(i.is_set(0, 0) && i.is_set(4, 0));
    assert!(!i.is_set(0, 1) && i.is_set(2, 1));
    assert!(!i.is_set(5, 0) && !i.is_set(0, 7));

    let dot = glyph('.').unwrap();
    assert_eq!(dot.cells().collect::<Vec<_>>(), vec![(2, 6)]);
    assert_eq!(glyph(' ').unwrap().cells().count(), 0);
}

#[test]
fn text_width_counts_trailing_gap_once() {
    for s in 1..=12 {
        assert_eq!(text_width("A", s), 5 * s);
        assert_eq!(text_width("AB", s), 11 * s);
    }
    assert_eq!(text_width("AM I COOKED?", 12), 12 * 6 * 12 - 12);
}

#[test]
fn centered_x_floors_like_integer_division() {
    // 1200 - (12*72 - 12) = 348 -> 174
    assert_eq!(centered_x(1200, "AM I COOKED?", 12), 174);
    // odd remainder floors
    assert_eq!(centered_x(10, "A", 1), 2);
    // wider than canvas floors toward negative infinity
    assert_eq!(centered_x(4, "AB", 1), -4);
}

#[test]
fn draw_text_scales_each_cell() {
    let mut buf = PixelBuffer::new(20, 20).unwrap();
    let end = draw_text(&mut buf, ".", 1, 2, 2, INK);
    assert_eq!(end, 1 + 6 * 2);

    // '.' has a single cell at col 2, row 6 -> 2x2 block at (5, 14).
    for y in 0..20 {
        for x in 0..20 {
            let inside = (5..7).contains(&x) && (14..16).contains(&y);
            assert_eq!(buf.pixel(x, y) == Some(INK), inside, "pixel ({x},{y})");
        }
    }
}

#[test]
fn draw_text_is_case_insensitive() {
    let mut lower = PixelBuffer::new(40, 10).unwrap();
    let mut upper = PixelBuffer::new(40, 10).unwrap();
    draw_text(&mut lower, "cook", 0, 0, 1, INK);
    draw_text(&mut upper, "COOK", 0, 0, 1, INK);
    assert_eq!(lower, upper);
}

#[test]
fn unknown_character_advances_three_cells_and_draws_nothing() {
    let scale = 2;
    let mut buf = PixelBuffer::new(60, 20).unwrap();
    let end = draw_text(&mut buf, "I#I", 0, 0, scale, INK);
    assert_eq!(end, (6 + 3 + 6) * scale);

    // Second 'I' starts at 6*scale + 3*scale.
    let mut expected = PixelBuffer::new(60, 20).unwrap();
    draw_text(&mut expected, "I", 0, 0, scale, INK);
    draw_text(&mut expected, "I", 9 * scale, 0, scale, INK);
    assert_eq!(buf, expected);

    let cols = ink_columns(&buf);
    assert_eq!(cols.first(), Some(&0));
    assert_eq!(cols.last(), Some(&(9 * scale + 5 * scale - 1)));
    // Nothing drawn in the gap left by '#'.
    assert!(!cols.contains(&(6 * scale)));
    assert!(!cols.contains(&(8 * scale)));
}

#[test]
fn text_is_clipped_at_buffer_edges() {
    let mut buf = PixelBuffer::new(8, 8).unwrap();
    let end = draw_text(&mut buf, "HI", -3, -2, 2, INK);
    assert_eq!(end, -3 + 12 * 2);
    assert!(buf.as_bytes().chunks_exact(4).any(|px| px == INK.to_array()));
}

#[test]
fn huge_scales_saturate_instead_of_overflowing() {
    let scale = 400_000_000;
    let mut buf = PixelBuffer::new(8, 8).unwrap();
    let end = draw_text(&mut buf, "AB", 0, 0, scale, INK);
    assert_eq!(end, i32::MAX);
    // 'A' leaves its first column blank on row 0; every other cell starts off-buffer.
    assert!(buf.as_bytes().iter().all(|&b| b == 0));

    // 'I' fills column 0 of row 0, which covers the whole buffer at this scale.
    draw_text(&mut buf, "I", 0, 0, scale, INK);
    assert!(buf.as_bytes().chunks_exact(4).all(|px| px == INK.to_array()));

    let mut edge = PixelBuffer::new(8, 8).unwrap();
    assert_eq!(draw_text(&mut edge, "#I", i32::MAX - 1, 0, scale, INK), i32::MAX);
    assert!(edge.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn long_text_width_saturates() {
    let long = "A".repeat(1000);
    assert_eq!(text_width(&long, 1_000_000), i32::MAX);
    assert_eq!(centered_x(1200, &long, 1_000_000), i32::MIN);
    assert_eq!(text_width(&long, 2), 1000 * 12 - 2);
}
