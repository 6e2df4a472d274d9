use crate::foundation::core::Rgba8;
use crate::raster::buffer::PixelBuffer;

/// Overwrite every pixel in `[x1, x2) × [y1, y2)`, clipped to the buffer.
///
/// Empty or inverted ranges draw nothing.
pub fn fill_rect(buf: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
    let xs = buf.clip_x(i64::from(x1), i64::from(x2));
    if xs.is_empty() {
        return;
    }
    for y in buf.clip_y(i64::from(y1), i64::from(y2)) {
        buf.fill_span(y, xs.clone(), color);
    }
}

/// Discrete filled disk: sets `(x, y)` iff `(x - cx)² + (y - cy)² <= radius²`.
///
/// Negative radii draw nothing; a zero radius draws the centre pixel only.
pub fn fill_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Rgba8) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let r2 = r * r;

    let xs = buf.clip_x(cx - r, cx + r + 1);
    if xs.is_empty() {
        return;
    }
    for y in buf.clip_y(cy - r, cy + r + 1) {
        let dy = i64::from(y) - cy;
        let rem = r2 - dy * dy;
        // Inside the bounding box each row of the disk is one contiguous run.
        let mut inside = xs.clone().filter(|&x| {
            let dx = i64::from(x) - cx;
            dx * dx <= rem
        });
        if let Some(lo) = inside.next() {
            let hi = inside.last().unwrap_or(lo) + 1;
            buf.fill_span(y, lo..hi, color);
        }
    }
}

/// Rounded rectangle made of two crossbars and four corner disks.
///
/// `radius` is expected to be at most half the shorter side; larger values are not
/// guarded and produce overlapping corners.
pub fn draw_rounded_rect(
    buf: &mut PixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    color: Rgba8,
) {
    fill_rect(buf, x1 + radius, y1, x2 - radius, y2, color);
    fill_rect(buf, x1, y1 + radius, x2, y2 - radius, color);

    fill_circle(buf, x1 + radius, y1 + radius, radius, color);
    fill_circle(buf, x2 - radius, y1 + radius, radius, color);
    fill_circle(buf, x1 + radius, y2 - radius, radius, color);
    fill_circle(buf, x2 - radius, y2 - radius, radius, color);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
