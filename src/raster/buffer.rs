use std::ops::Range;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{AssetError, AssetResult};

/// Owned RGBA8 image, row-major, top-to-bottom, tightly packed.
///
/// Pixel `(x, y)` channel `c` lives at `(y * width + x) * 4 + c`. Every write goes
/// through a clipping accessor, so out-of-range coordinates are dropped rather than
/// wrapping into a neighbouring row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a transparent black buffer.
    pub fn new(width: u32, height: u32) -> AssetResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap existing RGBA8 bytes; the slice length must be `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> AssetResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(AssetError::validation(format!(
                "pixel buffer expects {len} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let idx = self.index(x, y)?;
        Some(Rgba8::from_array([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]))
    }

    /// Overwrite one pixel. Returns `false` when `(x, y)` was clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.data[idx..idx + 4].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    /// Scanlines, each `width * 4` bytes.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.stride())
    }

    /// Clip a half-open span `[lo, hi)` on the x axis.
    pub(crate) fn clip_x(&self, lo: i64, hi: i64) -> Range<u32> {
        clip_span(lo, hi, self.width)
    }

    /// Clip a half-open span `[lo, hi)` on the y axis.
    pub(crate) fn clip_y(&self, lo: i64, hi: i64) -> Range<u32> {
        clip_span(lo, hi, self.height)
    }

    /// Overwrite the already-clipped run `xs` of row `y`.
    pub(crate) fn fill_span(&mut self, y: u32, xs: Range<u32>, color: Rgba8) {
        if xs.is_empty() || y >= self.height || xs.end > self.width {
            return;
        }
        let row = y as usize * self.stride();
        let start = row + xs.start as usize * 4;
        let end = row + xs.end as usize * 4;
        let px = color.to_array();
        for dst in self.data[start..end].chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    fn stride(&self) -> usize {
        self.width as usize * 4
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

fn byte_len(width: u32, height: u32) -> AssetResult<usize> {
    if width == 0 || height == 0 {
        return Err(AssetError::validation(format!(
            "pixel buffer dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| AssetError::validation("pixel buffer size overflow"))
}

fn clip_span(lo: i64, hi: i64, limit: u32) -> Range<u32> {
    let lo = lo.clamp(0, i64::from(limit)) as u32;
    let hi = hi.clamp(0, i64::from(limit)) as u32;
    if lo >= hi { 0..0 } else { lo..hi }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
