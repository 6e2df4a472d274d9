//! Procedural generator for the static image assets of the "Am I Cooked?" site.
//!
//! Every raster asset is drawn into an owned RGBA8 [`PixelBuffer`] with a handful of
//! clipped primitives and a 5×7 bitmap font, then serialized by a small PNG writer.
//!
//! # Pipeline overview
//!
//! 1. **Draw**: a fixed recipe (`compose::recipes`) fills a [`PixelBuffer`].
//! 2. **Encode**: [`encode_png`] frames the buffer as signature + IHDR + IDAT + IEND.
//! 3. **Write**: [`write_asset`] / [`generate_all`] place the bytes under the output directory.
//!
//! Writes never blend: every primitive overwrites the pixels it touches with a straight
//! (non-premultiplied) RGBA color, and anything outside the buffer is clipped.
#![forbid(unsafe_code)]

mod compose;
mod encode;
mod foundation;
mod raster;

pub use compose::output::{
    GenerateOpts, GeneratedAsset, ensure_out_dir, format_byte_count, generate_all,
    generate_all_with, write_asset,
};
pub use compose::recipes::{AssetKind, FAVICON_SVG, apple_touch_icon, favicon, og_image};
pub use encode::png::{PNG_SIGNATURE, encode_png, encode_rgba8};
pub use foundation::core::Rgba8;
pub use foundation::error::{AssetError, AssetResult};
pub use raster::buffer::PixelBuffer;
pub use raster::font::{GLYPH_COLS, GLYPH_ROWS, Glyph, centered_x, draw_text, glyph, text_width};
pub use raster::shapes::{draw_rounded_rect, fill_circle, fill_rect};
