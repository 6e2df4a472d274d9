//! Minimal PNG writer: signature, IHDR, a single zlib-compressed IDAT, IEND.
//!
//! Output is always 8-bit truecolor with alpha (color type 6), non-interlaced, with
//! filter type 0 ("none") on every scanline.

use std::io::Write as _;

use anyhow::Context as _;
use flate2::{Compression, Crc, write::ZlibEncoder};

use crate::foundation::error::{AssetError, AssetResult};
use crate::raster::buffer::PixelBuffer;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;
/// Chunk lengths are limited to 2^31 - 1 by the container format.
const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Encode a drawn buffer as a complete PNG file.
#[tracing::instrument(skip(buf), fields(width = buf.width(), height = buf.height()))]
pub fn encode_png(buf: &PixelBuffer) -> AssetResult<Vec<u8>> {
    let raw = scanlines(buf);
    let idat = zlib_best(&raw)?;
    tracing::debug!(raw = raw.len(), compressed = idat.len(), "compressed scanlines");

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + 13);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr(buf.width(), buf.height()))?;
    write_chunk(&mut out, b"IDAT", &idat)?;
    write_chunk(&mut out, b"IEND", &[])?;
    Ok(out)
}

/// Encode raw RGBA8 bytes (`width * height * 4`, row-major) as a PNG file.
pub fn encode_rgba8(width: u32, height: u32, rgba: &[u8]) -> AssetResult<Vec<u8>> {
    let buf = PixelBuffer::from_rgba(width, height, rgba.to_vec())?;
    encode_png(&buf)
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut out = [0u8; 13];
    out[0..4].copy_from_slice(&width.to_be_bytes());
    out[4..8].copy_from_slice(&height.to_be_bytes());
    out[8] = BIT_DEPTH;
    out[9] = COLOR_TYPE_RGBA;
    // compression, filter method, interlace: all 0
    out
}

/// Filter byte followed by the row's pixels, for every row top to bottom.
fn scanlines(buf: &PixelBuffer) -> Vec<u8> {
    let row_len = buf.width() as usize * 4 + 1;
    let mut raw = Vec::with_capacity(row_len * buf.height() as usize);
    for row in buf.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

fn zlib_best(raw: &[u8]) -> AssetResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::with_capacity(raw.len() / 4), Compression::best());
    enc.write_all(raw).context("deflate scanlines")?;
    Ok(enc.finish().context("finish zlib stream")?)
}

/// Append `length | type | payload | crc32(type ++ payload)`.
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], payload: &[u8]) -> AssetResult<()> {
    if payload.len() > MAX_CHUNK_LEN {
        return Err(AssetError::encode(format!(
            "{} chunk payload of {} bytes exceeds the PNG chunk limit",
            String::from_utf8_lossy(kind),
            payload.len()
        )));
    }

    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(payload);

    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
