//! Fixed drawing recipes for each site asset.
//!
//! Coordinates and colors are literals tuned for the site's dark theme; nothing here is
//! configurable.

use serde::Serialize;

use crate::encode::png::encode_png;
use crate::foundation::core::Rgba8;
use crate::foundation::error::AssetResult;
use crate::raster::buffer::PixelBuffer;
use crate::raster::font::{centered_x, draw_text};
use crate::raster::shapes::{draw_rounded_rect, fill_circle, fill_rect};

const PAN_RIM: Rgba8 = Rgba8::rgb(245, 158, 11);
const PAN_CENTER: Rgba8 = Rgba8::rgb(250, 204, 21);
const HANDLE_LIGHT: Rgba8 = Rgba8::rgb(180, 180, 180);
const HANDLE_MID: Rgba8 = Rgba8::rgb(160, 160, 160);
const HANDLE_DARK: Rgba8 = Rgba8::rgb(140, 140, 140);
const STEAM: Rgba8 = Rgba8::rgb(200, 200, 200);
const GLOW: Rgba8 = Rgba8::rgb(239, 68, 68);

const OG_BACKGROUND: Rgba8 = Rgba8::rgb(10, 10, 10);
const OG_SUBTITLE: Rgba8 = Rgba8::rgb(156, 163, 175);
const OG_URL: Rgba8 = Rgba8::rgb(100, 100, 100);
const TOUCH_BACKGROUND: Rgba8 = Rgba8::rgb(15, 15, 15);

pub const OG_SIZE: (u32, u32) = (1200, 630);
pub const FAVICON_SIZE: (u32, u32) = (32, 32);
pub const TOUCH_ICON_SIZE: (u32, u32) = (180, 180);

/// Vector favicon, written verbatim.
pub const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <circle cx="40" cy="55" r="35" fill="#F59E0B"/>
  <circle cx="40" cy="55" r="27" fill="#FACC15"/>
  <rect x="72" y="49" width="25" height="12" rx="3" fill="#A0A0A0"/>
  <rect x="70" y="47" width="6" height="16" rx="2" fill="#888"/>
  <path d="M30 25 Q32 15 34 25" stroke="#ccc" stroke-width="3" fill="none" opacity="0.6"/>
  <path d="M42 22 Q44 12 46 22" stroke="#ccc" stroke-width="3" fill="none" opacity="0.5"/>
  <path d="M52 25 Q54 15 56 25" stroke="#ccc" stroke-width="3" fill="none" opacity="0.4"/>
</svg>"##;

/// The generated site assets, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    OgImage,
    Favicon,
    FaviconSvg,
    AppleTouchIcon,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::OgImage,
        AssetKind::Favicon,
        AssetKind::FaviconSvg,
        AssetKind::AppleTouchIcon,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::OgImage => "og-image.png",
            AssetKind::Favicon => "favicon.png",
            AssetKind::FaviconSvg => "favicon.svg",
            AssetKind::AppleTouchIcon => "apple-touch-icon.png",
        }
    }

    /// Pixel size of raster assets; `None` for the SVG.
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            AssetKind::OgImage => Some(OG_SIZE),
            AssetKind::Favicon => Some(FAVICON_SIZE),
            AssetKind::AppleTouchIcon => Some(TOUCH_ICON_SIZE),
            AssetKind::FaviconSvg => None,
        }
    }

    pub fn is_raster(self) -> bool {
        self.dimensions().is_some()
    }

    /// Draw and serialize the asset to the exact bytes written on disk.
    pub fn render(self) -> AssetResult<Vec<u8>> {
        let buf = match self {
            AssetKind::OgImage => og_image()?,
            AssetKind::Favicon => favicon()?,
            AssetKind::AppleTouchIcon => apple_touch_icon()?,
            AssetKind::FaviconSvg => return Ok(FAVICON_SVG.as_bytes().to_vec()),
        };
        encode_png(&buf)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// 1200×630 Open Graph card: pan emblem, title, tagline, call-to-action button and URL.
#[tracing::instrument]
pub fn og_image() -> AssetResult<PixelBuffer> {
    let (w, h) = OG_SIZE;
    let mut buf = PixelBuffer::new(w, h)?;
    let (wi, hi) = (w as i32, h as i32);

    fill_rect(&mut buf, 0, 0, wi, hi, OG_BACKGROUND);

    // fading red glow along the top edge
    for y in 0..4 {
        let alpha = (200 - y * 50) as u8;
        fill_rect(&mut buf, 0, y, wi, y + 1, GLOW.with_alpha(alpha));
    }

    let (cx, cy) = (600, 180);
    fill_circle(&mut buf, cx, cy, 55, PAN_RIM);
    fill_circle(&mut buf, cx, cy, 42, PAN_CENTER);
    fill_rect(&mut buf, cx + 45, cy - 6, cx + 95, cy + 6, HANDLE_MID);
    fill_rect(&mut buf, cx + 90, cy - 8, cx + 100, cy + 8, HANDLE_DARK);

    let lines: [(&str, i32, i32, Rgba8); 2] = [
        ("AM I COOKED?", 270, 12, Rgba8::WHITE),
        ("FIND OUT IF AI IS COMING FOR YOUR JOB", 390, 4, OG_SUBTITLE),
    ];
    for (text, y, scale, color) in lines {
        draw_text(&mut buf, text, centered_x(w, text, scale), y, scale, color);
    }

    draw_rounded_rect(&mut buf, 350, 470, 850, 520, 8, Rgba8::WHITE);
    let button = "CHECK YOUR SCORE";
    draw_text(&mut buf, button, centered_x(w, button, 4), 480, 4, OG_BACKGROUND);

    let url = "AMICOOKED.IO";
    draw_text(&mut buf, url, centered_x(w, url, 3), 560, 3, OG_URL);

    Ok(buf)
}

/// 32×32 pan with rising steam on a transparent background.
#[tracing::instrument]
pub fn favicon() -> AssetResult<PixelBuffer> {
    let (w, h) = FAVICON_SIZE;
    let mut buf = PixelBuffer::new(w, h)?;

    fill_rect(&mut buf, 0, 0, w as i32, h as i32, Rgba8::TRANSPARENT);

    fill_circle(&mut buf, 14, 16, 12, PAN_RIM);
    fill_circle(&mut buf, 14, 16, 9, PAN_CENTER);

    fill_rect(&mut buf, 25, 14, 32, 18, HANDLE_LIGHT);
    fill_rect(&mut buf, 24, 13, 26, 19, HANDLE_MID);

    for dy in [2, 6, 10] {
        fill_rect(&mut buf, 11, dy, 13, dy + 2, STEAM.with_alpha(180));
        fill_rect(&mut buf, 16, dy + 1, 18, dy + 3, STEAM.with_alpha(140));
    }

    Ok(buf)
}

/// 180×180 home-screen icon: pan and steam puffs on a dark square.
#[tracing::instrument]
pub fn apple_touch_icon() -> AssetResult<PixelBuffer> {
    let (w, h) = TOUCH_ICON_SIZE;
    let mut buf = PixelBuffer::new(w, h)?;

    fill_rect(&mut buf, 0, 0, w as i32, h as i32, TOUCH_BACKGROUND);

    let (cx, cy) = (80, 100);
    fill_circle(&mut buf, cx, cy, 55, PAN_RIM);
    fill_circle(&mut buf, cx, cy, 42, PAN_CENTER);

    fill_rect(&mut buf, 132, 94, 172, 106, HANDLE_LIGHT);
    fill_rect(&mut buf, 130, 92, 134, 108, HANDLE_MID);

    for (i, (sx, sy)) in [(65, 30), (80, 25), (95, 32)].into_iter().enumerate() {
        let alpha = 180 - i as u8 * 30;
        fill_circle(&mut buf, sx, sy, 4, STEAM.with_alpha(alpha));
        fill_circle(&mut buf, sx - 2, sy - 10, 3, STEAM.with_alpha(alpha - 40));
    }

    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/recipes.rs"]
mod tests;
