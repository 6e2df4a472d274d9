use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize;

use crate::compose::recipes::AssetKind;
use crate::foundation::error::AssetResult;

/// Where and how to write the generated assets.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    pub out_dir: PathBuf,
}

impl GenerateOpts {
    pub const DEFAULT_OUT_DIR: &'static str = "public";
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(Self::DEFAULT_OUT_DIR),
        }
    }
}

/// Record of one asset written to disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub bytes: usize,
}

impl GeneratedAsset {
    /// Human-readable confirmation, e.g. `Generated public/favicon.png (1,234 bytes)`.
    pub fn summary_line(&self) -> String {
        if self.kind.is_raster() {
            format!(
                "Generated {} ({} bytes)",
                self.path.display(),
                format_byte_count(self.bytes)
            )
        } else {
            format!("Generated {}", self.path.display())
        }
    }
}

/// Render `kind` and write it to `out_dir`, replacing any existing file.
///
/// `out_dir` must already exist.
#[tracing::instrument(skip(out_dir), fields(out_dir = %out_dir.display()))]
pub fn write_asset(kind: AssetKind, out_dir: &Path) -> AssetResult<GeneratedAsset> {
    let bytes = kind.render()?;
    let path = out_dir.join(kind.file_name());
    std::fs::write(&path, &bytes).with_context(|| format!("write asset '{}'", path.display()))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote asset");
    Ok(GeneratedAsset {
        kind,
        path,
        bytes: bytes.len(),
    })
}

/// Create the output directory if needed, then write every asset in order.
///
/// Stops at the first failure.
pub fn generate_all(opts: &GenerateOpts) -> AssetResult<Vec<GeneratedAsset>> {
    generate_all_with(opts, |_| {})
}

/// Like [`generate_all`], calling `on_written` after each file lands on disk and
/// before the next asset is drawn.
pub fn generate_all_with(
    opts: &GenerateOpts,
    mut on_written: impl FnMut(&GeneratedAsset),
) -> AssetResult<Vec<GeneratedAsset>> {
    ensure_out_dir(&opts.out_dir)?;
    let mut written = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        let asset = write_asset(kind, &opts.out_dir)?;
        on_written(&asset);
        written.push(asset);
    }
    Ok(written)
}

/// Create `dir` and its parents; an existing directory is not an error.
pub fn ensure_out_dir(dir: &Path) -> AssetResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Decimal byte count with comma thousands separators: `1234567` -> `1,234,567`.
pub fn format_byte_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/output.rs"]
mod tests;
