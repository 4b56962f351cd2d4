//! Seed acquisition from text or files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Render a byte count as `B`, `KB` or `MB` with two decimals above 1 KiB.
pub(crate) fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Seed bytes for a text seed.
///
/// Only the empty string is refused; whitespace is ordinary seed content.
pub(crate) fn from_text(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        bail!("seed text is empty");
    }
    Ok(text.as_bytes().to_vec())
}

/// Read a whole file as seed bytes, refusing files larger than `max_size`.
pub(crate) fn from_file(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let file =
        File::open(path).with_context(|| format!("failed to open seed file {}", path.display()))?;

    // Read one byte past the limit so oversized input is detected without
    // trusting file metadata.
    let mut bytes = Vec::new();
    file.take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    if bytes.len() as u64 > max_size {
        bail!(
            "seed file {} exceeds the limit of {}",
            path.display(),
            format_size(max_size)
        );
    }
    if bytes.is_empty() {
        bail!("seed file {} is empty", path.display());
    }
    debug!(path = %path.display(), size = bytes.len(), "read seed file");
    Ok(bytes)
}
