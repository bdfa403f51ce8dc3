//! JSON export for the frontend.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::record::Competition;

/// Serialize records to `out`. The JSON is written to a sibling temp file
/// first and renamed over the destination, so readers never observe a
/// partial export.
pub fn write_json(records: &[Competition], out: &Path, pretty: bool) -> Result<()> {
    if let Some(dir) = out.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };

    let tmp = out.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, out).with_context(|| format!("replacing {}", out.display()))?;

    info!(out = %out.display(), count = records.len(), "exported competitions");
    Ok(())
}

// ── Tests ──
