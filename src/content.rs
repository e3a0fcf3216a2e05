//! Viewer-side lookup of the markdown behind an entry.
//!
//! The catalog treats `Entry::file` as an opaque string. Tools that need the
//! actual page resolve it here against a content root, and anything that
//! would land outside that root is refused.

use crate::catalog::Entry;
use crate::config::CONTENT_ROOT_ENV;
use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONTENT_DIR: &str = "content";

fn root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.trim().is_empty() {
        return None;
    }
    let path = PathBuf::from(hint);
    if !path.is_dir() {
        return None;
    }
    fs::canonicalize(path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let candidate = dir.join(CONTENT_DIR);
        if candidate.is_dir() {
            return fs::canonicalize(candidate).ok();
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the content root.
///
/// Search order: `PATTERNBOOK_ROOT` when it names a directory, then the
/// nearest `content/` directory above the working directory, then `content/`
/// next to this crate's manifest.
pub fn find_content_root() -> Result<PathBuf> {
    if let Ok(hint) = env::var(CONTENT_ROOT_ENV) {
        if let Some(root) = root_from_hint(&hint) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    if let Some(root) = root_from_hint(&bundled.to_string_lossy()) {
        return Ok(root);
    }

    bail!("Unable to locate the content directory. Set {CONTENT_ROOT_ENV} to the markdown root.");
}

/// Resolve `entry.file` to a markdown file under `content_root`.
pub fn resolve_entry_file(content_root: &Path, entry: &Entry) -> Result<PathBuf> {
    let root = fs::canonicalize(content_root)
        .with_context(|| format!("Unable to canonicalize content root {}", content_root.display()))?;
    let relative = entry.file.trim();
    if relative.is_empty() {
        bail!("Entry '{}' has no file", entry.id);
    }
    let relative = relative.strip_prefix("./").unwrap_or(relative);

    let candidate = root.join(relative);
    let Ok(canonical) = fs::canonicalize(&candidate) else {
        bail!(
            "Content for entry '{}' not found at {}",
            entry.id,
            candidate.display()
        );
    };
    if !canonical.starts_with(&root) {
        bail!(
            "Content for entry '{}' resolves outside {}",
            entry.id,
            root.display()
        );
    }
    if !canonical.is_file() {
        bail!("Content for entry '{}' is not a file: {}", entry.id, canonical.display());
    }

    debug!(entry = %entry.id, path = %canonical.display(), "resolved entry content");
    Ok(canonical)
}
