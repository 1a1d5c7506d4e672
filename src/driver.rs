use std::path::{Path, PathBuf};

use tracing::info;

use crate::converter::{self, WriteMode};
use crate::error::ConvertError;

/// One flat directory per language, relative to the root.
pub const LANG_DIRS: &[&str] = &["pt", "en"];
pub const EXTENSION: &str = "html";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub mode: WriteMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: usize,
}

/// All `<root>/<lang>/*.html` files, non-recursive, sorted by path.
pub fn collect_pages(root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let mut pages = Vec::new();

    for dir in LANG_DIRS {
        let pattern = format!("{}/{}/*.{}", escaped_root, dir, EXTENSION);
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                pages.push(path);
            }
        }
    }

    pages.sort();
    Ok(pages)
}

/// Convert every page under the root, one at a time. The first I/O error
/// aborts the run.
pub fn run(config: &RunConfig) -> Result<RunSummary, ConvertError> {
    let pages = collect_pages(&config.root)?;
    info!(root = %config.root.display(), pages = pages.len(), mode = ?config.mode, "Starting conversion");

    let mut summary = RunSummary {
        scanned: pages.len(),
        changed: 0,
    };
    for page in &pages {
        if converter::convert_file(page, config.mode)? {
            summary.changed += 1;
        }
    }

    Ok(summary)
}

// ── Tests ──
