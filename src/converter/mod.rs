pub mod content;
pub mod front_matter;
pub mod metadata;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;
use metadata::{Lang, PageMetadata};

/// Result of running one page's text through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Legacy page wrapped in a freshly built front matter block.
    Wrapped(String),
    /// Existing block kept byte-for-byte, body sliced and cleaned.
    Pruned(String),
    /// Block present but not splittable; only the cleanup filter ran.
    Cleaned(String),
    Unchanged(Skip),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    AlreadyConverted,
    /// No main-content marker, so the page is not in the expected layout.
    NoMainContent,
}

impl Outcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Wrapped(t) | Outcome::Pruned(t) | Outcome::Cleaned(t) => Some(t.as_str()),
            Outcome::Unchanged(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Wrapped(_) => "wrapped",
            Outcome::Pruned(_) => "pruned",
            Outcome::Cleaned(_) => "cleaned",
            Outcome::Unchanged(Skip::AlreadyConverted) => "unchanged",
            Outcome::Unchanged(Skip::NoMainContent) => "skipped (no main content)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Pure conversion: decides what the page should become, without touching disk.
pub fn convert_text(raw: &str, lang: Lang) -> Outcome {
    if front_matter::has_front_matter(raw) {
        return reprocess(raw);
    }

    let meta = PageMetadata::extract(raw, lang);
    let Some(region) = content::content_region(raw) else {
        return Outcome::Unchanged(Skip::NoMainContent);
    };

    let mut body = content::cleanup(region).trim_end().to_string();
    body.push('\n');

    Outcome::Wrapped(format!("{}\n\n{}", front_matter::build(&meta), body))
}

/// Second pass over a page that already carries front matter.
fn reprocess(raw: &str) -> Outcome {
    let Some((block, rest)) = front_matter::split_front_matter(raw) else {
        // Indented or unclosed block: clean the whole text, markers included.
        let cleaned = content::cleanup(raw);
        return if cleaned != raw {
            Outcome::Cleaned(cleaned)
        } else {
            Outcome::Unchanged(Skip::AlreadyConverted)
        };
    };

    let rest = content::from_main(rest).unwrap_or(rest);
    let rest = content::before_footer(rest);
    let cleaned = content::cleanup(rest);
    let rebuilt = format!("{}\n{}", block, cleaned.trim_start());

    if rebuilt != raw {
        Outcome::Pruned(rebuilt)
    } else {
        Outcome::Unchanged(Skip::AlreadyConverted)
    }
}

/// Fold `\r\n` and lone `\r` line endings into `\n`. All marker checks
/// assume LF.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Convert one page in place. Returns whether the page changed (or would
/// have, under [`WriteMode::DryRun`]).
pub fn convert_file(path: &Path, mode: WriteMode) -> Result<bool, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = String::from_utf8_lossy(&bytes);
    let raw = normalize_newlines(&decoded);

    let outcome = convert_text(&raw, Lang::from_path(path));
    debug!(path = %path.display(), outcome = outcome.label(), "converted page");

    let Some(text) = outcome.text() else {
        return Ok(false);
    };
    if mode == WriteMode::Write {
        fs::write(path, text).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(true)
}

// ── Tests ──
