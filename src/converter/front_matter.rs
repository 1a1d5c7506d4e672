use super::metadata::PageMetadata;

pub const MARKER: &str = "---";

const OPEN: &str = "---\n";
const CLOSE: &str = "\n---\n";

/// Loose check: ignores leading whitespace before the opening marker.
pub fn has_front_matter(text: &str) -> bool {
    text.trim_start().starts_with(OPEN)
}

/// Strict split into (block including both markers and trailing newline, rest).
///
/// Only recognises a block that opens at byte 0. Text that passes
/// [`has_front_matter`] only after trimming, or has no closing marker,
/// returns `None`.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    if !has_front_matter(text) || !text.starts_with(OPEN) {
        return None;
    }
    let end = text[OPEN.len()..].find(CLOSE)? + OPEN.len() + CLOSE.len();
    Some(text.split_at(end))
}

/// Escape a value for a double-quoted YAML scalar. Backslashes go first so
/// the quote escapes are not doubled.
pub fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the block for a freshly wrapped page, without a trailing newline.
pub fn build(meta: &PageMetadata) -> String {
    let mut lines = vec![
        MARKER.to_string(),
        "layout: default".to_string(),
        format!("lang: {}", meta.lang),
        format!("title: \"{}\"", escape_quoted(&meta.title)),
        format!("og_title: \"{}\"", escape_quoted(&meta.og_title)),
    ];
    if let Some(desc) = &meta.og_description {
        lines.push(format!("og_description: \"{}\"", escape_quoted(desc)));
    }
    lines.push(MARKER.to_string());
    lines.join("\n")
}

// ── Tests ──
