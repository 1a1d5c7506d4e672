use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_TITLE: &str = "Karate Braga";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());
static OG_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+property="og:title"\s+content="(.*?)"\s*/?>"#).unwrap()
});
static OG_DESC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\s+property="og:description"\s+content="(.*?)"\s*/?>"#).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Pt,
    En,
}

impl Lang {
    /// Taken from the immediate parent directory; anything but `en` is `pt`.
    pub fn from_path(path: &Path) -> Self {
        let parent = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str());
        match parent {
            Some("en") => Lang::En,
            _ => Lang::Pt,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub lang: Lang,
    pub title: String,
    pub og_title: String,
    pub og_description: Option<String>,
}

impl PageMetadata {
    /// Pull title and Open Graph fields out of raw legacy markup.
    pub fn extract(raw: &str, lang: Lang) -> Self {
        let title = first_match(&TITLE_RE, raw).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let og_title = first_match(&OG_TITLE_RE, raw).unwrap_or_else(|| title.clone());
        let og_description = first_match(&OG_DESC_RE, raw)
            .map(|desc| collapse_whitespace(&desc))
            .filter(|desc| !desc.is_empty());

        PageMetadata {
            lang,
            title,
            og_title,
            og_description,
        }
    }
}

/// First capture, trimmed. An empty capture counts as absent.
fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
