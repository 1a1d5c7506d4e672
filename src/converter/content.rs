use std::sync::LazyLock;

use regex::Regex;

pub const MAIN_MARKER: &str = r#"<div class="main">"#;
pub const FOOTER_MARKER: &str = r#"<div class="footer">"#;

// Inline copy of the responsive-nav toggle, now served from a shared script.
static NAV_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script>\s*function\s+myFunction\s*\(\s*\)\s*\{[\s\S]*?\}\s*</script>\s*")
        .unwrap()
});

/// Slice starting at the first main-content marker (inclusive).
pub fn from_main(text: &str) -> Option<&str> {
    text.find(MAIN_MARKER).map(|idx| &text[idx..])
}

/// Cut just before the first footer marker, or keep everything.
pub fn before_footer(text: &str) -> &str {
    match text.find(FOOTER_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Main marker up to (not including) the footer marker.
pub fn content_region(text: &str) -> Option<&str> {
    from_main(text).map(before_footer)
}

/// Drop every inline `myFunction` script block plus the whitespace after it.
pub fn cleanup(text: &str) -> String {
    NAV_SCRIPT_RE.replace_all(text, "").into_owned()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const NAV_SCRIPT: &str = "<script>function myFunction() { document.getElementById(\"x\").classList.toggle(\"y\"); }</script>\n";

    #[test]
    fn region_excludes_footer() {
        let text = r#"<div class="main">A</div><div class="footer">B</div>"#;
        assert_eq!(content_region(text), Some(r#"<div class="main">A</div>"#));
    }

    #[test]
    fn region_runs_to_end_without_footer() {
        let text = r#"<body><div class="main">A</div></body>"#;
        assert_eq!(content_region(text), Some(r#"<div class="main">A</div></body>"#));
    }

    #[test]
    fn region_requires_main_marker() {
        assert_eq!(content_region(r#"<div class="footer">B</div>"#), None);
        // Marker match is exact, not case-insensitive.
        assert_eq!(content_region(r#"<DIV class="main">A</DIV>"#), None);
    }

    #[test]
    fn footer_before_main_is_ignored() {
        let text = r#"<div class="footer">X</div><div class="main">A</div>"#;
        assert_eq!(content_region(text), Some(r#"<div class="main">A</div>"#));
    }

    #[test]
    fn cleanup_removes_nav_script() {
        let text = format!("{NAV_SCRIPT}<p>rest</p>");
        assert_eq!(cleanup(&text), "<p>rest</p>");
    }

    #[test]
    fn cleanup_is_case_insensitive_and_multiline() {
        let text = "<div>\n<SCRIPT>\n  function  myFunction ( ) {\n    var x = 1;\n    if (x) { x = 2; }\n  }\n</Script>\n\n  <p>after</p>";
        assert_eq!(cleanup(text), "<div>\n<p>after</p>");
    }

    #[test]
    fn cleanup_removes_every_copy() {
        let text = format!("a{NAV_SCRIPT}b{NAV_SCRIPT}c");
        assert_eq!(cleanup(&text), "abc");
    }

    #[test]
    fn cleanup_leaves_other_scripts() {
        let text = "<script>function otherFunction() { go(); }</script>\n<script>function myFunction(a) {}</script>";
        assert_eq!(cleanup(text), text);
    }

    #[test]
    fn cleanup_without_script_is_identical() {
        let text = "<div class=\"main\">\n  <p>Olá</p>\n</div>\n";
        assert_eq!(cleanup(text), text);
    }
}
