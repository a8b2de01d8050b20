//! Whole-stylesheet analysis helpers.
//!
//! These operate on raw text rather than a parsed block and feed the token
//! display and export layers. Each scan is a single pass of non-overlapping
//! matches; none of them can fail.

use once_cell::sync::Lazy;
use regex::Regex;

static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([a-zA-Z-]+):\s*([^;]+);").unwrap());
static MEDIA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@media\s*([^{]+)").unwrap());
static KEYFRAMES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@keyframes\s+([a-zA-Z0-9_-]+)").unwrap());
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})|rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)|rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[0-9.]+\s*\)",
    )
    .unwrap()
});
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TRAILING_SEMI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r";\s*\}").unwrap());

/// Everything the analysis pass pulls out of one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetAnalysis {
    pub variables: Vec<(String, String)>,
    pub media_queries: Vec<String>,
    pub keyframes: Vec<String>,
    pub palette: Vec<(String, String)>,
}

pub fn analyze_stylesheet(css: &str) -> StylesheetAnalysis {
    StylesheetAnalysis {
        variables: extract_variables(css),
        media_queries: extract_media_queries(css),
        keyframes: extract_keyframes(css),
        palette: extract_color_palette(css),
    }
}

/// Custom properties (`--name: value;`) in source order.
pub fn extract_variables(css: &str) -> Vec<(String, String)> {
    VARIABLE_RE
        .captures_iter(css)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().trim().to_string();
            Some((name, value))
        })
        .collect()
}

/// `@media` condition texts, trimmed, in source order.
pub fn extract_media_queries(css: &str) -> Vec<String> {
    MEDIA_RE
        .captures_iter(css)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

/// Names of `@keyframes` animations, in source order.
pub fn extract_keyframes(css: &str) -> Vec<String> {
    KEYFRAMES_RE
        .captures_iter(css)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Unique color literals, named `color-1`, `color-2`, … in first-appearance
/// order. Hex, `rgb()` and `rgba()` notations are recognized.
pub fn extract_color_palette(css: &str) -> Vec<(String, String)> {
    let mut palette: Vec<(String, String)> = Vec::new();
    for m in COLOR_RE.find_iter(css) {
        let value = m.as_str().to_string();
        if !palette.iter().any(|(_, v)| *v == value) {
            palette.push((format!("color-{}", palette.len() + 1), value));
        }
    }
    palette
}

/// Strip comments, collapse whitespace, and drop semicolons that directly
/// precede a closing brace.
pub fn minify(css: &str) -> String {
    let stripped = COMMENT_RE.replace_all(css, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let cleaned = TRAILING_SEMI_RE.replace_all(&collapsed, "}");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variables_in_order() {
        let css = ":root {\n  --brand-color: #3b82f6;\n  --spacing-unit: 4px;\n}";
        assert_eq!(
            extract_variables(css),
            vec![
                ("brand-color".to_string(), "#3b82f6".to_string()),
                ("spacing-unit".to_string(), "4px".to_string()),
            ]
        );
    }

    #[test]
    fn media_query_conditions() {
        let css = "@media (min-width: 768px) {\n.a { color: red; }\n}";
        assert_eq!(extract_media_queries(css), vec!["(min-width: 768px)"]);
    }

    #[test]
    fn keyframe_names() {
        let css = "@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }";
        assert_eq!(extract_keyframes(css), vec!["fade-in"]);
    }

    #[test]
    fn palette_deduplicates_by_value() {
        let css = ".a { color: #ff0000; }\n.b { color: #ff0000; background: rgba(0, 0, 0, 0.5); }";
        let palette = extract_color_palette(css);
        assert_eq!(
            palette,
            vec![
                ("color-1".to_string(), "#ff0000".to_string()),
                ("color-2".to_string(), "rgba(0, 0, 0, 0.5)".to_string()),
            ]
        );
    }

    #[test]
    fn minify_strips_comments_and_extra_semicolons() {
        let css = "/* note */\n.a {\n  color: red;\n}";
        assert_eq!(minify(css), ".a { color: red}");
    }
}
