use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback identifier when neither a comment nor a class selector yields a
/// usable name.
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// Design tools prefix exported blocks with layout chatter; comments holding
/// this phrase are never component names.
const NOISE_PHRASE: &str = "Auto layout";

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*\s*([^*]+)\s*\*/").unwrap());
static CLASS_SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z][a-zA-Z0-9_-]*)").unwrap());

/// Derive a component name from raw stylesheet text.
///
/// The first CSS comment wins if its content is short, free of layout noise,
/// and still holds at least one alphanumeric character once everything else
/// is stripped. Otherwise the first class selector is used with `-` and `_`
/// removed, and failing both the fixed default is returned.
pub fn extract_component_name(css: &str) -> String {
    if let Some(caps) = COMMENT_RE.captures(css) {
        let content = caps.get(1).map_or("", |m| m.as_str()).trim();
        if !content.contains(NOISE_PHRASE) && content.len() < 50 {
            let name: String = content
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            if !name.is_empty() {
                return name;
            }
        }
    }

    if let Some(caps) = CLASS_SELECTOR_RE.captures(css) {
        let selector = caps.get(1).map_or("", |m| m.as_str());
        return selector.chars().filter(|c| *c != '-' && *c != '_').collect();
    }

    DEFAULT_COMPONENT_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_wins_over_class_selector() {
        let css = "/* CardHeader */\n.card-header { display: flex; }";
        assert_eq!(extract_component_name(css), "CardHeader");
    }

    #[test]
    fn comment_content_is_stripped_to_alphanumerics() {
        let css = "/* Primary Button! */\n.btn {}";
        assert_eq!(extract_component_name(css), "PrimaryButton");
    }

    #[test]
    fn noisy_layout_comment_is_skipped() {
        let css = "/* Auto layout */\n.nav-bar { display: flex; }";
        assert_eq!(extract_component_name(css), "navbar");
    }

    #[test]
    fn overlong_comment_is_skipped() {
        let long = "x".repeat(60);
        let css = format!("/* {} */\n.hero_banner {{}}", long);
        assert_eq!(extract_component_name(&css), "herobanner");
    }

    #[test]
    fn class_selector_drops_separators() {
        assert_eq!(extract_component_name(".list-item_row {}"), "listitemrow");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(extract_component_name("div { color: red; }"), "Component");
    }

    #[test]
    fn symbol_only_comment_falls_through() {
        let css = "/* --- */\n.badge {}";
        assert_eq!(extract_component_name(css), "badge");
    }
}
