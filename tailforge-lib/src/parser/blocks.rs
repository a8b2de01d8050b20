use std::str::Lines;

/// Splits raw stylesheet text into brace-balanced rule blocks.
///
/// The returned iterator is lazy and finite; calling `split_into_blocks`
/// again on the same text restarts the scan from the top. An input with no
/// `{` at all yields zero blocks, which callers must treat as "nothing to
/// extract" rather than an internal error.
pub fn split_into_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines(),
    }
}

/// Iterator over brace-balanced blocks of one stylesheet.
pub struct Blocks<'a> {
    lines: Lines<'a>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut buffer = String::new();
        let mut balance: i32 = 0;

        for line in self.lines.by_ref() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            buffer.push_str(line);
            buffer.push('\n');

            // A single line may open and close several braces, so count
            // character by character rather than checking for presence.
            for ch in trimmed.chars() {
                match ch {
                    '{' => balance += 1,
                    '}' => balance -= 1,
                    _ => {}
                }
            }

            if balance == 0 && buffer.contains('{') {
                return Some(buffer.trim().to_string());
            }
        }

        // A buffer that never returned to balance zero is malformed input;
        // it is dropped without raising anything.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_top_level_blocks() {
        let css = r#"
.card {
  display: flex;
}

.card-title {
  font-size: 18px;
}
"#;
        let blocks: Vec<String> = split_into_blocks(css).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with(".card {"));
        assert!(blocks[1].starts_with(".card-title {"));
    }

    #[test]
    fn nested_braces_stay_in_one_block() {
        let css = r#"
@media (min-width: 768px) {
  .card {
    padding: 16px;
  }
}
"#;
        let blocks: Vec<String> = split_into_blocks(css).collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("padding: 16px;"));
    }

    #[test]
    fn input_without_braces_yields_no_blocks() {
        assert_eq!(split_into_blocks("color: red;").count(), 0);
    }

    #[test]
    fn unbalanced_trailing_fragment_is_dropped() {
        let css = ".ok { margin: 8px; }\n.broken {\n  color: red;";
        let blocks: Vec<String> = split_into_blocks(css).collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("margin"));
    }

    #[test]
    fn scan_is_restartable() {
        let css = ".a { display: block; }";
        assert_eq!(split_into_blocks(css).count(), 1);
        assert_eq!(split_into_blocks(css).count(), 1);
    }

    #[test]
    fn multiple_braces_on_one_line() {
        let css = ".inline { display: flex; } .other { display: block; }";
        // Both rules close on the same line, so they land in one block.
        let blocks: Vec<String> = split_into_blocks(css).collect();
        assert_eq!(blocks.len(), 1);
    }
}
