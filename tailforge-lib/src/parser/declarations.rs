/// Ordered property → value mapping extracted from one declaration block.
///
/// Keys are unique; a duplicate property keeps its original position and the
/// later value wins. Both sides are stored trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationMap {
    entries: Vec<(String, String)>,
}

impl DeclarationMap {
    pub fn new() -> Self {
        DeclarationMap {
            entries: Vec::new(),
        }
    }

    /// Insert a declaration; the last value for a repeated property wins.
    pub fn insert(&mut self, property: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| p == property) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((property.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Re-serialize as `property: value;` lines, one per declaration.
    pub fn to_css_lines(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pull every `property: value` pair out of one brace-balanced block.
///
/// Plain lines split at the first `:` only, so values like
/// `rgba(0, 0, 0, 0.5)` stay intact, and one trailing `;` is stripped from
/// the value. A line carrying braces is reduced to the body segment between
/// its first `{` and last `}` and that segment is split on `;`, so one-line
/// rules like `.btn { display: flex; padding: 16px; }` still yield their
/// declarations. Anything that leaves an empty property or value after
/// trimming is discarded.
pub fn extract_declarations(block: &str) -> DeclarationMap {
    let mut declarations = DeclarationMap::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.contains('{') || trimmed.contains('}') {
            for segment in inline_body(trimmed).split(';') {
                if !segment.contains('{') && !segment.contains('}') {
                    push_declaration(segment, &mut declarations);
                }
            }
        } else {
            push_declaration(trimmed, &mut declarations);
        }
    }

    declarations
}

/// The body segment of a line that carries braces: everything between the
/// first `{` and the last `}`, or the open side if only one brace is present.
/// A pure selector line (`.btn {`) reduces to an empty segment.
fn inline_body(line: &str) -> &str {
    let start = line.find('{').map(|i| i + 1).unwrap_or(0);
    let end = line.rfind('}').unwrap_or(line.len());
    if start <= end {
        &line[start..end]
    } else {
        ""
    }
}

fn push_declaration(candidate: &str, declarations: &mut DeclarationMap) {
    let Some((property, value)) = candidate.split_once(':') else {
        return;
    };

    let property = property.trim();
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value);

    if !property.is_empty() && !value.is_empty() {
        declarations.insert(property, value);
    }
}
