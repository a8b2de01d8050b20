use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::declarations::DeclarationMap;
use crate::style::tables;

/// How colors outside pure white/black are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Snap every other color onto a fixed neutral slot
    /// (`bg-gray-100` / `text-gray-900`). This is the canonical policy for
    /// pasted CSS and is lossy on purpose.
    #[default]
    FixedPalette,
    /// Keep six-digit hex literals as arbitrary-value classes
    /// (`bg-[#3b82f6]`); non-hex values are dropped.
    Preserve,
}

/// How padding/margin/gap/border-radius pixel values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpacingPolicy {
    /// Snap onto the coarse bucket ladders.
    #[default]
    Bucketed,
    /// Use the generic 4px-grid converter, keeping off-grid values literal.
    Scale,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub colors: ColorPolicy,
    pub spacing: SpacingPolicy,
}

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Translate a declaration map into utility classes with the default
/// (fixed-palette, bucketed) policies.
pub fn translate_declarations(decls: &DeclarationMap) -> Vec<String> {
    translate_with_options(decls, TranslateOptions::default())
}

/// Translate a declaration map into a deduplicated, order-preserving list of
/// utility classes. Declarations matching no rule contribute nothing;
/// translation itself never fails.
pub fn translate_with_options(decls: &DeclarationMap, options: TranslateOptions) -> Vec<String> {
    let mut classes = Vec::new();
    for (property, value) in decls.iter() {
        translate_declaration(property, value, options, &mut classes);
    }
    dedupe(classes)
}

fn translate_declaration(
    property: &str,
    value: &str,
    options: TranslateOptions,
    out: &mut Vec<String>,
) {
    match property {
        "display" => push_keyword(&tables::DISPLAY, value, out),
        "flex-direction" => push_keyword(&tables::FLEX_DIRECTION, value, out),
        "justify-content" => push_keyword(&tables::JUSTIFY_CONTENT, value, out),
        "align-items" => push_keyword(&tables::ALIGN_ITEMS, value, out),
        "text-align" => push_keyword(&tables::TEXT_ALIGN, value, out),

        "padding" => push_spacing("p", value, options.spacing, out),
        "margin" => push_spacing("m", value, options.spacing, out),
        "gap" => push_spacing("gap", value, options.spacing, out),
        "border-radius" => {
            if let Some(px) = tables::first_px(value) {
                out.push(match options.spacing {
                    SpacingPolicy::Bucketed => tables::bucket_radius(px),
                    SpacingPolicy::Scale => tables::px_to_scale_class("rounded", px),
                });
            }
        }

        "font-size" => {
            if let Some(px) = tables::first_px(value) {
                out.push(
                    tables::FONT_SIZE
                        .get(&px)
                        .map(|class| (*class).to_string())
                        .unwrap_or_else(|| format!("text-[{}px]", px)),
                );
            }
        }
        "font-weight" => {
            if let Ok(weight) = value.parse::<u32>() {
                out.push(
                    tables::FONT_WEIGHT
                        .get(&weight)
                        .map(|class| (*class).to_string())
                        .unwrap_or_else(|| format!("font-[{}]", weight)),
                );
            }
        }

        "color" => {
            if let Some(class) = color_class("text", value, options.colors) {
                out.push(class);
            }
        }
        "background-color" => {
            if let Some(class) = color_class("bg", value, options.colors) {
                out.push(class);
            }
        }

        "width" => push_size("w", value, out),
        "height" => push_size("h", value, out),

        _ => {}
    }
}

fn push_keyword(table: &phf::Map<&'static str, &'static str>, value: &str, out: &mut Vec<String>) {
    if let Some(class) = table.get(value) {
        out.push((*class).to_string());
    }
}

fn push_spacing(prefix: &str, value: &str, policy: SpacingPolicy, out: &mut Vec<String>) {
    if let Some(px) = tables::first_px(value) {
        out.push(match policy {
            SpacingPolicy::Bucketed => tables::bucket_spacing(prefix, px),
            SpacingPolicy::Scale => tables::px_to_scale_class(prefix, px),
        });
    }
}

fn color_class(prefix: &str, value: &str, policy: ColorPolicy) -> Option<String> {
    match value {
        "#ffffff" | "white" => Some(format!("{}-white", prefix)),
        "#000000" | "black" => Some(format!("{}-black", prefix)),
        _ => match policy {
            ColorPolicy::FixedPalette => Some(if prefix == "bg" {
                "bg-gray-100".to_string()
            } else {
                "text-gray-900".to_string()
            }),
            ColorPolicy::Preserve => {
                if HEX_COLOR_RE.is_match(value) {
                    Some(format!("{}-[{}]", prefix, value))
                } else {
                    None
                }
            }
        },
    }
}

fn push_size(prefix: &str, value: &str, out: &mut Vec<String>) {
    if value == "100%" {
        out.push(format!("{}-full", prefix));
    } else if let Some(px) = tables::first_px(value) {
        out.push(format!("{}-[{}px]", prefix, px));
    }
}

fn dedupe(classes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    classes
        .into_iter()
        .filter(|class| seen.insert(class.clone()))
        .collect()
}
