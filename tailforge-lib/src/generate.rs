use serde::Serialize;

use crate::error::TranslateError;
use crate::parser::blocks::split_into_blocks;
use crate::parser::declarations::{extract_declarations, DeclarationMap};
use crate::parser::name::extract_component_name;
use crate::style::tailwind::translate_declarations;

/// Breakpoint prefixes counted toward the responsive statistic.
const BREAKPOINT_PREFIXES: &[&str] = &["sm:", "md:", "lg:", "xl:"];

/// Marker identifying animation utility classes.
const ANIMATION_MARKER: &str = "animate-";

/// Counts derived from the declaration map and class list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentStats {
    pub declaration_count: usize,
    pub responsive_class_count: usize,
    pub animation_class_count: usize,
    pub custom_value_class_count: usize,
}

/// The synthesizer's output: everything a caller needs to materialize a
/// component from one translated declaration block.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    /// Props contract with an optional child slot and class override.
    pub props_contract: String,
    /// The translated utility classes, space-joined.
    pub class_string: String,
    /// Full component source embedding the props contract and classes.
    pub component_code: String,
    /// The original declarations re-serialized under the lowercased name.
    pub styled_css: String,
    /// Markup template embedding the joined classes.
    pub markup: String,
    /// The arbitrary-value subset of the class list.
    pub custom_classes: Vec<String>,
    pub stats: ComponentStats,
}

/// Run the whole pipeline on raw stylesheet text: derive a name, split off
/// the first brace-balanced block, extract its declarations, translate them,
/// and synthesize the component descriptor.
pub fn process_stylesheet(css: &str) -> Result<ComponentDescriptor, TranslateError> {
    if css.trim().is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let name = extract_component_name(css);
    let mut blocks = split_into_blocks(css);
    let Some(main_block) = blocks.next() else {
        return Err(TranslateError::NoDeclarationBlock);
    };

    let declarations = extract_declarations(&main_block);
    let classes = translate_declarations(&declarations);
    log::debug!(
        "translated {} declarations into {} utility classes for '{}'",
        declarations.len(),
        classes.len(),
        name
    );

    Ok(synthesize_component(&name, &classes, &declarations))
}

/// Combine a derived name, translated class list, and the original
/// declarations into a component descriptor. Pure and deterministic.
pub fn synthesize_component(
    name: &str,
    classes: &[String],
    declarations: &DeclarationMap,
) -> ComponentDescriptor {
    let class_string = classes.join(" ");

    let props_contract = format!(
        "interface {name}Props {{\n  children?: React.ReactNode;\n  className?: string;\n}}"
    );

    let component_code = format!(
        r#"import React from 'react';
import {{ cn }} from '@/lib/utils';

{props_contract}

const {name} = ({{ children, className }}: {name}Props) => {{
  return (
    <div className={{cn("{class_string}", className)}}>
      {{children}}
    </div>
  );
}};

export default {name};"#
    );

    let declaration_lines = declarations
        .iter()
        .map(|(property, value)| format!("  {}: {};", property, value))
        .collect::<Vec<_>>()
        .join("\n");
    let styled_css = format!(".{} {{\n{}\n}}", name.to_lowercase(), declaration_lines);

    let markup = format!("<div class=\"{class_string}\">\n  <!-- Component content -->\n</div>");

    let custom_classes: Vec<String> = classes
        .iter()
        .filter(|class| is_custom_value(class))
        .cloned()
        .collect();

    let stats = ComponentStats {
        declaration_count: declarations.len(),
        responsive_class_count: classes
            .iter()
            .filter(|class| BREAKPOINT_PREFIXES.iter().any(|p| class.contains(p)))
            .count(),
        animation_class_count: classes
            .iter()
            .filter(|class| class.contains(ANIMATION_MARKER))
            .count(),
        custom_value_class_count: custom_classes.len(),
    };

    ComponentDescriptor {
        name: name.to_string(),
        props_contract,
        class_string,
        component_code,
        styled_css,
        markup,
        custom_classes,
        stats,
    }
}

/// Arbitrary-value classes carry their literal in brackets.
fn is_custom_value(class: &str) -> bool {
    class.contains('[') && class.contains(']')
}
