//! Typed model for remote design documents.
//!
//! A higher layer fetches the JSON; this module only describes its shape and
//! lowers component-like nodes into declaration maps so they run through the
//! same property translator as pasted CSS. Node kinds are a tagged enum, and
//! each variant carries only the fields that kind guarantees.

use serde::Deserialize;

use crate::generate::{synthesize_component, ComponentDescriptor};
use crate::parser::declarations::DeclarationMap;
use crate::parser::name::DEFAULT_COMPONENT_NAME;
use crate::style::tailwind::{
    translate_with_options, ColorPolicy, SpacingPolicy, TranslateOptions,
};

/// Unit-interval color channels as design APIs report them.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    pub fn to_rgba(&self) -> String {
        let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
    None,
}

/// Shared shape of the two container kinds (components and frames).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerNode {
    pub id: String,
    pub name: String,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub layout_mode: Option<LayoutMode>,
    pub item_spacing: Option<f64>,
    pub padding_left: Option<f64>,
    pub corner_radius: Option<f64>,
    pub children: Vec<DesignNode>,
}

/// One node of a design document, discriminated by its `type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum DesignNode {
    Component(ContainerNode),
    Frame(ContainerNode),
    Text {
        id: String,
        name: String,
        #[serde(default)]
        characters: String,
    },
    Vector { id: String, name: String },
}

impl DesignNode {
    pub fn name(&self) -> &str {
        match self {
            DesignNode::Component(c) | DesignNode::Frame(c) => &c.name,
            DesignNode::Text { name, .. } | DesignNode::Vector { name, .. } => name,
        }
    }

    pub fn children(&self) -> &[DesignNode] {
        match self {
            DesignNode::Component(c) | DesignNode::Frame(c) => &c.children,
            _ => &[],
        }
    }
}

/// A fetched design file: metadata plus the node tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_modified: String,
    pub document: DesignNode,
}

/// Lower a container node's visual attributes into CSS declarations.
/// Non-container kinds carry no translatable styling and yield an empty map.
pub fn node_declarations(node: &DesignNode) -> DeclarationMap {
    let mut decls = DeclarationMap::new();
    let container = match node {
        DesignNode::Component(c) | DesignNode::Frame(c) => c,
        _ => return decls,
    };

    match container.layout_mode {
        Some(LayoutMode::Horizontal) => {
            decls.insert("display", "flex");
            decls.insert("flex-direction", "row");
        }
        Some(LayoutMode::Vertical) => {
            decls.insert("display", "flex");
            decls.insert("flex-direction", "column");
        }
        Some(LayoutMode::None) | None => {}
    }
    if let Some(spacing) = container.item_spacing {
        decls.insert("gap", &px(spacing));
    }
    if let Some(padding) = container.padding_left {
        decls.insert("padding", &px(padding));
    }
    if let Some(radius) = container.corner_radius {
        decls.insert("border-radius", &px(radius));
    }
    if let Some(fill) = solid_color(&container.fills) {
        decls.insert("background-color", &fill.to_hex());
    }
    if let Some(stroke) = solid_color(&container.strokes) {
        decls.insert("border-color", &stroke.to_hex());
    }
    if let Some(bbox) = &container.absolute_bounding_box {
        decls.insert("width", &px(bbox.width));
        decls.insert("height", &px(bbox.height));
    }

    decls
}

/// Utility classes for one node, using the richer policies: literal colors
/// are preserved and spacing uses the 4px-grid scale, since values coming
/// off a design canvas sit on that grid.
pub fn node_classes(node: &DesignNode) -> Vec<String> {
    let options = TranslateOptions {
        colors: ColorPolicy::Preserve,
        spacing: SpacingPolicy::Scale,
    };
    translate_with_options(&node_declarations(node), options)
}

/// Synthesize a component descriptor straight from a design node.
pub fn component_from_node(node: &DesignNode) -> ComponentDescriptor {
    let name: String = node
        .name()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let name = if name.is_empty() {
        DEFAULT_COMPONENT_NAME.to_string()
    } else {
        name
    };
    let decls = node_declarations(node);
    let classes = node_classes(node);
    synthesize_component(&name, &classes, &decls)
}

/// Walk a node tree and return the component-like nodes in document order.
pub fn collect_components(root: &DesignNode) -> Vec<&DesignNode> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found
}

fn walk<'a>(node: &'a DesignNode, found: &mut Vec<&'a DesignNode>) {
    if matches!(node, DesignNode::Component(_) | DesignNode::Frame(_)) {
        found.push(node);
    }
    for child in node.children() {
        walk(child, found);
    }
}

fn px(value: f64) -> String {
    format!("{}px", value.round() as i64)
}

fn solid_color(paints: &[Paint]) -> Option<Rgba> {
    paints
        .iter()
        .find(|p| p.kind == PaintKind::Solid)
        .and_then(|p| p.color)
}
