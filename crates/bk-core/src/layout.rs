use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sizing tokens
// ---------------------------------------------------------------------------

/// One axis of a generic skeleton block, expressed as a utility-class token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Dimension {
    /// Fill the parent (`w-full` / `h-full`).
    Full,
    /// A step on the spacing scale (`w-48`, `h-8`, ...).
    Scale(u16),
}

impl Dimension {
    fn token(self) -> String {
        match self {
            Dimension::Full => "full".to_string(),
            Dimension::Scale(n) => n.to_string(),
        }
    }

    pub fn width_class(self) -> String {
        format!("w-{}", self.token())
    }

    pub fn height_class(self) -> String {
        format!("h-{}", self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl BlockSize {
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Space-separated `w-* h-*` classes.
    pub fn classes(&self) -> String {
        format!("{} {}", self.width.width_class(), self.height.height_class())
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// The closed palette of placeholder widgets a loading view can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum SkeletonPrimitive {
    Form,
    DetailPage,
    CardList { count: usize },
    Table { rows: usize },
    Block(BlockSize),
}

impl SkeletonPrimitive {
    /// Component name as used by the rendering layer.
    pub fn component_name(&self) -> &'static str {
        match self {
            SkeletonPrimitive::Form => "FormSkeleton",
            SkeletonPrimitive::DetailPage => "DetailPageSkeleton",
            SkeletonPrimitive::CardList { .. } => "CardListSkeleton",
            SkeletonPrimitive::Table { .. } => "TableSkeleton",
            SkeletonPrimitive::Block(_) => "Skeleton",
        }
    }
}

impl fmt::Display for SkeletonPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.component_name();
        match self {
            SkeletonPrimitive::CardList { count } => write!(f, "{name} count={count}"),
            SkeletonPrimitive::Table { rows } => write!(f, "{name} rows={rows}"),
            SkeletonPrimitive::Block(size) => write!(f, "{name} {}", size.classes()),
            SkeletonPrimitive::Form | SkeletonPrimitive::DetailPage => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// Padding and vertical rhythm of a wrapping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub padding_x: u8,
    pub padding_y: u8,
    /// `space-y-*` between children; `None` when there is a single child.
    pub spacing: Option<u8>,
}

impl ContainerStyle {
    /// Centered page container used by every loading view.
    pub const PAGE: ContainerStyle = ContainerStyle {
        padding_x: 4,
        padding_y: 8,
        spacing: None,
    };

    pub const fn spaced(self, spacing: u8) -> Self {
        Self {
            spacing: Some(spacing),
            ..self
        }
    }

    pub fn classes(&self) -> String {
        let mut class = format!(
            "container mx-auto px-{} py-{}",
            self.padding_x, self.padding_y
        );
        if let Some(gap) = self.spacing {
            class.push_str(&format!(" space-y-{gap}"));
        }
        class
    }
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self::PAGE
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum LayoutNode {
    Container {
        style: ContainerStyle,
        children: Vec<LayoutNode>,
    },
    Primitive(SkeletonPrimitive),
}

impl LayoutNode {
    pub fn container(style: ContainerStyle, children: Vec<LayoutNode>) -> Self {
        LayoutNode::Container { style, children }
    }

    pub fn primitive(primitive: SkeletonPrimitive) -> Self {
        LayoutNode::Primitive(primitive)
    }

    /// Primitives in depth-first, document order.
    pub fn primitives(&self) -> Vec<SkeletonPrimitive> {
        let mut out = Vec::new();
        self.collect_primitives(&mut out);
        out
    }

    fn collect_primitives(&self, out: &mut Vec<SkeletonPrimitive>) {
        match self {
            LayoutNode::Container { children, .. } => {
                for child in children {
                    child.collect_primitives(out);
                }
            }
            LayoutNode::Primitive(p) => out.push(*p),
        }
    }

    /// A tree is empty when it contains no primitive at all.
    pub fn is_empty(&self) -> bool {
        match self {
            LayoutNode::Container { children, .. } => children.iter().all(LayoutNode::is_empty),
            LayoutNode::Primitive(_) => false,
        }
    }

    /// Number of nodes, containers included.
    pub fn node_count(&self) -> usize {
        match self {
            LayoutNode::Container { children, .. } => {
                1 + children.iter().map(LayoutNode::node_count).sum::<usize>()
            }
            LayoutNode::Primitive(_) => 1,
        }
    }

    /// One-line summary of the primitives, e.g. `Skeleton w-48 h-8 + TableSkeleton rows=10`.
    pub fn summary(&self) -> String {
        self.primitives()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            LayoutNode::Container { style, children } => {
                writeln!(f, "{pad}div.{}", style.classes().replace(' ', "."))?;
                for child in children {
                    child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
            LayoutNode::Primitive(p) => writeln!(f, "{pad}<{p}>"),
        }
    }
}

impl fmt::Display for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_classes() {
        assert_eq!(Dimension::Scale(48).width_class(), "w-48");
        assert_eq!(Dimension::Scale(8).height_class(), "h-8");
        assert_eq!(Dimension::Full.width_class(), "w-full");
    }

    #[test]
    fn container_classes_include_spacing_only_when_set() {
        assert_eq!(ContainerStyle::PAGE.classes(), "container mx-auto px-4 py-8");
        assert_eq!(
            ContainerStyle::PAGE.spaced(6).classes(),
            "container mx-auto px-4 py-8 space-y-6"
        );
    }

    #[test]
    fn empty_container_is_empty() {
        let tree = LayoutNode::container(
            ContainerStyle::PAGE,
            vec![LayoutNode::container(ContainerStyle::PAGE, vec![])],
        );
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn primitives_are_collected_in_document_order() {
        let tree = LayoutNode::container(
            ContainerStyle::PAGE,
            vec![
                LayoutNode::primitive(SkeletonPrimitive::Form),
                LayoutNode::primitive(SkeletonPrimitive::Table { rows: 3 }),
            ],
        );
        assert_eq!(
            tree.primitives(),
            vec![SkeletonPrimitive::Form, SkeletonPrimitive::Table { rows: 3 }]
        );
        assert_eq!(tree.summary(), "FormSkeleton + TableSkeleton rows=3");
    }

    #[test]
    fn display_renders_indented_tree() {
        let tree = LayoutNode::container(
            ContainerStyle::PAGE,
            vec![LayoutNode::primitive(SkeletonPrimitive::CardList { count: 2 })],
        );
        let text = tree.to_string();
        assert_eq!(
            text,
            "div.container.mx-auto.px-4.py-8\n  <CardListSkeleton count=2>\n"
        );
    }

    #[test]
    fn serializes_with_tags() {
        let node = LayoutNode::primitive(SkeletonPrimitive::Table { rows: 10 });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "primitive");
        assert_eq!(json["primitive"], "table");
        assert_eq!(json["rows"], 10);
    }
}
