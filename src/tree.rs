//! Defines the [`Node`] type: the document tree produced by parsing a post's
//! markdown and consumed by the footnote rewriter and, downstream of this
//! crate, by the renderer. The vocabulary mirrors mdast so the serialized
//! form (tagged on `type`, camelCase) matches what renderer plugins expect.

use serde::Serialize;

/// A node in the document tree. Block and inline types that carry children
/// do so as an ordered `Vec<Node>`; leaf text-ish types carry a `value`.
/// Footnote nodes carry an `identifier` and an optional `label` (the label
/// is the identifier as written in the source, before normalization).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        children: Vec<Node>,
    },
    Blockquote {
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Delete {
        children: Vec<Node>,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        url: String,
        title: Option<String>,
        alt: String,
    },
    Text {
        value: String,
    },
    InlineCode {
        value: String,
    },
    Code {
        value: String,
        lang: Option<String>,
    },
    Html {
        value: String,
    },
    Break,
    ThematicBreak,
    FootnoteReference {
        identifier: String,
        label: Option<String>,
    },
    FootnoteDefinition {
        identifier: String,
        label: Option<String>,
        children: Vec<Node>,
    },
    Table {
        align: Vec<Align>,
        children: Vec<Node>,
    },
    TableRow {
        children: Vec<Node>,
    },
    TableCell {
        children: Vec<Node>,
    },
    Definition {
        identifier: String,
        label: Option<String>,
        url: String,
        title: Option<String>,
    },
    LinkReference {
        identifier: String,
        label: Option<String>,
        children: Vec<Node>,
    },
    ImageReference {
        identifier: String,
        label: Option<String>,
        alt: String,
    },
    /// YAML frontmatter. Parsed as an opaque block; the post layer owns the
    /// actual frontmatter schema.
    Yaml {
        value: String,
    },
}

/// Column alignment for [`Node::Table`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Left,
    Right,
    Center,
    None,
}

impl Node {
    /// Constructs a [`Node::Text`] from anything string-like. Text nodes are
    /// built all over the rewriter and its tests, so this earns a shorthand.
    pub fn text<S: Into<String>>(value: S) -> Node {
        Node::Text {
            value: value.into(),
        }
    }

    /// Returns this node's children, or `None` for leaf node types.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::FootnoteDefinition { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::LinkReference { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns this node's children mutably, or `None` for leaf node types.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::FootnoteDefinition { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::LinkReference { children, .. } => Some(children),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_children_parent() {
        let node = Node::Paragraph {
            children: vec![Node::text("hello")],
        };
        assert_eq!(node.children(), Some(&[Node::text("hello")][..]));
    }

    #[test]
    fn test_children_leaf() {
        assert_eq!(Node::text("hello").children(), None);
        assert_eq!(Node::Break.children(), None);
    }

    #[test]
    fn test_serialize_tagged() -> Result<(), serde_yaml::Error> {
        let yaml = serde_yaml::to_string(&Node::FootnoteReference {
            identifier: "1".to_owned(),
            label: Some("1".to_owned()),
        })?;
        assert!(yaml.contains("type: footnoteReference"), "got: {}", yaml);
        assert!(yaml.contains("identifier:"), "got: {}", yaml);
        Ok(())
    }
}
