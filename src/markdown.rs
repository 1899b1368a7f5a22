//! Glue to the upstream markdown parser. Posts are parsed by the `markdown`
//! crate (GFM plus YAML frontmatter) and its mdast output is converted into
//! this crate's own [`Node`] vocabulary, which is what the footnote rewriter
//! and the serialized output operate on. mdast node types outside the
//! vocabulary are tolerated and dropped.

use crate::tree::{Align, Node};
use markdown::mdast;
use markdown::ParseOptions;
use std::fmt;

/// Parses markdown source into a document tree rooted at [`Node::Root`].
pub fn parse(input: &str) -> Result<Node> {
    let mut options = ParseOptions::gfm();
    options.constructs.frontmatter = true;
    let root = markdown::to_mdast(input, &options).map_err(Error::Markdown)?;
    // The mdast root always maps into the vocabulary, but don't assume it.
    Ok(convert(root).unwrap_or(Node::Root {
        children: Vec::new(),
    }))
}

/// Converts one mdast node, or `None` for node types outside the
/// vocabulary (with the constructs enabled above those are limited to
/// math and MDX, neither of which this blog's posts use).
fn convert(node: mdast::Node) -> Option<Node> {
    Some(match node {
        mdast::Node::Root(n) => Node::Root {
            children: convert_children(n.children),
        },
        mdast::Node::Paragraph(n) => Node::Paragraph {
            children: convert_children(n.children),
        },
        mdast::Node::Heading(n) => Node::Heading {
            depth: n.depth,
            children: convert_children(n.children),
        },
        mdast::Node::Blockquote(n) => Node::Blockquote {
            children: convert_children(n.children),
        },
        mdast::Node::List(n) => Node::List {
            ordered: n.ordered,
            children: convert_children(n.children),
        },
        mdast::Node::ListItem(n) => Node::ListItem {
            children: convert_children(n.children),
        },
        mdast::Node::Emphasis(n) => Node::Emphasis {
            children: convert_children(n.children),
        },
        mdast::Node::Strong(n) => Node::Strong {
            children: convert_children(n.children),
        },
        mdast::Node::Delete(n) => Node::Delete {
            children: convert_children(n.children),
        },
        mdast::Node::Link(n) => Node::Link {
            url: n.url,
            title: n.title,
            children: convert_children(n.children),
        },
        mdast::Node::Image(n) => Node::Image {
            url: n.url,
            title: n.title,
            alt: n.alt,
        },
        mdast::Node::Text(n) => Node::Text { value: n.value },
        mdast::Node::InlineCode(n) => Node::InlineCode { value: n.value },
        mdast::Node::Code(n) => Node::Code {
            value: n.value,
            lang: n.lang,
        },
        mdast::Node::Html(n) => Node::Html { value: n.value },
        mdast::Node::Break(_) => Node::Break,
        mdast::Node::ThematicBreak(_) => Node::ThematicBreak,
        mdast::Node::FootnoteReference(n) => Node::FootnoteReference {
            identifier: n.identifier,
            label: n.label,
        },
        mdast::Node::FootnoteDefinition(n) => Node::FootnoteDefinition {
            identifier: n.identifier,
            label: n.label,
            children: convert_children(n.children),
        },
        mdast::Node::Table(n) => Node::Table {
            align: n.align.into_iter().map(convert_align).collect(),
            children: convert_children(n.children),
        },
        mdast::Node::TableRow(n) => Node::TableRow {
            children: convert_children(n.children),
        },
        mdast::Node::TableCell(n) => Node::TableCell {
            children: convert_children(n.children),
        },
        mdast::Node::Definition(n) => Node::Definition {
            identifier: n.identifier,
            label: n.label,
            url: n.url,
            title: n.title,
        },
        mdast::Node::LinkReference(n) => Node::LinkReference {
            identifier: n.identifier,
            label: n.label,
            children: convert_children(n.children),
        },
        mdast::Node::ImageReference(n) => Node::ImageReference {
            identifier: n.identifier,
            label: n.label,
            alt: n.alt,
        },
        mdast::Node::Yaml(n) => Node::Yaml { value: n.value },
        _ => return None,
    })
}

fn convert_children(children: Vec<mdast::Node>) -> Vec<Node> {
    children.into_iter().filter_map(convert).collect()
}

fn convert_align(align: mdast::AlignKind) -> Align {
    match align {
        mdast::AlignKind::Left => Align::Left,
        mdast::AlignKind::Right => Align::Right,
        mdast::AlignKind::Center => Align::Center,
        mdast::AlignKind::None => Align::None,
    }
}

/// The result of parsing a markdown document.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a markdown document.
#[derive(Debug)]
pub enum Error {
    /// Returned when the underlying parser rejects the input. In practice
    /// only MDX syntax can fail to parse, and MDX is not enabled here, but
    /// the parser's signature is fallible so this one is too.
    Markdown(markdown::message::Message),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Markdown(message) => message.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
