//! The inline-footnote rewriter. Markdown proper only supports footnotes as
//! a reference (`[^1]`) plus a separate definition (`[^1]: ...`) somewhere
//! else in the document; posts on this blog are written with the shorthand
//! `^[body goes here]` instead, declaring the footnote at its point of use.
//! [`rewrite`] converts every shorthand occurrence in a parsed document tree
//! into a [`Node::FootnoteReference`] at the call site plus a
//! [`Node::FootnoteDefinition`] appended to the end of the document, minting
//! identifiers that never collide with footnotes already written the long
//! way.
//!
//! The rewrite is a build-time convenience, not a validator: an unterminated
//! `^[` is left alone as literal text, and it must run at most once per
//! document (references it emits are no longer text nodes, so a second run
//! finds nothing, but mixing rewritten and source trees is on the caller).

use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// The shorthand pattern. Non-greedy, so the body runs to the *first* `]`,
/// and `.` keeps a match from spanning lines. Nested brackets are not
/// supported; the body must be at least one character.
static SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\[(.+?)\]").expect("shorthand footnote pattern"));

/// Byte length of the opening `^[` marker.
const MARKER_OPEN: usize = 2;

/// Byte length of the closing `]` marker.
const MARKER_CLOSE: usize = 1;

/// Allocates footnote identifiers that don't collide with identifiers
/// already present in a document. Seed it with every identifier in use,
/// then each [`IdAllocator::claim`] returns the smallest free identifier at
/// or above the running counter (the counter sits just past the largest
/// seeded identifier, so gaps *below* it are deliberately never reused).
pub struct IdAllocator {
    in_use: HashSet<u64>,
    next: u64,
}

impl IdAllocator {
    /// Constructs an empty allocator whose first claim will be `1`.
    pub fn new() -> IdAllocator {
        IdAllocator {
            in_use: HashSet::new(),
            next: 1,
        }
    }

    /// Marks `id` as in use and raises the counter past it.
    pub fn seed(&mut self, id: u64) {
        self.in_use.insert(id);
        let candidate = id.saturating_add(1);
        if candidate > self.next {
            self.next = candidate;
        }
    }

    /// Claims the next free identifier: a forward linear probe from the
    /// counter, skipping anything seeded or previously claimed. The counter
    /// rarely collides in practice, but the probe is what keeps two claims
    /// in the same pass from ever returning the same identifier.
    pub fn claim(&mut self) -> u64 {
        let mut id = self.next;
        while self.in_use.contains(&id) {
            id += 1;
        }
        self.in_use.insert(id);
        self.next = id.saturating_add(1);
        id
    }
}

impl Default for IdAllocator {
    fn default() -> IdAllocator {
        IdAllocator::new()
    }
}

/// Rewrites every shorthand footnote in `tree`, in place, and returns the
/// number of footnotes created.
///
/// Three phases:
///
/// 1. Collect the numeric identifiers of every existing footnote reference
///    and definition into an [`IdAllocator`]. Identifiers that don't parse
///    as integers (markdown allows `[^note]`) are ignored; they can't
///    collide with the numeric identifiers minted here.
/// 2. Walk the tree in document order. Each text node containing shorthand
///    matches is replaced by its literal segments interleaved with
///    [`Node::FootnoteReference`]s; a definition holding the shorthand body
///    as a single paragraph is recorded per match. Text nodes without
///    matches are left untouched.
/// 3. Append the recorded definitions, in the order their shorthands were
///    encountered, to the end of the document's top-level children.
pub fn rewrite(tree: &mut Node) -> usize {
    let mut ids = IdAllocator::new();
    collect_existing(tree, &mut ids);

    let mut pending = Vec::new();
    rewrite_children(tree, &mut ids, &mut pending);

    let created = pending.len();
    if created > 0 {
        if let Some(children) = tree.children_mut() {
            children.append(&mut pending);
        }
    }
    created
}

/// Seeds `ids` with every numeric footnote identifier in the tree.
fn collect_existing(node: &Node, ids: &mut IdAllocator) {
    match node {
        Node::FootnoteReference { identifier, .. }
        | Node::FootnoteDefinition { identifier, .. } => {
            if let Ok(id) = identifier.parse::<u64>() {
                ids.seed(id);
            }
        }
        _ => {}
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_existing(child, ids);
        }
    }
}

/// Rebuilds `node`'s child list with shorthand text nodes split into
/// segment/reference runs. Rebuilding into a fresh `Vec` (rather than
/// splicing the list being walked) keeps the traversal order well-defined
/// while children are replaced one-to-many.
fn rewrite_children(node: &mut Node, ids: &mut IdAllocator, pending: &mut Vec<Node>) {
    let children = match node.children_mut() {
        Some(children) => children,
        None => return,
    };

    let old = std::mem::take(children);
    let mut rebuilt = Vec::with_capacity(old.len());
    for child in old {
        match child {
            Node::Text { value } => {
                let spans = shorthand_spans(&value);
                if spans.is_empty() {
                    rebuilt.push(Node::Text { value });
                } else {
                    split_text(&value, &spans, ids, pending, &mut rebuilt);
                }
            }
            mut other => {
                rewrite_children(&mut other, ids, pending);
                rebuilt.push(other);
            }
        }
    }
    *children = rebuilt;
}

/// Returns the byte spans of every shorthand match in `value`, left to
/// right. Pure: all matcher state lives in the shared, immutable pattern.
fn shorthand_spans(value: &str) -> Vec<(usize, usize)> {
    SHORTHAND
        .find_iter(value)
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Emits the replacement run for one text node into `out`: the literal text
/// between matches (empty segments omitted) interleaved with freshly
/// numbered references, recording one definition per match into `pending`.
fn split_text(
    value: &str,
    spans: &[(usize, usize)],
    ids: &mut IdAllocator,
    pending: &mut Vec<Node>,
    out: &mut Vec<Node>,
) {
    let mut cursor = 0;
    for &(start, end) in spans {
        if start > cursor {
            out.push(Node::text(&value[cursor..start]));
        }

        let id = ids.claim().to_string();
        out.push(Node::FootnoteReference {
            identifier: id.clone(),
            label: Some(id.clone()),
        });
        pending.push(Node::FootnoteDefinition {
            identifier: id.clone(),
            label: Some(id),
            children: vec![Node::Paragraph {
                children: vec![Node::text(&value[start + MARKER_OPEN..end - MARKER_CLOSE])],
            }],
        });

        cursor = end;
    }
    if cursor < value.len() {
        out.push(Node::text(&value[cursor..]));
    }
}
