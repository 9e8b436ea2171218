//! Transient node variants, predicates and edge mutators.

use crate::dom::Attributes;
use serde::{Deserialize, Serialize};

/// The rendering role of a transient node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Block container; rendered as its own box.
    Block,
    /// Inline container; establishes an inline formatting context.
    Phrasing,
    /// Literal character data.
    Text,
    /// Structural placeholder; never rendered.
    Empty,
}

/// A node in the transient tree.
///
/// A closed sum type: renderers and passes can match exhaustively. Anchor
/// capability is the container variants with `href` set; there is no
/// separate anchor variant.
///
/// Ownership is exclusive: every node lives in exactly one parent slot
/// (plain `Vec` children, no sharing), so passes can replace or mutate
/// subtrees without aliasing hazards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TNode {
    /// Literal character data, optionally tagged with its originating
    /// element name for style lookup.
    Text(TextNode),

    /// Inline container; children are Text/Phrasing/Empty.
    Phrasing(ContainerNode),

    /// Block container; children are Phrasing/Block/Empty.
    Block(ContainerNode),

    /// Placeholder for untranslatable content.
    Empty(EmptyNode),
}

/// Payload of a [`TNode::Text`] leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// The character data.
    pub data: String,

    /// Originating element name, when the node stands in for a collapsed
    /// trivial wrapper (e.g. a `span` with a single text child).
    pub tag_name: Option<String>,

    /// Attributes carried over from the originating element.
    pub attributes: Attributes,
}

impl TextNode {
    /// Create a plain text node.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            tag_name: None,
            attributes: Attributes::new(),
        }
    }

    /// Create a text node tagged with its originating element name.
    pub fn tagged(data: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            tag_name: Some(tag_name.into()),
            attributes: Attributes::new(),
        }
    }
}

/// Payload of the [`TNode::Phrasing`] and [`TNode::Block`] containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    /// Originating element name; `None` for synthesized wrappers.
    pub tag_name: Option<String>,

    /// Attributes carried over from the originating element.
    pub attributes: Attributes,

    /// Ordered child sequence.
    pub children: Vec<TNode>,

    /// Resolved hyperlink target. `Some` marks the node as an anchor.
    pub href: Option<String>,
}

impl ContainerNode {
    /// Create a container for the given element.
    pub fn new(tag_name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            attributes,
            children: Vec::new(),
            href: None,
        }
    }

    /// Create a synthetic wrapper carrying only the anchor payload.
    ///
    /// This is the "marker copy" the grouping procedure clones for each
    /// inline run: anonymous, attribute-less, anchor-flagged iff the
    /// wrapper template was.
    pub fn wrapper(anchor: Option<&str>) -> Self {
        Self {
            tag_name: None,
            attributes: Attributes::new(),
            children: Vec::new(),
            href: anchor.map(str::to_owned),
        }
    }

    /// Mark the container as an anchor with the given target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Payload of a [`TNode::Empty`] placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyNode {
    /// Originating element name.
    pub tag_name: Option<String>,

    /// Attributes carried over from the originating element.
    pub attributes: Attributes,
}

impl EmptyNode {
    /// Create a placeholder for the given element.
    pub fn new(tag_name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            attributes,
        }
    }
}

impl TNode {
    /// The rendering role of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            TNode::Text(_) => NodeKind::Text,
            TNode::Phrasing(_) => NodeKind::Phrasing,
            TNode::Block(_) => NodeKind::Block,
            TNode::Empty(_) => NodeKind::Empty,
        }
    }

    /// True for container nodes wrapping a hyperlink target.
    pub fn is_anchor(&self) -> bool {
        self.href().is_some()
    }

    /// The resolved hyperlink target, for anchor nodes.
    pub fn href(&self) -> Option<&str> {
        match self {
            TNode::Phrasing(c) | TNode::Block(c) => c.href.as_deref(),
            _ => None,
        }
    }

    /// Originating element name, if any.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            TNode::Text(t) => t.tag_name.as_deref(),
            TNode::Phrasing(c) | TNode::Block(c) => c.tag_name.as_deref(),
            TNode::Empty(e) => e.tag_name.as_deref(),
        }
    }

    /// Attribute map of this node.
    pub fn attributes(&self) -> &Attributes {
        match self {
            TNode::Text(t) => &t.attributes,
            TNode::Phrasing(c) | TNode::Block(c) => &c.attributes,
            TNode::Empty(e) => &e.attributes,
        }
    }

    /// Ordered child sequence; empty for Text and Empty leaves.
    pub fn children(&self) -> &[TNode] {
        match self {
            TNode::Phrasing(c) | TNode::Block(c) => &c.children,
            _ => &[],
        }
    }

    /// True when the node contributes only inter-element whitespace.
    pub fn is_whitespace(&self) -> bool {
        match self {
            TNode::Text(t) => t.data == " ",
            TNode::Phrasing(c) => c.children.iter().all(TNode::is_whitespace),
            // A block establishes a box regardless of content; a
            // placeholder is positional, not whitespace.
            TNode::Block(_) | TNode::Empty(_) => false,
        }
    }

    /// True when the node contributes no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            TNode::Text(t) => t.data.is_empty(),
            TNode::Phrasing(c) => c.children.iter().all(TNode::is_empty),
            TNode::Block(_) | TNode::Empty(_) => false,
        }
    }

    /// True when collapsible whitespace adjoins the node's left edge.
    pub fn is_collapsible_left(&self) -> bool {
        match self {
            TNode::Text(t) => t.data.starts_with(' '),
            TNode::Phrasing(c) | TNode::Block(c) => {
                c.children.first().is_some_and(TNode::is_collapsible_left)
            }
            TNode::Empty(_) => false,
        }
    }

    /// True when collapsible whitespace adjoins the node's right edge.
    pub fn is_collapsible_right(&self) -> bool {
        match self {
            TNode::Text(t) => t.data.ends_with(' '),
            TNode::Phrasing(c) | TNode::Block(c) => {
                c.children.last().is_some_and(TNode::is_collapsible_right)
            }
            TNode::Empty(_) => false,
        }
    }

    /// Remove one leading collapsible unit, recursing into the first child
    /// and deleting it if it becomes empty.
    pub fn trim_left(&mut self) {
        match self {
            TNode::Text(t) => {
                if t.data.starts_with(' ') {
                    t.data.remove(0);
                }
            }
            TNode::Phrasing(c) | TNode::Block(c) => {
                if let Some(first) = c.children.first_mut() {
                    first.trim_left();
                    if first.is_empty() {
                        c.children.remove(0);
                    }
                }
            }
            TNode::Empty(_) => {}
        }
    }

    /// Remove one trailing collapsible unit, recursing into the last child
    /// and deleting it if it becomes empty.
    pub fn trim_right(&mut self) {
        match self {
            TNode::Text(t) => {
                if t.data.ends_with(' ') {
                    t.data.pop();
                }
            }
            TNode::Phrasing(c) | TNode::Block(c) => {
                if let Some(last) = c.children.last_mut() {
                    last.trim_right();
                    if last.is_empty() {
                        c.children.pop();
                    }
                }
            }
            TNode::Empty(_) => {}
        }
    }

    /// Concatenate the text data of the subtree in document order.
    pub fn plain_text(&self) -> String {
        fn collect(node: &TNode, out: &mut String) {
            match node {
                TNode::Text(t) => out.push_str(&t.data),
                TNode::Phrasing(c) | TNode::Block(c) => {
                    for child in &c.children {
                        collect(child, out);
                    }
                }
                TNode::Empty(_) => {}
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrasing_of(children: Vec<TNode>) -> TNode {
        TNode::Phrasing(ContainerNode {
            children,
            ..ContainerNode::default()
        })
    }

    #[test]
    fn test_text_predicates() {
        let space = TNode::Text(TextNode::new(" "));
        assert!(space.is_whitespace());
        assert!(!space.is_empty());
        assert!(space.is_collapsible_left());
        assert!(space.is_collapsible_right());

        let word = TNode::Text(TextNode::new("hi "));
        assert!(!word.is_whitespace());
        assert!(!word.is_collapsible_left());
        assert!(word.is_collapsible_right());

        let empty = TNode::Text(TextNode::new(""));
        assert!(empty.is_empty());
        assert!(!empty.is_whitespace());
    }

    #[test]
    fn test_container_predicates_delegate_to_edges() {
        let node = phrasing_of(vec![
            TNode::Text(TextNode::new(" a")),
            TNode::Text(TextNode::new("b")),
        ]);
        assert!(node.is_collapsible_left());
        assert!(!node.is_collapsible_right());

        let childless = phrasing_of(vec![]);
        assert!(!childless.is_collapsible_left());
        assert!(!childless.is_collapsible_right());
        assert!(childless.is_empty());
    }

    #[test]
    fn test_block_is_never_whitespace_or_empty() {
        let block = TNode::Block(ContainerNode::default());
        assert!(!block.is_whitespace());
        assert!(!block.is_empty());
    }

    #[test]
    fn test_trim_left_recurses_and_deletes() {
        let mut node = phrasing_of(vec![
            TNode::Text(TextNode::new(" ")),
            TNode::Text(TextNode::new("rest")),
        ]);
        node.trim_left();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.plain_text(), "rest");
    }

    #[test]
    fn test_trim_right_single_unit() {
        let mut node = TNode::Text(TextNode::new("a "));
        node.trim_right();
        assert_eq!(node.plain_text(), "a");

        // Already trimmed; a second call is a no-op.
        node.trim_right();
        assert_eq!(node.plain_text(), "a");
    }

    #[test]
    fn test_anchor_flag() {
        let anchor = TNode::Phrasing(ContainerNode::wrapper(Some("https://x.test/")));
        assert!(anchor.is_anchor());
        assert_eq!(anchor.href(), Some("https://x.test/"));

        let plain = TNode::Phrasing(ContainerNode::wrapper(None));
        assert!(!plain.is_anchor());
    }

    #[test]
    fn test_plain_text_skips_placeholders() {
        let node = phrasing_of(vec![
            TNode::Text(TextNode::new("a")),
            TNode::Empty(EmptyNode::default()),
            TNode::Text(TextNode::new("b")),
        ]);
        assert_eq!(node.plain_text(), "ab");
    }
}
