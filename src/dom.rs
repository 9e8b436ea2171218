//! Input document tree supplied by the markup parser.
//!
//! The translator consumes this tree; producing it is the parser
//! collaborator's job. Each node is either literal character data or an
//! element with a tag name, an attribute map and an ordered child sequence.
//! Anchor elements carry their resolved target in the `href` attribute.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute map of a document or transient node. Order is irrelevant.
pub type Attributes = HashMap<String, String>;

/// A node in the input document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum DomNode {
    /// Literal character data.
    Text {
        /// The raw text, whitespace untouched.
        data: String,
    },

    /// An element with tag name, attributes and children.
    Element(DomElement),
}

impl DomNode {
    /// Create a text node.
    pub fn text(data: impl Into<String>) -> Self {
        DomNode::Text { data: data.into() }
    }

    /// Create an element node with no attributes or children.
    pub fn element(tag_name: impl Into<String>) -> Self {
        DomNode::Element(DomElement::new(tag_name))
    }

    /// Check if this node is character data.
    pub fn is_text(&self) -> bool {
        matches!(self, DomNode::Text { .. })
    }

    /// Get the element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&DomElement> {
        match self {
            DomNode::Element(el) => Some(el),
            DomNode::Text { .. } => None,
        }
    }
}

/// An element in the input document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomElement {
    /// Tag name as produced by the parser (conventionally lowercase).
    pub tag_name: String,

    /// Attribute map.
    pub attributes: Attributes,

    /// Ordered child sequence.
    pub children: Vec<DomNode>,
}

impl DomElement {
    /// Create an element with no attributes or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, returning the element for chaining.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child, returning the element for chaining.
    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the child sequence, returning the element for chaining.
    pub fn with_children(mut self, children: Vec<DomNode>) -> Self {
        self.children = children;
        self
    }

    /// The resolved hyperlink target, for anchor elements.
    pub fn href(&self) -> Option<&str> {
        self.attributes.get("href").map(String::as_str)
    }
}

impl From<DomElement> for DomNode {
    fn from(el: DomElement) -> Self {
        DomNode::Element(el)
    }
}

/// Measure the nesting depth of a document tree without recursing.
///
/// Uses an explicit stack so the measurement itself cannot overflow on the
/// pathological input it exists to detect. A lone text node has depth 1.
pub fn depth(root: &DomNode) -> usize {
    let mut max = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((node, level)) = stack.pop() {
        max = max.max(level);
        if let DomNode::Element(el) = node {
            for child in &el.children {
                stack.push((child, level + 1));
            }
        }
    }
    max
}
