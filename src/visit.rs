//! Visitor for walking a prepared tree.
//!
//! The rendering collaborator consumes the final tree through this
//! traversal: Block nodes become block containers, Phrasing nodes become
//! inline text containers, Text nodes are literal character data, Empty
//! nodes are surfaced but must not be rendered, and anchor-flagged
//! containers carry the `href` for press behavior.
//!
//! # Example
//!
//! ```
//! use undom::visit::TreeVisitor;
//! use undom::model::TextNode;
//!
//! struct TextCollector(String);
//!
//! impl TreeVisitor for TextCollector {
//!     fn visit_text(&mut self, text: &TextNode) {
//!         self.0.push_str(&text.data);
//!     }
//! }
//! ```

use crate::model::{ContainerNode, EmptyNode, TNode, TextNode};

/// Action returned by container hooks to control the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Descend into the container's children.
    #[default]
    Continue,

    /// Skip the container's subtree entirely.
    Skip,
}

/// Trait for visiting the nodes of a prepared tree in document order.
///
/// All methods have default no-op implementations; implement only the hooks
/// the renderer cares about. Container hooks are paired with `leave_*`
/// callbacks that fire after the subtree (and only if it was not skipped).
pub trait TreeVisitor {
    /// Called when entering a Block container.
    fn visit_block(&mut self, container: &ContainerNode) -> VisitorAction {
        let _ = container;
        VisitorAction::Continue
    }

    /// Called after a Block container's subtree.
    fn leave_block(&mut self, container: &ContainerNode) {
        let _ = container;
    }

    /// Called when entering a Phrasing container.
    fn visit_phrasing(&mut self, container: &ContainerNode) -> VisitorAction {
        let _ = container;
        VisitorAction::Continue
    }

    /// Called after a Phrasing container's subtree.
    fn leave_phrasing(&mut self, container: &ContainerNode) {
        let _ = container;
    }

    /// Called for literal character data.
    fn visit_text(&mut self, text: &TextNode) {
        let _ = text;
    }

    /// Called for placeholders. Renderers must not paint these.
    fn visit_empty(&mut self, placeholder: &EmptyNode) {
        let _ = placeholder;
    }
}

/// Walk a tree in document order, invoking the visitor's hooks.
pub fn walk(root: &TNode, visitor: &mut dyn TreeVisitor) {
    match root {
        TNode::Text(text) => visitor.visit_text(text),
        TNode::Empty(placeholder) => visitor.visit_empty(placeholder),
        TNode::Phrasing(container) => {
            if visitor.visit_phrasing(container) == VisitorAction::Continue {
                for child in &container.children {
                    walk(child, visitor);
                }
                visitor.leave_phrasing(container);
            }
        }
        TNode::Block(container) => {
            if visitor.visit_block(container) == VisitorAction::Continue {
                for child in &container.children {
                    walk(child, visitor);
                }
                visitor.leave_block(container);
            }
        }
    }
}
