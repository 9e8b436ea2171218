//! Transient tree node model.
//!
//! This module defines the intermediate representation that bridges the
//! markup parser and the rendering layer. The tree is renderer-agnostic:
//! after hoisting and collapsing it satisfies the block/inline containment
//! constraints and carries no collapsible whitespace a renderer would have
//! to re-normalize.

mod node;

pub use node::{ContainerNode, EmptyNode, NodeKind, TNode, TextNode};
