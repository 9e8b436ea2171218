//! Structural validation of a hoisted tree.
//!
//! The collapse pass assumes the containment invariants hoisting
//! establishes. A violation is a programming error in a pass, not bad
//! input, so this check is opt-in and reports rather than repairs.

use crate::error::{Error, Result};
use crate::model::{NodeKind, TNode};

/// Verify the block/inline containment invariants over a whole tree.
///
/// Checks that no Phrasing node has a Block child, and that every child of
/// a Block is Phrasing, Block or Empty. Returns
/// [`Error::InvariantViolation`] naming the first offending position.
pub fn validate(root: &TNode) -> Result<()> {
    validate_at(root, "root")
}

fn validate_at(node: &TNode, path: &str) -> Result<()> {
    for (index, child) in node.children().iter().enumerate() {
        let child_path = format!(
            "{path}/{}[{index}]",
            child.tag_name().unwrap_or("anonymous")
        );
        match (node.kind(), child.kind()) {
            (NodeKind::Phrasing, NodeKind::Block) => {
                return Err(Error::InvariantViolation(format!(
                    "block child inside phrasing node at {child_path}"
                )));
            }
            (NodeKind::Block, NodeKind::Text) => {
                return Err(Error::InvariantViolation(format!(
                    "unwrapped text child inside block node at {child_path}"
                )));
            }
            _ => {}
        }
        validate_at(child, &child_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerNode, TextNode};

    #[test]
    fn test_validate_accepts_hoisted_shape() {
        let tree = TNode::Block(ContainerNode {
            tag_name: Some("div".into()),
            children: vec![
                TNode::Phrasing(ContainerNode {
                    children: vec![TNode::Text(TextNode::new("a"))],
                    ..ContainerNode::default()
                }),
                TNode::Block(ContainerNode::new("img", Default::default())),
            ],
            ..ContainerNode::default()
        });
        assert!(validate(&tree).is_ok());
    }

    #[test]
    fn test_validate_rejects_block_under_phrasing() {
        let tree = TNode::Phrasing(ContainerNode {
            tag_name: Some("span".into()),
            children: vec![TNode::Block(ContainerNode::new("p", Default::default()))],
            ..ContainerNode::default()
        });
        let err = validate(&tree).unwrap_err();
        assert!(err.to_string().contains("block child inside phrasing"));
    }

    #[test]
    fn test_validate_rejects_bare_text_under_block() {
        let tree = TNode::Block(ContainerNode {
            tag_name: Some("div".into()),
            children: vec![TNode::Text(TextNode::new("loose"))],
            ..ContainerNode::default()
        });
        assert!(validate(&tree).is_err());
    }
}
